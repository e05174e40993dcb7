use bucketkit::{ChartRenderer, Error, Renderer, RocFigure, auc, render_roc_curve, roc_curve};
use ratatui::Terminal;
use ratatui::backend::TestBackend;

fn test_renderer() -> ChartRenderer<TestBackend> {
    let terminal = Terminal::new(TestBackend::new(80, 24)).expect("failed to create terminal");
    ChartRenderer::new(terminal)
}

/// Everything drawn on the test terminal, one string per row.
fn screen(renderer: &ChartRenderer<TestBackend>) -> Vec<String> {
    let buffer = renderer.terminal().backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect())
        .collect()
}

#[test]
fn perfect_separation_has_unit_area() {
    let labels = [0, 1, 0, 1];
    let scores = [0.1, 0.9, 0.2, 0.8];

    let curve = roc_curve(&labels, &scores).unwrap();
    assert_eq!(curve.fpr, vec![0.0, 0.0, 0.0, 1.0]);
    assert_eq!(curve.tpr, vec![0.0, 0.5, 1.0, 1.0]);
    assert_eq!(curve.thresholds[0], f64::INFINITY);
    assert_eq!(auc(&curve.fpr, &curve.tpr).unwrap(), 1.0);
}

#[test]
fn perfect_separation_legend_shows_area() {
    let mut renderer = test_renderer();
    render_roc_curve(&mut renderer, &[0, 1, 0, 1], &[0.1, 0.9, 0.2, 0.8]).unwrap();

    let screen = screen(&renderer);
    assert!(
        screen
            .iter()
            .any(|row| row.contains("ROC curve (area = 1.000)")),
        "legend not found in:\n{}",
        screen.join("\n")
    );
}

#[test]
fn partially_ordered_scores() {
    let labels = [false, false, true, true];
    let scores = [0.1, 0.4, 0.35, 0.8];

    let curve = roc_curve(&labels, &scores).unwrap();
    assert_eq!(curve.fpr, vec![0.0, 0.0, 0.5, 0.5, 1.0]);
    assert_eq!(curve.tpr, vec![0.0, 0.5, 0.5, 1.0, 1.0]);
    assert_eq!(curve.thresholds[1..], [0.8, 0.4, 0.35, 0.1]);

    let figure = RocFigure::new(curve).unwrap();
    assert_eq!(figure.auc, 0.75);
    assert_eq!(figure.legend_label(), "ROC curve (area = 0.750)");
}

#[test]
fn tied_scores_collapse_to_one_point() {
    let curve = roc_curve(&[0_u8, 1], &[0.5, 0.5]).unwrap();
    assert_eq!(curve.points(), vec![(0.0, 0.0), (1.0, 1.0)]);
    assert_eq!(auc(&curve.fpr, &curve.tpr).unwrap(), 0.5);
}

#[test]
fn inverted_scores_have_zero_area() {
    let curve = roc_curve(&[1_i64, 1, 0, 0], &[0.1, 0.2, 0.8, 0.9]).unwrap();
    assert_eq!(auc(&curve.fpr, &curve.tpr).unwrap(), 0.0);
}

#[test]
fn mismatched_lengths_are_rejected() {
    let mut renderer = test_renderer();
    let err = render_roc_curve(&mut renderer, &[0, 1, 0], &[0.1, 0.9]).unwrap_err();
    assert!(matches!(
        err,
        Error::LengthMismatch {
            labels: 3,
            scores: 2
        }
    ));
}

#[test]
fn non_binary_labels_are_rejected() {
    let err = roc_curve(&[0, 1, 2], &[0.1, 0.2, 0.3]).unwrap_err();
    assert!(matches!(err, Error::NonBinaryLabel { index: 2 }));

    let err = roc_curve(&[0.0, 0.5], &[0.1, 0.2]).unwrap_err();
    assert!(matches!(err, Error::NonBinaryLabel { index: 1 }));
}

#[test]
fn minus_one_is_a_negative_label() {
    let signed = roc_curve(&[-1, 1, -1, 1], &[0.1, 0.9, 0.2, 0.8]).unwrap();
    let unsigned = roc_curve(&[0, 1, 0, 1], &[0.1, 0.9, 0.2, 0.8]).unwrap();
    assert_eq!(signed, unsigned);

    let err = roc_curve(&[0.0, 1.0, -1.0], &[0.1, 0.2, 0.3]).unwrap_err();
    assert!(matches!(err, Error::NonBinaryLabel { index: 2 }));
}

#[test]
fn auc_rejects_non_monotonic_x() {
    let err = auc(&[0.0, 0.6, 0.4, 1.0], &[0.0, 0.5, 0.7, 1.0]).unwrap_err();
    assert!(matches!(err, Error::NonMonotonic));
}

#[test]
fn single_class_is_rejected() {
    let err = roc_curve(&[1, 1, 1], &[0.1, 0.2, 0.3]).unwrap_err();
    assert!(matches!(err, Error::SingleClass));
}

#[test]
fn empty_and_non_finite_inputs_are_rejected() {
    let err = roc_curve::<i32>(&[], &[]).unwrap_err();
    assert!(matches!(err, Error::EmptyInput));

    let err = roc_curve(&[0, 1], &[0.1, f64::NAN]).unwrap_err();
    assert!(matches!(err, Error::NonFiniteScore { index: 1 }));
}

#[test]
fn renderer_redraws_on_each_call() {
    let mut renderer = test_renderer();
    let first = RocFigure::new(roc_curve(&[0, 1], &[0.2, 0.8]).unwrap()).unwrap();
    let second = RocFigure::new(roc_curve(&[0, 1], &[0.5, 0.5]).unwrap()).unwrap();

    renderer.render(&first).unwrap();
    renderer.render(&second).unwrap();

    let screen = screen(&renderer).join("\n");
    assert!(screen.contains("ROC curve (area = 0.500)"));
    assert!(!screen.contains("ROC curve (area = 1.000)"));
}
