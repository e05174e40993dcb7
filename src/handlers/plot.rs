use log::debug;
use ratatui::Terminal;
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::layout::Constraint;
use ratatui::style::{Color, Style};
use ratatui::symbols;
use ratatui::text::Span;
use ratatui::widgets::{Axis, Chart, Dataset, GraphType, LegendPosition};
use ratatui::{TerminalOptions, Viewport};
use std::io::{self, Stdout};

use crate::error::{Error, Result};
use crate::models::{BinaryLabel, RocCurve, StoreConfig, auc, roc_curve};

/// A ROC curve together with its area, ready to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct RocFigure {
    pub curve: RocCurve,
    pub auc: f64,
}

impl RocFigure {
    pub fn new(curve: RocCurve) -> Result<Self> {
        let auc = auc(&curve.fpr, &curve.tpr)?;
        Ok(Self { curve, auc })
    }

    pub fn legend_label(&self) -> String {
        format!("ROC curve (area = {:.3})", self.auc)
    }
}

/// A plotting context that figures are drawn into.
pub trait Renderer {
    fn render(&mut self, figure: &RocFigure) -> Result<()>;
}

/// Draws figures as line charts on a ratatui terminal.
pub struct ChartRenderer<B: Backend> {
    terminal: Terminal<B>,
}

impl<B: Backend> ChartRenderer<B> {
    pub fn new(terminal: Terminal<B>) -> Self {
        Self { terminal }
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    pub fn into_terminal(self) -> Terminal<B> {
        self.terminal
    }
}

impl ChartRenderer<CrosstermBackend<Stdout>> {
    /// Display charts inline on stdout, `height` rows tall, below whatever
    /// is already on screen.
    pub fn stdout(height: u16) -> Result<Self> {
        let terminal = Terminal::with_options(
            CrosstermBackend::new(io::stdout()),
            TerminalOptions {
                viewport: Viewport::Inline(height),
            },
        )
        .map_err(Error::Render)?;
        Ok(Self::new(terminal))
    }

    /// Inline stdout renderer sized by `plot_height`.
    pub fn from_config(config: &StoreConfig) -> Result<Self> {
        Self::stdout(config.get_plot_height())
    }
}

impl<B: Backend> Renderer for ChartRenderer<B> {
    fn render(&mut self, figure: &RocFigure) -> Result<()> {
        let points = figure.curve.points();
        let chance = [(0.0, 0.0), (1.0, 1.0)];
        let label = figure.legend_label();

        let datasets = vec![
            Dataset::default()
                .marker(symbols::Marker::Braille)
                .style(Style::default().fg(Color::DarkGray))
                .graph_type(GraphType::Line)
                .data(&chance),
            Dataset::default()
                .name(label.clone())
                .marker(symbols::Marker::Braille)
                .style(Style::default().fg(Color::Yellow))
                .graph_type(GraphType::Line)
                .data(&points),
        ];

        let axis_labels = || vec![Span::raw("0.0"), Span::raw("0.5"), Span::raw("1.0")];
        let chart = Chart::new(datasets)
            .x_axis(
                Axis::default()
                    .title("False Positive Rate")
                    .bounds([0.0, 1.0])
                    .labels(axis_labels()),
            )
            .y_axis(
                Axis::default()
                    .title("True Positive Rate")
                    .bounds([0.0, 1.0])
                    .labels(axis_labels()),
            )
            .legend_position(Some(LegendPosition::BottomRight))
            .hidden_legend_constraints((Constraint::Ratio(1, 1), Constraint::Ratio(1, 1)));

        self.terminal
            .draw(|f| f.render_widget(chart, f.area()))
            .map_err(Error::Render)?;
        debug!("Rendered {} with {} points", label, points.len());
        Ok(())
    }
}

/// Compute the ROC curve and its AUC for `scores` against `labels`, then
/// draw it with `renderer`.
pub fn render_roc_curve<R, L>(renderer: &mut R, labels: &[L], scores: &[f64]) -> Result<()>
where
    R: Renderer + ?Sized,
    L: BinaryLabel,
{
    let figure = RocFigure::new(roc_curve(labels, scores)?)?;
    renderer.render(&figure)
}
