//! Receiver operating characteristic curves for binary classifiers.

use std::cmp::Ordering;

use crate::error::{Error, Result};

/// A ground-truth label of a binary classifier.
///
/// `1` (or `true`) is the positive class. Either `0` or `-1` (or `false`)
/// is the negative class, but a single label set may only use one of them.
pub trait BinaryLabel {
    /// `Some(1)` for the positive class, `Some(0)` or `Some(-1)` for the
    /// negative class, `None` for anything that is not a binary label.
    fn class(&self) -> Option<i8>;
}

impl BinaryLabel for bool {
    fn class(&self) -> Option<i8> {
        Some(i8::from(*self))
    }
}

impl BinaryLabel for u8 {
    fn class(&self) -> Option<i8> {
        match *self {
            0 => Some(0),
            1 => Some(1),
            _ => None,
        }
    }
}

macro_rules! signed_label {
    ($($ty:ty),*) => {
        $(
            impl BinaryLabel for $ty {
                fn class(&self) -> Option<i8> {
                    match *self {
                        -1 => Some(-1),
                        0 => Some(0),
                        1 => Some(1),
                        _ => None,
                    }
                }
            }
        )*
    };
}

signed_label!(i32, i64);

impl BinaryLabel for f64 {
    fn class(&self) -> Option<i8> {
        if *self == -1.0 {
            Some(-1)
        } else if *self == 0.0 {
            Some(0)
        } else if *self == 1.0 {
            Some(1)
        } else {
            None
        }
    }
}

/// Points of a ROC curve, ordered by decreasing threshold.
///
/// `thresholds[0]` is always `+inf`, matching the `(0, 0)` point that no
/// prediction reaches.
#[derive(Debug, Clone, PartialEq)]
pub struct RocCurve {
    pub fpr: Vec<f64>,
    pub tpr: Vec<f64>,
    pub thresholds: Vec<f64>,
}

impl RocCurve {
    pub fn len(&self) -> usize {
        self.fpr.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fpr.is_empty()
    }

    /// `(fpr, tpr)` pairs, ready to be plotted.
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.fpr.iter().copied().zip(self.tpr.iter().copied()).collect()
    }
}

/// Compute the ROC curve of `scores` against `labels`.
///
/// Points where the curve does not change direction are dropped, so a
/// perfectly separating classifier yields just the corners of the unit
/// square.
pub fn roc_curve<L: BinaryLabel>(labels: &[L], scores: &[f64]) -> Result<RocCurve> {
    if labels.len() != scores.len() {
        return Err(Error::LengthMismatch {
            labels: labels.len(),
            scores: scores.len(),
        });
    }
    if labels.is_empty() {
        return Err(Error::EmptyInput);
    }

    let mut samples = Vec::with_capacity(labels.len());
    let mut negative_class = None;
    for (index, (label, &score)) in labels.iter().zip(scores).enumerate() {
        let class = label.class().ok_or(Error::NonBinaryLabel { index })?;
        let positive = class == 1;
        if !positive && *negative_class.get_or_insert(class) != class {
            // Both 0 and -1 appear: three classes, not two.
            return Err(Error::NonBinaryLabel { index });
        }
        if !score.is_finite() {
            return Err(Error::NonFiniteScore { index });
        }
        samples.push((score, positive));
    }
    // Scores are finite, so the comparison is total.
    samples.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));

    // Cumulative counts at the last sample of each distinct score.
    let mut tps = Vec::new();
    let mut fps = Vec::new();
    let mut thresholds = Vec::new();
    let (mut tp, mut fp) = (0.0, 0.0);
    for (i, &(score, positive)) in samples.iter().enumerate() {
        if positive {
            tp += 1.0;
        } else {
            fp += 1.0;
        }
        let last_of_run = samples.get(i + 1).is_none_or(|next| next.0 != score);
        if last_of_run {
            tps.push(tp);
            fps.push(fp);
            thresholds.push(score);
        }
    }

    let (tps, fps, thresholds) = drop_intermediate(&tps, &fps, &thresholds);

    let total_pos = *tps.last().unwrap_or(&0.0);
    let total_neg = *fps.last().unwrap_or(&0.0);
    if total_pos <= 0.0 || total_neg <= 0.0 {
        return Err(Error::SingleClass);
    }

    let mut curve = RocCurve {
        fpr: Vec::with_capacity(tps.len() + 1),
        tpr: Vec::with_capacity(tps.len() + 1),
        thresholds: Vec::with_capacity(tps.len() + 1),
    };
    curve.fpr.push(0.0);
    curve.tpr.push(0.0);
    curve.thresholds.push(f64::INFINITY);
    for ((tp, fp), threshold) in tps.iter().zip(&fps).zip(&thresholds) {
        curve.fpr.push(fp / total_neg);
        curve.tpr.push(tp / total_pos);
        curve.thresholds.push(*threshold);
    }
    Ok(curve)
}

/// Keep the end points plus every point where either count's second
/// difference is non-zero, i.e. where the curve bends.
fn drop_intermediate(
    tps: &[f64],
    fps: &[f64],
    thresholds: &[f64],
) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
    let n = tps.len();
    let keep = |i: usize| {
        if i == 0 || i + 1 == n {
            return true;
        }
        let bend = |v: &[f64]| v[i + 1] - 2.0 * v[i] + v[i - 1] != 0.0;
        bend(fps) || bend(tps)
    };

    let mut out = (Vec::new(), Vec::new(), Vec::new());
    for i in (0..n).filter(|&i| keep(i)) {
        out.0.push(tps[i]);
        out.1.push(fps[i]);
        out.2.push(thresholds[i]);
    }
    out
}

/// Area under a curve given by its points, using the trapezoidal rule.
///
/// `x` must be monotonic; a decreasing `x` is integrated in reverse so the
/// result stays positive. Anything else is rejected with
/// [`Error::NonMonotonic`].
pub fn auc(x: &[f64], y: &[f64]) -> Result<f64> {
    if x.len() != y.len() {
        return Err(Error::LengthMismatch {
            labels: x.len(),
            scores: y.len(),
        });
    }
    if x.len() < 2 {
        return Err(Error::EmptyInput);
    }

    let increasing = x.windows(2).all(|w| w[0] <= w[1]);
    let decreasing = x.windows(2).all(|w| w[1] <= w[0]);
    if !increasing && !decreasing {
        return Err(Error::NonMonotonic);
    }

    let area: f64 = x
        .windows(2)
        .zip(y.windows(2))
        .map(|(xs, ys)| (xs[1] - xs[0]) * (ys[0] + ys[1]) / 2.0)
        .sum();
    Ok(if increasing { area } else { -area })
}
