//! Confusion matrix counts for binary classification

use crate::core::error::{check_same_len, Result};
use serde::{Deserialize, Serialize};

/// A value that can be read as a binary label.
///
/// Numbers are positive when non-zero; `bool` is positive when `true`.
pub trait Label: Copy {
    fn is_positive(&self) -> bool;
}

impl Label for bool {
    fn is_positive(&self) -> bool {
        *self
    }
}

macro_rules! impl_label_for_int {
    ($($t:ty),*) => {
        $(
            impl Label for $t {
                fn is_positive(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

impl_label_for_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl Label for f32 {
    fn is_positive(&self) -> bool {
        *self != 0.0
    }
}

impl Label for f64 {
    fn is_positive(&self) -> bool {
        *self != 0.0
    }
}

/// True/false positive and negative counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConfusionStats {
    /// Predicted positive, actually positive
    #[serde(rename = "TP")]
    pub tp: usize,
    /// Predicted negative, actually negative
    #[serde(rename = "TN")]
    pub tn: usize,
    /// Predicted positive, actually negative
    #[serde(rename = "FP")]
    pub fp: usize,
    /// Predicted negative, actually positive
    #[serde(rename = "FN")]
    pub fn_: usize,
}

impl ConfusionStats {
    /// Number of examples counted (TP + TN + FP + FN)
    pub fn total(&self) -> usize {
        self.tp + self.tn + self.fp + self.fn_
    }

    /// TP + FP
    pub fn predicted_positives(&self) -> usize {
        self.tp + self.fp
    }

    /// TP + FN
    pub fn actual_positives(&self) -> usize {
        self.tp + self.fn_
    }

    /// TP + TN
    pub fn correct(&self) -> usize {
        self.tp + self.tn
    }

    fn record(&mut self, truth: bool, predicted: bool) {
        match (truth, predicted) {
            (true, true) => self.tp += 1,
            (false, false) => self.tn += 1,
            (false, true) => self.fp += 1,
            (true, false) => self.fn_ += 1,
        }
    }
}

/// Count TP/TN/FP/FN over two label sequences of equal length.
///
/// Each element is reduced to its truthiness before comparison, so for 0/1
/// labels FP is "predicted > true" and FN is "predicted < true".
///
/// # Arguments
/// * `y_true` - True labels
/// * `y_predict` - Predicted labels
///
/// # Returns
/// * `Result<ConfusionStats>` - Counts summing to the input length
pub fn confusion_stats<T: Label, P: Label>(y_true: &[T], y_predict: &[P]) -> Result<ConfusionStats> {
    check_same_len(y_true.len(), y_predict.len())?;

    let mut stats = ConfusionStats::default();
    for (t, p) in y_true.iter().zip(y_predict.iter()) {
        stats.record(t.is_positive(), p.is_positive());
    }
    Ok(stats)
}
