//! Classification model evaluation metrics

use super::confusion::{confusion_stats, ConfusionStats, Label};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accuracy() {
        let true_labels = vec![1, 0, 1, 1, 0, 0];
        let pred_labels = vec![1, 0, 0, 1, 1, 0];

        let accuracy = accuracy(&true_labels, &pred_labels).unwrap();
        assert!((accuracy - 0.6666666).abs() < 1e-6); // 4/6
    }

    #[test]
    fn test_precision() {
        let true_labels = vec![1, 0, 1, 1, 0, 0];
        let pred_labels = vec![1, 0, 0, 1, 1, 0];

        let precision = precision(&true_labels, &pred_labels).unwrap();
        assert!((precision - 0.6666666).abs() < 1e-6); // TP=2, FP=1
    }

    #[test]
    fn test_precision_without_positive_predictions() {
        let precision = precision(&[0, 0, 0], &[0, 0, 0]).unwrap();
        assert_eq!(precision, 1.0);
    }

    #[test]
    fn test_recall() {
        let true_labels = vec![1, 0, 1, 1, 0, 0];
        let pred_labels = vec![1, 0, 0, 1, 1, 0];

        let recall = recall(&true_labels, &pred_labels).unwrap();
        assert!((recall - 0.6666666).abs() < 1e-6); // TP=2, FN=1
    }

    #[test]
    fn test_recall_without_actual_positives() {
        let result = recall(&[0, 0], &[0, 1]);
        assert!(matches!(result, Err(Error::UndefinedMetric(_))));

        let stats = confusion_stats(&[0, 0], &[0, 1]).unwrap();
        assert_eq!(
            Metric::Recall
                .evaluate(&stats, UndefinedPolicy::Zero)
                .unwrap(),
            0.0
        );
        assert!(Metric::Recall
            .evaluate(&stats, UndefinedPolicy::Nan)
            .unwrap()
            .is_nan());
    }

    #[test]
    fn test_f1() {
        let true_labels = vec![1, 0, 1, 1, 0, 0];
        let pred_labels = vec![1, 0, 0, 1, 1, 0];

        let f1 = f1(&true_labels, &pred_labels).unwrap();
        assert!((f1 - 0.6666666).abs() < 1e-6);
    }

    #[test]
    fn test_f1_zero_denominator() {
        // precision = 0 (one FP), recall = 0 (one FN)
        let f1 = f1(&[1, 0], &[0, 1]).unwrap();
        assert_eq!(f1, 0.0);
    }

    #[test]
    fn test_lift() {
        // base rate 2/4, precision 2/3
        let lift = lift(&[1, 1, 0, 0], &[1, 1, 1, 0]).unwrap();
        assert!((lift - 4.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_lift_without_positives() {
        let result = lift(&[0, 0, 0], &[1, 0, 0]);
        assert!(matches!(result, Err(Error::UndefinedMetric(_))));
    }

    #[test]
    fn test_lift_empty_input() {
        let empty: Vec<u8> = vec![];
        match lift(&empty, &empty) {
            Err(Error::UndefinedMetric(msg)) => assert!(msg.contains("positive rate is zero")),
            other => panic!("expected UndefinedMetric, got {:?}", other),
        }

        let stats = ConfusionStats::default();
        assert_eq!(
            Metric::Lift.evaluate(&stats, UndefinedPolicy::Zero).unwrap(),
            0.0
        );
        assert!(Metric::Lift
            .evaluate(&stats, UndefinedPolicy::Nan)
            .unwrap()
            .is_nan());
    }

    #[test]
    fn test_accuracy_empty_input() {
        let empty: Vec<u8> = vec![];
        assert!(matches!(
            accuracy(&empty, &empty),
            Err(Error::UndefinedMetric(_))
        ));
    }

    #[test]
    fn test_different_length() {
        let result = precision(&[1, 0, 1], &[1, 0]);
        assert!(matches!(result, Err(Error::ShapeMismatch { .. })));
    }

    #[test]
    fn test_metric_names_round_trip() {
        for metric in Metric::ALL {
            assert_eq!(metric.name().parse::<Metric>().unwrap(), metric);
        }
        assert_eq!("F1_Score".parse::<Metric>().unwrap(), Metric::F1);
        assert!("auc".parse::<Metric>().is_err());
    }

    #[test]
    fn test_policy_parse() {
        assert_eq!("nan".parse::<UndefinedPolicy>().unwrap(), UndefinedPolicy::Nan);
        assert!("ignore".parse::<UndefinedPolicy>().is_err());
    }
}

/// What to return when a metric's denominator is zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UndefinedPolicy {
    /// Fail with `Error::UndefinedMetric`
    #[default]
    Error,
    /// Substitute 0.0
    Zero,
    /// Substitute NaN
    Nan,
}

impl UndefinedPolicy {
    fn resolve(self, metric: Metric, reason: &str) -> Result<f64> {
        match self {
            UndefinedPolicy::Error => Err(Error::UndefinedMetric(format!(
                "{} is undefined: {}",
                metric, reason
            ))),
            UndefinedPolicy::Zero => {
                log::warn!("{} is undefined ({}), returning 0", metric, reason);
                Ok(0.0)
            }
            UndefinedPolicy::Nan => {
                log::warn!("{} is undefined ({}), returning NaN", metric, reason);
                Ok(f64::NAN)
            }
        }
    }
}

impl FromStr for UndefinedPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "error" => Ok(UndefinedPolicy::Error),
            "zero" => Ok(UndefinedPolicy::Zero),
            "nan" => Ok(UndefinedPolicy::Nan),
            other => Err(Error::InvalidArgument(format!(
                "Unknown undefined-metric policy: {}",
                other
            ))),
        }
    }
}

/// Binary classification metric computed from confusion counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Precision,
    Recall,
    #[default]
    Accuracy,
    F1,
    Lift,
}

impl Metric {
    /// Every metric, in report order
    pub const ALL: [Metric; 5] = [
        Metric::Precision,
        Metric::Recall,
        Metric::Accuracy,
        Metric::F1,
        Metric::Lift,
    ];

    /// Name of the metric
    pub fn name(&self) -> &'static str {
        match self {
            Metric::Precision => "precision",
            Metric::Recall => "recall",
            Metric::Accuracy => "accuracy",
            Metric::F1 => "f1",
            Metric::Lift => "lift",
        }
    }

    /// Compute the metric from confusion counts.
    ///
    /// Precision with no positive predictions is 1 and F1 with
    /// `precision + recall == 0` is 0; every other zero denominator
    /// goes through `policy`.
    pub fn evaluate(&self, stats: &ConfusionStats, policy: UndefinedPolicy) -> Result<f64> {
        match self {
            Metric::Precision => Ok(precision_of(stats)),
            Metric::Recall => {
                if stats.actual_positives() == 0 {
                    return policy.resolve(*self, "no actual positives (TP + FN = 0)");
                }
                Ok(stats.tp as f64 / stats.actual_positives() as f64)
            }
            Metric::Accuracy => {
                if stats.total() == 0 {
                    return policy.resolve(*self, "empty input");
                }
                Ok(stats.correct() as f64 / stats.total() as f64)
            }
            Metric::F1 => {
                let precision = precision_of(stats);
                let recall = Metric::Recall.evaluate(stats, policy)?;

                if precision + recall == 0.0 {
                    return Ok(0.0);
                }

                Ok(2.0 * precision * recall / (precision + recall))
            }
            Metric::Lift => {
                // also covers empty input
                if stats.actual_positives() == 0 {
                    return policy.resolve(*self, "positive rate is zero");
                }
                let positive_rate = stats.actual_positives() as f64 / stats.total() as f64;
                Ok(precision_of(stats) / positive_rate)
            }
        }
    }

    /// Compute the metric directly from label sequences, failing on undefined values
    pub fn compute<T: Label, P: Label>(&self, y_true: &[T], y_predict: &[P]) -> Result<f64> {
        let stats = confusion_stats(y_true, y_predict)?;
        self.evaluate(&stats, UndefinedPolicy::default())
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Metric {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().to_ascii_lowercase();
        let name = name.strip_suffix("_score").unwrap_or(&name);
        match name {
            "precision" => Ok(Metric::Precision),
            "recall" => Ok(Metric::Recall),
            "accuracy" => Ok(Metric::Accuracy),
            "f1" => Ok(Metric::F1),
            "lift" => Ok(Metric::Lift),
            other => Err(Error::InvalidArgument(format!("Unknown metric: {}", other))),
        }
    }
}

fn precision_of(stats: &ConfusionStats) -> f64 {
    if stats.predicted_positives() == 0 {
        return 1.0; // No positive predictions
    }
    stats.tp as f64 / stats.predicted_positives() as f64
}

/// Calculate precision
///
/// # Arguments
/// * `y_true` - True labels
/// * `y_predict` - Predicted labels
///
/// # Returns
/// * `Result<f64>` - Precision (0 to 1), 1 when nothing was predicted positive
pub fn precision<T: Label, P: Label>(y_true: &[T], y_predict: &[P]) -> Result<f64> {
    Metric::Precision.compute(y_true, y_predict)
}

/// Calculate recall
///
/// # Arguments
/// * `y_true` - True labels
/// * `y_predict` - Predicted labels
///
/// # Returns
/// * `Result<f64>` - Recall (0 to 1); `UndefinedMetric` without actual positives
pub fn recall<T: Label, P: Label>(y_true: &[T], y_predict: &[P]) -> Result<f64> {
    Metric::Recall.compute(y_true, y_predict)
}

/// Calculate accuracy
///
/// # Arguments
/// * `y_true` - True labels
/// * `y_predict` - Predicted labels
///
/// # Returns
/// * `Result<f64>` - Accuracy (0 to 1); `UndefinedMetric` on empty input
pub fn accuracy<T: Label, P: Label>(y_true: &[T], y_predict: &[P]) -> Result<f64> {
    Metric::Accuracy.compute(y_true, y_predict)
}

/// Calculate F1 score
///
/// # Arguments
/// * `y_true` - True labels
/// * `y_predict` - Predicted labels
///
/// # Returns
/// * `Result<f64>` - F1 score (0 to 1), 0 when precision and recall are both 0
pub fn f1<T: Label, P: Label>(y_true: &[T], y_predict: &[P]) -> Result<f64> {
    Metric::F1.compute(y_true, y_predict)
}

/// Calculate lift: precision divided by the share of actual positives
///
/// # Arguments
/// * `y_true` - True labels
/// * `y_predict` - Predicted labels
///
/// # Returns
/// * `Result<f64>` - Lift (1 means no better than random)
pub fn lift<T: Label, P: Label>(y_true: &[T], y_predict: &[P]) -> Result<f64> {
    Metric::Lift.compute(y_true, y_predict)
}
