//! Metric evaluation over scored predictions
//!
//! Scores are given as two-column rows where column 1 holds the score or
//! probability of the positive class. A `percent` argument selects how those
//! scores are turned into labels:
//!
//! - `None` or `0`: threshold at the configured default (0.5)
//! - `0 < |percent| <= 1`: threshold at `|percent|`
//! - `1 < |percent| <= 100`: rank by score and evaluate every cumulative
//!   prefix of `bins - 1` equal-width bins, thresholding at `|percent| / 100`
//!
//! Every prefix of a sweep goes through the undefined-metric policy. Under the
//! default `UndefinedPolicy::Error` a single undefined prefix, such as a top
//! bin with no actual positives for recall or lift, fails the whole sweep.
//! Use [`score_with_config`] with `UndefinedPolicy::Nan` to get NaN entries
//! for those prefixes instead.

use super::classification::Metric;
use super::confusion::{confusion_stats, Label};
use crate::config::ScoringConfig;
use crate::core::error::check_same_len;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Column of a scored row holding the positive-class score
pub const SCORE_COLUMN: usize = 1;

/// How scores are turned into binary predictions
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cutoff {
    /// Single evaluation with predictions at `score >= threshold`
    Threshold(f64),
    /// Ranked prefix sweep with predictions at `score >= cutoff`
    Sweep { cutoff: f64 },
}

impl Cutoff {
    /// Interpret a `percent` argument.
    ///
    /// The sign is ignored. NaN and magnitudes above 100 are rejected.
    pub fn from_percent(percent: Option<f64>, default_threshold: f64) -> Result<Self> {
        let percent = match percent {
            None => return Ok(Cutoff::Threshold(default_threshold)),
            Some(p) if p.is_nan() => {
                return Err(Error::InvalidArgument("percent is NaN".to_string()))
            }
            Some(p) if p == 0.0 => return Ok(Cutoff::Threshold(default_threshold)),
            Some(p) => p.abs(),
        };

        if percent > 100.0 {
            return Err(Error::InvalidArgument(format!(
                "percent > 100: {}",
                percent
            )));
        }

        if percent <= 1.0 {
            Ok(Cutoff::Threshold(percent))
        } else {
            Ok(Cutoff::Sweep {
                cutoff: percent / 100.0,
            })
        }
    }
}

/// Result of a scored evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScoreOutput {
    /// One value for the whole population
    Scalar(f64),
    /// One value per cumulative prefix, smallest prefix first
    Sweep(Vec<f64>),
}

impl ScoreOutput {
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            ScoreOutput::Scalar(v) => Some(*v),
            ScoreOutput::Sweep(_) => None,
        }
    }

    pub fn as_sweep(&self) -> Option<&[f64]> {
        match self {
            ScoreOutput::Scalar(_) => None,
            ScoreOutput::Sweep(values) => Some(values),
        }
    }

    /// Flatten into a vector (a scalar becomes a single element)
    pub fn into_vec(self) -> Vec<f64> {
        match self {
            ScoreOutput::Scalar(v) => vec![v],
            ScoreOutput::Sweep(values) => values,
        }
    }
}

/// Evaluate `metric` on scored predictions with the default configuration
///
/// # Arguments
/// * `y_true` - True labels, one per row
/// * `y_predict` - Scored rows; column 1 is the score
/// * `percent` - Threshold or sweep selector (see module docs)
/// * `metric` - Metric to compute
///
/// # Errors
/// Uses `UndefinedPolicy::Error`, so a sweep fails with
/// `Error::UndefinedMetric` if any prefix is undefined. Call
/// [`score_with_config`] with `UndefinedPolicy::Nan` to keep the other values.
pub fn score<T: Label>(
    y_true: &[T],
    y_predict: &[[f64; 2]],
    percent: Option<f64>,
    metric: Metric,
) -> Result<ScoreOutput> {
    score_with_config(y_true, y_predict, percent, metric, &ScoringConfig::default())
}

/// Evaluate `metric` on scored predictions using threshold, bin count and
/// undefined-metric policy from `config`
pub fn score_with_config<T: Label>(
    y_true: &[T],
    y_predict: &[[f64; 2]],
    percent: Option<f64>,
    metric: Metric,
    config: &ScoringConfig,
) -> Result<ScoreOutput> {
    let policy = config.undefined_policy;
    score_by(y_true, y_predict, percent, config, |t, p| {
        let stats = confusion_stats(t, p)?;
        metric.evaluate(&stats, policy)
    })
}

/// Evaluate an arbitrary metric function on scored predictions.
///
/// `function` receives the binarized true labels and predictions (the whole
/// population, or one ranked prefix per sweep step).
pub fn score_by<T, F>(
    y_true: &[T],
    y_predict: &[[f64; 2]],
    percent: Option<f64>,
    config: &ScoringConfig,
    function: F,
) -> Result<ScoreOutput>
where
    T: Label,
    F: Fn(&[bool], &[bool]) -> Result<f64>,
{
    check_same_len(y_true.len(), y_predict.len())?;

    let truth: Vec<bool> = y_true.iter().map(|t| t.is_positive()).collect();
    let scores: Vec<f64> = y_predict.iter().map(|row| row[SCORE_COLUMN]).collect();

    match Cutoff::from_percent(percent, config.default_threshold)? {
        Cutoff::Threshold(threshold) => {
            log::debug!("scoring {} rows at threshold {}", scores.len(), threshold);
            let predicted = binarize(&scores, threshold);
            function(&truth, &predicted).map(ScoreOutput::Scalar)
        }
        Cutoff::Sweep { cutoff } => {
            sweep(&truth, &scores, cutoff, config.sweep_bins, &function).map(ScoreOutput::Sweep)
        }
    }
}

fn binarize(scores: &[f64], threshold: f64) -> Vec<bool> {
    scores.iter().map(|&s| s >= threshold).collect()
}

fn sweep<F>(
    truth: &[bool],
    scores: &[f64],
    cutoff: f64,
    bins: usize,
    function: &F,
) -> Result<Vec<f64>>
where
    F: Fn(&[bool], &[bool]) -> Result<f64>,
{
    let width = if bins == 0 { 0 } else { scores.len() / bins };
    if width == 0 {
        return Err(Error::InsufficientData(format!(
            "percentile sweep needs at least {} rows, got {}",
            bins,
            scores.len()
        )));
    }

    // Descending by score; the stable sort keeps ties in input order
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));

    let ranked_truth: Vec<bool> = order.iter().map(|&i| truth[i]).collect();
    let ranked_predicted: Vec<bool> = order.iter().map(|&i| scores[i] >= cutoff).collect();

    log::debug!(
        "sweeping {} rows over {} prefixes of width {} at cutoff {}",
        scores.len(),
        bins - 1,
        width,
        cutoff
    );

    (1..bins)
        .map(|k| {
            let end = k * width;
            function(&ranked_truth[..end], &ranked_predicted[..end])
        })
        .collect()
}

/// Precision on scored predictions; `percent` selects threshold or sweep
pub fn precision_score<T: Label>(
    y_true: &[T],
    y_predict: &[[f64; 2]],
    percent: Option<f64>,
) -> Result<ScoreOutput> {
    score(y_true, y_predict, percent, Metric::Precision)
}

/// Recall on scored predictions; `percent` selects threshold or sweep
pub fn recall_score<T: Label>(
    y_true: &[T],
    y_predict: &[[f64; 2]],
    percent: Option<f64>,
) -> Result<ScoreOutput> {
    score(y_true, y_predict, percent, Metric::Recall)
}

/// Accuracy on scored predictions; `percent` selects threshold or sweep
pub fn accuracy_score<T: Label>(
    y_true: &[T],
    y_predict: &[[f64; 2]],
    percent: Option<f64>,
) -> Result<ScoreOutput> {
    score(y_true, y_predict, percent, Metric::Accuracy)
}

/// Lift on scored predictions; `percent` selects threshold or sweep
pub fn lift_score<T: Label>(
    y_true: &[T],
    y_predict: &[[f64; 2]],
    percent: Option<f64>,
) -> Result<ScoreOutput> {
    score(y_true, y_predict, percent, Metric::Lift)
}

/// F1 on scored predictions; `percent` selects threshold or sweep
pub fn f1_score<T: Label>(
    y_true: &[T],
    y_predict: &[[f64; 2]],
    percent: Option<f64>,
) -> Result<ScoreOutput> {
    score(y_true, y_predict, percent, Metric::F1)
}
