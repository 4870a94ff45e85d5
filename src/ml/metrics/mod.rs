//! Machine learning evaluation metrics module
//!
//! Provides binary classification metrics computed from confusion counts,
//! scored evaluation at a threshold or over a percentile sweep, and a
//! combined report.

pub mod classification;
pub mod confusion;
pub mod report;
pub mod scoring;

pub use classification::{accuracy, f1, lift, precision, recall, Metric, UndefinedPolicy};
pub use confusion::{confusion_stats, ConfusionStats, Label};
pub use report::ClassificationReport;
pub use scoring::{
    accuracy_score, f1_score, lift_score, precision_score, recall_score, score, score_by,
    score_with_config, Cutoff, ScoreOutput,
};
