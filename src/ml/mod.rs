//! Machine Learning Module
//!
//! This module provides evaluation metrics for binary classifiers.

pub mod metrics;

// Re-export metrics
pub use metrics::{
    accuracy, accuracy_score, confusion_stats, f1, f1_score, lift, lift_score, precision,
    precision_score, recall, recall_score, score, ClassificationReport, ConfusionStats, Metric,
    ScoreOutput, UndefinedPolicy,
};
