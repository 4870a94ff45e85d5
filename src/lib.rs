// Core module with the shared error type
pub mod core;

pub mod config;
pub mod error;
pub mod io;
pub mod ml;

// Re-export core types
pub use crate::core::error::{Error, Result};

// Configuration
pub use config::{MetricsConfig, ReportConfig, ScoringConfig};

// Input loading
pub use io::{read_scored_csv, ScoredData};

// Binary classification metrics
pub use ml::metrics::{
    accuracy, accuracy_score, confusion_stats, f1, f1_score, lift, lift_score, precision,
    precision_score, recall, recall_score, score, score_by, score_with_config,
    ClassificationReport, ConfusionStats, Cutoff, Label, Metric, ScoreOutput, UndefinedPolicy,
};

// Export version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
