//! All classification metrics for one set of predictions

use super::classification::{Metric, UndefinedPolicy};
use super::confusion::{confusion_stats, ConfusionStats, Label};
use super::scoring::SCORE_COLUMN;
use crate::config::ReportConfig;
use crate::core::error::check_same_len;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Confusion counts together with every metric derived from them
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassificationReport {
    pub confusion: ConfusionStats,
    pub precision: f64,
    pub recall: f64,
    pub accuracy: f64,
    pub f1: f64,
    pub lift: f64,
}

impl ClassificationReport {
    /// Build a report from binary labels
    pub fn from_labels<T: Label, P: Label>(
        y_true: &[T],
        y_predict: &[P],
        policy: UndefinedPolicy,
    ) -> Result<Self> {
        let stats = confusion_stats(y_true, y_predict)?;
        Self::from_stats(stats, policy)
    }

    /// Build a report from scored rows (column 1) binarized at `threshold`
    pub fn from_scores<T: Label>(
        y_true: &[T],
        y_predict: &[[f64; 2]],
        threshold: f64,
        policy: UndefinedPolicy,
    ) -> Result<Self> {
        check_same_len(y_true.len(), y_predict.len())?;
        let predicted: Vec<bool> = y_predict
            .iter()
            .map(|row| row[SCORE_COLUMN] >= threshold)
            .collect();
        Self::from_labels(y_true, &predicted, policy)
    }

    /// Build a report from precomputed counts
    pub fn from_stats(stats: ConfusionStats, policy: UndefinedPolicy) -> Result<Self> {
        Ok(ClassificationReport {
            confusion: stats,
            precision: Metric::Precision.evaluate(&stats, policy)?,
            recall: Metric::Recall.evaluate(&stats, policy)?,
            accuracy: Metric::Accuracy.evaluate(&stats, policy)?,
            f1: Metric::F1.evaluate(&stats, policy)?,
            lift: Metric::Lift.evaluate(&stats, policy)?,
        })
    }

    /// Get a metric by tag
    pub fn get(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Precision => self.precision,
            Metric::Recall => self.recall,
            Metric::Accuracy => self.accuracy,
            Metric::F1 => self.f1,
            Metric::Lift => self.lift,
        }
    }

    /// Selected metrics keyed by name
    pub fn to_metric_map(&self, metrics: &[Metric]) -> BTreeMap<String, f64> {
        metrics
            .iter()
            .map(|&m| (m.name().to_string(), self.get(m)))
            .collect()
    }

    /// Metrics listed in `config.metrics`, keyed by name
    pub fn to_configured_map(&self, config: &ReportConfig) -> BTreeMap<String, f64> {
        self.to_metric_map(&config.metrics)
    }

    /// Serialize the full report as JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
