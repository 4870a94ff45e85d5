//! Configuration management for binmetrics
//!
//! This module provides configuration for scoring and reporting with support for:
//! - Environment variables
//! - YAML/TOML configuration files
//! - Configuration validation

use crate::core::error::{Error, Result};
use crate::ml::metrics::{Metric, UndefinedPolicy};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub mod loader;
pub mod validation;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricsConfig {
    /// Threshold, sweep and undefined-metric settings
    pub scoring: ScoringConfig,
    /// Classification report settings
    pub report: ReportConfig,
}

/// Scoring configuration section
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Threshold used when no percent is given
    pub default_threshold: f64,
    /// Number of equal-width bins in a percentile sweep
    pub sweep_bins: usize,
    /// What undefined metrics evaluate to
    pub undefined_policy: UndefinedPolicy,
}

/// Report configuration section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Metrics picked out by `ClassificationReport::to_configured_map`
    pub metrics: Vec<Metric>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            default_threshold: 0.5,
            sweep_bins: 100,
            undefined_policy: UndefinedPolicy::Error,
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            metrics: Metric::ALL.to_vec(),
        }
    }
}

impl MetricsConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        loader::load_from_env()
    }

    /// Load configuration from a file (YAML or TOML)
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        loader::load_from_file(path.as_ref())
    }

    /// Load configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        loader::load_from_yaml(yaml)
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml: &str) -> Result<Self> {
        loader::load_from_toml(toml)
    }

    /// Load configuration with precedence: defaults -> file -> env
    pub fn load_with_precedence<P: AsRef<Path>>(config_file: Option<P>) -> Result<Self> {
        loader::load_with_precedence(config_file)
    }

    /// Validate configuration and return errors if invalid
    pub fn validate(&self) -> Result<()> {
        validation::validate_config(self)
    }

    /// Save configuration to a file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        loader::save_to_file(self, path.as_ref())
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            Error::ConfigurationError(format!("Failed to serialize config to YAML: {}", e))
        })
    }

    /// Convert to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| {
            Error::ConfigurationError(format!("Failed to serialize config to TOML: {}", e))
        })
    }

    /// Merge another configuration into this one.
    ///
    /// Only values that differ from the defaults are taken from `other`.
    pub fn merge(&mut self, other: &Self) {
        let scoring = ScoringConfig::default();
        if other.scoring.default_threshold != scoring.default_threshold {
            self.scoring.default_threshold = other.scoring.default_threshold;
        }
        if other.scoring.sweep_bins != scoring.sweep_bins {
            self.scoring.sweep_bins = other.scoring.sweep_bins;
        }
        if other.scoring.undefined_policy != scoring.undefined_policy {
            self.scoring.undefined_policy = other.scoring.undefined_policy;
        }

        if other.report != ReportConfig::default() {
            self.report.metrics = other.report.metrics.clone();
        }
    }
}
