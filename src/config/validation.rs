//! Configuration validation utilities

use super::*;
use crate::core::error::{Error, Result};

/// Validate the entire configuration
pub fn validate_config(config: &MetricsConfig) -> Result<()> {
    validate_scoring_config(&config.scoring)?;
    validate_report_config(&config.report)?;

    Ok(())
}

/// Validate scoring configuration
pub fn validate_scoring_config(config: &ScoringConfig) -> Result<()> {
    let threshold = config.default_threshold;
    if !threshold.is_finite() || !(0.0..=1.0).contains(&threshold) {
        return Err(Error::ConfigurationError(format!(
            "default_threshold must be within [0, 1], got {}",
            threshold
        )));
    }

    if config.sweep_bins < 2 {
        return Err(Error::ConfigurationError(format!(
            "sweep_bins must be at least 2, got {}",
            config.sweep_bins
        )));
    }

    Ok(())
}

/// Validate report configuration
pub fn validate_report_config(config: &ReportConfig) -> Result<()> {
    if config.metrics.is_empty() {
        return Err(Error::ConfigurationError(
            "report.metrics must name at least one metric".to_string(),
        ));
    }

    Ok(())
}
