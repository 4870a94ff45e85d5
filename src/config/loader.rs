//! Configuration loading utilities
//!
//! This module handles loading configuration from various sources with proper
//! precedence and validation.

use super::*;
use crate::core::error::{Error, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Load configuration from environment variables
pub fn load_from_env() -> Result<MetricsConfig> {
    let mut config = MetricsConfig::default();
    apply_env(&mut config)?;
    Ok(config)
}

/// Overwrite `config` with every `BINMETRICS_*` variable that is set
pub fn apply_env(config: &mut MetricsConfig) -> Result<()> {
    if let Ok(threshold) = env::var("BINMETRICS_THRESHOLD") {
        config.scoring.default_threshold = threshold.trim().parse().map_err(|e| {
            Error::ConfigurationError(format!("Invalid BINMETRICS_THRESHOLD: {}", e))
        })?;
    }

    if let Ok(bins) = env::var("BINMETRICS_SWEEP_BINS") {
        config.scoring.sweep_bins = bins.trim().parse().map_err(|e| {
            Error::ConfigurationError(format!("Invalid BINMETRICS_SWEEP_BINS: {}", e))
        })?;
    }

    if let Ok(policy) = env::var("BINMETRICS_UNDEFINED_POLICY") {
        config.scoring.undefined_policy = policy.parse().map_err(|e| {
            Error::ConfigurationError(format!("Invalid BINMETRICS_UNDEFINED_POLICY: {}", e))
        })?;
    }

    if let Ok(metrics) = env::var("BINMETRICS_REPORT_METRICS") {
        config.report.metrics = metrics
            .split(',')
            .filter(|name| !name.trim().is_empty())
            .map(|name| name.parse::<Metric>())
            .collect::<Result<Vec<_>>>()
            .map_err(|e| {
                Error::ConfigurationError(format!("Invalid BINMETRICS_REPORT_METRICS: {}", e))
            })?;
    }

    Ok(())
}

/// Load configuration from a file (YAML or TOML based on extension)
pub fn load_from_file(path: &Path) -> Result<MetricsConfig> {
    if !path.exists() {
        return Err(Error::ConfigurationError(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        Error::ConfigurationError(format!(
            "Failed to read config file {}: {}",
            path.display(),
            e
        ))
    })?;

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("yaml") | Some("yml") => load_from_yaml(&contents),
        Some("toml") => load_from_toml(&contents),
        Some(ext) => Err(Error::ConfigurationError(format!(
            "Unsupported config file format: {}",
            ext
        ))),
        None => load_from_yaml(&contents).or_else(|_| load_from_toml(&contents)),
    }
}

/// Load configuration from YAML string
pub fn load_from_yaml(yaml: &str) -> Result<MetricsConfig> {
    serde_yaml::from_str(yaml)
        .map_err(|e| Error::ConfigurationError(format!("Failed to parse YAML config: {}", e)))
}

/// Load configuration from TOML string
pub fn load_from_toml(toml: &str) -> Result<MetricsConfig> {
    toml::from_str(toml)
        .map_err(|e| Error::ConfigurationError(format!("Failed to parse TOML config: {}", e)))
}

/// Load configuration with precedence: defaults -> file -> environment
pub fn load_with_precedence<P: AsRef<Path>>(config_file: Option<P>) -> Result<MetricsConfig> {
    let mut config = MetricsConfig::default();

    if let Some(file_path) = config_file {
        log::debug!("loading config from {}", file_path.as_ref().display());
        let file_config = load_from_file(file_path.as_ref())?;
        config.merge(&file_config);
    }

    apply_env(&mut config)?;

    config.validate()?;

    Ok(config)
}

/// Save configuration to a file
pub fn save_to_file(config: &MetricsConfig, path: &Path) -> Result<()> {
    let contents = match path.extension().and_then(|ext| ext.to_str()) {
        Some("yaml") | Some("yml") => config.to_yaml()?,
        Some("toml") => config.to_toml()?,
        Some(ext) => {
            return Err(Error::ConfigurationError(format!(
                "Unsupported config file format: {}",
                ext
            )))
        }
        None => config.to_yaml()?,
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| {
                Error::ConfigurationError(format!(
                    "Failed to create config directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    fs::write(path, contents).map_err(|e| {
        Error::ConfigurationError(format!(
            "Failed to write config file {}: {}",
            path.display(),
            e
        ))
    })
}

/// Get configuration file paths in order of precedence
pub fn get_config_file_paths() -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = vec![
        "binmetrics.yml".into(),
        "binmetrics.yaml".into(),
        "binmetrics.toml".into(),
    ];

    if let Some(config_dir) = dirs::config_dir() {
        let dir = config_dir.join("binmetrics");
        paths.push(dir.join("config.yml"));
        paths.push(dir.join("config.yaml"));
        paths.push(dir.join("config.toml"));
    }

    if let Ok(config_path) = env::var("BINMETRICS_CONFIG_FILE") {
        paths.insert(0, config_path.into());
    }

    paths
}

/// Auto-discover and load configuration file
pub fn auto_load() -> Result<MetricsConfig> {
    match get_config_file_paths().into_iter().find(|path| path.exists()) {
        Some(path) => load_with_precedence(Some(path)),
        None => load_with_precedence::<&Path>(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use tempfile::tempdir;

    // Serializes tests that modify environment variables
    static ENV_TEST_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: [&str; 4] = [
        "BINMETRICS_THRESHOLD",
        "BINMETRICS_SWEEP_BINS",
        "BINMETRICS_UNDEFINED_POLICY",
        "BINMETRICS_REPORT_METRICS",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_from_env() {
        let _lock = ENV_TEST_MUTEX.lock().unwrap();
        clear_env();

        env::set_var("BINMETRICS_THRESHOLD", "0.65");
        env::set_var("BINMETRICS_SWEEP_BINS", "50");
        env::set_var("BINMETRICS_UNDEFINED_POLICY", "zero");
        env::set_var("BINMETRICS_REPORT_METRICS", "precision, lift_score");

        let config = load_from_env();
        clear_env();

        let config = config.unwrap();
        assert_eq!(config.scoring.default_threshold, 0.65);
        assert_eq!(config.scoring.sweep_bins, 50);
        assert_eq!(config.scoring.undefined_policy, UndefinedPolicy::Zero);
        assert_eq!(config.report.metrics, vec![Metric::Precision, Metric::Lift]);
    }

    #[test]
    fn test_invalid_env_value() {
        let _lock = ENV_TEST_MUTEX.lock().unwrap();
        clear_env();

        env::set_var("BINMETRICS_SWEEP_BINS", "many");
        let result = load_from_env();
        clear_env();

        assert!(matches!(result, Err(Error::ConfigurationError(_))));
    }

    #[test]
    fn test_load_from_toml() {
        let toml = r#"
[scoring]
default_threshold = 0.4
undefined_policy = "nan"
"#;
        let config = load_from_toml(toml).unwrap();
        assert_eq!(config.scoring.default_threshold, 0.4);
        assert_eq!(config.scoring.sweep_bins, 100);
        assert_eq!(config.scoring.undefined_policy, UndefinedPolicy::Nan);
    }

    #[test]
    fn test_precedence_env_over_file() {
        let _lock = ENV_TEST_MUTEX.lock().unwrap();
        clear_env();

        let dir = tempdir().unwrap();
        let path = dir.path().join("binmetrics.yaml");
        fs::write(&path, "scoring:\n  default_threshold: 0.3\n  sweep_bins: 10\n").unwrap();

        env::set_var("BINMETRICS_SWEEP_BINS", "20");
        let config = load_with_precedence(Some(&path));
        clear_env();

        let config = config.unwrap();
        assert_eq!(config.scoring.default_threshold, 0.3);
        assert_eq!(config.scoring.sweep_bins, 20);
    }

    #[test]
    fn test_env_default_values_override_file() {
        let _lock = ENV_TEST_MUTEX.lock().unwrap();
        clear_env();

        let dir = tempdir().unwrap();
        let path = dir.path().join("binmetrics.yaml");
        fs::write(
            &path,
            "scoring:\n  default_threshold: 0.3\n  sweep_bins: 10\n  undefined_policy: nan\nreport:\n  metrics: [lift]\n",
        )
        .unwrap();

        env::set_var("BINMETRICS_THRESHOLD", "0.5");
        env::set_var("BINMETRICS_SWEEP_BINS", "100");
        env::set_var("BINMETRICS_UNDEFINED_POLICY", "error");
        env::set_var(
            "BINMETRICS_REPORT_METRICS",
            "precision,recall,accuracy,f1,lift",
        );
        let config = load_with_precedence(Some(&path));
        clear_env();

        let config = config.unwrap();
        assert_eq!(config.scoring.default_threshold, 0.5);
        assert_eq!(config.scoring.sweep_bins, 100);
        assert_eq!(config.scoring.undefined_policy, UndefinedPolicy::Error);
        assert_eq!(config.report.metrics, Metric::ALL.to_vec());
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.ini");
        fs::write(&path, "").unwrap();

        assert!(load_from_file(&path).is_err());
        assert!(save_to_file(&MetricsConfig::default(), &path).is_err());
    }
}
