//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `JTBD_SCORING` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use jtbd_scoring::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Default confidence: {}", config.scoring.default_confidence_weight);
//! ```

mod error;
mod logging;
mod scoring;

pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use scoring::ScoringConfig;

use serde::Deserialize;
use std::path::Path;

const ENV_PREFIX: &str = "JTBD_SCORING";
const ENV_SEPARATOR: &str = "__";

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a usable
/// configuration.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct AppConfig {
    /// Scoring defaults (confidence weight, segment length)
    #[serde(default)]
    pub scoring: ScoringConfig,

    /// Log filter and output format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `JTBD_SCORING` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `JTBD_SCORING__SCORING__DEFAULT_CONFIDENCE_WEIGHT=0.9`
    /// - `JTBD_SCORING__LOGGING__JSON=true`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(environment())
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Load configuration from a file, with environment variables on top
    ///
    /// The format (TOML, YAML, JSON, ...) follows the file extension.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file is missing or malformed.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .add_source(environment())
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValidationFailed` if any configuration value is
    /// invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.scoring.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

fn environment() -> config::Environment {
    config::Environment::default()
        .prefix(ENV_PREFIX)
        .separator(ENV_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::io::Write;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("JTBD_SCORING__SCORING__DEFAULT_CONFIDENCE_WEIGHT");
        env::remove_var("JTBD_SCORING__SCORING__MIN_SEGMENT_LENGTH");
        env::remove_var("JTBD_SCORING__LOGGING__LOG_LEVEL");
        env::remove_var("JTBD_SCORING__LOGGING__JSON");
    }

    #[test]
    fn test_load_defaults_from_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config, AppConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("JTBD_SCORING__SCORING__DEFAULT_CONFIDENCE_WEIGHT", "0.9");
        env::set_var("JTBD_SCORING__SCORING__MIN_SEGMENT_LENGTH", "15");
        env::set_var("JTBD_SCORING__LOGGING__JSON", "true");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.scoring.default_confidence_weight, 0.9);
        assert_eq!(config.scoring.min_segment_length, 15);
        assert!(config.logging.json);
    }

    #[test]
    fn test_validate_rejects_bad_weight() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("JTBD_SCORING__SCORING__DEFAULT_CONFIDENCE_WEIGHT", "1.5");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        match config.validate() {
            Err(ConfigError::ValidationFailed(err)) => {
                assert_eq!(err, ValidationError::InvalidConfidenceWeight(1.5));
            }
            other => panic!("Expected ValidationFailed, got {:?}", other),
        }
    }

    #[test]
    fn test_load_from_file_with_env_override() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[scoring]\ndefault_confidence_weight = 0.6\nmin_segment_length = 12\n\n[logging]\nlog_level = \"warn\""
        )
        .unwrap();

        env::set_var("JTBD_SCORING__SCORING__MIN_SEGMENT_LENGTH", "20");
        let result = AppConfig::load_from_file(file.path());
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.scoring.default_confidence_weight, 0.6);
        assert_eq!(config.scoring.min_segment_length, 20);
        assert_eq!(config.logging.log_level, "warn");
    }

    #[test]
    fn test_load_from_missing_file_fails() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let result = AppConfig::load_from_file(dir.path().join("absent.toml"));
        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }
}
