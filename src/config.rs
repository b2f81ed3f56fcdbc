//! Configuration management for Roster Gate
//!
//! Layers built-in defaults, an optional `config.toml`, and `ROSTER_GATE_*`
//! environment variables into a single [`GateConfig`].

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

const DEFAULT_CREDENTIALS_PATH: &str = "./creds.txt";
const DEFAULT_MAX_FIELD_LENGTH: i64 = 49;
const DEFAULT_LOG_LEVEL: &str = "info";

/// Upper bound accepted for `max_field_length`
const FIELD_LENGTH_CEILING: usize = 4096;

/// Complete gate configuration
#[derive(Debug, Deserialize, Clone)]
pub struct GateConfig {
    /// Location of the append-only credentials file
    /// Environment: ROSTER_GATE_CREDENTIALS_PATH
    pub credentials_path: String,

    /// Maximum bytes accepted for a username or password
    /// Environment: ROSTER_GATE_MAX_FIELD_LENGTH
    pub max_field_length: usize,

    /// Default log filter, overridden by RUST_LOG
    pub log_level: String,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            credentials_path: DEFAULT_CREDENTIALS_PATH.to_string(),
            max_field_length: DEFAULT_MAX_FIELD_LENGTH as usize,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl GateConfig {
    /// Load configuration from config.toml with environment overrides
    pub fn load() -> Result<Self, ConfigError> {
        // Packaged layout first, then the working directory
        let config_paths = ["roster-gate/config", "config"];

        let mut builder = Self::defaults()?;
        for config_path in config_paths {
            builder = builder.add_source(File::with_name(config_path).required(false));
        }

        Self::finish(builder)
    }

    /// Load configuration from one explicit file with environment overrides
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let builder = Self::defaults()?.add_source(File::with_name(path));
        Self::finish(builder)
    }

    /// Get credentials path as PathBuf
    pub fn credentials_path(&self) -> PathBuf {
        PathBuf::from(&self.credentials_path)
    }

    fn defaults() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            .set_default("credentials_path", DEFAULT_CREDENTIALS_PATH)?
            .set_default("max_field_length", DEFAULT_MAX_FIELD_LENGTH)?
            .set_default("log_level", DEFAULT_LOG_LEVEL)
    }

    fn finish(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, ConfigError> {
        let settings = builder
            .add_source(Environment::with_prefix("ROSTER_GATE"))
            .build()?;
        let config: GateConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    fn validate(&self) -> Result<(), ConfigError> {
        if self.credentials_path.trim().is_empty() {
            return Err(ConfigError::Message(
                "credentials_path cannot be empty".into(),
            ));
        }

        if self.max_field_length == 0 || self.max_field_length > FIELD_LENGTH_CEILING {
            return Err(ConfigError::Message(format!(
                "max_field_length must be between 1 and {FIELD_LENGTH_CEILING}"
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults_match_reference_values() {
        let config = GateConfig::default();
        assert_eq!(config.credentials_path, "./creds.txt");
        assert_eq!(config.max_field_length, 49);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_file_overrides_defaults() {
        let file = write_config("credentials_path = \"/tmp/gate-creds.txt\"\nmax_field_length = 20\n");
        let config = GateConfig::from_file(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.credentials_path(), PathBuf::from("/tmp/gate-creds.txt"));
        assert_eq!(config.max_field_length, 20);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_rejects_zero_field_length() {
        let file = write_config("max_field_length = 0\n");
        let err = GateConfig::from_file(file.path().to_str().unwrap()).unwrap_err();
        assert!(err.to_string().contains("max_field_length"));
    }

    #[test]
    fn test_rejects_empty_credentials_path() {
        let file = write_config("credentials_path = \"  \"\n");
        assert!(GateConfig::from_file(file.path().to_str().unwrap()).is_err());
    }
}
