//! Registry configuration with TOML file support.

use lockpass_types::{PassClass, RegistryParams};
use lockpass_utils::LogFormat;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Configuration for a registry host.
///
/// Can be loaded from a TOML file via [`RegistryConfig::from_toml_file`] or
/// built programmatically (e.g. for tests).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    #[serde(default)]
    pub params: RegistryParams,

    #[serde(default)]
    pub log_format: LogFormat,

    /// Default tracing filter, overridden by `RUST_LOG`.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl RegistryConfig {
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let params = &self.params;
        if params.reserved_upper_bound == 0 {
            return Err(ConfigError::Invalid(
                "reserved_upper_bound must be positive".into(),
            ));
        }
        if params.reserved_upper_bound == u64::MAX {
            return Err(ConfigError::Invalid(
                "reserved_upper_bound leaves no room for auto-allocated passes".into(),
            ));
        }
        for class in PassClass::ALL {
            let minimum = params.min_name_length.get(class);
            if minimum > params.max_name_length {
                return Err(ConfigError::Invalid(format!(
                    "class {class} minimum name length {minimum} exceeds cap {}",
                    params.max_name_length
                )));
            }
        }
        Ok(())
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            params: RegistryParams::default(),
            log_format: LogFormat::default(),
            log_level: default_log_level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_round_trips_through_toml() {
        let config = RegistryConfig::default();
        let toml_str = config.to_toml_string().unwrap();
        let parsed = RegistryConfig::from_toml_str(&toml_str).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn empty_toml_uses_defaults() {
        let config = RegistryConfig::from_toml_str("").unwrap();
        assert_eq!(config.params.reserved_upper_bound, 100_000);
        assert_eq!(config.log_format, LogFormat::Human);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn partial_toml_overrides() {
        let config = RegistryConfig::from_toml_str(
            r#"
            log_format = "json"

            [params]
            accept_compact_codes = false

            [params.invitation_allotment]
            a = 5
            b = 4
            c = 1
            "#,
        )
        .unwrap();
        assert_eq!(config.log_format, LogFormat::Json);
        assert!(!config.params.accept_compact_codes);
        assert_eq!(config.params.invitation_allotment.get(PassClass::C), 1);
        assert_eq!(config.params.max_name_length, 64);
    }

    #[test]
    fn invalid_values_are_rejected() {
        let err = RegistryConfig::from_toml_str("[params]\nreserved_upper_bound = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = RegistryConfig::from_toml_str("[params]\nmax_name_length = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = RegistryConfig::from_toml_str("log_format = \"xml\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "log_level = \"debug\"").unwrap();
        let config = RegistryConfig::from_toml_file(file.path()).unwrap();
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn missing_file_returns_io_error() {
        let err = RegistryConfig::from_toml_file("/nonexistent/lockpass.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
