//! Application configuration

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub version: String,
    #[serde(default)]
    pub release: ReleaseConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReleaseConfig {
    /// Description written on every version this service creates
    pub version_description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct LoggingConfig {
    #[serde(default)]
    pub debug: bool,
    /// Overrides the level implied by `debug`
    #[serde(default)]
    pub log_level: Option<String>,
}

const VALID_LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

impl Config {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.release.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: "1.0.0".to_string(),
            release: ReleaseConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl ReleaseConfig {
    /// Validate release configuration
    pub fn validate(&self) -> Result<()> {
        if self.version_description.trim().is_empty() {
            return Err(Error::Validation(
                "Version description cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        Self {
            version_description: "Created by Jira Action".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Validate logging configuration
    pub fn validate(&self) -> Result<()> {
        if let Some(ref level) = self.log_level {
            if !VALID_LOG_LEVELS.contains(&level.as_str()) {
                return Err(Error::Validation(format!(
                    "Invalid log level '{}'. Must be one of: {}",
                    level,
                    VALID_LOG_LEVELS.join(", ")
                )));
            }
        }
        Ok(())
    }

    /// Effective level: the explicit one, else debug or warn
    pub fn level(&self) -> &str {
        match self.log_level {
            Some(ref level) => level,
            None if self.debug => "debug",
            None => "warn",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.version, "1.0.0");
        assert_eq!(config.release.version_description, "Created by Jira Action");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_release_config_validation() {
        let mut config = ReleaseConfig::default();
        assert!(config.validate().is_ok());

        config.version_description = "   ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_logging_level() {
        let mut config = LoggingConfig::default();
        assert_eq!(config.level(), "warn");

        config.debug = true;
        assert_eq!(config.level(), "debug");

        config.log_level = Some("info".to_string());
        assert_eq!(config.level(), "info");
        assert!(config.validate().is_ok());

        config.log_level = Some("verbose".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{ "version": "1.0.0" }"#).unwrap();
        assert_eq!(config, Config::default());
    }
}
