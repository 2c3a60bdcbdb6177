//! Configuration storage operations

use crate::{models::Config, Result};
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "config.json";

pub struct ConfigStorage {
    config_dir: PathBuf,
}

impl ConfigStorage {
    pub fn new(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
        }
    }

    pub fn path(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE)
    }

    /// Load the config, writing the defaults first if there is none yet
    pub fn load(&self) -> Result<Config> {
        let config_path = self.path();

        if !config_path.exists() {
            return self.init_default();
        }

        let content = std::fs::read_to_string(&config_path)?;

        // Handle empty file case
        if content.trim().is_empty() {
            return self.init_default();
        }

        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        tracing::debug!("Loaded config from {}", config_path.display());
        Ok(config)
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        config.validate()?;
        std::fs::create_dir_all(&self.config_dir)?;

        let content = serde_json::to_string_pretty(config)?;
        std::fs::write(self.path(), content)?;

        Ok(())
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    fn init_default(&self) -> Result<Config> {
        let config = Config::default();
        self.save(&config)?;
        tracing::info!("Wrote default config to {}", self.path().display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use tempfile::TempDir;

    #[test]
    fn test_load_creates_default() {
        let temp_dir = TempDir::new().unwrap();
        let storage = ConfigStorage::new(temp_dir.path().join("jira-action"));

        let config = storage.load().unwrap();
        assert_eq!(config, Config::default());
        assert!(storage.path().exists());
    }

    #[test]
    fn test_load_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let storage = ConfigStorage::new(temp_dir.path());
        std::fs::write(storage.path(), "  \n").unwrap();

        let config = storage.load().unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let storage = ConfigStorage::new(temp_dir.path());

        let mut config = Config::default();
        config.release.version_description = "Created by CI".to_string();
        config.logging.debug = true;
        storage.save(&config).unwrap();

        let loaded = storage.load().unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.logging.level(), "debug");
    }

    #[test]
    fn test_load_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let storage = ConfigStorage::new(temp_dir.path());
        std::fs::write(storage.path(), "{ not json").unwrap();

        assert!(matches!(storage.load(), Err(Error::Json(_))));
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let temp_dir = TempDir::new().unwrap();
        let storage = ConfigStorage::new(temp_dir.path());
        std::fs::write(
            storage.path(),
            r#"{ "version": "1.0.0", "logging": { "log_level": "loud" } }"#,
        )
        .unwrap();

        assert!(matches!(storage.load(), Err(Error::Validation(_))));
    }
}
