//! Tracing subscriber setup for hosts embedding the release core

use tracing_subscriber::EnvFilter;

use crate::models::LoggingConfig;
use crate::{Error, Result};

/// Install a global fmt subscriber at the configured level.
///
/// Fails instead of panicking when a subscriber is already installed.
pub fn init(config: &LoggingConfig) -> Result<()> {
    config.validate()?;

    let filter = EnvFilter::try_new(config.level())
        .map_err(|e| Error::Validation(format!("Invalid log filter: {}", e)))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|e| Error::Validation(format!("Logging already initialized: {}", e)))
}
