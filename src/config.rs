//! Configuration management for the wallet session
//!
//! Loads `config.toml` with `WALLET_*` environment overrides. The session
//! has no fatal error path, so a missing or invalid file falls back to the
//! defaults with a warning instead of aborting.

use config::{Config, Environment, File};
use log::warn;
use serde::Deserialize;

/// Wallet session configuration
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SessionConfig {
    /// Block tag passed to balance queries (e.g. "latest")
    pub block_tag: String,

    /// Capacity of the provider event channel
    pub event_buffer: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            block_tag: "latest".to_string(),
            event_buffer: 16,
        }
    }
}

impl SessionConfig {
    /// Load configuration from config.toml with environment overrides.
    pub fn load() -> Self {
        let loaded = Config::builder()
            .add_source(File::with_name("config").required(false))
            .add_source(Environment::with_prefix("WALLET"))
            .build()
            .and_then(|settings| settings.try_deserialize::<SessionConfig>());

        match loaded {
            Ok(config) => match config.validate() {
                Ok(()) => config,
                Err(e) => {
                    warn!("invalid session config, using defaults: {}", e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("failed to load session config, using defaults: {}", e);
                Self::default()
            }
        }
    }

    /// Validation for all configuration values
    fn validate(&self) -> Result<(), config::ConfigError> {
        if self.block_tag.is_empty() {
            return Err(config::ConfigError::Message(
                "block_tag cannot be empty".into(),
            ));
        }

        if self.event_buffer == 0 {
            return Err(config::ConfigError::Message(
                "event_buffer must be greater than 0".into(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = SessionConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.block_tag, "latest");
    }

    #[test]
    fn rejects_empty_block_tag() {
        let config = SessionConfig {
            block_tag: String::new(),
            ..SessionConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_zero_event_buffer() {
        let config = SessionConfig {
            event_buffer: 0,
            ..SessionConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
