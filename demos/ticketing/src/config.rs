//! Configuration management for the ticketing application.
//!
//! Loads configuration from environment variables with sensible defaults.

use crate::types::{Price, PRICE_CEILING};
use serde::{Deserialize, Serialize};
use std::env;
use thiserror::Error;

/// Errors raised while loading configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The price ceiling is not a finite, non-negative number
    #[error("Invalid TICKETING_PRICE_CEILING {value:?}: expected a finite, non-negative number")]
    InvalidPriceCeiling {
        /// Raw value found in the environment
        value: String,
    },
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Registry admission settings
    pub registry: RegistryConfig,
    /// Logging settings
    pub logging: LoggingConfig,
}

/// Registry configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Highest price still admitted (default: 100)
    pub price_ceiling: Price,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            price_ceiling: PRICE_CEILING,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset (default: info)
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPriceCeiling`] if `TICKETING_PRICE_CEILING`
    /// is set but is not a finite, non-negative number.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Same as [`Config::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let price_ceiling = match lookup("TICKETING_PRICE_CEILING") {
            Some(raw) => parse_ceiling(&raw)?,
            None => PRICE_CEILING,
        };

        Ok(Self {
            registry: RegistryConfig { price_ceiling },
            logging: LoggingConfig {
                level: lookup("TICKETING_LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
            },
        })
    }
}

fn parse_ceiling(raw: &str) -> Result<Price, ConfigError> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(Price::new(value)),
        _ => Err(ConfigError::InvalidPriceCeiling {
            value: raw.to_string(),
        }),
    }
}
