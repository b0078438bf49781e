//! Runtime configuration loaded from environment variables.
//!
//! # Environment variables
//!
//! - `API_ADDRESS`        = listen address (default `127.0.0.1:8080`)
//! - `PRICE_DOMAIN_MIN`   = slider lower edge (default `0`)
//! - `PRICE_DOMAIN_MAX`   = slider upper edge (default `2000000`)
//! - `PRICE_STEP`         = slider step and minimum min/max gap (default `1000`)
//! - `PRICE_DEFAULT_MIN`  = `min` used when the query has none (default `76649`)
//! - `PRICE_DEFAULT_MAX`  = `max` used when the query has none (default `1268175`)

use query_view::{PriceBounds, RangeError};
use thiserror::Error;

pub const DEFAULT_ADDRESS: &str = "127.0.0.1:8080";

/// Error enum for environment-driven setup.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A number failed to parse.
    #[error("invalid number in {var}: {reason}")]
    InvalidNumber {
        var: &'static str,
        reason: &'static str,
    },

    /// A variable was set but blank.
    #[error("environment variable {0} is set but empty")]
    Empty(&'static str),

    /// Price bounds do not describe a usable slider.
    #[error("invalid price bounds: {0}")]
    Bounds(#[from] RangeError),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// `host:port` the HTTP listener binds to.
    pub address: String,
    /// Price slider domain, step and query defaults.
    pub bounds: PriceBounds,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS.to_string(),
            bounds: PriceBounds::STOREFRONT,
        }
    }
}

impl StorefrontConfig {
    /// Build from environment variables; unset variables use defaults.
    ///
    /// # Errors
    /// [`ConfigError::InvalidNumber`] for unparsable prices,
    /// [`ConfigError::Empty`] for a blank `API_ADDRESS`,
    /// [`ConfigError::Bounds`] when the prices are inconsistent.
    pub fn from_env() -> Result<Self, ConfigError> {
        let fallback = PriceBounds::STOREFRONT;

        let address = match std::env::var("API_ADDRESS") {
            Ok(v) if v.trim().is_empty() => return Err(ConfigError::Empty("API_ADDRESS")),
            Ok(v) => v.trim().to_string(),
            Err(_) => DEFAULT_ADDRESS.to_string(),
        };

        let bounds = PriceBounds::new(
            env_u64("PRICE_DOMAIN_MIN", fallback.domain_min())?,
            env_u64("PRICE_DOMAIN_MAX", fallback.domain_max())?,
            env_u64("PRICE_STEP", fallback.step())?,
            env_u64("PRICE_DEFAULT_MIN", fallback.default_min())?,
            env_u64("PRICE_DEFAULT_MAX", fallback.default_max())?,
        )?;

        Ok(Self { address, bounds })
    }
}

/// Parses an optional `u64` from env, returning `dflt` if unset/empty.
fn env_u64(var: &'static str, dflt: u64) -> Result<u64, ConfigError> {
    match std::env::var(var) {
        Ok(v) if !v.trim().is_empty() => {
            v.trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidNumber {
                    var,
                    reason: "expected a non-negative integer",
                })
        }
        _ => Ok(dflt),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_storefront_bounds() {
        let cfg = StorefrontConfig::default();
        assert_eq!(cfg.address, DEFAULT_ADDRESS);
        assert_eq!(cfg.bounds, PriceBounds::STOREFRONT);
    }

    #[test]
    fn env_u64_falls_back_when_unset() {
        assert_eq!(env_u64("STOREFRONT_TEST_SURELY_UNSET_VAR", 42).unwrap(), 42);
    }
}
