//! Environment-based bot configuration.
//!
//! Values are read once at startup. A `.env` file is loaded by `main` before
//! `Config::from_env` runs, so variables set in the real environment take
//! precedence over the file.

use std::time::Duration;

use crate::error::config::ConfigError;

const BOT_TOKEN_VAR: &str = "BOT_TOKEN";
const LEGACY_TOKEN_VAR: &str = "TOKEN";
const DEFER_TIMEOUT_VAR: &str = "DEFER_TIMEOUT_MS";
const SHUTDOWN_GRACE_VAR: &str = "SHUTDOWN_GRACE_SECS";

/// Default time a command handler may run before the interaction is deferred.
///
/// Discord drops interactions that are not acknowledged within 3 seconds, so
/// this leaves room for the deferral request itself.
const DEFAULT_DEFER_TIMEOUT_MS: u64 = 1500;

/// Default time shutdown waits for detached impersonation sends.
const DEFAULT_SHUTDOWN_GRACE_SECS: u64 = 5;

pub struct Config {
    pub bot_token: String,

    pub defer_timeout: Duration,
    pub shutdown_grace: Duration,
}

impl Config {
    /// Reads configuration from the process environment.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and parseable
    /// - `Err(ConfigError::MissingEnvVar)` - No bot token was provided
    /// - `Err(ConfigError::InvalidEnvVar)` - An optional variable failed to parse
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds configuration from an arbitrary variable lookup.
    ///
    /// Empty values are treated the same as unset ones.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of the named variable, if set
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let bot_token = var(BOT_TOKEN_VAR)
            .or_else(|| var(LEGACY_TOKEN_VAR))
            .ok_or_else(|| ConfigError::MissingEnvVar(BOT_TOKEN_VAR.to_string()))?;

        let defer_timeout_ms = parse_u64(DEFER_TIMEOUT_VAR, var(DEFER_TIMEOUT_VAR))?
            .unwrap_or(DEFAULT_DEFER_TIMEOUT_MS);
        let shutdown_grace_secs = parse_u64(SHUTDOWN_GRACE_VAR, var(SHUTDOWN_GRACE_VAR))?
            .unwrap_or(DEFAULT_SHUTDOWN_GRACE_SECS);

        Ok(Self {
            bot_token: bot_token.trim().to_string(),
            defer_timeout: Duration::from_millis(defer_timeout_ms),
            shutdown_grace: Duration::from_secs(shutdown_grace_secs),
        })
    }
}

fn parse_u64(name: &str, value: Option<String>) -> Result<Option<u64>, ConfigError> {
    value
        .map(|value| {
            value
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidEnvVar {
                    name: name.to_string(),
                    value,
                })
        })
        .transpose()
}
