//! Display client configuration loaded from environment variables.
//!
//! All settings come from environment variables (or a `.env` file via
//! `dotenvy`). Unset variables fall back to defaults that target a device
//! on `localhost` at the fixed port 81.

use crate::client::endpoint::DEFAULT_DEVICE_PORT;
use crate::domain::StatusPolicy;
use crate::error::DisplayError;
use crate::telemetry::LogFormat;

/// Top-level client configuration.
///
/// Loaded once at startup via [`DisplayConfig::from_env`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Hostname of the signal device.
    pub device_host: String,

    /// Port the device serves its WebSocket on.
    pub device_port: u16,

    /// Treatment of frames with the wrong field count.
    pub status_policy: StatusPolicy,

    /// Log output format.
    pub log_format: LogFormat,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            device_host: "localhost".to_string(),
            device_port: DEFAULT_DEVICE_PORT,
            status_policy: StatusPolicy::default(),
            log_format: LogFormat::default(),
        }
    }
}

impl DisplayConfig {
    /// Loads configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns [`DisplayError::Config`] if a variable is set but cannot be
    /// parsed.
    pub fn from_env() -> Result<Self, DisplayError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns [`DisplayError::Config`] if a value is present but invalid.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DisplayError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let device_host = lookup("DEVICE_HOST")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.device_host);
        let device_port = parse_var(&lookup, "DEVICE_PORT", defaults.device_port)?;
        let status_policy = parse_var(&lookup, "STATUS_POLICY", defaults.status_policy)?;
        let log_format = parse_var(&lookup, "LOG_FORMAT", defaults.log_format)?;

        Ok(Self {
            device_host,
            device_port,
            status_policy,
            log_format,
        })
    }
}

/// Parses variable `key` as `T`, returning `default` when it is unset.
fn parse_var<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, DisplayError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| DisplayError::Config { key, value }),
    }
}
