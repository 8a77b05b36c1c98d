// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Deployment configuration for the form relay (endpoint, access key, timeout).

use std::time::Duration;

use thiserror::Error;
use url::Url;

/// Public Web3Forms submission endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.web3forms.com/submit";

pub const ENDPOINT_VAR: &str = "LETSCONNECT_RELAY_ENDPOINT";
pub const ACCESS_KEY_VAR: &str = "LETSCONNECT_ACCESS_KEY";
pub const TIMEOUT_VAR: &str = "LETSCONNECT_TIMEOUT_SECS";

// Access key baked in at build time, if the deployment provided one.
const BUILD_ACCESS_KEY: Option<&str> = option_env!("LETSCONNECT_ACCESS_KEY");

/// Problems detected while assembling a [`RelayConfig`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("no relay access key configured; set LETSCONNECT_ACCESS_KEY at build or run time")]
    MissingAccessKey,
    #[error("invalid relay endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },
    #[error("invalid LETSCONNECT_TIMEOUT_SECS value '{0}': expected whole seconds")]
    InvalidTimeout(String),
}

/// Where and how submissions are relayed. One fixed credential per running app.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelayConfig {
    pub endpoint: Url,
    pub access_key: String,
    /// `None` leaves requests unbounded.
    pub timeout: Option<Duration>,
}

impl RelayConfig {
    /// Build a config from explicit values, validating each of them.
    pub fn new(
        endpoint: &str,
        access_key: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, ConfigError> {
        let access_key = access_key.into();
        if access_key.trim().is_empty() {
            return Err(ConfigError::MissingAccessKey);
        }

        Ok(Self {
            endpoint: parse_endpoint(endpoint)?,
            access_key,
            timeout,
        })
    }

    /// Read the process environment, falling back to build-time values.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve the config through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let endpoint = lookup(ENDPOINT_VAR)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        let access_key = lookup(ACCESS_KEY_VAR)
            .filter(|v| !v.trim().is_empty())
            .or_else(|| BUILD_ACCESS_KEY.map(str::to_string))
            .ok_or(ConfigError::MissingAccessKey)?;

        let timeout = match lookup(TIMEOUT_VAR) {
            Some(raw) if !raw.trim().is_empty() => Some(parse_timeout(&raw)?),
            _ => None,
        };

        Self::new(endpoint.trim(), access_key, timeout)
    }
}

fn parse_endpoint(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw).map_err(|err| ConfigError::InvalidEndpoint {
        endpoint: raw.to_string(),
        reason: err.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::InvalidEndpoint {
            endpoint: raw.to_string(),
            reason: format!("unsupported scheme '{other}'"),
        }),
    }
}

fn parse_timeout(raw: &str) -> Result<Duration, ConfigError> {
    raw.trim()
        .parse::<u64>()
        .ok()
        .filter(|secs| *secs > 0)
        .map(Duration::from_secs)
        .ok_or_else(|| ConfigError::InvalidTimeout(raw.to_string()))
}
