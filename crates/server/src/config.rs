//! Server configuration from environment variables.

use std::net::SocketAddr;

use sitemeta_core::{FetchConfig, Result, SitemetaError};

pub const ADDR_VAR: &str = "SITEMETA_ADDR";
pub const TIMEOUT_VAR: &str = "SITEMETA_FETCH_TIMEOUT";
pub const USER_AGENT_VAR: &str = "SITEMETA_USER_AGENT";
pub const MAX_REDIRECTS_VAR: &str = "SITEMETA_MAX_REDIRECTS";
pub const MAX_BODY_BYTES_VAR: &str = "SITEMETA_MAX_BODY_BYTES";

/// `RUST_LOG` filter used when the variable is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "sitemeta_server=info,sitemeta_core=info,tower_http=info";

const DEFAULT_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to.
    pub addr: SocketAddr,
    /// Settings for upstream page fetches.
    pub fetch: FetchConfig,
}

impl ServerConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// Unset or blank variables fall back to their defaults.
    pub fn from_lookup<L>(lookup: L) -> Result<Self>
    where
        L: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = FetchConfig::default();

        let addr = get(ADDR_VAR).unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = addr
            .trim()
            .parse::<SocketAddr>()
            .map_err(|e| SitemetaError::ConfigError(format!("{}={}: {}", ADDR_VAR, addr, e)))?;

        let timeout = match get(TIMEOUT_VAR) {
            Some(value) => parse_number(TIMEOUT_VAR, &value)?,
            None => defaults.timeout,
        };
        if timeout == 0 {
            return Err(SitemetaError::ConfigError(format!("{} must be greater than 0", TIMEOUT_VAR)));
        }

        let max_redirects = match get(MAX_REDIRECTS_VAR) {
            Some(value) => parse_number(MAX_REDIRECTS_VAR, &value)?,
            None => defaults.max_redirects,
        };

        let max_body_bytes = match get(MAX_BODY_BYTES_VAR) {
            Some(value) => parse_number(MAX_BODY_BYTES_VAR, &value)?,
            None => defaults.max_body_bytes,
        };
        if max_body_bytes == 0 {
            return Err(SitemetaError::ConfigError(format!("{} must be greater than 0", MAX_BODY_BYTES_VAR)));
        }

        let user_agent = get(USER_AGENT_VAR).unwrap_or(defaults.user_agent);

        Ok(Self { addr, fetch: FetchConfig { timeout, user_agent, max_redirects, max_body_bytes } })
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| SitemetaError::ConfigError(format!("{}={}: {}", key, value, e)))
}
