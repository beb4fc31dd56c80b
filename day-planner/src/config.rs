//! Server configuration from the environment.
//!
//! The directions API key has no default: a missing key stops the server
//! at startup rather than at the first request.

use std::net::SocketAddr;

/// Environment variable holding the directions API key.
pub const API_KEY_VAR: &str = "GOOGLE_MAPS_API_KEY";

/// Environment variable for the listen address.
pub const ADDR_VAR: &str = "DAY_PLANNER_ADDR";

/// Environment variable overriding the directions base URL.
pub const BASE_URL_VAR: &str = "DIRECTIONS_BASE_URL";

/// Environment variable for the directions request timeout in seconds.
pub const TIMEOUT_VAR: &str = "DIRECTIONS_TIMEOUT_SECS";

/// Environment variable for the static assets directory.
pub const STATIC_DIR_VAR: &str = "DAY_PLANNER_STATIC_DIR";

const DEFAULT_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_STATIC_DIR: &str = "static";

/// Errors loading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A required variable is unset or empty
    #[error("{0} must be set")]
    MissingVar(&'static str),

    /// A variable is set but cannot be parsed
    #[error("invalid value for {var}: {value}")]
    Invalid { var: &'static str, value: String },
}

/// Server configuration.
#[derive(Clone)]
pub struct ServerConfig {
    pub api_key: String,
    pub addr: SocketAddr,
    pub directions_base_url: String,
    pub timeout_secs: u64,
    pub static_dir: String,
}

impl ServerConfig {
    /// Load from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load using an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR)
            .filter(|k| !k.trim().is_empty())
            .ok_or(ConfigError::MissingVar(API_KEY_VAR))?;

        let addr_raw = lookup(ADDR_VAR).unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = addr_raw.parse().map_err(|_| ConfigError::Invalid {
            var: ADDR_VAR,
            value: addr_raw.clone(),
        })?;

        let timeout_secs = match lookup(TIMEOUT_VAR) {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
                var: TIMEOUT_VAR,
                value: raw,
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            api_key,
            addr,
            directions_base_url: lookup(BASE_URL_VAR)
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            timeout_secs,
            static_dir: lookup(STATIC_DIR_VAR).unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string()),
        })
    }
}

impl std::fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerConfig")
            .field("api_key", &"<redacted>")
            .field("addr", &self.addr)
            .field("directions_base_url", &self.directions_base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("static_dir", &self.static_dir)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn missing_key_fails() {
        let err = ServerConfig::from_lookup(lookup(&[])).unwrap_err();
        assert_eq!(err, ConfigError::MissingVar(API_KEY_VAR));
        assert_eq!(err.to_string(), "GOOGLE_MAPS_API_KEY must be set");
    }

    #[test]
    fn blank_key_fails() {
        let err = ServerConfig::from_lookup(lookup(&[(API_KEY_VAR, "  ")])).unwrap_err();
        assert_eq!(err, ConfigError::MissingVar(API_KEY_VAR));
    }

    #[test]
    fn defaults_apply() {
        let config = ServerConfig::from_lookup(lookup(&[(API_KEY_VAR, "k")])).unwrap();

        assert_eq!(config.api_key, "k");
        assert_eq!(config.addr, "127.0.0.1:3000".parse().unwrap());
        assert_eq!(config.directions_base_url, "https://maps.googleapis.com");
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.static_dir, "static");
    }

    #[test]
    fn overrides_apply() {
        let config = ServerConfig::from_lookup(lookup(&[
            (API_KEY_VAR, "k"),
            (ADDR_VAR, "0.0.0.0:8080"),
            (BASE_URL_VAR, "http://localhost:9999"),
            (TIMEOUT_VAR, "5"),
            (STATIC_DIR_VAR, "/srv/static"),
        ]))
        .unwrap();

        assert_eq!(config.addr, "0.0.0.0:8080".parse().unwrap());
        assert_eq!(config.directions_base_url, "http://localhost:9999");
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.static_dir, "/srv/static");
    }

    #[test]
    fn bad_timeout_rejected() {
        let err =
            ServerConfig::from_lookup(lookup(&[(API_KEY_VAR, "k"), (TIMEOUT_VAR, "soon")]))
                .unwrap_err();

        assert_eq!(
            err,
            ConfigError::Invalid {
                var: TIMEOUT_VAR,
                value: "soon".into()
            }
        );
    }

    #[test]
    fn bad_addr_rejected() {
        let err = ServerConfig::from_lookup(lookup(&[(API_KEY_VAR, "k"), (ADDR_VAR, "nowhere")]))
            .unwrap_err();

        assert!(matches!(err, ConfigError::Invalid { var: ADDR_VAR, .. }));
    }

    #[test]
    fn debug_redacts_key() {
        let config = ServerConfig::from_lookup(lookup(&[(API_KEY_VAR, "secret-key")])).unwrap();
        assert!(!format!("{config:?}").contains("secret-key"));
    }
}
