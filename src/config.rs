//! Environment-driven service configuration.
//!
//! Values come from the process environment (optionally seeded from `.env`):
//! - `ANALYZER_HOST` / `ANALYZER_PORT`: bind address (default `0.0.0.0:3000`)
//! - `CORS_ORIGINS`: comma separated allowed origins, empty means permissive
//! - `ANALYZER_STATIC_DIR`: optional front-end directory served at `/`

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("invalid ANALYZER_HOST: {0}")]
    InvalidHost(String),

    #[error("invalid ANALYZER_PORT: {0}")]
    InvalidPort(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub cors_origins: Vec<String>,
    pub static_dir: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            cors_origins: Vec::new(),
            static_dir: None,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup, so tests need not touch the
    /// real environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let host: IpAddr = match lookup("ANALYZER_HOST") {
            Some(h) => h.trim().parse().map_err(|_| ConfigError::InvalidHost(h))?,
            None => defaults.bind_addr.ip(),
        };
        let port: u16 = match lookup("ANALYZER_PORT") {
            Some(p) => p.trim().parse().map_err(|_| ConfigError::InvalidPort(p))?,
            None => defaults.bind_addr.port(),
        };

        let cors_origins = lookup("CORS_ORIGINS")
            .unwrap_or_default()
            .split(',')
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();

        let static_dir = lookup("ANALYZER_STATIC_DIR")
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            bind_addr: SocketAddr::new(host, port),
            cors_origins,
            static_dir,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        assert_eq!(config_from(&[]).unwrap(), ServerConfig::default());
    }

    #[test]
    fn test_custom_bind_and_origins() {
        let config = config_from(&[
            ("ANALYZER_HOST", "127.0.0.1"),
            ("ANALYZER_PORT", "8080"),
            ("CORS_ORIGINS", "http://localhost:3000, https://app.example.com ,"),
        ])
        .unwrap();
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(
            config.cors_origins,
            vec!["http://localhost:3000", "https://app.example.com"]
        );
    }

    #[test]
    fn test_invalid_port() {
        assert_eq!(
            config_from(&[("ANALYZER_PORT", "http")]),
            Err(ConfigError::InvalidPort("http".to_string()))
        );
    }

    #[test]
    fn test_blank_static_dir_is_ignored() {
        let config = config_from(&[("ANALYZER_STATIC_DIR", "  ")]).unwrap();
        assert!(config.static_dir.is_none());
    }
}
