//! Server configuration, read from the environment.

use std::net::{IpAddr, SocketAddr};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

/// Runtime settings for the todo server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Listen address.
    pub addr: SocketAddr,
    /// SQLite file path, or `:memory:`.
    pub database: String,
    /// Allow cross-origin requests from any origin.
    pub cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 5000)),
            database: "todos.db".to_string(),
            cors: true,
        }
    }
}

impl ServerConfig {
    /// Build a config from `TODO_HOST`, `PORT`, `TODO_DATABASE` and
    /// `TODO_CORS`, falling back to the defaults for unset variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let host = match lookup("TODO_HOST") {
            Some(value) => value
                .parse::<IpAddr>()
                .map_err(|_| ConfigError::Invalid { var: "TODO_HOST", value })?,
            None => defaults.addr.ip(),
        };
        let port = match lookup("PORT") {
            Some(value) => value
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid { var: "PORT", value })?,
            None => defaults.addr.port(),
        };
        let cors = match lookup("TODO_CORS") {
            Some(value) => parse_bool(&value).ok_or(ConfigError::Invalid {
                var: "TODO_CORS",
                value,
            })?,
            None => defaults.cors,
        };

        Ok(Self {
            addr: SocketAddr::new(host, port),
            database: lookup("TODO_DATABASE").unwrap_or(defaults.database),
            cors,
        })
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
