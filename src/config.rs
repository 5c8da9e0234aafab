//! Configuration management for the Contact App.
//!
//! Settings come from environment variables, with an optional `.env` file
//! loaded first.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

/// Database path that selects the in-memory store instead of SQLite.
pub const IN_MEMORY_DATABASE: &str = ":memory:";

/// Configuration for the Contact App.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address to bind (default: 127.0.0.1)
    pub host: IpAddr,

    /// Port to bind (default: 3000)
    pub port: u16,

    /// SQLite database path, or `:memory:` (default: "contacts.db")
    pub database: String,

    /// How long an unread flash message survives, in seconds (default: 6)
    pub flash_ttl_seconds: u64,

    /// Log level used when RUST_LOG is unset (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_APP_HOST`: bind address (default: 127.0.0.1)
    /// - `CONTACT_APP_PORT`: bind port (default: 3000)
    /// - `CONTACT_APP_DATABASE`: SQLite path or `:memory:` (default: contacts.db)
    /// - `FLASH_TTL_SECONDS`: flash message lifetime (default: 6)
    /// - `LOG_LEVEL`: logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        let _ = dotenvy::dotenv();

        let defaults = Self::default();

        let host = match env::var("CONTACT_APP_HOST") {
            Ok(val) => val.parse::<IpAddr>().map_err(|_| ConfigError::InvalidValue {
                var: "CONTACT_APP_HOST".to_string(),
                reason: format!("Must be an IP address, got: {}", val),
            })?,
            Err(_) => defaults.host,
        };

        let port = Self::parse_env_u16("CONTACT_APP_PORT", defaults.port)?;

        let database = env::var("CONTACT_APP_DATABASE").unwrap_or(defaults.database);
        if database.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "CONTACT_APP_DATABASE".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let flash_ttl_seconds = Self::parse_env_u64("FLASH_TTL_SECONDS", defaults.flash_ttl_seconds)?;
        if flash_ttl_seconds == 0 {
            return Err(ConfigError::InvalidValue {
                var: "FLASH_TTL_SECONDS".to_string(),
                reason: "Must be greater than zero".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Config {
            host,
            port,
            database,
            flash_ttl_seconds,
            log_level,
        })
    }

    /// Socket address the server binds to.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Flash message lifetime.
    pub fn flash_ttl(&self) -> Duration {
        Duration::from_secs(self.flash_ttl_seconds)
    }

    /// Whether the in-memory store was requested.
    pub fn uses_in_memory_store(&self) -> bool {
        self.database == IN_MEMORY_DATABASE
    }

    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    fn parse_env_u16(var_name: &str, default: u16) -> ConfigResult<u16> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a port number between 0-65535, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 3000,
            database: "contacts.db".to_string(),
            flash_ttl_seconds: 6,
            log_level: "info".to_string(),
        }
    }
}
