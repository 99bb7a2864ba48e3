//! Application configuration loaded from environment variables.

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::num::ParseIntError;

use thiserror::Error;
use tracing::info;

use body_mass_data::database::{DatabaseError, StorageConfig};

/// Port used when `PORT` is not set
pub const DEFAULT_PORT: u16 = 3000;

/// Address used when `HOST` is not set
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

/// Configuration errors reported at startup
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("PORT must be a number between 0 and 65535, got {value:?}")]
    InvalidPort {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("HOST must be an IP address, got {0:?}")]
    InvalidHost(String),

    #[error("Storage configuration error: {0}")]
    Storage(#[from] DatabaseError),
}

/// Everything the server needs to start
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Listen address
    pub host: IpAddr,
    /// Listen port
    pub port: u16,
    /// SQLite file and record timezone
    pub storage: StorageConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST,
            port: DEFAULT_PORT,
            storage: StorageConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load from `HOST`, `PORT`, `DB_SQLITE_PATH` and `APP_TIMEZONE`
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env::var("HOST").ok();
        let port = env::var("PORT").ok();
        let (host, port) = parse_listen_address(host.as_deref(), port.as_deref())?;
        let storage = StorageConfig::from_env()?;

        info!("Server configuration: host={}, port={}", host, port);

        Ok(Self { host, port, storage })
    }

    /// Socket address to bind
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Parse optional `HOST` and `PORT` values, falling back to the defaults
pub fn parse_listen_address(host: Option<&str>, port: Option<&str>) -> Result<(IpAddr, u16), ConfigError> {
    let host = match host.map(str::trim) {
        Some(raw) if !raw.is_empty() => raw
            .parse::<IpAddr>()
            .map_err(|_| ConfigError::InvalidHost(raw.to_string()))?,
        _ => DEFAULT_HOST,
    };

    let port = match port.map(str::trim) {
        Some(raw) if !raw.is_empty() => raw.parse::<u16>().map_err(|source| ConfigError::InvalidPort {
            value: raw.to_string(),
            source,
        })?,
        _ => DEFAULT_PORT,
    };

    Ok((host, port))
}
