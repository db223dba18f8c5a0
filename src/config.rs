//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid PORT {value:?}: {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("invalid HOST {value:?}: {source}")]
    InvalidHost {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
    #[error("leptos configuration: {0}")]
    Leptos(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `HOST`: bind address, default `0.0.0.0`
    /// - `PORT`: default 3000
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(std::env::var("HOST").ok().as_deref(), std::env::var("PORT").ok().as_deref())
    }

    fn from_values(host: Option<&str>, port: Option<&str>) -> Result<Self, ConfigError> {
        let ip = match host.map(str::trim).filter(|h| !h.is_empty()) {
            Some(raw) => raw
                .parse::<IpAddr>()
                .map_err(|source| ConfigError::InvalidHost { value: raw.to_owned(), source })?,
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };
        let port = match port.map(str::trim).filter(|p| !p.is_empty()) {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|source| ConfigError::InvalidPort { value: raw.to_owned(), source })?,
            None => DEFAULT_PORT,
        };
        Ok(Self { addr: SocketAddr::new(ip, port) })
    }
}
