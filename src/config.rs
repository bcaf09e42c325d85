//! Server configuration parsed from environment variables.
//!
//! Leptos build options (`site_root`, `output_name`, ...) are read separately
//! by `leptos::config::get_configuration`; this covers what the binary adds.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_ADDR: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("invalid BIND_ADDR: {0}")]
    InvalidBindAddr(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    /// Override for the public asset directory.
    pub public_dir: Option<PathBuf>,
}

impl ServerConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BIND_ADDR`: default `0.0.0.0`
    /// - `PUBLIC_DIR`: default is the Leptos site root
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when `PORT` or `BIND_ADDR` does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        let host = match lookup("BIND_ADDR") {
            Some(raw) => raw.trim().parse::<IpAddr>().map_err(|_| ConfigError::InvalidBindAddr(raw))?,
            None => DEFAULT_BIND_ADDR,
        };
        let public_dir = lookup("PUBLIC_DIR")
            .filter(|raw| !raw.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self { addr: SocketAddr::new(host, port), public_dir })
    }

    /// Public asset directory, falling back to `site_root`.
    #[must_use]
    pub fn public_dir_or(&self, site_root: &Path) -> PathBuf {
        self.public_dir.clone().unwrap_or_else(|| site_root.to_path_buf())
    }
}
