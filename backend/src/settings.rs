//! Runtime settings loaded via OrthoConfig.
//!
//! Values are layered from CLI flags, prefixed environment variables and
//! defaults. The HTTP service also honours the unprefixed `PORT` and
//! `DATABASE_URL` variables that hosting platforms commonly inject.

use std::env;
use std::net::SocketAddr;

use ortho_config::OrthoConfig;
use serde::Deserialize;

/// Default bind host for both services.
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 5000;
/// Default echo server port.
pub const DEFAULT_ECHO_PORT: u16 = 8080;
/// Default pool size.
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;

/// Error raised when a host and port do not form a socket address.
#[derive(Debug, thiserror::Error)]
#[error("invalid bind address {host}:{port}: {source}")]
pub struct BindAddrError {
    host: String,
    port: u16,
    #[source]
    source: std::net::AddrParseError,
}

fn socket_addr(host: &str, port: u16) -> Result<SocketAddr, BindAddrError> {
    format!("{host}:{port}")
        .parse()
        .map_err(|source| BindAddrError {
            host: host.to_owned(),
            port,
            source,
        })
}

fn fallback_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

/// Database URL for one-off tools: `MARKETPLACE_DATABASE_URL`, then `DATABASE_URL`.
pub fn database_url_from_env() -> Option<String> {
    fallback_env("MARKETPLACE_DATABASE_URL").or_else(|| fallback_env("DATABASE_URL"))
}

/// Settings for the HTTP API server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "MARKETPLACE")]
pub struct AppSettings {
    /// Interface to bind.
    pub host: Option<String>,
    /// Port to bind; falls back to `PORT`.
    pub port: Option<u16>,
    /// PostgreSQL connection URL; falls back to `DATABASE_URL`.
    pub database_url: Option<String>,
    /// Maximum pooled connections.
    #[ortho_config(default = 10)]
    pub db_max_connections: u32,
}

impl AppSettings {
    /// Configured host or [`DEFAULT_HOST`].
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Configured port, then `PORT`, then [`DEFAULT_PORT`].
    ///
    /// An unparsable `PORT` is ignored.
    pub fn port(&self) -> u16 {
        self.port
            .or_else(|| fallback_env("PORT").and_then(|value| value.trim().parse().ok()))
            .unwrap_or(DEFAULT_PORT)
    }

    /// Configured database URL, then `DATABASE_URL`.
    pub fn database_url(&self) -> Option<String> {
        self.database_url
            .clone()
            .filter(|value| !value.trim().is_empty())
            .or_else(|| fallback_env("DATABASE_URL"))
    }

    /// Configured pool size, [`DEFAULT_DB_MAX_CONNECTIONS`] unless overridden.
    pub fn db_max_connections(&self) -> u32 {
        self.db_max_connections
    }

    /// Socket address built from [`Self::host`] and [`Self::port`].
    ///
    /// # Errors
    ///
    /// Returns [`BindAddrError`] when the host is not an IP address.
    pub fn bind_addr(&self) -> Result<SocketAddr, BindAddrError> {
        socket_addr(self.host(), self.port())
    }
}

/// Settings for the standalone echo WebSocket server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "ECHO")]
pub struct EchoSettings {
    /// Interface to bind.
    pub host: Option<String>,
    /// Port to bind.
    #[ortho_config(default = 8080)]
    pub port: u16,
}

impl EchoSettings {
    /// Socket address for the echo server, `0.0.0.0:8080` by default.
    ///
    /// # Errors
    ///
    /// Returns [`BindAddrError`] when the host is not an IP address.
    pub fn bind_addr(&self) -> Result<SocketAddr, BindAddrError> {
        socket_addr(self.host.as_deref().unwrap_or(DEFAULT_HOST), self.port)
    }
}
