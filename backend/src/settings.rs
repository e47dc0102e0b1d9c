//! Application settings loaded via OrthoConfig.
//!
//! Values come from `TRANSLATORS_*` environment variables, configuration
//! files and command-line flags, in the precedence OrthoConfig applies.

use std::net::SocketAddr;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::inbound::http::state::EmptyListPolicy;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_POOL_SIZE: u32 = 10;

/// Runtime settings for the translator backend.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "TRANSLATORS")]
pub struct AppSettings {
    /// Socket address the HTTP server binds to.
    pub bind_addr: Option<String>,
    /// PostgreSQL connection string; fixtures serve requests when absent.
    pub database_url: Option<String>,
    /// Maximum number of pooled database connections.
    pub pool_size: Option<u32>,
    /// Answer `400` rather than `200` when the translator list is empty.
    pub empty_list_is_error: Option<bool>,
}

impl AppSettings {
    /// Parse the configured bind address, falling back to `0.0.0.0:8080`.
    ///
    /// # Errors
    /// Returns [`std::net::AddrParseError`] when the configured value is not
    /// a socket address.
    pub fn bind_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        self.bind_addr
            .as_deref()
            .unwrap_or(DEFAULT_BIND_ADDR)
            .parse()
    }

    /// Database URL, ignoring blank values.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    pub fn pool_size(&self) -> u32 {
        self.pool_size.unwrap_or(DEFAULT_POOL_SIZE)
    }

    /// Empty list behaviour; `400` unless explicitly disabled.
    pub fn empty_list_policy(&self) -> EmptyListPolicy {
        EmptyListPolicy::from_flag(self.empty_list_is_error.unwrap_or(true))
    }
}
