//! HTTP server configuration object and helpers.

use std::net::SocketAddr;

use translator_backend::inbound::http::session_config::SessionSettings;
use translator_backend::inbound::http::state::EmptyListPolicy;
use translator_backend::outbound::persistence::DbPool;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) session: SessionSettings,
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: Option<DbPool>,
    pub(crate) empty_list: EmptyListPolicy,
}

impl ServerConfig {
    /// Construct a server configuration from session settings and a bind
    /// address; persistence defaults to fixtures.
    #[must_use]
    pub fn new(session: SessionSettings, bind_addr: SocketAddr) -> Self {
        Self {
            session,
            bind_addr,
            db_pool: None,
            empty_list: EmptyListPolicy::default(),
        }
    }

    /// Attach a database connection pool for the Diesel repositories.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    #[must_use]
    pub fn with_empty_list_policy(mut self, policy: EmptyListPolicy) -> Self {
        self.empty_list = policy;
        self
    }
}
