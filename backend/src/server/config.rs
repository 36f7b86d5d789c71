//! HTTP server configuration object and helpers.

use std::net::SocketAddr;

use support_tickets::outbound::persistence::DbPool;

#[cfg(feature = "metrics")]
use actix_web_prom::PrometheusMetrics;

/// Storage behind the ticket ports.
#[derive(Clone)]
pub enum TicketStorage {
    /// PostgreSQL-backed sequence and repository.
    Database(DbPool),
    /// Process-local adapters; numbering restarts with the process.
    InMemory,
}

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) storage: TicketStorage,
    #[cfg(feature = "metrics")]
    pub(crate) prometheus: Option<PrometheusMetrics>,
}

impl ServerConfig {
    #[must_use]
    pub fn new(bind_addr: SocketAddr, storage: TicketStorage) -> Self {
        Self {
            bind_addr,
            storage,
            #[cfg(feature = "metrics")]
            prometheus: None,
        }
    }

    #[cfg(feature = "metrics")]
    /// Attach Prometheus middleware to the configuration.
    #[must_use]
    pub fn with_metrics(mut self, prometheus: Option<PrometheusMetrics>) -> Self {
        self.prometheus = prometheus;
        self
    }
}
