//! HTTP server configuration object and helpers.

use detail_relay::domain::ReplicationWorkerConfig;
use detail_relay::outbound::persistence::DbPool;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) host: String,
    pub(crate) port: u16,
    pub(crate) primary_pool: DbPool,
    pub(crate) replica_pool: DbPool,
    pub(crate) replication: ReplicationWorkerConfig,
}

impl ServerConfig {
    /// Construct a server configuration bound to `host:port` over both pools.
    #[must_use]
    pub fn new(
        host: impl Into<String>,
        port: u16,
        primary_pool: DbPool,
        replica_pool: DbPool,
    ) -> Self {
        Self {
            host: host.into(),
            port,
            primary_pool,
            replica_pool,
            replication: ReplicationWorkerConfig::default(),
        }
    }

    /// Override the replication worker settings.
    #[must_use]
    pub fn with_replication(mut self, replication: ReplicationWorkerConfig) -> Self {
        self.replication = replication;
        self
    }
}
