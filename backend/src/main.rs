//! Service entry-point: loads settings, connects both stores, spawns the
//! replication worker and serves the REST endpoints.

mod server;

use std::io;
use std::time::Duration;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use detail_relay::domain::ReplicationWorkerConfig;
use detail_relay::inbound::http::health::HealthState;
use detail_relay::outbound::persistence::{DbPool, PoolConfig, StoreRole};
use detail_relay::settings::RelaySettings;
use server::{RelayServer, ServerConfig, create_server};

/// Extra time granted to in-flight replication jobs after the server stops.
const DRAIN_GRACE: Duration = Duration::from_secs(5);

async fn connect(role: StoreRole, url: &str, max_size: u32) -> io::Result<DbPool> {
    DbPool::new(PoolConfig::new(role, url).with_max_size(max_size))
        .await
        .map_err(|err| io::Error::other(format!("create {role} database pool: {err}")))
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = RelaySettings::load_from_iter(std::env::args_os())
        .map_err(|err| io::Error::other(format!("load settings: {err}")))?;

    let primary = connect(
        StoreRole::Primary,
        settings.primary_database_url(),
        settings.pool_max_size(),
    )
    .await?;
    let replica = connect(
        StoreRole::Replica,
        settings.replica_database_url(),
        settings.pool_max_size(),
    )
    .await?;

    let delay = settings.replication_delay();
    let config = ServerConfig::new(settings.host(), settings.port(), primary, replica)
        .with_replication(ReplicationWorkerConfig { delay });

    let health_state = web::Data::new(HealthState::new());
    let RelayServer { server, worker } = create_server(health_state.clone(), config)?;

    let served = server.await;
    health_state.mark_unhealthy();

    // Every queue handle lives in the app factory, so the worker drains once
    // the server has shut down.
    match tokio::time::timeout(delay + DRAIN_GRACE, worker).await {
        Ok(Ok(summary)) => info!(
            replicated = summary.replicated,
            failed = summary.failed,
            "replication drained"
        ),
        Ok(Err(err)) => error!(error = %err, "replication worker panicked"),
        Err(_) => warn!("replication worker did not drain in time; pending copies dropped"),
    }

    served
}
