//! Builders wiring store adapters into domain services and HTTP state.

use std::sync::Arc;

use actix_web::web;
use mockable::DefaultClock;
use tokio::sync::mpsc::UnboundedReceiver;

use detail_relay::domain::ports::ReplicationJob;
use detail_relay::domain::{
    DetailCommandService, DetailQueryService, ReplicationWorker, ReplicationWorkerConfig,
    ReplicationWorkerRuntime,
};
use detail_relay::inbound::http::state::HttpState;
use detail_relay::outbound::persistence::{DbPool, DieselDetailRepository};
use detail_relay::outbound::queue::ChannelReplicationQueue;

/// Build HTTP state: writes go to the primary and enqueue onto `queue`;
/// reads go to the replica.
pub(crate) fn build_http_state(
    primary_pool: &DbPool,
    replica_pool: &DbPool,
    queue: ChannelReplicationQueue,
) -> web::Data<HttpState> {
    let primary = Arc::new(DieselDetailRepository::new(primary_pool.clone()));
    let replica = Arc::new(DieselDetailRepository::new(replica_pool.clone()));

    let command = DetailCommandService::new(primary, Arc::new(queue), Arc::new(DefaultClock));
    let query = DetailQueryService::new(replica);

    web::Data::new(HttpState::new(Arc::new(command), Arc::new(query)))
}

/// Build the replication worker over the replica pool.
pub(crate) fn build_replication_worker(
    replica_pool: &DbPool,
    config: ReplicationWorkerConfig,
) -> Arc<ReplicationWorker> {
    let replica = Arc::new(DieselDetailRepository::new(replica_pool.clone()));
    Arc::new(ReplicationWorker::new(
        replica,
        ReplicationWorkerRuntime::default(),
        config,
    ))
}

/// Receiver end handed to the worker task.
pub(crate) type JobReceiver = UnboundedReceiver<ReplicationJob>;
