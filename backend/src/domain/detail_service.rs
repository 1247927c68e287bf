//! Detail domain services.
//!
//! The command service commits to the primary store and hands a
//! [`ReplicationJob`] to the queue. The query service reads the replica only.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::{debug, error, info, warn};

use crate::domain::ports::{
    DetailCommand, DetailQuery, DetailRepository, ReplicationJob, ReplicationQueue,
};
use crate::domain::{Detail, DetailDraft, DetailId, Error};

/// Detail service implementing the write driving port.
#[derive(Clone)]
pub struct DetailCommandService {
    primary: Arc<dyn DetailRepository>,
    queue: Arc<dyn ReplicationQueue>,
    clock: Arc<dyn Clock + Send + Sync>,
}

impl DetailCommandService {
    /// Create a command service over the primary store and replication queue.
    pub fn new(
        primary: Arc<dyn DetailRepository>,
        queue: Arc<dyn ReplicationQueue>,
        clock: Arc<dyn Clock + Send + Sync>,
    ) -> Self {
        Self {
            primary,
            queue,
            clock,
        }
    }
}

#[async_trait]
impl DetailCommand for DetailCommandService {
    async fn create_detail(&self, draft: DetailDraft) -> Result<Detail, Error> {
        let detail = self
            .primary
            .insert(&draft)
            .await
            .map_err(|err| {
                error!(error = %err, "primary write failed; replication not scheduled");
                Error::internal(format!("Error adding data: {err}"))
            })?;

        info!(id = %detail.id(), "detail committed to primary store");

        let job = ReplicationJob::new(draft, self.clock.utc());
        match self.queue.enqueue(job).await {
            Ok(()) => debug!(id = %detail.id(), "replication scheduled"),
            // The primary row is committed; losing the copy is acceptable.
            Err(err) => warn!(id = %detail.id(), error = %err, "replication job dropped"),
        }

        Ok(detail)
    }
}

/// Detail service implementing the read driving port.
#[derive(Clone)]
pub struct DetailQueryService {
    replica: Arc<dyn DetailRepository>,
}

impl DetailQueryService {
    /// Create a query service over the replica store.
    pub fn new(replica: Arc<dyn DetailRepository>) -> Self {
        Self { replica }
    }
}

#[async_trait]
impl DetailQuery for DetailQueryService {
    async fn get_detail(&self, id: DetailId) -> Result<Detail, Error> {
        self.replica
            .find_by_id(id)
            .await
            .map_err(|err| {
                error!(%id, error = %err, "replica read failed");
                Error::internal(format!("Error fetching data: {err}"))
            })?
            .ok_or_else(|| replica_not_found(id))
    }
}

/// Not-found error for an id absent from the replica.
///
/// Takes any displayable id so callers can report ids no row could carry.
pub fn replica_not_found(id: impl std::fmt::Display) -> Error {
    Error::not_found(format!("Record with id {id} not found in replica database"))
}

#[cfg(test)]
#[path = "detail_service_tests.rs"]
mod tests;
