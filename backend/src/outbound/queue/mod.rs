//! In-process replication queue adapter.
//!
//! Jobs travel over an unbounded Tokio channel to the
//! [`ReplicationWorker`](crate::domain::ReplicationWorker) spawned at startup.
//! Nothing is persisted: jobs still pending when the process exits are lost.

use async_trait::async_trait;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::debug;

use crate::domain::ports::{JobDispatchError, ReplicationJob, ReplicationQueue};

/// Channel-backed implementation of the `ReplicationQueue` port.
///
/// Cloning shares the sender. The worker observes the channel closing once
/// every clone has been dropped.
#[derive(Debug, Clone)]
pub struct ChannelReplicationQueue {
    sender: UnboundedSender<ReplicationJob>,
}

impl ChannelReplicationQueue {
    /// Create a queue and the receiver the worker drains.
    pub fn channel() -> (Self, UnboundedReceiver<ReplicationJob>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

#[async_trait]
impl ReplicationQueue for ChannelReplicationQueue {
    async fn enqueue(&self, job: ReplicationJob) -> Result<(), JobDispatchError> {
        self.sender
            .send(job)
            .map_err(|_| JobDispatchError::unavailable("replication worker has stopped"))?;
        debug!("replication job queued");
        Ok(())
    }
}
