//! Driven port for handing replication jobs to a background worker.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{DetailDraft, TraceId};

use super::define_port_error;

define_port_error! {
    /// Errors surfaced by the replication queue adapter.
    pub enum JobDispatchError {
        /// No worker is accepting jobs.
        Unavailable { message: String } => "replication queue is unavailable: {message}",
    }
}

/// A deferred copy of a primary write into the replica.
///
/// `submitted_at` anchors the replication delay; the worker waits until
/// `submitted_at + delay` rather than `delay` from when it dequeues the job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplicationJob {
    draft: DetailDraft,
    submitted_at: DateTime<Utc>,
    trace_id: Option<TraceId>,
}

impl ReplicationJob {
    /// Build a job, capturing the trace identifier in scope.
    #[must_use]
    pub fn new(draft: DetailDraft, submitted_at: DateTime<Utc>) -> Self {
        Self {
            draft,
            submitted_at,
            trace_id: TraceId::current(),
        }
    }

    /// Payload to insert into the replica.
    pub fn draft(&self) -> &DetailDraft {
        &self.draft
    }

    /// When the primary write committed.
    pub fn submitted_at(&self) -> DateTime<Utc> {
        self.submitted_at
    }

    /// Trace identifier of the request that produced the job.
    pub fn trace_id(&self) -> Option<TraceId> {
        self.trace_id
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReplicationQueue: Send + Sync {
    /// Enqueue a job for delayed replication.
    ///
    /// Acceptance says nothing about the eventual replica write; callers never
    /// observe that outcome.
    async fn enqueue(&self, job: ReplicationJob) -> Result<(), JobDispatchError>;
}
