//! Background worker copying primary writes into the replica after a delay.
//!
//! Jobs arrive on a channel fed by the
//! [`ReplicationQueue`](crate::domain::ports::ReplicationQueue) adapter. Each
//! job runs on its own task so one job's delay never holds back another. A
//! job waits until `submitted_at + delay`, inserts its draft into the replica
//! and logs the result. Failures are swallowed: there is no retry and no
//! dead-letter store.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use mockable::Clock;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::task::{JoinError, JoinSet};
use tracing::{error, info};

use crate::domain::ports::{DetailRepository, ReplicationJob};
use crate::domain::{DetailId, TraceId};

mod runtime;

pub use runtime::{ReplicationWorkerRuntime, TokioSleeper};

/// Delay applied when none is configured.
pub const DEFAULT_REPLICATION_DELAY: Duration = Duration::from_secs(5);

/// Worker configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplicationWorkerConfig {
    /// Time between a primary commit and its replica copy.
    pub delay: Duration,
}

impl Default for ReplicationWorkerConfig {
    fn default() -> Self {
        Self {
            delay: DEFAULT_REPLICATION_DELAY,
        }
    }
}

/// Async sleeping abstraction so tests can skip or gate wall-clock waits.
#[async_trait]
pub trait ReplicationSleeper: Send + Sync {
    /// Suspend execution for `duration`.
    async fn sleep(&self, duration: Duration);
}

/// Result of one replication attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplicationOutcome {
    /// The replica accepted the copy under a replica-assigned identifier.
    Replicated { replica_id: DetailId },
    /// The replica write failed and the job was discarded.
    Failed { message: String },
}

/// Totals reported when the worker stops.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplicationRunSummary {
    /// Jobs copied into the replica.
    pub replicated: usize,
    /// Jobs discarded after a failed replica write or a panicked task.
    pub failed: usize,
}

impl ReplicationRunSummary {
    fn record(&mut self, joined: Result<ReplicationOutcome, JoinError>) {
        match joined {
            Ok(ReplicationOutcome::Replicated { .. }) => self.replicated += 1,
            Ok(ReplicationOutcome::Failed { .. }) => self.failed += 1,
            Err(err) => {
                error!(error = %err, "replication task aborted");
                self.failed += 1;
            }
        }
    }
}

/// Domain-owned replication worker.
pub struct ReplicationWorker {
    replica: Arc<dyn DetailRepository>,
    sleeper: Arc<dyn ReplicationSleeper>,
    clock: Arc<dyn Clock + Send + Sync>,
    config: ReplicationWorkerConfig,
}

impl ReplicationWorker {
    /// Build a worker writing into `replica`.
    pub fn new(
        replica: Arc<dyn DetailRepository>,
        runtime: ReplicationWorkerRuntime,
        config: ReplicationWorkerConfig,
    ) -> Self {
        Self {
            replica,
            sleeper: runtime.sleeper,
            clock: runtime.clock,
            config,
        }
    }

    /// Configured delay.
    pub fn delay(&self) -> Duration {
        self.config.delay
    }

    /// Remaining wait before `job` is due, measured from its submission.
    ///
    /// Saturates at zero when the job is already overdue. A submission time in
    /// the future (clock skew) waits the full delay.
    pub fn due_in(&self, job: &ReplicationJob) -> Duration {
        let elapsed = self.clock.utc() - job.submitted_at();
        match elapsed.to_std() {
            Ok(elapsed) => self.config.delay.saturating_sub(elapsed),
            Err(_) => self.config.delay,
        }
    }

    /// Wait for `job` to fall due, then copy it into the replica.
    pub async fn process(&self, job: ReplicationJob) -> ReplicationOutcome {
        TraceId::scope_optional(job.trace_id(), async {
            self.sleeper.sleep(self.due_in(&job)).await;

            match self.replica.insert(job.draft()).await {
                Ok(copy) => {
                    info!(
                        replica_id = %copy.id(),
                        email = %copy.email(),
                        "detail synced to replica"
                    );
                    ReplicationOutcome::Replicated {
                        replica_id: copy.id(),
                    }
                }
                Err(err) => {
                    error!(error = %err, "error syncing detail to replica");
                    ReplicationOutcome::Failed {
                        message: err.to_string(),
                    }
                }
            }
        })
        .await
    }

    /// Consume jobs until every queue handle is dropped, then drain the jobs
    /// still waiting out their delay.
    pub async fn run(
        self: Arc<Self>,
        mut jobs: UnboundedReceiver<ReplicationJob>,
    ) -> ReplicationRunSummary {
        let mut in_flight = JoinSet::new();
        let mut summary = ReplicationRunSummary::default();

        info!(delay_ms = self.config.delay.as_millis(), "replication worker started");
        loop {
            tokio::select! {
                received = jobs.recv() => match received {
                    Some(job) => {
                        let worker = Arc::clone(&self);
                        in_flight.spawn(async move { worker.process(job).await });
                    }
                    None => break,
                },
                Some(joined) = in_flight.join_next(), if !in_flight.is_empty() => {
                    summary.record(joined);
                }
            }
        }

        info!(pending = in_flight.len(), "replication queue closed; draining");
        while let Some(joined) = in_flight.join_next().await {
            summary.record(joined);
        }

        info!(
            replicated = summary.replicated,
            failed = summary.failed,
            "replication worker stopped"
        );
        summary
    }
}
