//! Runtime dependency bundle for the replication worker.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use mockable::{Clock, DefaultClock};

use super::ReplicationSleeper;

/// Time sources used by the worker.
pub struct ReplicationWorkerRuntime {
    /// Async sleep implementation.
    pub sleeper: Arc<dyn ReplicationSleeper>,
    /// Wall clock used to measure elapsed time since submission.
    pub clock: Arc<dyn Clock + Send + Sync>,
}

impl Default for ReplicationWorkerRuntime {
    fn default() -> Self {
        Self {
            sleeper: Arc::new(TokioSleeper),
            clock: Arc::new(DefaultClock),
        }
    }
}

/// Tokio-based sleeper implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

#[async_trait]
impl ReplicationSleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
