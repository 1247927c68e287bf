//! Driving port for the write path.

use async_trait::async_trait;

use crate::domain::{Detail, DetailDraft, Error};

/// Domain use-case port for creating details.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DetailCommand: Send + Sync {
    /// Persist `draft` in the primary store and schedule its replication.
    async fn create_detail(&self, draft: DetailDraft) -> Result<Detail, Error>;
}
