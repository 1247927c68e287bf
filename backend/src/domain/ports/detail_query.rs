//! Driving port for the read path.
//!
//! Reads are served from the replica only, so a fresh write may be missing
//! until the replication delay has elapsed.

use async_trait::async_trait;

use crate::domain::{Detail, DetailId, Error};

/// Domain use-case port for reading details.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DetailQuery: Send + Sync {
    /// Fetch a replicated detail by identifier.
    async fn get_detail(&self, id: DetailId) -> Result<Detail, Error>;
}
