//! Driven port for detail persistence.
//!
//! The primary and the replica are two instances of this port backed by
//! separate connection pools. Neither knows about the other.

use async_trait::async_trait;

use crate::domain::{Detail, DetailDraft, DetailId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by detail repository adapters.
    pub enum DetailPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "detail store connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "detail store query failed: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DetailRepository: Send + Sync {
    /// Insert a draft and return the row with its store-assigned identifier.
    async fn insert(&self, draft: &DetailDraft) -> Result<Detail, DetailPersistenceError>;

    /// Fetch a row by identifier.
    async fn find_by_id(&self, id: DetailId) -> Result<Option<Detail>, DetailPersistenceError>;
}
