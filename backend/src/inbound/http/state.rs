//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{DetailCommand, DetailQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Writes to the primary store and schedules replication.
    pub details: Arc<dyn DetailCommand>,
    /// Reads from the replica store.
    pub details_query: Arc<dyn DetailQuery>,
}

impl HttpState {
    /// Construct state from the detail driving ports.
    ///
    /// # Examples
    /// ```no_run
    /// use std::sync::Arc;
    ///
    /// use detail_relay::domain::ports::{DetailCommand, DetailQuery};
    /// use detail_relay::inbound::http::state::HttpState;
    ///
    /// fn build(command: Arc<dyn DetailCommand>, query: Arc<dyn DetailQuery>) -> HttpState {
    ///     HttpState::new(command, query)
    /// }
    /// ```
    pub fn new(details: Arc<dyn DetailCommand>, details_query: Arc<dyn DetailQuery>) -> Self {
        Self {
            details,
            details_query,
        }
    }
}
