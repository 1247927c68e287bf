//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (`DetailRepository`, `ReplicationQueue`) describe what the
//! domain needs from stores and queues. Driving ports (`DetailCommand`,
//! `DetailQuery`) are what inbound adapters call.

mod macros;
pub(crate) use macros::define_port_error;

mod detail_command;
mod detail_query;
mod detail_repository;
mod replication_queue;

pub use detail_command::DetailCommand;
#[cfg(test)]
pub use detail_command::MockDetailCommand;
pub use detail_query::DetailQuery;
#[cfg(test)]
pub use detail_query::MockDetailQuery;
#[cfg(test)]
pub use detail_repository::MockDetailRepository;
pub use detail_repository::{DetailPersistenceError, DetailRepository};
#[cfg(test)]
pub use replication_queue::MockReplicationQueue;
pub use replication_queue::{JobDispatchError, ReplicationJob, ReplicationQueue};
