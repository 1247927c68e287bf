//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: PostgreSQL-backed detail repositories using Diesel ORM.
//!   The primary and the replica are two instances over two pools.
//! - **queue**: channel-backed replication queue feeding the worker.
//!
//! Adapters are thin translators between domain types and
//! infrastructure-specific representations. They contain no business logic.

pub mod persistence;
pub mod queue;
