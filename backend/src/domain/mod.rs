//! Domain primitives, ports and services.
//!
//! Purpose: define the `Detail` entity, the transport-agnostic error type,
//! the ports through which stores and queues are reached, and the services
//! implementing the write-then-replicate flow. Nothing here knows about HTTP
//! or SQL.
//!
//! Public surface:
//! - `Detail`, `DetailDraft`, `DetailId`, `Email`, `DetailName`: the record
//!   and its validated fields.
//! - `Error` / `ErrorCode`: failure payload mapped by inbound adapters.
//! - `DetailCommandService` / `DetailQueryService`: write and read use-cases.
//! - `ReplicationWorker`: delayed copier from primary writes to the replica.

pub mod detail;
pub mod detail_service;
pub mod error;
pub mod ports;
pub mod replication_worker;
pub mod trace_id;

pub use self::detail::{
    DETAIL_NAME_MAX, Detail, DetailDraft, DetailId, DetailName, DetailValidationError, EMAIL_MAX,
    Email,
};
pub use self::detail_service::{DetailCommandService, DetailQueryService, replica_not_found};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::replication_worker::{
    DEFAULT_REPLICATION_DELAY, ReplicationOutcome, ReplicationRunSummary, ReplicationSleeper,
    ReplicationWorker, ReplicationWorkerConfig, ReplicationWorkerRuntime, TokioSleeper,
};
pub use self::trace_id::TraceId;

/// HTTP header name used to propagate trace identifiers.
pub const TRACE_ID_HEADER: &str = "trace-id";
