//! Detail relay library: a primary-write, delayed-replica-read HTTP service.
//!
//! - [`domain`]: entities, ports, services and the replication worker.
//! - [`inbound`]: Actix HTTP handlers.
//! - [`outbound`]: Diesel repositories and the replication queue.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
