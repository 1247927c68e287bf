//! Test utilities for the crate.
//!
//! Shared by unit tests (in `src/`) and integration tests (in `tests/`, via
//! the `test-support` feature). Nothing here talks to a real database or
//! waits on the wall clock unless asked to.

mod detail_store;
mod time;

pub use detail_store::InMemoryDetailRepository;
pub use time::{GatedSleeper, MutableClock, RecordingSleeper};
