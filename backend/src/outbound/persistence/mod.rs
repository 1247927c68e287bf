//! PostgreSQL persistence adapters built on Diesel.
//!
//! The primary and the replica are each reached through their own
//! [`DbPool`] wrapped in a [`DieselDetailRepository`].

mod diesel_basic_error_mapping;
mod diesel_detail_repository;
mod models;
mod pool;
mod schema;

pub use diesel_detail_repository::DieselDetailRepository;
pub use pool::{DbPool, PoolConfig, PoolError, StoreRole};
