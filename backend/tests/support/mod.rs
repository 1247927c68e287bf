//! Shared helper utilities for integration tests.
//!
//! Integration tests compile as separate crates, so helpers shared between
//! suites live here.

pub mod cluster_skip;
pub mod pg_embed;

pub use cluster_skip::handle_cluster_setup_failure;

use pg_embedded_setup_unpriv::TestCluster;
use postgres::{Client, NoTls};

/// DDL applied to every store; schema management is an operator concern, so
/// tests create the table themselves.
pub const DETAILS_DDL: &str = "CREATE TABLE details (
    id    SERIAL PRIMARY KEY,
    email VARCHAR(255) NOT NULL,
    name  VARCHAR(100)
);";

/// Render a `postgres` error with enough detail to be useful in CI logs.
///
/// The `postgres::Error` `Display` implementation often collapses database
/// errors to a generic `db error`; prefer the database message and SQLSTATE.
pub fn format_postgres_error(error: &postgres::Error) -> String {
    let Some(db_error) = error.as_db_error() else {
        return error.to_string();
    };

    let mut summary = format!(
        "postgres error {:?}: {}",
        db_error.code(),
        db_error.message()
    );
    if let Some(detail) = db_error.detail() {
        summary.push_str("; detail: ");
        summary.push_str(detail);
    }
    summary
}

/// Create database `name` on `cluster` with the details table and return its
/// connection URL.
pub fn provision_details_database(cluster: &TestCluster, name: &str) -> Result<String, String> {
    let connection = cluster.connection();
    let mut admin = Client::connect(&connection.database_url("postgres"), NoTls)
        .map_err(|err| format_postgres_error(&err))?;
    admin
        .batch_execute(&format!("CREATE DATABASE \"{name}\";"))
        .map_err(|err| format_postgres_error(&err))?;

    let url = connection.database_url(name);
    let mut client = Client::connect(&url, NoTls).map_err(|err| format_postgres_error(&err))?;
    client
        .batch_execute(DETAILS_DDL)
        .map_err(|err| format_postgres_error(&err))?;
    Ok(url)
}
