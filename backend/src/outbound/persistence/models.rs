//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain.

use diesel::prelude::*;

use super::schema::details;

/// Row struct for reading from the details table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = details)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct DetailRow {
    pub id: i32,
    pub email: String,
    pub name: Option<String>,
}

/// Insertable struct for creating new detail records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = details)]
pub(crate) struct NewDetailRow<'a> {
    pub email: &'a str,
    pub name: Option<&'a str>,
}
