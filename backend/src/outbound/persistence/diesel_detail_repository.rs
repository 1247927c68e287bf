//! PostgreSQL-backed `DetailRepository` implementation using Diesel ORM.
//!
//! One instance serves each store. Rows are converted back into domain types
//! through the validated constructors, so a row that violates the column
//! bounds surfaces as a query error rather than a panic.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{DetailPersistenceError, DetailRepository};
use crate::domain::{Detail, DetailDraft, DetailId, DetailName, Email};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{DetailRow, NewDetailRow};
use super::pool::{DbPool, PoolError};
use super::schema::details;

/// Diesel-backed implementation of the detail repository port.
#[derive(Clone)]
pub struct DieselDetailRepository {
    pool: DbPool,
}

impl DieselDetailRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> DetailPersistenceError {
    map_basic_pool_error(error, DetailPersistenceError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> DetailPersistenceError {
    map_basic_diesel_error(
        error,
        DetailPersistenceError::query,
        DetailPersistenceError::connection,
    )
}

fn row_to_detail(row: DetailRow) -> Result<Detail, DetailPersistenceError> {
    let DetailRow { id, email, name } = row;
    let email = Email::new(email)
        .map_err(|err| DetailPersistenceError::query(format!("row {id}: {err}")))?;
    let name = name
        .map(DetailName::new)
        .transpose()
        .map_err(|err| DetailPersistenceError::query(format!("row {id}: {err}")))?;
    Ok(DetailDraft::new(email, name).into_detail(DetailId::new(id)))
}

#[async_trait]
impl DetailRepository for DieselDetailRepository {
    async fn insert(&self, draft: &DetailDraft) -> Result<Detail, DetailPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewDetailRow {
            email: draft.email().as_ref(),
            name: draft.name().map(AsRef::as_ref),
        };

        let row: DetailRow = diesel::insert_into(details::table)
            .values(&new_row)
            .returning(DetailRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        debug!(store = %self.pool.role(), id = row.id, "detail row inserted");
        row_to_detail(row)
    }

    async fn find_by_id(&self, id: DetailId) -> Result<Option<Detail>, DetailPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<DetailRow> = details::table
            .find(id.get())
            .select(DetailRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_detail).transpose()
    }
}

#[cfg(test)]
mod tests {
    //! Row conversion coverage; query behaviour is exercised against an
    //! embedded cluster in `tests/diesel_detail_repository.rs`.

    use super::*;
    use crate::domain::EMAIL_MAX;
    use rstest::rstest;

    #[rstest]
    fn row_to_detail_preserves_fields() {
        let detail = row_to_detail(DetailRow {
            id: 4,
            email: "a@x.com".to_owned(),
            name: Some("Ann".to_owned()),
        })
        .expect("valid row");

        assert_eq!(detail.id(), DetailId::new(4));
        assert_eq!(detail.email().as_ref(), "a@x.com");
        assert_eq!(detail.name().map(AsRef::as_ref), Some("Ann"));
    }

    #[rstest]
    #[case(String::new())]
    #[case("e".repeat(EMAIL_MAX + 1))]
    fn row_to_detail_rejects_invalid_email(#[case] email: String) {
        let err = row_to_detail(DetailRow {
            id: 8,
            email,
            name: None,
        })
        .expect_err("invalid row");

        assert!(matches!(err, DetailPersistenceError::Query { .. }));
        assert!(err.to_string().contains("row 8"));
    }

    #[rstest]
    fn pool_checkout_failure_maps_to_connection() {
        let err = map_pool_error(PoolError::checkout("replica store: timed out"));
        assert_eq!(
            err,
            DetailPersistenceError::connection("replica store: timed out")
        );
    }
}
