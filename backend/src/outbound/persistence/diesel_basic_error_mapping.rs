//! Shared Diesel error mapping for repositories with basic query semantics.

use tracing::debug;

use super::pool::PoolError;

/// Map pool errors into a repository-specific connection error constructor.
pub fn map_basic_pool_error<E, C>(error: PoolError, connection: C) -> E
where
    C: FnOnce(String) -> E,
{
    let message = match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    };
    connection(message)
}

/// Map Diesel errors into query/connection constructors.
///
/// Database-reported messages are kept, since callers surface them to the
/// client on the write path.
pub fn map_basic_diesel_error<E, Q, C>(error: diesel::result::Error, query: Q, connection: C) -> E
where
    Q: Fn(String) -> E,
    C: Fn(String) -> E,
{
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match error {
        DieselError::NotFound => query("record not found".to_owned()),
        DieselError::QueryBuilderError(err) => query(format!("database query error: {err}")),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, info) => {
            debug!(message = info.message(), "database connection closed");
            connection(format!("database connection error: {}", info.message()))
        }
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
            query(format!("database error: {}", info.message()))
        }
        other => {
            debug!(error = %other, "diesel operation failed");
            query(format!("database error: {other}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Debug, PartialEq, Eq)]
    enum Mapped {
        Query(String),
        Connection(String),
    }

    fn map(error: diesel::result::Error) -> Mapped {
        map_basic_diesel_error(error, Mapped::Query, Mapped::Connection)
    }

    #[rstest]
    fn not_found_maps_to_query() {
        assert_eq!(
            map(diesel::result::Error::NotFound),
            Mapped::Query("record not found".to_owned())
        );
    }

    #[rstest]
    fn closed_connection_maps_to_connection() {
        use diesel::result::{DatabaseErrorKind, Error as DieselError};

        let error = DieselError::DatabaseError(
            DatabaseErrorKind::ClosedConnection,
            Box::new("server closed the connection".to_owned()),
        );
        assert_eq!(
            map(error),
            Mapped::Connection("database connection error: server closed the connection".to_owned())
        );
    }

    #[rstest]
    fn pool_errors_keep_their_message() {
        let mapped = map_basic_pool_error(PoolError::checkout("timed out"), Mapped::Connection);
        assert_eq!(mapped, Mapped::Connection("timed out".to_owned()));
    }
}
