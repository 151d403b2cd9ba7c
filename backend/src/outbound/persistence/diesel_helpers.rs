//! Shared error mapping for Diesel repository implementations.
//!
//! Adapters classify pool and Diesel failures into a [`PersistenceFailure`]
//! and convert it into their port's error type with `?`. Every port error
//! in this crate distinguishes connection failures from query failures only.

use diesel::define_sql_function;
use diesel::sql_types::Text;
use tracing::debug;

use crate::domain::ports::{
    RecordRepositoryError, RelationQueryError, SampleDataSeedRepositoryError,
};

use super::pool::PoolError;

define_sql_function! {
    /// SQL `lower(text)`, used for case-insensitive name ordering.
    fn lower(x: Text) -> Text;
}

/// Whether a failure came from reaching the database or from running SQL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FailureKind {
    /// Checkout failed or the connection dropped.
    Connection,
    /// The statement failed or its rows did not convert.
    Query,
}

/// A classified persistence failure with its diagnostic message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PersistenceFailure {
    pub kind: FailureKind,
    pub message: String,
}

impl PersistenceFailure {
    pub(crate) fn query(message: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::Query,
            message: message.into(),
        }
    }
}

/// Classify a pool error. Every pool failure is a connection failure.
pub(crate) fn map_pool_error(error: PoolError) -> PersistenceFailure {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => PersistenceFailure {
            kind: FailureKind::Connection,
            message,
        },
    }
}

/// Classify a Diesel error and emit debug context.
pub(crate) fn map_diesel_error(error: diesel::result::Error) -> PersistenceFailure {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    let error_message = error.to_string();
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(
                ?kind,
                message = info.message(),
                error = %error_message,
                "diesel operation failed"
            );
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            error = %error_message,
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => PersistenceFailure::query("record not found"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, info) => {
            PersistenceFailure {
                kind: FailureKind::Connection,
                message: info.message().to_owned(),
            }
        }
        DieselError::DatabaseError(_, info) => PersistenceFailure::query(info.message()),
        _ => PersistenceFailure::query(error_message),
    }
}

macro_rules! impl_from_failure {
    ($($port_error:ty),* $(,)?) => {
        $(
            impl From<PersistenceFailure> for $port_error {
                fn from(failure: PersistenceFailure) -> Self {
                    match failure.kind {
                        FailureKind::Connection => Self::connection(failure.message),
                        FailureKind::Query => Self::query(failure.message),
                    }
                }
            }
        )*
    };
}

impl_from_failure!(
    RecordRepositoryError,
    RelationQueryError,
    SampleDataSeedRepositoryError,
);

#[cfg(test)]
mod tests {
    //! Regression coverage for persistence error classification.
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn pool_error_maps_to_connection_error() {
        let failure = map_pool_error(PoolError::checkout("connection refused"));
        let port_error = RecordRepositoryError::from(failure);

        assert!(matches!(port_error, RecordRepositoryError::Connection { .. }));
        assert!(
            port_error.to_string().contains("connection refused"),
            "preserve useful diagnostics"
        );
    }

    #[rstest]
    fn not_found_maps_to_query_error() {
        let failure = map_diesel_error(diesel::result::Error::NotFound);

        assert_eq!(failure.kind, FailureKind::Query);
        assert!(matches!(
            RelationQueryError::from(failure),
            RelationQueryError::Query { message } if message == "record not found"
        ));
    }

    #[rstest]
    fn rollback_maps_to_query_error() {
        let failure = map_diesel_error(diesel::result::Error::RollbackTransaction);

        assert!(matches!(
            SampleDataSeedRepositoryError::from(failure),
            SampleDataSeedRepositoryError::Query { .. }
        ));
    }
}
