//! Embedded schema migrations.
//!
//! Migrations under `backend/migrations` are compiled into the binary. They
//! run over a synchronous `PgConnection` because `diesel_migrations` drives
//! a blocking connection; async callers should use `spawn_blocking`.

use diesel::Connection;
use diesel::migration::Migration;
use diesel::pg::PgConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

/// Migrations from the `backend/migrations` directory.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Errors raised while inspecting or applying migrations.
#[derive(Debug, thiserror::Error)]
pub enum MigrationError {
    /// The database could not be reached.
    #[error("failed to connect for migrations: {message}")]
    Connection { message: String },
    /// A migration failed to run.
    #[error("migration failed: {message}")]
    Apply { message: String },
}

fn connect(database_url: &str) -> Result<PgConnection, MigrationError> {
    PgConnection::establish(database_url).map_err(|err| MigrationError::Connection {
        message: err.to_string(),
    })
}

/// Names of migrations not yet applied, in application order.
///
/// # Errors
///
/// Returns [`MigrationError`] if the database is unreachable or the
/// migration table cannot be read.
pub fn pending_migrations(database_url: &str) -> Result<Vec<String>, MigrationError> {
    let mut conn = connect(database_url)?;
    let pending = conn
        .pending_migrations(MIGRATIONS)
        .map_err(|err| MigrationError::Apply {
            message: err.to_string(),
        })?;
    Ok(pending
        .iter()
        .map(|migration| migration.name().to_string())
        .collect())
}

/// Apply every pending migration and return the applied versions.
///
/// # Errors
///
/// Returns [`MigrationError`] if the database is unreachable or any
/// migration fails. A failing migration is rolled back.
pub fn run_pending_migrations(database_url: &str) -> Result<Vec<String>, MigrationError> {
    let mut conn = connect(database_url)?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|err| MigrationError::Apply {
            message: err.to_string(),
        })?;
    Ok(applied.iter().map(ToString::to_string).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn unreachable_database_is_a_connection_error() {
        let err = pending_migrations("postgres://invalid:0/none").expect_err("cannot connect");

        assert!(matches!(err, MigrationError::Connection { .. }));
    }
}
