//! Embedded PostgreSQL databases for integration tests.
//!
//! One shared cluster serves the whole test binary. A template database is
//! migrated once per migrations hash; each test gets a fresh clone of it.

use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

use marketplace::outbound::persistence::run_pending_migrations;
use pg_embedded_setup_unpriv::test_support::{hash_directory, shared_cluster_handle};
use pg_embedded_setup_unpriv::{ClusterHandle, TemporaryDatabase};
use postgres::{Client, NoTls};
use uuid::Uuid;

use super::{format_postgres_error, handle_cluster_setup_failure};

static TEMPLATE_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

const TEMPLATE_NAME_PREFIX: &str = "marketplace_template";

fn migrations_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("migrations")
}

fn template_database_name() -> Result<String, String> {
    let hash = hash_directory(migrations_dir()).map_err(|err| format!("hash migrations: {err}"))?;
    let short_hash = hash.get(..8).unwrap_or(&hash);
    Ok(format!("{TEMPLATE_NAME_PREFIX}_{short_hash}"))
}

fn ensure_template_database(cluster: &ClusterHandle) -> Result<String, String> {
    let template_name = template_database_name()?;
    let _lock = TEMPLATE_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|err| err.into_inner());

    let exists = cluster
        .database_exists(template_name.as_str())
        .map_err(|err| format!("template check: {err:?}"))?;
    if !exists {
        cluster
            .create_database(template_name.as_str())
            .map_err(|err| format!("create template: {err:?}"))?;
        let url = cluster.connection().database_url(&template_name);
        run_pending_migrations(&url).map_err(|err| format!("migrate template: {err}"))?;
    }

    Ok(template_name)
}

/// A migrated, throwaway database.
pub struct TestDatabase {
    database: TemporaryDatabase,
}

impl TestDatabase {
    /// Connection URL for the database.
    pub fn url(&self) -> String {
        self.database.url().to_string()
    }

    /// Run raw SQL through a synchronous client.
    pub fn execute(&self, sql: &str) -> Result<(), String> {
        let mut client =
            Client::connect(&self.url(), NoTls).map_err(|err| format_postgres_error(&err))?;
        client
            .batch_execute(sql)
            .map_err(|err| format_postgres_error(&err))
    }

    /// Count rows in `table`.
    pub fn count(&self, table: &str) -> Result<i64, String> {
        let mut client =
            Client::connect(&self.url(), NoTls).map_err(|err| format_postgres_error(&err))?;
        let row = client
            .query_one(&format!("SELECT COUNT(*) FROM {table}"), &[])
            .map_err(|err| format_postgres_error(&err))?;
        Ok(row.get(0))
    }
}

fn provision() -> Result<TestDatabase, String> {
    let cluster = shared_cluster_handle().map_err(|err| format!("start cluster: {err:?}"))?;
    let template_name = ensure_template_database(cluster)?;
    let db_name = format!("test_{}", Uuid::new_v4().simple());
    let database = cluster
        .temporary_database_from_template(db_name.as_str(), template_name.as_str())
        .map_err(|err| format!("create database from template: {err:?}"))?;
    Ok(TestDatabase { database })
}

/// A fresh migrated database, or `None` when the suite should skip.
pub fn test_database() -> Option<TestDatabase> {
    let outcome = std::panic::catch_unwind(provision)
        .unwrap_or_else(|_| Err("cluster bootstrap panicked".to_owned()));
    match outcome {
        Ok(database) => Some(database),
        Err(reason) => handle_cluster_setup_failure(reason),
    }
}
