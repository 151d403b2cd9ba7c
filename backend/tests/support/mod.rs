//! Shared helpers for marketplace integration tests.
//!
//! Integration tests compile as separate crates, so each suite pulls this
//! module in with `mod support;` and uses only what it needs.

#![allow(dead_code, reason = "each suite uses a different subset of helpers")]

pub mod embedded_postgres;

pub use embedded_postgres::{TestDatabase, test_database};

/// Render a `postgres` error with enough detail to be useful in CI logs.
///
/// `postgres::Error`'s `Display` collapses database errors to `db error`, so
/// the SQLSTATE and message are pulled out explicitly when available.
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

/// Whether suites must fail, rather than skip, when no cluster can start.
///
/// Truthy values: "1", "true", "yes" (case-insensitive).
pub fn cluster_required() -> bool {
    std::env::var("REQUIRE_TEST_CLUSTER")
        .map(|value| matches!(value.to_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

/// Handle an embedded cluster failure consistently across suites.
///
/// Prints a skip marker and returns `None`, or panics when
/// `REQUIRE_TEST_CLUSTER` is truthy so CI breakage is not masked.
pub fn handle_cluster_setup_failure<T>(reason: impl std::fmt::Display) -> Option<T> {
    if cluster_required() {
        panic!("Test cluster setup failed: {reason}. Unset REQUIRE_TEST_CLUSTER to skip.");
    }
    eprintln!("SKIP-TEST-CLUSTER: {reason}");
    None
}
