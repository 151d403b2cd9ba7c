//! Port abstraction for applying sample data seeds.
//!
//! Adapters persist a generated [`SampleDataset`] and record the seed run in
//! one transaction, so a seed key is applied at most once.

use async_trait::async_trait;
use sample_data::SampleDataset;

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by sample data seed repository adapters.
    pub enum SampleDataSeedRepositoryError {
        /// Repository connection could not be established.
        Connection => "sample data seeding connection failed",
        /// Query or mutation failed during execution.
        Query => "sample data seeding query failed",
    }
}

/// Outcome of a seeding attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedingResult {
    /// The run was recorded and the dataset inserted.
    Applied,
    /// The seed key had already been applied; nothing changed.
    AlreadySeeded,
}

/// Request payload for applying a seed run.
#[derive(Debug, Clone)]
pub struct SampleDataSeedRequest {
    /// Seed name recorded in `sample_data_runs`.
    pub seed_key: String,
    /// RNG seed used for generation.
    pub seed: i64,
    /// Number of generated clients.
    pub client_count: i32,
    /// Number of generated providers.
    pub provider_count: i32,
    /// Rows to insert.
    pub dataset: SampleDataset,
}

/// Port for applying sample data seeds in a single transaction.
///
/// Implementations must:
/// - Insert the seed run guarded by `ON CONFLICT DO NOTHING`.
/// - Insert fixed lookup rows without failing on existing names.
/// - Insert generated users, clients, providers and services.
/// - Roll back every change if any step fails.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SampleDataSeedRepository: Send + Sync {
    /// Apply a seed run.
    ///
    /// Returns `AlreadySeeded` without writing when the key already exists.
    async fn seed_sample_data(
        &self,
        request: SampleDataSeedRequest,
    ) -> Result<SeedingResult, SampleDataSeedRepositoryError>;
}
