//! Sample data seeding orchestration.
//!
//! Resolves a named seed from the registry, generates its dataset and hands
//! the result to the seeding repository port.

use std::sync::Arc;

use sample_data::{GenerationError, RegistryError, SeedRegistry, generate_dataset};
use thiserror::Error;
use tracing::info;

use crate::domain::ports::{
    SampleDataSeedRepository, SampleDataSeedRepositoryError, SampleDataSeedRequest, SeedingResult,
};

/// Result of attempting to apply sample data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleDataSeedOutcome {
    /// Seed key used to record the run.
    pub seed_key: String,
    /// Number of generated clients.
    pub client_count: usize,
    /// Number of generated providers.
    pub provider_count: usize,
    /// Persistence outcome for the seed run.
    pub result: SeedingResult,
}

/// Errors raised while preparing or applying sample data.
#[derive(Debug, Error)]
pub enum SampleDataSeedingError {
    /// Seed registry lookups failed.
    #[error("seed registry error: {0}")]
    Registry(#[from] RegistryError),
    /// Dataset generation failed.
    #[error("sample data generation failed: {0}")]
    Generation(#[from] GenerationError),
    /// Seed value cannot be represented in the database.
    #[error("seed value {seed} exceeds maximum representable value")]
    SeedOverflow { seed: u64 },
    /// A generated row count cannot be represented in the database.
    #[error("{what} count {count} exceeds maximum representable value")]
    CountOverflow { what: &'static str, count: usize },
    /// Persistence adapter failed while seeding.
    #[error("sample data persistence error: {0}")]
    Persistence(#[from] SampleDataSeedRepositoryError),
}

/// Service that orchestrates sample data seeding.
#[derive(Clone)]
pub struct SampleDataSeeder<R> {
    repository: Arc<R>,
}

impl<R> SampleDataSeeder<R> {
    /// Create a new seeder with the given persistence adapter.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

impl<R> SampleDataSeeder<R>
where
    R: SampleDataSeedRepository,
{
    /// Apply sample data for a named seed within the registry.
    ///
    /// # Errors
    ///
    /// Returns [`SampleDataSeedingError`] if registry lookup, generation,
    /// range conversion, or persistence fails.
    pub async fn seed_from_registry(
        &self,
        registry: &SeedRegistry,
        seed_name: &str,
    ) -> Result<SampleDataSeedOutcome, SampleDataSeedingError> {
        let seed_def = registry.find_seed(seed_name)?;
        let seed_key = seed_def.name().to_owned();
        let seed = i64::try_from(seed_def.seed()).map_err(|_| {
            SampleDataSeedingError::SeedOverflow {
                seed: seed_def.seed(),
            }
        })?;
        let client_count = db_count("client", seed_def.client_count())?;
        let provider_count = db_count("provider", seed_def.provider_count())?;

        let dataset = generate_dataset(seed_def)?;
        let request = SampleDataSeedRequest {
            seed_key: seed_key.clone(),
            seed,
            client_count,
            provider_count,
            dataset,
        };
        let result = self.repository.seed_sample_data(request).await?;
        info!(seed_key = %seed_key, ?result, "sample data seed processed");

        Ok(SampleDataSeedOutcome {
            seed_key,
            client_count: seed_def.client_count(),
            provider_count: seed_def.provider_count(),
            result,
        })
    }
}

fn db_count(what: &'static str, count: usize) -> Result<i32, SampleDataSeedingError> {
    i32::try_from(count).map_err(|_| SampleDataSeedingError::CountOverflow { what, count })
}
