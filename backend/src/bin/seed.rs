//! Seed a database with deterministic marketplace sample data.
//!
//! Each named seed is applied at most once; rerunning it reports that the
//! database is already seeded and changes nothing.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr, eyre};
use sample_data::SeedRegistry;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use marketplace::domain::SampleDataSeeder;
use marketplace::outbound::persistence::{DbPool, DieselSampleDataSeedRepository, PoolConfig};
use marketplace::settings::database_url_from_env;

const DEFAULT_SEED_NAME: &str = "harbour-lights";

/// `seed` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "seed",
    about = "Insert deterministic sample data for a named seed",
    version
)]
struct CliArgs {
    /// Seed name to apply.
    #[arg(long = "seed", value_name = "name", default_value = DEFAULT_SEED_NAME)]
    seed_name: String,
    /// JSON seed registry. The built-in registry is used when omitted.
    #[arg(long = "registry", value_name = "path")]
    registry_path: Option<PathBuf>,
    /// Database connection URL. Falls back to `MARKETPLACE_DATABASE_URL`, then `DATABASE_URL`.
    #[arg(long = "database-url", value_name = "url")]
    database_url: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt().with_env_filter(EnvFilter::from_default_env()).try_init() {
        warn!(error = %e, "tracing init failed");
    }

    let args = CliArgs::parse();
    let database_url = args
        .database_url
        .or_else(database_url_from_env)
        .ok_or_else(|| eyre!("no database URL: pass --database-url or set DATABASE_URL"))?;
    let registry = match &args.registry_path {
        Some(path) => SeedRegistry::from_file(path)
            .wrap_err_with(|| format!("loading seed registry from {}", path.display()))?,
        None => SeedRegistry::builtin(),
    };

    let pool = DbPool::new(PoolConfig::new(database_url).with_max_size(2))
        .await
        .wrap_err("creating database pool")?;
    let seeder = SampleDataSeeder::new(Arc::new(DieselSampleDataSeedRepository::new(pool)));
    let outcome = seeder
        .seed_from_registry(&registry, args.seed_name.trim())
        .await
        .wrap_err_with(|| format!("applying seed {}", args.seed_name))?;

    info!(
        seed_key = %outcome.seed_key,
        clients = outcome.client_count,
        providers = outcome.provider_count,
        result = ?outcome.result,
        "seed finished"
    );
    Ok(())
}
