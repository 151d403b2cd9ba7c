//! Apply, or list, the embedded schema migrations.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr, eyre};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use marketplace::outbound::persistence::{pending_migrations, run_pending_migrations};
use marketplace::settings::database_url_from_env;

/// `migrate` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "migrate",
    about = "Apply pending marketplace schema migrations",
    version
)]
struct CliArgs {
    /// Print pending migrations without applying them.
    #[arg(long)]
    list: bool,
    /// Database connection URL. Falls back to `MARKETPLACE_DATABASE_URL`, then `DATABASE_URL`.
    #[arg(long = "database-url", value_name = "url")]
    database_url: Option<String>,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt().with_env_filter(EnvFilter::from_default_env()).try_init() {
        warn!(error = %e, "tracing init failed");
    }

    let args = CliArgs::parse();
    let database_url = args
        .database_url
        .or_else(database_url_from_env)
        .ok_or_else(|| eyre!("no database URL: pass --database-url or set DATABASE_URL"))?;

    if args.list {
        let pending = pending_migrations(&database_url).wrap_err("listing pending migrations")?;
        if pending.is_empty() {
            info!("schema is up to date");
        }
        for name in pending {
            println!("{name}");
        }
        return Ok(());
    }

    let applied = run_pending_migrations(&database_url).wrap_err("applying migrations")?;
    info!(count = applied.len(), ?applied, "migrations applied");
    Ok(())
}
