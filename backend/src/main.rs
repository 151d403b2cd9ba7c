//! Marketplace API entry-point: loads settings, builds the pool and serves HTTP.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use marketplace::inbound::http::health::HealthState;
use marketplace::outbound::persistence::{DbPool, PoolConfig};
use marketplace::settings::AppSettings;
use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load_from_iter(std::env::args_os())
        .map_err(|err| std::io::Error::other(format!("failed to load settings: {err}")))?;
    let bind_addr = settings.bind_addr().map_err(std::io::Error::other)?;

    let mut config = ServerConfig::new(bind_addr);
    if let Some(database_url) = settings.database_url() {
        let pool_config = PoolConfig::new(database_url)
            .with_max_size(settings.db_max_connections())
            .with_min_idle(None);
        let pool = DbPool::new(pool_config)
            .await
            .map_err(|err| std::io::Error::other(format!("failed to build pool: {err}")))?;
        config = config.with_db_pool(pool);
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config)?;
    info!(%bind_addr, "marketplace API listening");
    server.await
}
