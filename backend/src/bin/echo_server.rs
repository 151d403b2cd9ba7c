//! Standalone WebSocket echo server.
//!
//! Serves `GET /ws`; every text frame is answered with `Echo: ` plus the
//! frame's text. Shares nothing with the API server.

use std::sync::Arc;

use actix_web::{App, HttpServer, web};
use color_eyre::eyre::{Result, WrapErr};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use marketplace::Trace;
use marketplace::domain::EchoResponder;
use marketplace::inbound::ws::{self, state::WsState};
use marketplace::settings::EchoSettings;

#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = EchoSettings::load_from_iter(std::env::args_os())
        .map_err(|err| color_eyre::eyre::eyre!("failed to load settings: {err}"))?;
    let bind_addr = settings.bind_addr()?;
    let ws_state = web::Data::new(WsState::new(Arc::new(EchoResponder)));

    let server = HttpServer::new(move || {
        App::new()
            .app_data(ws_state.clone())
            .wrap(Trace)
            .service(ws::ws_entry)
    })
    .bind(bind_addr)
    .wrap_err_with(|| format!("binding {bind_addr}"))?
    .run();

    info!(%bind_addr, "echo server listening");
    server.await.wrap_err("echo server failed")
}
