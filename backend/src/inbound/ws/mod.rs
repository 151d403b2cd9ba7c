//! WebSocket inbound adapter for the echo service.
//!
//! The upgrade handler hands each connection to its own task; the task owns
//! only the socket and the injected [`MessageResponder`].
//!
//! [`MessageResponder`]: crate::domain::ports::MessageResponder

use actix_web::web::{self, Payload};
use actix_web::{HttpRequest, HttpResponse, get};
use tracing::{error, info};

mod session;

pub mod state;

/// Handle WebSocket upgrade for the `/ws` endpoint.
#[get("/ws")]
pub async fn ws_entry(
    state: web::Data<state::WsState>,
    req: HttpRequest,
    stream: Payload,
) -> actix_web::Result<HttpResponse> {
    let (response, session, messages) = actix_ws::handle(&req, stream).map_err(|error| {
        error!(error = %error, "WebSocket upgrade failed");
        error
    })?;

    let peer = req
        .peer_addr()
        .map_or_else(|| "unknown".to_owned(), |addr| addr.to_string());
    info!(%peer, "WebSocket client connected");

    let responder = state.responder.clone();
    actix_web::rt::spawn(async move {
        session::handle_ws_session(responder, session, messages).await;
        info!(%peer, "WebSocket client disconnected");
    });

    Ok(response)
}
