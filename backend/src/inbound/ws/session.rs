//! Per-connection WebSocket handler.
//!
//! Every text message is answered with exactly one text frame produced by the
//! injected [`MessageResponder`]. Fragmented messages are reassembled first,
//! so a message split across continuation frames still gets one reply. The server pings every 5s and closes the
//! connection after 10s without client traffic. Tests shorten both intervals.

use std::sync::Arc;
use std::time::{Duration, Instant};

use actix_ws::{
    AggregatedMessage, AggregatedMessageStream, CloseCode, CloseReason, Closed, MessageStream,
    ProtocolError, Session,
};
use tokio::time;
use tracing::{debug, warn};

use crate::domain::ports::MessageResponder;

/// Time between heartbeats to the client (5s in production, shorter in tests).
#[cfg(not(test))]
pub(super) const HEARTBEAT_INTERVAL: Duration = Duration::from_secs(5);
#[cfg(test)]
pub(super) const HEARTBEAT_INTERVAL: Duration = Duration::from_millis(50);

/// Max idle time before disconnecting the client (10s in production, shorter in tests).
#[cfg(not(test))]
pub(super) const CLIENT_TIMEOUT: Duration = Duration::from_secs(10);
#[cfg(test)]
pub(super) const CLIENT_TIMEOUT: Duration = Duration::from_millis(100);

pub(super) async fn handle_ws_session(
    responder: Arc<dyn MessageResponder>,
    session: Session,
    stream: MessageStream,
) {
    WsSession::new(responder)
        .run(session, stream.aggregate_continuations())
        .await;
}

enum SessionError {
    ClientClosed(Option<CloseReason>),
    StreamClosed,
    HeartbeatTimeout,
    Protocol(ProtocolError),
    Network(Closed),
}

struct WsSession {
    responder: Arc<dyn MessageResponder>,
}

impl WsSession {
    fn new(responder: Arc<dyn MessageResponder>) -> Self {
        Self { responder }
    }

    async fn run(&self, mut session: Session, mut stream: AggregatedMessageStream) {
        let mut last_heartbeat = Instant::now();
        let mut heartbeat = time::interval(HEARTBEAT_INTERVAL);

        loop {
            let result = tokio::select! {
                _ = heartbeat.tick() => {
                    Self::handle_heartbeat_tick(&mut session, last_heartbeat).await
                }
                message = stream.recv() => {
                    self.handle_stream_message(&mut session, &mut last_heartbeat, message)
                        .await
                }
            };

            if let Err(error) = result {
                log_shutdown_reason(&error);
                close_session(session, close_action_for(error)).await;
                return;
            }
        }
    }

    async fn handle_heartbeat_tick(
        session: &mut Session,
        last_heartbeat: Instant,
    ) -> Result<(), SessionError> {
        if last_heartbeat.elapsed() > CLIENT_TIMEOUT {
            return Err(SessionError::HeartbeatTimeout);
        }

        session.ping(b"").await.map_err(SessionError::Network)
    }

    async fn handle_stream_message(
        &self,
        session: &mut Session,
        last_heartbeat: &mut Instant,
        message: Option<Result<AggregatedMessage, ProtocolError>>,
    ) -> Result<(), SessionError> {
        let Some(message) = message else {
            return Err(SessionError::StreamClosed);
        };
        let message = message.map_err(SessionError::Protocol)?;

        match message {
            AggregatedMessage::Ping(payload) => {
                *last_heartbeat = Instant::now();
                session.pong(&payload).await.map_err(SessionError::Network)
            }
            AggregatedMessage::Text(text) => {
                *last_heartbeat = Instant::now();
                let reply = self.responder.respond(&text);
                session.text(reply).await.map_err(SessionError::Network)
            }
            AggregatedMessage::Pong(_) | AggregatedMessage::Binary(_) => {
                *last_heartbeat = Instant::now();
                Ok(())
            }
            AggregatedMessage::Close(reason) => Err(SessionError::ClientClosed(reason)),
        }
    }
}

fn log_shutdown_reason(error: &SessionError) {
    match error {
        SessionError::HeartbeatTimeout => {
            warn!("WebSocket heartbeat timeout; closing connection");
        }
        SessionError::Protocol(error) => {
            warn!(error = %error, "WebSocket protocol error");
        }
        SessionError::Network(error) => {
            warn!(error = %error, "WebSocket send failed; closing connection");
        }
        SessionError::ClientClosed(reason) => {
            debug!(?reason, "WebSocket client sent close");
        }
        SessionError::StreamClosed => {}
    }
}

enum CloseAction {
    /// The socket is already gone; no close frame is sent.
    None,
    Close(Option<CloseReason>),
}

fn close_action_for(error: SessionError) -> CloseAction {
    match error {
        SessionError::HeartbeatTimeout => CloseAction::Close(Some(CloseReason {
            code: CloseCode::Normal,
            description: Some("heartbeat timeout".to_owned()),
        })),
        SessionError::Protocol(_) => CloseAction::Close(Some(CloseReason {
            code: CloseCode::Protocol,
            description: Some("protocol error".to_owned()),
        })),
        SessionError::ClientClosed(reason) => CloseAction::Close(reason),
        SessionError::StreamClosed | SessionError::Network(_) => CloseAction::None,
    }
}

async fn close_session(session: Session, action: CloseAction) {
    if let CloseAction::Close(reason) = action {
        if let Err(error) = session.close(reason).await {
            warn!(error = %error, "Failed to close WebSocket session");
        }
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
