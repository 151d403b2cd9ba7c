//! Shared WebSocket adapter state.

use std::sync::Arc;

use crate::domain::ports::MessageResponder;

/// Dependency bundle for the WebSocket upgrade handler.
#[derive(Clone)]
pub struct WsState {
    /// Produces the reply for each inbound text frame.
    pub responder: Arc<dyn MessageResponder>,
}

impl WsState {
    /// Construct state from an explicit responder.
    pub fn new(responder: Arc<dyn MessageResponder>) -> Self {
        Self { responder }
    }
}
