//! Port producing the reply to a WebSocket text frame.

/// Computes the single reply sent for each inbound text frame.
#[cfg_attr(test, mockall::automock)]
pub trait MessageResponder: Send + Sync {
    /// Reply to `text`.
    fn respond(&self, text: &str) -> String;
}
