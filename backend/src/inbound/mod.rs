//! Inbound adapters translating external requests into domain port calls.
//!
//! HTTP handlers live under [`http`]; the echo WebSocket sits in [`ws`].

pub mod http;
pub mod ws;
