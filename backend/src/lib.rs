//! Marketplace backend library: domain, adapters and runtime settings.

pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

#[cfg(test)]
pub(crate) mod test_support;

pub use middleware::Trace;
