//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{RecordPorts, RelationQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// One record repository per resource.
    pub records: RecordPorts,
    /// Eager-loaded relation reads.
    pub relations: Arc<dyn RelationQuery>,
}

impl HttpState {
    /// Bundle the ports used by the record and relation handlers.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use marketplace::domain::ports::{FixtureRelationQuery, RecordPorts};
    /// use marketplace::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::new(RecordPorts::default(), Arc::new(FixtureRelationQuery));
    /// assert!(state.records.is_empty());
    /// ```
    pub fn new(records: RecordPorts, relations: Arc<dyn RelationQuery>) -> Self {
        Self { records, relations }
    }
}
