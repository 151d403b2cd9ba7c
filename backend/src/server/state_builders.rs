//! Builders selecting database-backed or in-memory ports.

use std::sync::Arc;

use mockable::DefaultClock;
use tracing::warn;

use marketplace::domain::RecordRelationQuery;
use marketplace::domain::ports::in_memory_record_ports;
use marketplace::inbound::http::state::HttpState;
use marketplace::outbound::persistence::{DieselRelationQuery, diesel_record_ports};

use super::ServerConfig;

/// Build HTTP state from the configured pool, or in-memory ports without one.
pub(super) fn build_http_state(config: &ServerConfig) -> HttpState {
    match &config.db_pool {
        Some(pool) => HttpState::new(
            diesel_record_ports(pool),
            Arc::new(DieselRelationQuery::new(pool.clone())),
        ),
        None => {
            warn!("no database configured; serving from process-local storage");
            let records = in_memory_record_ports(Arc::new(DefaultClock));
            let relations = Arc::new(RecordRelationQuery::new(records.clone()));
            HttpState::new(records, relations)
        }
    }
}
