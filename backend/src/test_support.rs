//! Shared helpers for unit tests.

use std::sync::Arc;

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;

use crate::domain::ports::{RecordPorts, in_memory_record_ports};

/// Clock frozen at a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Default for FixedClock {
    fn default() -> Self {
        Self(
            Utc.with_ymd_and_hms(2026, 1, 1, 9, 30, 0)
                .single()
                .expect("valid fixed time"),
        )
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// In-memory repositories for every resource, stamped by [`FixedClock`].
pub fn fixed_record_ports() -> RecordPorts {
    in_memory_record_ports(Arc::new(FixedClock::default()))
}
