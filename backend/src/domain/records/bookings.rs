//! Appointments and open service requests.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::resource::{ListOrder, Resource, ResourceKind};

define_resource! {
    /// A booked slot for one service.
    Appointment: Appointment / NewAppointment {
        /// Booking client.
        client_id: i32,
        /// Provider performing the service.
        provider_id: i32,
        /// Booked service.
        service_id: i32,
        /// Start time.
        scheduled_at: DateTime<Utc>,
        /// Free-form status such as `pending` or `completed`.
        status: String,
        /// Client notes.
        notes: Option<String>,
    }
    stamped { created_at }
}

define_resource! {
    /// A client's request for quotes.
    ServiceRequest: ServiceRequest / NewServiceRequest {
        /// Requesting client.
        client_id: i32,
        /// Optional category hint.
        category_id: Option<i32>,
        /// Short title.
        title: String,
        /// What the client needs.
        description: String,
        /// Budget in cents.
        budget_cents: Option<i64>,
        /// Free-form status such as `open`.
        status: String,
    }
    stamped { created_at }
}
