//! Service categories and the services providers list under them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::resource::{ListOrder, Resource, ResourceKind};

define_resource! {
    /// A grouping of services, listed alphabetically.
    ServiceCategory: ServiceCategory / NewServiceCategory, order = name {
        /// Unique category name.
        name: String,
        /// Short description.
        description: Option<String>,
        /// Icon identifier.
        icon: Option<String>,
    }
}

define_resource! {
    /// A bookable offering.
    Service: Service / NewService {
        /// Provider offering the service.
        provider_id: i32,
        /// Category the service is listed under.
        category_id: i32,
        /// Title.
        name: String,
        /// Longer description.
        description: Option<String>,
        /// Price in cents.
        price_cents: i64,
        /// Expected duration.
        duration_minutes: i32,
    }
    stamped { created_at }
}
