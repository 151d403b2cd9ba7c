//! Accounts: users and the client and provider profiles hanging off them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::resource::{ListOrder, Resource, ResourceKind};

define_resource! {
    /// A registered account.
    User: User / NewUser {
        /// Unique login name.
        username: String,
        /// Unique contact address.
        email: String,
        /// Display name.
        full_name: String,
        /// `client`, `provider` or `admin`.
        role: String,
        /// Optional contact number.
        phone: Option<String>,
    }
    stamped { created_at }
}

define_resource! {
    /// A user who books services.
    Client: Client / NewClient {
        /// Owning account.
        user_id: i32,
        /// Default service address.
        address: Option<String>,
    }
    stamped { created_at }
}

define_resource! {
    /// A user who offers services.
    ServiceProvider: ServiceProvider / NewServiceProvider {
        /// Owning account.
        user_id: i32,
        /// Trading name.
        business_name: String,
        /// Short pitch.
        description: Option<String>,
        /// Hourly rate in cents.
        hourly_rate_cents: Option<i64>,
        /// Average review score.
        rating: f64,
        /// Whether the provider passed verification.
        verified: bool,
    }
    stamped { created_at }
}
