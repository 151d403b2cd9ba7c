//! Third-party partners and their provider integrations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::resource::{ListOrder, Resource, ResourceKind};

define_resource! {
    /// An external company integrated with the marketplace.
    Partner: Partner / NewPartner {
        /// Unique name.
        name: String,
        /// Partner category such as `payments`.
        partner_type: String,
        /// Public website.
        website: Option<String>,
        /// Whether the partnership is live.
        active: bool,
    }
    stamped { created_at }
}

define_resource! {
    /// A provider's connection to a partner.
    PartnerIntegration: PartnerIntegration / NewPartnerIntegration {
        /// Integrated partner.
        partner_id: i32,
        /// Connected provider.
        provider_id: i32,
        /// Identifier on the partner's side.
        external_ref: Option<String>,
        /// Free-form status such as `active`.
        status: String,
    }
    stamped { created_at }
}
