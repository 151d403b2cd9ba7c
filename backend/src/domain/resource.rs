//! Metadata and behaviour shared by every table exposed over HTTP.
//!
//! A [`Resource`] is a domain record with a draft type, a [`ResourceKind`]
//! naming its table and path, and a canonical list order. Generic code walks
//! every resource through [`visit_resources`] or the `with_resources!` macro.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Serialize, Serializer};

macro_rules! resource_kinds {
    ($( $kind:ident => $path:literal, $table:literal, $singular:literal, $plural:literal; )*) => {
        /// Identifies one table exposed over HTTP.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum ResourceKind {
            $(
                #[doc = concat!("The `", $table, "` table.")]
                $kind,
            )*
        }

        impl ResourceKind {
            /// Every kind, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$kind),*];

            /// Path segment under `/api`.
            pub const fn path(self) -> &'static str {
                match self { $(Self::$kind => $path,)* }
            }

            /// SQL table name.
            pub const fn table(self) -> &'static str {
                match self { $(Self::$kind => $table,)* }
            }

            /// Kind whose SQL table is `table`.
            pub fn from_table(table: &str) -> Option<Self> {
                match table {
                    $($table => Some(Self::$kind),)*
                    _ => None,
                }
            }

            /// Lowercase singular label used in error messages.
            pub const fn singular(self) -> &'static str {
                match self { $(Self::$kind => $singular,)* }
            }

            /// Lowercase plural label used in error messages.
            pub const fn plural(self) -> &'static str {
                match self { $(Self::$kind => $plural,)* }
            }
        }
    };
}

resource_kinds! {
    User => "users", "users", "user", "users";
    Client => "clients", "clients", "client", "clients";
    ServiceProvider => "providers", "service_providers", "provider", "providers";
    ServiceCategory => "categories", "service_categories", "category", "categories";
    Service => "services", "services", "service", "services";
    Appointment => "appointments", "appointments", "appointment", "appointments";
    ServiceRequest => "service-requests", "service_requests", "service request", "service requests";
    Conversation => "conversations", "conversations", "conversation", "conversations";
    Message => "messages", "messages", "message", "messages";
    Achievement => "achievements", "achievements", "achievement", "achievements";
    AchievementProgress => "achievement-progress", "achievement_progress", "achievement progress", "achievement progress";
    AnalyticsEvent => "analytics-events", "analytics_events", "analytics event", "analytics events";
    Payment => "payments", "payments", "payment", "payments";
    Webhook => "webhooks", "webhooks", "webhook", "webhooks";
    WebhookEvent => "webhook-events", "webhook_events", "webhook event", "webhook events";
    ReferralCode => "referral-codes", "referral_codes", "referral code", "referral codes";
    ReferralStats => "referral-stats", "referral_stats", "referral stats", "referral stats";
    ReferralReward => "referral-rewards", "referral_rewards", "referral reward", "referral rewards";
    ProviderCredit => "provider-credits", "provider_credits", "provider credit", "provider credits";
    CreditPurchase => "credit-purchases", "credit_purchases", "credit purchase", "credit purchases";
    Location => "locations", "locations", "location", "locations";
    LocationEvent => "location-events", "location_events", "location event", "location events";
    Geofence => "geofences", "geofences", "geofence", "geofences";
    RouteOptimization => "route-optimizations", "route_optimizations", "route optimization", "route optimizations";
    DailyStats => "daily-stats", "daily_stats", "daily stats", "daily stats";
    Language => "languages", "languages", "language", "languages";
    UserLanguagePreference => "user-language-preferences", "user_language_preferences", "user language preference", "user language preferences";
    Partner => "partners", "third_party_partners", "partner", "partners";
    PartnerIntegration => "partner-integrations", "partner_integrations", "partner integration", "partner integrations";
    Event => "events", "events", "event", "events";
}

impl ResourceKind {
    /// Message returned when listing fails.
    #[must_use]
    pub fn list_failed(self) -> String {
        format!("Failed to fetch {}", self.plural())
    }

    /// Message returned when a single-row read fails.
    #[must_use]
    pub fn fetch_failed(self) -> String {
        format!("Failed to fetch {}", self.singular())
    }

    /// Message returned when an insert fails.
    #[must_use]
    pub fn create_failed(self) -> String {
        format!("Failed to create {}", self.singular())
    }

    /// Message returned when a full overwrite fails.
    #[must_use]
    pub fn update_failed(self) -> String {
        format!("Failed to update {}", self.singular())
    }

    /// Message returned when no row has the requested id.
    #[must_use]
    pub fn not_found(self) -> String {
        let singular = self.singular();
        let mut chars = singular.chars();
        match chars.next() {
            Some(first) => format!("{}{} not found", first.to_ascii_uppercase(), chars.as_str()),
            None => "Not found".to_owned(),
        }
    }
}

impl Serialize for ResourceKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.table())
    }
}

/// Canonical list order for a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListOrder {
    /// Ascending by primary key.
    ById,
    /// Ascending by case-folded `name`, ties broken by primary key.
    ByName,
}

/// A domain record stored in one table.
pub trait Resource: std::fmt::Debug + Clone + Serialize + Send + Sync + 'static {
    /// Client-supplied columns: everything except `id` and server stamps.
    type Draft: std::fmt::Debug + Clone + DeserializeOwned + Serialize + Send + Sync + 'static;

    /// Table this record lives in.
    const KIND: ResourceKind;

    /// Canonical list order.
    const ORDER: ListOrder = ListOrder::ById;

    /// Surrogate primary key.
    fn id(&self) -> i32;

    /// The `name` column for [`ListOrder::ByName`] resources.
    fn name_key(&self) -> Option<&str> {
        None
    }

    /// Builds a stored record from a draft, stamping timestamps with `now`.
    fn from_draft(id: i32, draft: Self::Draft, now: DateTime<Utc>) -> Self;

    /// Overwrites every client-supplied column, keeping `id` and stamps.
    #[must_use]
    fn replace_with(&self, draft: Self::Draft) -> Self;
}

/// Sorts records into the canonical order for their resource.
///
/// Names compare case-insensitively so in-memory order agrees with a
/// linguistic database collation, where `apple` precedes `Zed`.
pub fn sort_records<E: Resource>(records: &mut [E]) {
    match E::ORDER {
        ListOrder::ById => records.sort_by_key(|record| record.id()),
        ListOrder::ByName => records.sort_by_cached_key(|record| {
            let name = record.name_key().unwrap_or_default();
            (name.to_lowercase(), name.to_owned(), record.id())
        }),
    }
}

/// Receives each resource type in turn.
pub trait ResourceVisitor {
    /// Called once per resource.
    fn visit<E: Resource>(&mut self);
}

/// Invokes `$callback! { Type, Type, ... }` with every resource record type.
macro_rules! with_resources {
    ($callback:ident) => {
        $callback! {
            crate::domain::records::User,
            crate::domain::records::Client,
            crate::domain::records::ServiceProvider,
            crate::domain::records::ServiceCategory,
            crate::domain::records::Service,
            crate::domain::records::Appointment,
            crate::domain::records::ServiceRequest,
            crate::domain::records::Conversation,
            crate::domain::records::Message,
            crate::domain::records::Achievement,
            crate::domain::records::AchievementProgress,
            crate::domain::records::AnalyticsEvent,
            crate::domain::records::Payment,
            crate::domain::records::Webhook,
            crate::domain::records::WebhookEvent,
            crate::domain::records::ReferralCode,
            crate::domain::records::ReferralStats,
            crate::domain::records::ReferralReward,
            crate::domain::records::ProviderCredit,
            crate::domain::records::CreditPurchase,
            crate::domain::records::Location,
            crate::domain::records::LocationEvent,
            crate::domain::records::Geofence,
            crate::domain::records::RouteOptimization,
            crate::domain::records::DailyStats,
            crate::domain::records::Language,
            crate::domain::records::UserLanguagePreference,
            crate::domain::records::Partner,
            crate::domain::records::PartnerIntegration,
            crate::domain::records::Event,
        }
    };
}

pub(crate) use with_resources;

macro_rules! visit_each {
    ($($record:ty),* $(,)?) => {
        /// Calls `visitor.visit::<E>()` for every resource record type.
        pub fn visit_resources<V: ResourceVisitor>(visitor: &mut V) {
            $( visitor.visit::<$record>(); )*
        }
    };
}

with_resources!(visit_each);
