//! Named associations between tables and the read models they produce.
//!
//! Each [`ForeignKey`] yields two [`Relation`]s: a `One` from the child to
//! its parent and a `Many` from the parent to its children. Declaring a
//! relation runs no query; adapters use the registry to eager-load related
//! rows in one query per association.

use serde::Serialize;

use crate::domain::records::{
    Appointment, Client, Conversation, Message, Payment, Service, ServiceCategory,
    ServiceProvider, User,
};
use crate::domain::resource::ResourceKind;

/// Whether a relation resolves to one row or many.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Cardinality {
    /// At most one related row.
    One,
    /// Any number of related rows.
    Many,
}

/// A foreign key column and the names of both association directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForeignKey {
    /// Table holding the column.
    pub child: ResourceKind,
    /// Column name.
    pub column: &'static str,
    /// Referenced table.
    pub parent: ResourceKind,
    /// Association name on the child, e.g. `provider`.
    pub one: &'static str,
    /// Association name on the parent, e.g. `services`.
    pub many: &'static str,
}

const fn fk(
    child: ResourceKind,
    column: &'static str,
    parent: ResourceKind,
    one: &'static str,
    many: &'static str,
) -> ForeignKey {
    ForeignKey {
        child,
        column,
        parent,
        one,
        many,
    }
}

use ResourceKind as K;

/// Every declared foreign key.
pub static FOREIGN_KEYS: &[ForeignKey] = &[
    fk(K::Client, "user_id", K::User, "user", "clients"),
    fk(K::ServiceProvider, "user_id", K::User, "user", "providers"),
    fk(K::Service, "provider_id", K::ServiceProvider, "provider", "services"),
    fk(K::Service, "category_id", K::ServiceCategory, "category", "services"),
    fk(K::Appointment, "client_id", K::Client, "client", "appointments"),
    fk(K::Appointment, "provider_id", K::ServiceProvider, "provider", "appointments"),
    fk(K::Appointment, "service_id", K::Service, "service", "appointments"),
    fk(K::ServiceRequest, "client_id", K::Client, "client", "serviceRequests"),
    fk(K::ServiceRequest, "category_id", K::ServiceCategory, "category", "serviceRequests"),
    fk(K::Conversation, "client_id", K::Client, "client", "conversations"),
    fk(K::Conversation, "provider_id", K::ServiceProvider, "provider", "conversations"),
    fk(K::Message, "conversation_id", K::Conversation, "conversation", "messages"),
    fk(K::Message, "sender_id", K::User, "sender", "sentMessages"),
    fk(K::AchievementProgress, "user_id", K::User, "user", "achievementProgress"),
    fk(K::AchievementProgress, "achievement_id", K::Achievement, "achievement", "progress"),
    fk(K::AnalyticsEvent, "user_id", K::User, "user", "analyticsEvents"),
    fk(K::Payment, "appointment_id", K::Appointment, "appointment", "payments"),
    fk(K::WebhookEvent, "webhook_id", K::Webhook, "webhook", "events"),
    fk(K::ReferralCode, "user_id", K::User, "user", "referralCodes"),
    fk(K::ReferralStats, "user_id", K::User, "user", "referralStats"),
    fk(K::ReferralReward, "referral_code_id", K::ReferralCode, "referralCode", "rewards"),
    fk(K::ReferralReward, "referred_user_id", K::User, "referredUser", "referralRewards"),
    fk(K::ProviderCredit, "provider_id", K::ServiceProvider, "provider", "credits"),
    fk(K::CreditPurchase, "provider_id", K::ServiceProvider, "provider", "creditPurchases"),
    fk(K::Location, "user_id", K::User, "user", "locations"),
    fk(K::LocationEvent, "location_id", K::Location, "location", "events"),
    fk(K::LocationEvent, "geofence_id", K::Geofence, "geofence", "events"),
    fk(K::RouteOptimization, "provider_id", K::ServiceProvider, "provider", "routeOptimizations"),
    fk(K::DailyStats, "provider_id", K::ServiceProvider, "provider", "dailyStats"),
    fk(K::UserLanguagePreference, "user_id", K::User, "user", "languagePreferences"),
    fk(K::UserLanguagePreference, "language_id", K::Language, "language", "userPreferences"),
    fk(K::PartnerIntegration, "partner_id", K::Partner, "partner", "integrations"),
    fk(K::PartnerIntegration, "provider_id", K::ServiceProvider, "provider", "partnerIntegrations"),
];

/// A named association from one table to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Relation {
    /// Table the association is declared on.
    pub owner: ResourceKind,
    /// Association name.
    pub name: &'static str,
    /// One or many.
    pub cardinality: Cardinality,
    /// Related table.
    pub target: ResourceKind,
    /// Foreign key column, always on the `Many` side's table.
    pub foreign_key: &'static str,
}

impl ForeignKey {
    /// The child-to-parent association.
    #[must_use]
    pub const fn one_relation(&self) -> Relation {
        Relation {
            owner: self.child,
            name: self.one,
            cardinality: Cardinality::One,
            target: self.parent,
            foreign_key: self.column,
        }
    }

    /// The parent-to-children association.
    #[must_use]
    pub const fn many_relation(&self) -> Relation {
        Relation {
            owner: self.parent,
            name: self.many,
            cardinality: Cardinality::Many,
            target: self.child,
            foreign_key: self.column,
        }
    }
}

/// Every relation, grouped by owner in declaration order.
pub fn relations() -> Vec<Relation> {
    let mut all: Vec<Relation> = FOREIGN_KEYS
        .iter()
        .flat_map(|key| [key.one_relation(), key.many_relation()])
        .collect();
    all.sort_by_key(|relation| {
        ResourceKind::ALL
            .iter()
            .position(|kind| *kind == relation.owner)
            .unwrap_or(usize::MAX)
    });
    all
}

/// Relations declared on `owner`.
pub fn relations_of(owner: ResourceKind) -> Vec<Relation> {
    relations()
        .into_iter()
        .filter(|relation| relation.owner == owner)
        .collect()
}

/// A category with its services.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryWithServices {
    /// The category row.
    #[serde(flatten)]
    pub category: ServiceCategory,
    /// Services listed under it, by id.
    pub services: Vec<Service>,
}

/// A provider with their account and services.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderProfile {
    /// The provider row.
    #[serde(flatten)]
    pub provider: ServiceProvider,
    /// Owning account.
    pub user: User,
    /// Offered services, by id.
    pub services: Vec<Service>,
}

/// A conversation with its messages.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationThread {
    /// The conversation row.
    #[serde(flatten)]
    pub conversation: Conversation,
    /// Messages ordered by send time, then id.
    pub messages: Vec<Message>,
}

/// An appointment with everything it references.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentDetails {
    /// The appointment row.
    #[serde(flatten)]
    pub appointment: Appointment,
    /// Booking client.
    pub client: Client,
    /// Performing provider.
    pub provider: ServiceProvider,
    /// Booked service.
    pub service: Service,
    /// Payments against the appointment, by id.
    pub payments: Vec<Payment>,
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rstest::rstest;

    use super::*;

    const MIGRATION: &str =
        include_str!("../../migrations/2026-01-01-000000_create_marketplace/up.sql");

    #[test]
    fn every_foreign_key_is_declared_in_the_migration() {
        for key in FOREIGN_KEYS {
            let not_null = format!(
                "{} INTEGER NOT NULL REFERENCES {} (id)",
                key.column,
                key.parent.table()
            );
            let nullable = format!("{} INTEGER REFERENCES {} (id)", key.column, key.parent.table());
            assert!(
                MIGRATION.contains(&not_null) || MIGRATION.contains(&nullable),
                "missing {}.{}",
                key.child.table(),
                key.column
            );
        }
    }

    #[test]
    fn every_migration_reference_is_registered() {
        let declared = MIGRATION.matches(" REFERENCES ").count();
        assert_eq!(declared, FOREIGN_KEYS.len());
    }

    #[test]
    fn relation_names_are_unique_per_owner() {
        let mut seen = HashSet::new();
        for relation in relations() {
            assert!(
                seen.insert((relation.owner, relation.name)),
                "duplicate {} on {}",
                relation.name,
                relation.owner.table()
            );
        }
    }

    #[test]
    fn each_foreign_key_yields_both_directions() {
        assert_eq!(relations().len(), FOREIGN_KEYS.len() * 2);
    }

    #[rstest]
    #[case(ResourceKind::ServiceCategory, "services", Cardinality::Many)]
    #[case(ResourceKind::Service, "category", Cardinality::One)]
    #[case(ResourceKind::Conversation, "messages", Cardinality::Many)]
    #[case(ResourceKind::Appointment, "payments", Cardinality::Many)]
    fn declares_expected_relation(
        #[case] owner: ResourceKind,
        #[case] name: &str,
        #[case] cardinality: Cardinality,
    ) {
        let found = relations_of(owner)
            .into_iter()
            .find(|relation| relation.name == name)
            .expect("relation declared");

        assert_eq!(found.cardinality, cardinality);
    }

    #[test]
    fn relation_serialises_table_names() {
        let value = serde_json::to_value(FOREIGN_KEYS.first().map(ForeignKey::one_relation))
            .expect("serialise");

        assert_eq!(
            value,
            serde_json::json!({
                "owner": "clients",
                "name": "user",
                "cardinality": "one",
                "target": "users",
                "foreignKey": "user_id"
            })
        );
    }
}
