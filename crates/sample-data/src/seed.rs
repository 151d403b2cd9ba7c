//! Generated sample record types.
//!
//! These types describe rows to insert without depending on backend domain
//! types. The backend converts them into its own drafts at the point of use.

use serde::{Deserialize, Serialize};

/// Marketplace role assigned to a generated account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleSeed {
    /// Books services.
    Client,
    /// Offers services.
    Provider,
}

impl RoleSeed {
    /// Returns the value stored in the `users.role` column.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Client => "client",
            Self::Provider => "provider",
        }
    }
}

/// A generated user account.
///
/// # Example
///
/// ```
/// use sample_data::{PersonSeed, RoleSeed};
///
/// let person = PersonSeed {
///     username: "ada_lovelace".to_owned(),
///     email: "ada_lovelace@example.com".to_owned(),
///     full_name: "Ada Lovelace".to_owned(),
///     phone: None,
///     role: RoleSeed::Client,
/// };
///
/// assert_eq!(person.role.as_str(), "client");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonSeed {
    /// Unique login name.
    pub username: String,
    /// Unique contact address.
    pub email: String,
    /// Display name.
    pub full_name: String,
    /// Optional contact number.
    pub phone: Option<String>,
    /// Marketplace role.
    pub role: RoleSeed,
}

/// A generated client with their account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientSeed {
    /// Owning account.
    pub person: PersonSeed,
    /// Street address used for bookings.
    pub address: String,
}

/// A service offered by a generated provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceSeed {
    /// Name of the category the service belongs to.
    pub category: String,
    /// Service title.
    pub name: String,
    /// Short description.
    pub description: String,
    /// Price in cents.
    pub price_cents: i64,
    /// Expected duration.
    pub duration_minutes: i32,
}

/// A generated provider with their account and services.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderSeed {
    /// Owning account.
    pub person: PersonSeed,
    /// Trading name.
    pub business_name: String,
    /// Short pitch.
    pub description: String,
    /// Hourly rate in cents.
    pub hourly_rate_cents: i64,
    /// Average review score between 0 and 5.
    pub rating: f64,
    /// Whether the provider passed verification.
    pub verified: bool,
    /// Services the provider offers.
    pub services: Vec<ServiceSeed>,
}

/// A fixed service category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySeed {
    /// Unique category name.
    pub name: String,
    /// Short description.
    pub description: String,
    /// Icon identifier used by clients.
    pub icon: String,
}

/// A fixed interface language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageSeed {
    /// ISO 639-1 code.
    pub code: String,
    /// English name.
    pub name: String,
}

/// A fixed achievement definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementSeed {
    /// Unique achievement name.
    pub name: String,
    /// What earns the achievement.
    pub description: String,
    /// Points awarded.
    pub points: i32,
}

/// A fixed third-party partner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerSeed {
    /// Unique partner name.
    pub name: String,
    /// Partner category, for example `payments`.
    pub partner_type: String,
    /// Public website.
    pub website: String,
}

/// Everything one seed run inserts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleDataset {
    /// Service categories.
    pub categories: Vec<CategorySeed>,
    /// Interface languages.
    pub languages: Vec<LanguageSeed>,
    /// Achievement definitions.
    pub achievements: Vec<AchievementSeed>,
    /// Third-party partners.
    pub partners: Vec<PartnerSeed>,
    /// Generated clients.
    pub clients: Vec<ClientSeed>,
    /// Generated providers.
    pub providers: Vec<ProviderSeed>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_seed_serializes_lowercase() {
        let client = serde_json::to_string(&RoleSeed::Client).expect("serialize");
        let provider = serde_json::to_string(&RoleSeed::Provider).expect("serialize");
        assert_eq!(client, "\"client\"");
        assert_eq!(provider, "\"provider\"");
    }

    #[test]
    fn service_seed_serializes_to_camel_case() {
        let service = ServiceSeed {
            category: "Plumbing".to_owned(),
            name: "Leak repair".to_owned(),
            description: "Fix a dripping tap".to_owned(),
            price_cents: 6500,
            duration_minutes: 60,
        };

        let json = serde_json::to_value(&service).expect("serialize");

        assert_eq!(json["priceCents"], 6500);
        assert_eq!(json["durationMinutes"], 60);
    }
}
