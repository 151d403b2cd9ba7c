//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain. Each table gets a `*Row` read through
//! `as_select()` and a `New*Row` used for both inserts and full-overwrite
//! updates. `treat_none_as_null` makes an update write `NULL` for absent
//! optional columns instead of skipping them.

use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;
use serde_json::Value;

use crate::domain::records::*;

use super::schema::*;

macro_rules! table_rows {
    (
        $table:ident: $row:ident => $record:ident, $new_row:ident <= $draft:ident {
            $( $field:ident : $ty:ty ),* $(,)?
        }
        $( stamped { $( $stamp:ident ),* } )?
    ) => {
        #[derive(Debug, Clone, Queryable, Selectable)]
        #[diesel(table_name = $table)]
        #[diesel(check_for_backend(diesel::pg::Pg))]
        pub(crate) struct $row {
            pub id: i32,
            $( pub $field: $ty, )*
            $($( pub $stamp: DateTime<Utc>, )*)?
        }

        impl From<$row> for $record {
            fn from(row: $row) -> Self {
                Self {
                    id: row.id,
                    $( $field: row.$field, )*
                    $($( $stamp: row.$stamp, )*)?
                }
            }
        }

        #[derive(Debug, Clone, Insertable, AsChangeset)]
        #[diesel(table_name = $table)]
        #[diesel(treat_none_as_null = true)]
        pub(crate) struct $new_row {
            $( pub $field: $ty, )*
        }

        impl From<$draft> for $new_row {
            fn from(draft: $draft) -> Self {
                Self {
                    $( $field: draft.$field, )*
                }
            }
        }
    };
}

table_rows! {
    users: UserRow => User, NewUserRow <= NewUser {
        username: String,
        email: String,
        full_name: String,
        role: String,
        phone: Option<String>,
    }
    stamped { created_at }
}

table_rows! {
    clients: ClientRow => Client, NewClientRow <= NewClient {
        user_id: i32,
        address: Option<String>,
    }
    stamped { created_at }
}

table_rows! {
    service_providers: ServiceProviderRow => ServiceProvider, NewServiceProviderRow <= NewServiceProvider {
        user_id: i32,
        business_name: String,
        description: Option<String>,
        hourly_rate_cents: Option<i64>,
        rating: f64,
        verified: bool,
    }
    stamped { created_at }
}

table_rows! {
    service_categories: ServiceCategoryRow => ServiceCategory, NewServiceCategoryRow <= NewServiceCategory {
        name: String,
        description: Option<String>,
        icon: Option<String>,
    }
}

table_rows! {
    services: ServiceRow => Service, NewServiceRow <= NewService {
        provider_id: i32,
        category_id: i32,
        name: String,
        description: Option<String>,
        price_cents: i64,
        duration_minutes: i32,
    }
    stamped { created_at }
}

table_rows! {
    appointments: AppointmentRow => Appointment, NewAppointmentRow <= NewAppointment {
        client_id: i32,
        provider_id: i32,
        service_id: i32,
        scheduled_at: DateTime<Utc>,
        status: String,
        notes: Option<String>,
    }
    stamped { created_at }
}

table_rows! {
    service_requests: ServiceRequestRow => ServiceRequest, NewServiceRequestRow <= NewServiceRequest {
        client_id: i32,
        category_id: Option<i32>,
        title: String,
        description: String,
        budget_cents: Option<i64>,
        status: String,
    }
    stamped { created_at }
}

table_rows! {
    conversations: ConversationRow => Conversation, NewConversationRow <= NewConversation {
        client_id: i32,
        provider_id: i32,
    }
    stamped { created_at }
}

table_rows! {
    messages: MessageRow => Message, NewMessageRow <= NewMessage {
        conversation_id: i32,
        sender_id: i32,
        body: String,
        read_at: Option<DateTime<Utc>>,
    }
    stamped { sent_at }
}

table_rows! {
    achievements: AchievementRow => Achievement, NewAchievementRow <= NewAchievement {
        name: String,
        description: String,
        points: i32,
        icon: Option<String>,
    }
}

table_rows! {
    achievement_progress: AchievementProgressRow => AchievementProgress, NewAchievementProgressRow <= NewAchievementProgress {
        user_id: i32,
        achievement_id: i32,
        progress: i32,
        completed_at: Option<DateTime<Utc>>,
    }
}

table_rows! {
    analytics_events: AnalyticsEventRow => AnalyticsEvent, NewAnalyticsEventRow <= NewAnalyticsEvent {
        user_id: Option<i32>,
        event_type: String,
        payload: Value,
    }
    stamped { occurred_at }
}

table_rows! {
    payments: PaymentRow => Payment, NewPaymentRow <= NewPayment {
        appointment_id: i32,
        amount_cents: i64,
        currency: String,
        status: String,
        gateway_reference: Option<String>,
    }
    stamped { created_at }
}

table_rows! {
    webhooks: WebhookRow => Webhook, NewWebhookRow <= NewWebhook {
        url: String,
        event_type: String,
        secret: Option<String>,
        active: bool,
    }
    stamped { created_at }
}

table_rows! {
    webhook_events: WebhookEventRow => WebhookEvent, NewWebhookEventRow <= NewWebhookEvent {
        webhook_id: i32,
        event_type: String,
        payload: Value,
        delivered: bool,
        attempts: i32,
    }
    stamped { created_at }
}

table_rows! {
    referral_codes: ReferralCodeRow => ReferralCode, NewReferralCodeRow <= NewReferralCode {
        user_id: i32,
        code: String,
        uses: i32,
    }
    stamped { created_at }
}

table_rows! {
    referral_stats: ReferralStatsRow => ReferralStats, NewReferralStatsRow <= NewReferralStats {
        user_id: i32,
        total_referrals: i32,
        successful_referrals: i32,
        total_rewards_cents: i64,
    }
}

table_rows! {
    referral_rewards: ReferralRewardRow => ReferralReward, NewReferralRewardRow <= NewReferralReward {
        referral_code_id: i32,
        referred_user_id: i32,
        reward_cents: i64,
        status: String,
    }
    stamped { created_at }
}

table_rows! {
    provider_credits: ProviderCreditRow => ProviderCredit, NewProviderCreditRow <= NewProviderCredit {
        provider_id: i32,
        balance: i32,
    }
}

table_rows! {
    credit_purchases: CreditPurchaseRow => CreditPurchase, NewCreditPurchaseRow <= NewCreditPurchase {
        provider_id: i32,
        credits: i32,
        amount_cents: i64,
    }
    stamped { purchased_at }
}

table_rows! {
    locations: LocationRow => Location, NewLocationRow <= NewLocation {
        user_id: i32,
        latitude: f64,
        longitude: f64,
        address: Option<String>,
    }
    stamped { recorded_at }
}

table_rows! {
    location_events: LocationEventRow => LocationEvent, NewLocationEventRow <= NewLocationEvent {
        location_id: i32,
        geofence_id: Option<i32>,
        event_type: String,
    }
    stamped { occurred_at }
}

table_rows! {
    geofences: GeofenceRow => Geofence, NewGeofenceRow <= NewGeofence {
        name: String,
        latitude: f64,
        longitude: f64,
        radius_meters: f64,
        active: bool,
    }
    stamped { created_at }
}

table_rows! {
    route_optimizations: RouteOptimizationRow => RouteOptimization, NewRouteOptimizationRow <= NewRouteOptimization {
        provider_id: i32,
        route_date: NaiveDate,
        stops: Value,
        total_distance_meters: Option<f64>,
    }
    stamped { created_at }
}

table_rows! {
    daily_stats: DailyStatsRow => DailyStats, NewDailyStatsRow <= NewDailyStats {
        provider_id: i32,
        stat_date: NaiveDate,
        bookings: i32,
        revenue_cents: i64,
        profile_views: i32,
    }
}

table_rows! {
    languages: LanguageRow => Language, NewLanguageRow <= NewLanguage {
        code: String,
        name: String,
    }
}

table_rows! {
    user_language_preferences: UserLanguagePreferenceRow => UserLanguagePreference, NewUserLanguagePreferenceRow <= NewUserLanguagePreference {
        user_id: i32,
        language_id: i32,
        is_primary: bool,
    }
}

table_rows! {
    third_party_partners: PartnerRow => Partner, NewPartnerRow <= NewPartner {
        name: String,
        partner_type: String,
        website: Option<String>,
        active: bool,
    }
    stamped { created_at }
}

table_rows! {
    partner_integrations: PartnerIntegrationRow => PartnerIntegration, NewPartnerIntegrationRow <= NewPartnerIntegration {
        partner_id: i32,
        provider_id: i32,
        external_ref: Option<String>,
        status: String,
    }
    stamped { created_at }
}

table_rows! {
    events: EventRow => Event, NewEventRow <= NewEvent {
        name: String,
        description: Option<String>,
        location: Option<String>,
        starts_at: DateTime<Utc>,
        ends_at: Option<DateTime<Utc>>,
    }
    stamped { created_at }
}

/// Insertable struct recording one applied seed run.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = sample_data_runs)]
pub(crate) struct NewSampleDataRunRow<'a> {
    pub seed_key: &'a str,
    pub seed: i64,
    pub client_count: i32,
    pub provider_count: i32,
}
