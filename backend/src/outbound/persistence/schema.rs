//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the database migrations exactly. They are used
//! by Diesel for compile-time query validation and type-safe SQL generation.
//!
//! # Maintenance
//!
//! When migrations change the schema, update this file to match. The
//! `diesel print-schema` command can generate these definitions from a live
//! database.

diesel::table! {
    /// Registered accounts.
    users (id) {
        id -> Int4,
        username -> Text,
        email -> Text,
        full_name -> Text,
        role -> Text,
        phone -> Nullable<Text>,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Client profiles, one per booking user.
    clients (id) {
        id -> Int4,
        user_id -> Int4,
        address -> Nullable<Text>,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Provider profiles offering services.
    service_providers (id) {
        id -> Int4,
        user_id -> Int4,
        business_name -> Text,
        description -> Nullable<Text>,
        hourly_rate_cents -> Nullable<Int8>,
        rating -> Float8,
        verified -> Bool,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Service categories; listed ordered by name.
    service_categories (id) {
        id -> Int4,
        name -> Text,
        description -> Nullable<Text>,
        icon -> Nullable<Text>,
    }
}

diesel::table! {
    /// Services offered by providers.
    services (id) {
        id -> Int4,
        provider_id -> Int4,
        category_id -> Int4,
        name -> Text,
        description -> Nullable<Text>,
        price_cents -> Int8,
        duration_minutes -> Int4,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Booked appointments.
    appointments (id) {
        id -> Int4,
        client_id -> Int4,
        provider_id -> Int4,
        service_id -> Int4,
        scheduled_at -> Timestamptz,
        status -> Text,
        notes -> Nullable<Text>,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Open requests posted by clients.
    service_requests (id) {
        id -> Int4,
        client_id -> Int4,
        category_id -> Nullable<Int4>,
        title -> Text,
        description -> Text,
        budget_cents -> Nullable<Int8>,
        status -> Text,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Client-provider conversations.
    conversations (id) {
        id -> Int4,
        client_id -> Int4,
        provider_id -> Int4,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Messages within conversations.
    messages (id) {
        id -> Int4,
        conversation_id -> Int4,
        sender_id -> Int4,
        body -> Text,
        read_at -> Nullable<Timestamptz>,
        sent_at -> Timestamptz,
    }
}

diesel::table! {
    /// Achievement definitions.
    achievements (id) {
        id -> Int4,
        name -> Text,
        description -> Text,
        points -> Int4,
        icon -> Nullable<Text>,
    }
}

diesel::table! {
    /// Per-user achievement progress.
    achievement_progress (id) {
        id -> Int4,
        user_id -> Int4,
        achievement_id -> Int4,
        progress -> Int4,
        completed_at -> Nullable<Timestamptz>,
    }
}

diesel::table! {
    /// Raw analytics events.
    analytics_events (id) {
        id -> Int4,
        user_id -> Nullable<Int4>,
        event_type -> Text,
        payload -> Jsonb,
        occurred_at -> Timestamptz,
    }
}

diesel::table! {
    /// Payments against appointments.
    payments (id) {
        id -> Int4,
        appointment_id -> Int4,
        amount_cents -> Int8,
        currency -> Text,
        status -> Text,
        gateway_reference -> Nullable<Text>,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Outbound webhook registrations.
    webhooks (id) {
        id -> Int4,
        url -> Text,
        event_type -> Text,
        secret -> Nullable<Text>,
        active -> Bool,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Webhook delivery attempts.
    webhook_events (id) {
        id -> Int4,
        webhook_id -> Int4,
        event_type -> Text,
        payload -> Jsonb,
        delivered -> Bool,
        attempts -> Int4,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Referral codes owned by users.
    referral_codes (id) {
        id -> Int4,
        user_id -> Int4,
        code -> Text,
        uses -> Int4,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Aggregated referral counters.
    referral_stats (id) {
        id -> Int4,
        user_id -> Int4,
        total_referrals -> Int4,
        successful_referrals -> Int4,
        total_rewards_cents -> Int8,
    }
}

diesel::table! {
    /// Rewards earned through referral codes.
    referral_rewards (id) {
        id -> Int4,
        referral_code_id -> Int4,
        referred_user_id -> Int4,
        reward_cents -> Int8,
        status -> Text,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Provider credit balances.
    provider_credits (id) {
        id -> Int4,
        provider_id -> Int4,
        balance -> Int4,
    }
}

diesel::table! {
    /// Credit top-ups.
    credit_purchases (id) {
        id -> Int4,
        provider_id -> Int4,
        credits -> Int4,
        amount_cents -> Int8,
        purchased_at -> Timestamptz,
    }
}

diesel::table! {
    /// Recorded user locations.
    locations (id) {
        id -> Int4,
        user_id -> Int4,
        latitude -> Float8,
        longitude -> Float8,
        address -> Nullable<Text>,
        recorded_at -> Timestamptz,
    }
}

diesel::table! {
    /// Named circular areas.
    geofences (id) {
        id -> Int4,
        name -> Text,
        latitude -> Float8,
        longitude -> Float8,
        radius_meters -> Float8,
        active -> Bool,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Geofence enter and exit events.
    location_events (id) {
        id -> Int4,
        location_id -> Int4,
        geofence_id -> Nullable<Int4>,
        event_type -> Text,
        occurred_at -> Timestamptz,
    }
}

diesel::table! {
    /// Optimised provider routes for one day.
    route_optimizations (id) {
        id -> Int4,
        provider_id -> Int4,
        route_date -> Date,
        stops -> Jsonb,
        total_distance_meters -> Nullable<Float8>,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Per-provider daily counters.
    daily_stats (id) {
        id -> Int4,
        provider_id -> Int4,
        stat_date -> Date,
        bookings -> Int4,
        revenue_cents -> Int8,
        profile_views -> Int4,
    }
}

diesel::table! {
    /// Supported languages; listed ordered by name.
    languages (id) {
        id -> Int4,
        code -> Text,
        name -> Text,
    }
}

diesel::table! {
    /// Languages a user speaks.
    user_language_preferences (id) {
        id -> Int4,
        user_id -> Int4,
        language_id -> Int4,
        is_primary -> Bool,
    }
}

diesel::table! {
    /// External partners.
    third_party_partners (id) {
        id -> Int4,
        name -> Text,
        partner_type -> Text,
        website -> Nullable<Text>,
        active -> Bool,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Partner links to providers.
    partner_integrations (id) {
        id -> Int4,
        partner_id -> Int4,
        provider_id -> Int4,
        external_ref -> Nullable<Text>,
        status -> Text,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Community events.
    events (id) {
        id -> Int4,
        name -> Text,
        description -> Nullable<Text>,
        location -> Nullable<Text>,
        starts_at -> Timestamptz,
        ends_at -> Nullable<Timestamptz>,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Seed runs applied by the sample data seeder.
    sample_data_runs (seed_key) {
        seed_key -> Text,
        seed -> Int8,
        client_count -> Int4,
        provider_count -> Int4,
        seeded_at -> Timestamptz,
    }
}

diesel::joinable!(clients -> users (user_id));
diesel::joinable!(service_providers -> users (user_id));
diesel::joinable!(services -> service_providers (provider_id));
diesel::joinable!(services -> service_categories (category_id));
diesel::joinable!(appointments -> clients (client_id));
diesel::joinable!(appointments -> service_providers (provider_id));
diesel::joinable!(appointments -> services (service_id));
diesel::joinable!(service_requests -> clients (client_id));
diesel::joinable!(service_requests -> service_categories (category_id));
diesel::joinable!(conversations -> clients (client_id));
diesel::joinable!(conversations -> service_providers (provider_id));
diesel::joinable!(messages -> conversations (conversation_id));
diesel::joinable!(messages -> users (sender_id));
diesel::joinable!(achievement_progress -> users (user_id));
diesel::joinable!(achievement_progress -> achievements (achievement_id));
diesel::joinable!(analytics_events -> users (user_id));
diesel::joinable!(payments -> appointments (appointment_id));
diesel::joinable!(webhook_events -> webhooks (webhook_id));
diesel::joinable!(referral_codes -> users (user_id));
diesel::joinable!(referral_stats -> users (user_id));
diesel::joinable!(referral_rewards -> referral_codes (referral_code_id));
diesel::joinable!(referral_rewards -> users (referred_user_id));
diesel::joinable!(provider_credits -> service_providers (provider_id));
diesel::joinable!(credit_purchases -> service_providers (provider_id));
diesel::joinable!(locations -> users (user_id));
diesel::joinable!(location_events -> locations (location_id));
diesel::joinable!(location_events -> geofences (geofence_id));
diesel::joinable!(route_optimizations -> service_providers (provider_id));
diesel::joinable!(daily_stats -> service_providers (provider_id));
diesel::joinable!(user_language_preferences -> users (user_id));
diesel::joinable!(user_language_preferences -> languages (language_id));
diesel::joinable!(partner_integrations -> third_party_partners (partner_id));
diesel::joinable!(partner_integrations -> service_providers (provider_id));

diesel::allow_tables_to_appear_in_same_query!(
    users,
    clients,
    service_providers,
    service_categories,
    services,
    appointments,
    service_requests,
    conversations,
    messages,
    achievements,
    achievement_progress,
    analytics_events,
    payments,
    webhooks,
    webhook_events,
    referral_codes,
    referral_stats,
    referral_rewards,
    provider_credits,
    credit_purchases,
    locations,
    geofences,
    location_events,
    route_optimizations,
    daily_stats,
    languages,
    user_language_preferences,
    third_party_partners,
    partner_integrations,
    events,
    sample_data_runs,
);
