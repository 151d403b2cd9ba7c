//! Gamification, analytics and community events.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::resource::{ListOrder, Resource, ResourceKind};

define_resource! {
    /// An achievement users can earn.
    Achievement: Achievement / NewAchievement {
        /// Unique name.
        name: String,
        /// What earns it.
        description: String,
        /// Points awarded.
        points: i32,
        /// Icon identifier.
        icon: Option<String>,
    }
}

define_resource! {
    /// A user's progress towards one achievement.
    AchievementProgress: AchievementProgress / NewAchievementProgress {
        /// Tracked account.
        user_id: i32,
        /// Tracked achievement.
        achievement_id: i32,
        /// Progress counter.
        progress: i32,
        /// Set once earned.
        completed_at: Option<DateTime<Utc>>,
    }
}

define_resource! {
    /// A recorded analytics event.
    AnalyticsEvent: AnalyticsEvent / NewAnalyticsEvent {
        /// Acting account, absent for anonymous traffic.
        user_id: Option<i32>,
        /// Event name.
        event_type: String,
        /// Arbitrary JSON payload.
        payload: Value,
    }
    stamped { occurred_at }
}

define_resource! {
    /// Per-provider daily aggregates.
    DailyStats: DailyStats / NewDailyStats {
        /// Aggregated provider.
        provider_id: i32,
        /// Day covered.
        stat_date: NaiveDate,
        /// Appointments booked.
        bookings: i32,
        /// Revenue in cents.
        revenue_cents: i64,
        /// Profile page views.
        profile_views: i32,
    }
}

define_resource! {
    /// A community event.
    Event: Event / NewEvent {
        /// Title.
        name: String,
        /// Details.
        description: Option<String>,
        /// Venue.
        location: Option<String>,
        /// Start time.
        starts_at: DateTime<Utc>,
        /// End time.
        ends_at: Option<DateTime<Utc>>,
    }
    stamped { created_at }
}
