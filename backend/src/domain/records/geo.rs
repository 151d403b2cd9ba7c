//! Location tracking, geofences and route planning.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::resource::{ListOrder, Resource, ResourceKind};

define_resource! {
    /// A recorded position for an account.
    Location: Location / NewLocation {
        /// Tracked account.
        user_id: i32,
        /// WGS84 latitude.
        latitude: f64,
        /// WGS84 longitude.
        longitude: f64,
        /// Resolved address.
        address: Option<String>,
    }
    stamped { recorded_at }
}

define_resource! {
    /// A circular area that triggers location events.
    Geofence: Geofence / NewGeofence {
        /// Label.
        name: String,
        /// Centre latitude.
        latitude: f64,
        /// Centre longitude.
        longitude: f64,
        /// Radius in metres.
        radius_meters: f64,
        /// Whether the fence is evaluated.
        active: bool,
    }
    stamped { created_at }
}

define_resource! {
    /// An enter or exit event for a location.
    LocationEvent: LocationEvent / NewLocationEvent {
        /// Triggering location.
        location_id: i32,
        /// Fence involved, if any.
        geofence_id: Option<i32>,
        /// Event name such as `enter` or `exit`.
        event_type: String,
    }
    stamped { occurred_at }
}

define_resource! {
    /// A planned route for a provider's day.
    RouteOptimization: RouteOptimization / NewRouteOptimization {
        /// Travelling provider.
        provider_id: i32,
        /// Day planned.
        route_date: NaiveDate,
        /// Ordered stops as JSON.
        stops: Value,
        /// Total distance in metres.
        total_distance_meters: Option<f64>,
    }
    stamped { created_at }
}
