//! Domain records for every marketplace table.
//!
//! Each record pairs with a `New*` draft holding the client-supplied columns.
//! Drafts reject unknown fields. Server-stamped timestamps appear on records
//! only and are set when the row is first stored.

macro_rules! define_resource {
    (@order) => { ListOrder::ById };
    (@order name) => { ListOrder::ByName };

    (@name_key) => {};
    (@name_key name) => {
        fn name_key(&self) -> Option<&str> {
            Some(self.name.as_str())
        }
    };

    (@from_draft $draft:ident { $($field:ident),* } {}) => {
        fn from_draft(id: i32, draft: $draft, _now: DateTime<Utc>) -> Self {
            Self { id, $( $field: draft.$field, )* }
        }
    };
    (@from_draft $draft:ident { $($field:ident),* } { $($stamp:ident),+ }) => {
        fn from_draft(id: i32, draft: $draft, now: DateTime<Utc>) -> Self {
            Self { id, $( $field: draft.$field, )* $( $stamp: now, )+ }
        }
    };

    (
        $(#[$meta:meta])*
        $kind:ident: $record:ident / $draft:ident $(, order = $order:ident)? {
            $( $(#[$fmeta:meta])* $field:ident : $ty:ty ),* $(,)?
        }
        $( stamped { $( $(#[$smeta:meta])* $stamp:ident ),* $(,)? } )?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct $record {
            /// Surrogate primary key.
            pub id: i32,
            $( $(#[$fmeta])* pub $field: $ty, )*
            $($( $(#[$smeta])* pub $stamp: DateTime<Utc>, )*)?
        }

        #[doc = concat!("Client-supplied columns of [`", stringify!($record), "`].")]
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase", deny_unknown_fields)]
        pub struct $draft {
            $( $(#[$fmeta])* pub $field: $ty, )*
        }

        impl Resource for $record {
            type Draft = $draft;
            const KIND: ResourceKind = ResourceKind::$kind;
            const ORDER: ListOrder = define_resource!(@order $($order)?);

            fn id(&self) -> i32 {
                self.id
            }

            define_resource!(@name_key $($order)?);
            define_resource!(@from_draft $draft { $($field),* } { $($($stamp),*)? });

            fn replace_with(&self, draft: $draft) -> Self {
                Self {
                    id: self.id,
                    $( $field: draft.$field, )*
                    $($( $stamp: self.$stamp, )*)?
                }
            }
        }
    };
}

mod accounts;
mod bookings;
mod catalogue;
mod engagement;
mod geo;
mod localisation;
mod messaging;
mod partners;
mod payments;
mod referrals;

pub use accounts::{Client, NewClient, NewServiceProvider, NewUser, ServiceProvider, User};
pub use bookings::{Appointment, NewAppointment, NewServiceRequest, ServiceRequest};
pub use catalogue::{NewService, NewServiceCategory, Service, ServiceCategory};
pub use engagement::{
    Achievement, AchievementProgress, AnalyticsEvent, DailyStats, Event, NewAchievement,
    NewAchievementProgress, NewAnalyticsEvent, NewDailyStats, NewEvent,
};
pub use geo::{
    Geofence, Location, LocationEvent, NewGeofence, NewLocation, NewLocationEvent,
    NewRouteOptimization, RouteOptimization,
};
pub use localisation::{Language, NewLanguage, NewUserLanguagePreference, UserLanguagePreference};
pub use messaging::{Conversation, Message, NewConversation, NewMessage};
pub use partners::{NewPartner, NewPartnerIntegration, Partner, PartnerIntegration};
pub use payments::{
    CreditPurchase, NewCreditPurchase, NewPayment, NewProviderCredit, NewWebhook,
    NewWebhookEvent, Payment, ProviderCredit, Webhook, WebhookEvent,
};
pub use referrals::{
    NewReferralCode, NewReferralReward, NewReferralStats, ReferralCode, ReferralReward,
    ReferralStats,
};
