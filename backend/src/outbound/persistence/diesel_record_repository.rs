//! PostgreSQL-backed record repositories.
//!
//! One generic adapter serves every resource. Each table gets its own
//! `RecordRepository` impl from `record_repository!`, which supplies the
//! table, its row structs and the canonical `ORDER BY`.

use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{RecordPorts, RecordRepository, RecordRepositoryError};
use crate::domain::records::*;
use crate::domain::resource::{Resource, with_resources};

use super::diesel_helpers::{lower, map_diesel_error, map_pool_error};
use super::models::*;
use super::pool::DbPool;
use super::schema::*;

/// Diesel-backed repository for the table behind `E`.
pub struct DieselRecordRepository<E> {
    pool: DbPool,
    _record: PhantomData<fn() -> E>,
}

impl<E> DieselRecordRepository<E> {
    /// Create a repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self {
            pool,
            _record: PhantomData,
        }
    }
}

impl<E> Clone for DieselRecordRepository<E> {
    fn clone(&self) -> Self {
        Self::new(self.pool.clone())
    }
}

macro_rules! list_order {
    ($table:ident, id) => {
        $table::id.asc()
    };
    ($table:ident, name) => {
        (lower($table::name).asc(), $table::name.asc(), $table::id.asc())
    };
}

macro_rules! record_repository {
    ($record:ty => $table:ident, $row:ty, $new_row:ty, order = $order:ident) => {
        #[async_trait]
        impl RecordRepository<$record> for DieselRecordRepository<$record> {
            async fn list(&self) -> Result<Vec<$record>, RecordRepositoryError> {
                let mut conn = self.pool.get().await.map_err(map_pool_error)?;
                let rows: Vec<$row> = $table::table
                    .select(<$row>::as_select())
                    .order_by(list_order!($table, $order))
                    .load(&mut conn)
                    .await
                    .map_err(map_diesel_error)?;
                Ok(rows.into_iter().map(<$record>::from).collect())
            }

            async fn find(&self, id: i32) -> Result<Option<$record>, RecordRepositoryError> {
                let mut conn = self.pool.get().await.map_err(map_pool_error)?;
                let row: Option<$row> = $table::table
                    .find(id)
                    .select(<$row>::as_select())
                    .first(&mut conn)
                    .await
                    .optional()
                    .map_err(map_diesel_error)?;
                Ok(row.map(<$record>::from))
            }

            async fn insert(
                &self,
                draft: <$record as Resource>::Draft,
            ) -> Result<$record, RecordRepositoryError> {
                let new_row = <$new_row>::from(draft);
                let mut conn = self.pool.get().await.map_err(map_pool_error)?;
                let row: $row = diesel::insert_into($table::table)
                    .values(&new_row)
                    .returning(<$row>::as_returning())
                    .get_result(&mut conn)
                    .await
                    .map_err(map_diesel_error)?;
                Ok(row.into())
            }

            async fn replace(
                &self,
                id: i32,
                draft: <$record as Resource>::Draft,
            ) -> Result<Option<$record>, RecordRepositoryError> {
                let changes = <$new_row>::from(draft);
                let mut conn = self.pool.get().await.map_err(map_pool_error)?;
                let row: Option<$row> = diesel::update($table::table.find(id))
                    .set(&changes)
                    .returning(<$row>::as_returning())
                    .get_result(&mut conn)
                    .await
                    .optional()
                    .map_err(map_diesel_error)?;
                Ok(row.map(<$record>::from))
            }
        }
    };
}

record_repository!(User => users, UserRow, NewUserRow, order = id);
record_repository!(Client => clients, ClientRow, NewClientRow, order = id);
record_repository!(ServiceProvider => service_providers, ServiceProviderRow, NewServiceProviderRow, order = id);
record_repository!(ServiceCategory => service_categories, ServiceCategoryRow, NewServiceCategoryRow, order = name);
record_repository!(Service => services, ServiceRow, NewServiceRow, order = id);
record_repository!(Appointment => appointments, AppointmentRow, NewAppointmentRow, order = id);
record_repository!(ServiceRequest => service_requests, ServiceRequestRow, NewServiceRequestRow, order = id);
record_repository!(Conversation => conversations, ConversationRow, NewConversationRow, order = id);
record_repository!(Message => messages, MessageRow, NewMessageRow, order = id);
record_repository!(Achievement => achievements, AchievementRow, NewAchievementRow, order = id);
record_repository!(AchievementProgress => achievement_progress, AchievementProgressRow, NewAchievementProgressRow, order = id);
record_repository!(AnalyticsEvent => analytics_events, AnalyticsEventRow, NewAnalyticsEventRow, order = id);
record_repository!(Payment => payments, PaymentRow, NewPaymentRow, order = id);
record_repository!(Webhook => webhooks, WebhookRow, NewWebhookRow, order = id);
record_repository!(WebhookEvent => webhook_events, WebhookEventRow, NewWebhookEventRow, order = id);
record_repository!(ReferralCode => referral_codes, ReferralCodeRow, NewReferralCodeRow, order = id);
record_repository!(ReferralStats => referral_stats, ReferralStatsRow, NewReferralStatsRow, order = id);
record_repository!(ReferralReward => referral_rewards, ReferralRewardRow, NewReferralRewardRow, order = id);
record_repository!(ProviderCredit => provider_credits, ProviderCreditRow, NewProviderCreditRow, order = id);
record_repository!(CreditPurchase => credit_purchases, CreditPurchaseRow, NewCreditPurchaseRow, order = id);
record_repository!(Location => locations, LocationRow, NewLocationRow, order = id);
record_repository!(LocationEvent => location_events, LocationEventRow, NewLocationEventRow, order = id);
record_repository!(Geofence => geofences, GeofenceRow, NewGeofenceRow, order = id);
record_repository!(RouteOptimization => route_optimizations, RouteOptimizationRow, NewRouteOptimizationRow, order = id);
record_repository!(DailyStats => daily_stats, DailyStatsRow, NewDailyStatsRow, order = id);
record_repository!(Language => languages, LanguageRow, NewLanguageRow, order = name);
record_repository!(UserLanguagePreference => user_language_preferences, UserLanguagePreferenceRow, NewUserLanguagePreferenceRow, order = id);
record_repository!(Partner => third_party_partners, PartnerRow, NewPartnerRow, order = id);
record_repository!(PartnerIntegration => partner_integrations, PartnerIntegrationRow, NewPartnerIntegrationRow, order = id);
record_repository!(Event => events, EventRow, NewEventRow, order = id);

macro_rules! register_diesel_repositories {
    ($($record:ty),* $(,)?) => {
        /// Diesel repositories for every resource, sharing `pool`.
        ///
        /// # Examples
        ///
        /// ```rust,no_run
        /// use marketplace::outbound::persistence::{DbPool, PoolConfig, diesel_record_ports};
        ///
        /// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
        /// let pool = DbPool::new(PoolConfig::new("postgres://localhost")).await?;
        /// let ports = diesel_record_ports(&pool);
        /// assert!(!ports.is_empty());
        /// # Ok(())
        /// # }
        /// ```
        pub fn diesel_record_ports(pool: &DbPool) -> RecordPorts {
            RecordPorts::default()
                $( .with::<$record>(Arc::new(DieselRecordRepository::<$record>::new(pool.clone()))) )*
        }
    };
}

with_resources!(register_diesel_repositories);
