//! PostgreSQL-backed relation reads.
//!
//! Each read model issues one query per association. Single-row parents are
//! joined through the `joinable!` declarations in the schema; child
//! collections are loaded with one filtered `SELECT` and grouped in memory.

use std::collections::HashMap;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{RelationQuery, RelationQueryError};
use crate::domain::records::{
    Appointment, Client, Conversation, Message, Payment, Service, ServiceCategory,
    ServiceProvider, User,
};
use crate::domain::relations::{
    AppointmentDetails, CategoryWithServices, ConversationThread, ProviderProfile,
};

use super::diesel_helpers::{lower, map_diesel_error, map_pool_error};
use super::models::{
    AppointmentRow, ClientRow, ConversationRow, MessageRow, PaymentRow, ServiceCategoryRow,
    ServiceProviderRow, ServiceRow, UserRow,
};
use super::pool::DbPool;
use super::schema::{
    appointments, clients, conversations, messages, payments, service_categories,
    service_providers, services, users,
};

/// Diesel-backed implementation of [`RelationQuery`].
#[derive(Clone)]
pub struct DieselRelationQuery {
    pool: DbPool,
}

impl DieselRelationQuery {
    /// Create a query adapter with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RelationQuery for DieselRelationQuery {
    async fn catalogue(&self) -> Result<Vec<CategoryWithServices>, RelationQueryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let categories: Vec<ServiceCategoryRow> = service_categories::table
            .select(ServiceCategoryRow::as_select())
            .order_by((
                lower(service_categories::name).asc(),
                service_categories::name.asc(),
                service_categories::id.asc(),
            ))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        let category_ids: Vec<i32> = categories.iter().map(|row| row.id).collect();
        let service_rows: Vec<ServiceRow> = services::table
            .filter(services::category_id.eq_any(category_ids))
            .select(ServiceRow::as_select())
            .order_by(services::id.asc())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        let mut by_category: HashMap<i32, Vec<Service>> = HashMap::new();
        for row in service_rows {
            by_category
                .entry(row.category_id)
                .or_default()
                .push(Service::from(row));
        }

        Ok(categories
            .into_iter()
            .map(|row| CategoryWithServices {
                services: by_category.remove(&row.id).unwrap_or_default(),
                category: ServiceCategory::from(row),
            })
            .collect())
    }

    async fn provider_profile(
        &self,
        id: i32,
    ) -> Result<Option<ProviderProfile>, RelationQueryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let found: Option<(ServiceProviderRow, UserRow)> = service_providers::table
            .inner_join(users::table)
            .filter(service_providers::id.eq(id))
            .select((ServiceProviderRow::as_select(), UserRow::as_select()))
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        let Some((provider, user)) = found else {
            return Ok(None);
        };

        let service_rows: Vec<ServiceRow> = services::table
            .filter(services::provider_id.eq(id))
            .select(ServiceRow::as_select())
            .order_by(services::id.asc())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(Some(ProviderProfile {
            provider: ServiceProvider::from(provider),
            user: User::from(user),
            services: service_rows.into_iter().map(Service::from).collect(),
        }))
    }

    async fn conversation_thread(
        &self,
        id: i32,
    ) -> Result<Option<ConversationThread>, RelationQueryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let found: Option<ConversationRow> = conversations::table
            .find(id)
            .select(ConversationRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        let Some(conversation) = found else {
            return Ok(None);
        };

        let message_rows: Vec<MessageRow> = messages::table
            .filter(messages::conversation_id.eq(id))
            .select(MessageRow::as_select())
            .order_by((messages::sent_at.asc(), messages::id.asc()))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(Some(ConversationThread {
            conversation: Conversation::from(conversation),
            messages: message_rows.into_iter().map(Message::from).collect(),
        }))
    }

    async fn appointment_details(
        &self,
        id: i32,
    ) -> Result<Option<AppointmentDetails>, RelationQueryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let found: Option<(AppointmentRow, ClientRow, ServiceProviderRow, ServiceRow)> =
            appointments::table
                .inner_join(clients::table)
                .inner_join(service_providers::table)
                .inner_join(services::table)
                .filter(appointments::id.eq(id))
                .select((
                    AppointmentRow::as_select(),
                    ClientRow::as_select(),
                    ServiceProviderRow::as_select(),
                    ServiceRow::as_select(),
                ))
                .first(&mut conn)
                .await
                .optional()
                .map_err(map_diesel_error)?;
        let Some((appointment, client, provider, service)) = found else {
            return Ok(None);
        };

        let payment_rows: Vec<PaymentRow> = payments::table
            .filter(payments::appointment_id.eq(id))
            .select(PaymentRow::as_select())
            .order_by(payments::id.asc())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(Some(AppointmentDetails {
            appointment: Appointment::from(appointment),
            client: Client::from(client),
            provider: ServiceProvider::from(provider),
            service: Service::from(service),
            payments: payment_rows.into_iter().map(Payment::from).collect(),
        }))
    }
}
