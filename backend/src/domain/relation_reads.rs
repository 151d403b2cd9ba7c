//! [`RelationQuery`] assembled from per-table record repositories.
//!
//! Used when the server runs without a database. Each association is one
//! `list` call on the child repository followed by grouping in memory.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{RecordPorts, RecordRepository, RecordRepositoryError, RelationQuery, RelationQueryError};
use crate::domain::records::{
    Appointment, Client, Conversation, Message, Payment, Service, ServiceCategory,
    ServiceProvider, User,
};
use crate::domain::relations::{
    AppointmentDetails, CategoryWithServices, ConversationThread, ProviderProfile,
};
use crate::domain::resource::Resource;

impl From<RecordRepositoryError> for RelationQueryError {
    fn from(error: RecordRepositoryError) -> Self {
        match error {
            RecordRepositoryError::Connection { message } => Self::Connection { message },
            RecordRepositoryError::Query { message } => Self::Query { message },
        }
    }
}

/// Relation reads over a [`RecordPorts`] registry.
#[derive(Debug, Clone)]
pub struct RecordRelationQuery {
    ports: RecordPorts,
}

impl RecordRelationQuery {
    /// Build a query over `ports`.
    pub fn new(ports: RecordPorts) -> Self {
        Self { ports }
    }

    fn repo<E: Resource>(&self) -> Result<Arc<dyn RecordRepository<E>>, RelationQueryError> {
        self.ports.get::<E>().ok_or_else(|| {
            RelationQueryError::connection(format!(
                "no repository registered for {}",
                E::KIND.table()
            ))
        })
    }

    async fn find<E: Resource>(&self, id: i32) -> Result<Option<E>, RelationQueryError> {
        Ok(self.repo::<E>()?.find(id).await?)
    }

    async fn children<E: Resource>(
        &self,
        belongs: impl Fn(&E) -> bool + Send,
    ) -> Result<Vec<E>, RelationQueryError> {
        let rows = self.repo::<E>()?.list().await?;
        Ok(rows.into_iter().filter(|row| belongs(row)).collect())
    }
}

#[async_trait]
impl RelationQuery for RecordRelationQuery {
    async fn catalogue(&self) -> Result<Vec<CategoryWithServices>, RelationQueryError> {
        let categories = self.repo::<ServiceCategory>()?.list().await?;
        let mut by_category: HashMap<i32, Vec<Service>> = HashMap::new();
        for service in self.repo::<Service>()?.list().await? {
            by_category.entry(service.category_id).or_default().push(service);
        }

        Ok(categories
            .into_iter()
            .map(|category| CategoryWithServices {
                services: by_category.remove(&category.id).unwrap_or_default(),
                category,
            })
            .collect())
    }

    async fn provider_profile(
        &self,
        id: i32,
    ) -> Result<Option<ProviderProfile>, RelationQueryError> {
        let Some(provider) = self.find::<ServiceProvider>(id).await? else {
            return Ok(None);
        };
        let Some(user) = self.find::<User>(provider.user_id).await? else {
            return Err(RelationQueryError::query(format!(
                "provider {id} references missing user {}",
                provider.user_id
            )));
        };
        let services = self
            .children::<Service>(|service| service.provider_id == id)
            .await?;

        Ok(Some(ProviderProfile {
            provider,
            user,
            services,
        }))
    }

    async fn conversation_thread(
        &self,
        id: i32,
    ) -> Result<Option<ConversationThread>, RelationQueryError> {
        let Some(conversation) = self.find::<Conversation>(id).await? else {
            return Ok(None);
        };
        let mut messages = self
            .children::<Message>(|message| message.conversation_id == id)
            .await?;
        messages.sort_by_key(|message| (message.sent_at, message.id));

        Ok(Some(ConversationThread {
            conversation,
            messages,
        }))
    }

    async fn appointment_details(
        &self,
        id: i32,
    ) -> Result<Option<AppointmentDetails>, RelationQueryError> {
        let Some(appointment) = self.find::<Appointment>(id).await? else {
            return Ok(None);
        };
        let missing = |what: &str, target: i32| {
            RelationQueryError::query(format!("appointment {id} references missing {what} {target}"))
        };
        let client = self
            .find::<Client>(appointment.client_id)
            .await?
            .ok_or_else(|| missing("client", appointment.client_id))?;
        let provider = self
            .find::<ServiceProvider>(appointment.provider_id)
            .await?
            .ok_or_else(|| missing("provider", appointment.provider_id))?;
        let service = self
            .find::<Service>(appointment.service_id)
            .await?
            .ok_or_else(|| missing("service", appointment.service_id))?;
        let payments = self
            .children::<Payment>(|payment| payment.appointment_id == id)
            .await?;

        Ok(Some(AppointmentDetails {
            appointment,
            client,
            provider,
            service,
            payments,
        }))
    }
}
