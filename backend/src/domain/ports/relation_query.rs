//! Driving port for eager-loaded relation reads.
//!
//! Each method resolves one read model from [`crate::domain::relations`].
//! Adapters must issue one query per association rather than one per row.

use async_trait::async_trait;

use crate::domain::relations::{
    AppointmentDetails, CategoryWithServices, ConversationThread, ProviderProfile,
};

use super::define_port_error;

define_port_error! {
    /// Errors raised while loading relation read models.
    pub enum RelationQueryError {
        /// Repository connection could not be established.
        Connection => "relation query connection failed",
        /// Query failed during execution or row conversion.
        Query => "relation query failed",
    }
}

/// Port for loading records together with their associations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RelationQuery: Send + Sync {
    /// Every category ordered by name, each with its services.
    async fn catalogue(&self) -> Result<Vec<CategoryWithServices>, RelationQueryError>;

    /// Provider `id` with their account and services.
    async fn provider_profile(
        &self,
        id: i32,
    ) -> Result<Option<ProviderProfile>, RelationQueryError>;

    /// Conversation `id` with its messages.
    async fn conversation_thread(
        &self,
        id: i32,
    ) -> Result<Option<ConversationThread>, RelationQueryError>;

    /// Appointment `id` with its client, provider, service and payments.
    async fn appointment_details(
        &self,
        id: i32,
    ) -> Result<Option<AppointmentDetails>, RelationQueryError>;
}

/// Relation query over an empty store.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureRelationQuery;

#[async_trait]
impl RelationQuery for FixtureRelationQuery {
    async fn catalogue(&self) -> Result<Vec<CategoryWithServices>, RelationQueryError> {
        Ok(Vec::new())
    }

    async fn provider_profile(
        &self,
        _id: i32,
    ) -> Result<Option<ProviderProfile>, RelationQueryError> {
        Ok(None)
    }

    async fn conversation_thread(
        &self,
        _id: i32,
    ) -> Result<Option<ConversationThread>, RelationQueryError> {
        Ok(None)
    }

    async fn appointment_details(
        &self,
        _id: i32,
    ) -> Result<Option<AppointmentDetails>, RelationQueryError> {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[tokio::test]
    async fn fixture_query_is_empty() {
        let query = FixtureRelationQuery;

        assert!(query.catalogue().await.expect("catalogue").is_empty());
        assert!(query.provider_profile(1).await.expect("profile").is_none());
        assert!(query.conversation_thread(1).await.expect("thread").is_none());
        assert!(query.appointment_details(1).await.expect("details").is_none());
    }
}
