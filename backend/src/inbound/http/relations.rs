//! Eager-loaded relation reads and the relation registry.
//!
//! ```text
//! GET /api/catalogue
//! GET /api/providers/{id}/profile
//! GET /api/conversations/{id}/thread
//! GET /api/appointments/{id}/details
//! GET /api/relations[?owner=<table>]
//! ```

use actix_web::{get, web};
use serde::Deserialize;
use tracing::error;

use crate::domain::Error;
use crate::domain::ports::RelationQueryError;
use crate::domain::relations::{
    AppointmentDetails, CategoryWithServices, ConversationThread, ProviderProfile, Relation,
    relations, relations_of,
};
use crate::domain::resource::ResourceKind;
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

fn internal(message: &'static str) -> impl FnOnce(RelationQueryError) -> Error {
    move |err| {
        error!(error = %err, "{message}");
        Error::internal(message)
    }
}

/// Every category ordered by name, each with its services.
#[get("/catalogue")]
pub async fn catalogue(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<CategoryWithServices>>> {
    let categories = state
        .relations
        .catalogue()
        .await
        .map_err(internal("Failed to fetch catalogue"))?;
    Ok(web::Json(categories))
}

/// A provider with their account and services.
#[get("/providers/{id}/profile")]
pub async fn provider_profile(
    state: web::Data<HttpState>,
    id: web::Path<i32>,
) -> ApiResult<web::Json<ProviderProfile>> {
    state
        .relations
        .provider_profile(id.into_inner())
        .await
        .map_err(internal("Failed to fetch provider profile"))?
        .map(web::Json)
        .ok_or_else(|| Error::not_found("Provider not found"))
}

/// A conversation with its messages in send order.
#[get("/conversations/{id}/thread")]
pub async fn conversation_thread(
    state: web::Data<HttpState>,
    id: web::Path<i32>,
) -> ApiResult<web::Json<ConversationThread>> {
    state
        .relations
        .conversation_thread(id.into_inner())
        .await
        .map_err(internal("Failed to fetch conversation thread"))?
        .map(web::Json)
        .ok_or_else(|| Error::not_found("Conversation not found"))
}

/// An appointment with its client, provider, service and payments.
#[get("/appointments/{id}/details")]
pub async fn appointment_details(
    state: web::Data<HttpState>,
    id: web::Path<i32>,
) -> ApiResult<web::Json<AppointmentDetails>> {
    state
        .relations
        .appointment_details(id.into_inner())
        .await
        .map_err(internal("Failed to fetch appointment details"))?
        .map(web::Json)
        .ok_or_else(|| Error::not_found("Appointment not found"))
}

/// Filter for [`list_relations`].
#[derive(Debug, Default, Deserialize)]
pub struct RelationFilter {
    /// Table name whose relations to return.
    pub owner: Option<String>,
}

/// The declared relation registry, optionally narrowed to one owning table.
#[get("/relations")]
pub async fn list_relations(
    filter: web::Query<RelationFilter>,
) -> ApiResult<web::Json<Vec<Relation>>> {
    match filter.into_inner().owner {
        None => Ok(web::Json(relations())),
        Some(owner) => ResourceKind::from_table(&owner)
            .map(|kind| web::Json(relations_of(kind)))
            .ok_or_else(|| Error::not_found(format!("Unknown table: {owner}"))),
    }
}

/// Register the relation routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(catalogue)
        .service(provider_profile)
        .service(conversation_thread)
        .service(appointment_details)
        .service(list_relations);
}
