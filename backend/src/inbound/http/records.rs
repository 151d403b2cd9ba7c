//! Generic CRUD handlers shared by every resource.
//!
//! ```text
//! GET  /api/{resource}
//! POST /api/{resource}
//! GET  /api/{resource}/{id}
//! PUT  /api/{resource}/{id}
//! ```
//!
//! Repository failures are logged with their cause and answered with the
//! resource's fixed message, for example `Failed to fetch categories`.

use actix_web::{HttpResponse, web};
use tracing::error;

use crate::domain::ports::RecordRepositoryError;
use crate::domain::{Error, RecordService, Resource, ResourceKind, ResourceVisitor, visit_resources};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

fn service<E: Resource>(state: &HttpState, failure: impl FnOnce() -> String) -> ApiResult<RecordService<E>> {
    state.records.get::<E>().map(RecordService::new).ok_or_else(|| {
        let message = failure();
        error!(resource = E::KIND.table(), "no repository registered");
        Error::internal(message)
    })
}

fn internal(kind: ResourceKind, message: String, err: &RecordRepositoryError) -> Error {
    error!(resource = kind.table(), error = %err, "{message}");
    Error::internal(message)
}

/// `GET /api/{resource}`: every row in canonical order.
pub async fn list_records<E: Resource>(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<E>>> {
    let kind = E::KIND;
    let records = service::<E>(&state, || kind.list_failed())?
        .list()
        .await
        .map_err(|err| internal(kind, kind.list_failed(), &err))?;
    Ok(web::Json(records))
}

/// `GET /api/{resource}/{id}`: one row or 404.
pub async fn get_record<E: Resource>(
    state: web::Data<HttpState>,
    id: web::Path<i32>,
) -> ApiResult<web::Json<E>> {
    let kind = E::KIND;
    service::<E>(&state, || kind.fetch_failed())?
        .find(id.into_inner())
        .await
        .map_err(|err| internal(kind, kind.fetch_failed(), &err))?
        .map(web::Json)
        .ok_or_else(|| Error::not_found(kind.not_found()))
}

/// `POST /api/{resource}`: insert and return the stored row with 201.
pub async fn create_record<E: Resource>(
    state: web::Data<HttpState>,
    draft: web::Json<E::Draft>,
) -> ApiResult<HttpResponse> {
    let kind = E::KIND;
    let record = service::<E>(&state, || kind.create_failed())?
        .create(draft.into_inner())
        .await
        .map_err(|err| internal(kind, kind.create_failed(), &err))?;
    Ok(HttpResponse::Created().json(record))
}

/// `PUT /api/{resource}/{id}`: overwrite every client-supplied column.
pub async fn replace_record<E: Resource>(
    state: web::Data<HttpState>,
    id: web::Path<i32>,
    draft: web::Json<E::Draft>,
) -> ApiResult<web::Json<E>> {
    let kind = E::KIND;
    service::<E>(&state, || kind.update_failed())?
        .replace(id.into_inner(), draft.into_inner())
        .await
        .map_err(|err| internal(kind, kind.update_failed(), &err))?
        .map(web::Json)
        .ok_or_else(|| Error::not_found(kind.not_found()))
}

struct RegisterRoutes<'a> {
    cfg: &'a mut web::ServiceConfig,
}

impl ResourceVisitor for RegisterRoutes<'_> {
    fn visit<E: Resource>(&mut self) {
        let path = E::KIND.path();
        self.cfg
            .service(
                web::resource(format!("/{path}"))
                    .route(web::get().to(list_records::<E>))
                    .route(web::post().to(create_record::<E>)),
            )
            .service(
                web::resource(format!("/{path}/{{id}}"))
                    .route(web::get().to(get_record::<E>))
                    .route(web::put().to(replace_record::<E>)),
            );
    }
}

/// Register the four record routes for every resource.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use marketplace::inbound::http::records;
///
/// let app = App::new().service(web::scope("/api").configure(records::configure));
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    visit_resources(&mut RegisterRoutes { cfg });
}

#[cfg(test)]
mod tests;
