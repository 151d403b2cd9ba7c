//! HTTP inbound adapter exposing the marketplace REST endpoints.

pub mod error;
pub mod health;
pub mod records;
pub mod relations;
pub mod state;

use actix_web::web;

pub use error::ApiResult;

/// Register every `/api` route together with the extractor error handlers.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use marketplace::inbound::http;
///
/// let app = App::new().service(web::scope("/api").configure(http::configure_api));
/// ```
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.app_data(error::json_config())
        .app_data(error::path_config())
        .configure(relations::configure)
        .configure(records::configure);
}
