//! Server construction and middleware wiring.

mod config;
mod state_builders;

pub use config::ServerConfig;

use state_builders::build_http_state;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use marketplace::Trace;
use marketplace::inbound::http::configure_api;
use marketplace::inbound::http::health::{HealthState, live, ready};
use marketplace::inbound::http::state::HttpState;

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(web::scope("/api").configure(configure_api))
        .service(ready)
        .service(live)
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = web::Data::new(build_http_state(&config));

    let server = HttpServer::new(move || build_app(server_health_state.clone(), http_state.clone()))
        .bind(config.bind_addr())?
        .run();

    health_state.mark_ready();
    Ok(server)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use serde_json::{Value, json};

    fn in_memory_state() -> web::Data<HttpState> {
        let config = ServerConfig::new("127.0.0.1:0".parse().expect("socket addr"));
        web::Data::new(build_http_state(&config))
    }

    #[actix_web::test]
    async fn api_routes_carry_trace_header() {
        let app = actix_test::init_service(build_app(
            web::Data::new(HealthState::new()),
            in_memory_state(),
        ))
        .await;

        let res = actix_test::call_service(&app, actix_test::TestRequest::get().uri("/api/users").to_request()).await;

        assert_eq!(res.status(), StatusCode::OK);
        assert!(res.headers().contains_key("trace-id"));
    }

    #[actix_web::test]
    async fn in_memory_catalogue_reflects_inserts() {
        let app = actix_test::init_service(build_app(
            web::Data::new(HealthState::new()),
            in_memory_state(),
        ))
        .await;
        let req = actix_test::TestRequest::post()
            .uri("/api/categories")
            .set_json(json!({"name": "Gardening"}))
            .to_request();
        actix_test::call_service(&app, req).await;

        let body: Value =
            actix_test::call_and_read_body_json(&app, actix_test::TestRequest::get().uri("/api/catalogue").to_request())
                .await;

        assert_eq!(body[0]["name"], "Gardening");
        assert_eq!(body[0]["services"], json!([]));
    }

    #[actix_web::test]
    async fn health_routes_sit_outside_api_scope() {
        let health = web::Data::new(HealthState::new());
        health.mark_ready();
        let app = actix_test::init_service(build_app(health, in_memory_state())).await;

        let res = actix_test::call_service(&app, actix_test::TestRequest::get().uri("/health/ready").to_request()).await;

        assert_eq!(res.status(), StatusCode::OK);
    }
}
