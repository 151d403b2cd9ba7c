//! Tests for the generic record handlers.

use std::sync::Arc;

use actix_web::{App, http::StatusCode, test as actix_test};
use async_trait::async_trait;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

use super::*;
use crate::domain::ports::{FixtureRelationQuery, RecordPorts, RecordRepository};
use crate::domain::records::{Language, NewLanguage};
use crate::inbound::http::error::{json_config, path_config};
use crate::test_support::fixed_record_ports;

struct RefusingLanguages;

#[async_trait]
impl RecordRepository<Language> for RefusingLanguages {
    async fn list(&self) -> Result<Vec<Language>, RecordRepositoryError> {
        Err(RecordRepositoryError::connection("connection refused (os error 111)"))
    }

    async fn find(&self, _id: i32) -> Result<Option<Language>, RecordRepositoryError> {
        Err(RecordRepositoryError::connection("connection refused (os error 111)"))
    }

    async fn insert(&self, _draft: NewLanguage) -> Result<Language, RecordRepositoryError> {
        Err(RecordRepositoryError::query("duplicate key value violates unique constraint"))
    }

    async fn replace(
        &self,
        _id: i32,
        _draft: NewLanguage,
    ) -> Result<Option<Language>, RecordRepositoryError> {
        Err(RecordRepositoryError::query("deadlock detected"))
    }
}

#[fixture]
fn state() -> HttpState {
    HttpState::new(fixed_record_ports(), Arc::new(FixtureRelationQuery))
}

fn refusing_state() -> HttpState {
    let repo: Arc<dyn RecordRepository<Language>> = Arc::new(RefusingLanguages);
    HttpState::new(RecordPorts::default().with(repo), Arc::new(FixtureRelationQuery))
}

macro_rules! app {
    ($state:expr) => {
        actix_test::init_service(
            App::new().app_data(web::Data::new($state)).service(
                web::scope("/api")
                    .app_data(json_config())
                    .app_data(path_config())
                    .configure(configure),
            ),
        )
        .await
    };
}

#[rstest]
#[actix_web::test]
async fn categories_are_listed_by_name(state: HttpState) {
    let app = app!(state);
    for name in ["Tutoring", "Cleaning", "Plumbing", "Beauty"] {
        let req = actix_test::TestRequest::post()
            .uri("/api/categories")
            .set_json(json!({"name": name}))
            .to_request();
        let res = actix_test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::CREATED);
    }

    let req = actix_test::TestRequest::get().uri("/api/categories").to_request();
    let body: Vec<Value> = actix_test::call_and_read_body_json(&app, req).await;
    let names: Vec<_> = body.iter().map(|c| c["name"].as_str().unwrap_or_default()).collect();

    assert_eq!(names, vec!["Beauty", "Cleaning", "Plumbing", "Tutoring"]);
}

#[rstest]
#[actix_web::test]
async fn created_rows_are_listed_verbatim(state: HttpState) {
    let app = app!(state);
    let req = actix_test::TestRequest::post()
        .uri("/api/users")
        .set_json(json!({
            "username": "ada",
            "email": "ada@example.com",
            "fullName": "Ada Lovelace",
            "role": "client"
        }))
        .to_request();
    let created: Value = actix_test::call_and_read_body_json(&app, req).await;

    let req = actix_test::TestRequest::get().uri("/api/users").to_request();
    let listed: Vec<Value> = actix_test::call_and_read_body_json(&app, req).await;

    assert_eq!(listed, vec![created.clone()]);
    assert_eq!(created["id"], 1);
    assert_eq!(created["phone"], Value::Null);
    assert_eq!(created["createdAt"], "2026-01-01T09:30:00Z");
}

#[rstest]
#[actix_web::test]
async fn repeated_list_returns_identical_bodies(state: HttpState) {
    let app = app!(state);
    let req = actix_test::TestRequest::post()
        .uri("/api/languages")
        .set_json(json!({"code": "cy", "name": "Welsh"}))
        .to_request();
    actix_test::call_service(&app, req).await;

    let first = actix_test::call_and_read_body(&app, actix_test::TestRequest::get().uri("/api/languages").to_request()).await;
    let second = actix_test::call_and_read_body(&app, actix_test::TestRequest::get().uri("/api/languages").to_request()).await;

    assert_eq!(first, second);
}

#[rstest]
#[actix_web::test]
async fn unknown_id_is_not_found(state: HttpState) {
    let app = app!(state);
    let res = actix_test::call_service(&app, actix_test::TestRequest::get().uri("/api/providers/7").to_request()).await;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body, json!({"error": "Provider not found", "code": "not_found"}));
}

#[rstest]
#[case(json!({"code": "en"}))]
#[case(json!({"code": "en", "name": "English", "extra": true}))]
#[case(json!("English"))]
#[actix_web::test]
async fn malformed_body_is_rejected(state: HttpState, #[case] payload: Value) {
    let app = app!(state);
    let req = actix_test::TestRequest::post()
        .uri("/api/languages")
        .set_json(payload)
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["code"], "invalid_request");
}

#[rstest]
#[actix_web::test]
async fn non_numeric_id_is_rejected(state: HttpState) {
    let app = app!(state);
    let res = actix_test::call_service(&app, actix_test::TestRequest::get().uri("/api/users/abc").to_request()).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[rstest]
#[actix_web::test]
async fn put_overwrites_every_column(state: HttpState) {
    let app = app!(state);
    let req = actix_test::TestRequest::post()
        .uri("/api/categories")
        .set_json(json!({"name": "Cleaning", "description": "Homes", "icon": "broom"}))
        .to_request();
    actix_test::call_service(&app, req).await;

    let req = actix_test::TestRequest::put()
        .uri("/api/categories/1")
        .set_json(json!({"name": "Deep cleaning"}))
        .to_request();
    let replaced: Value = actix_test::call_and_read_body_json(&app, req).await;
    let fetched: Value =
        actix_test::call_and_read_body_json(&app, actix_test::TestRequest::get().uri("/api/categories/1").to_request())
            .await;

    assert_eq!(
        replaced,
        json!({"id": 1, "name": "Deep cleaning", "description": null, "icon": null})
    );
    assert_eq!(fetched, replaced);
}

#[rstest]
#[actix_web::test]
async fn put_unknown_id_is_not_found(state: HttpState) {
    let app = app!(state);
    let req = actix_test::TestRequest::put()
        .uri("/api/languages/3")
        .set_json(json!({"code": "fr", "name": "French"}))
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[rstest]
#[case(actix_test::TestRequest::get().uri("/api/languages"), "Failed to fetch languages")]
#[case(actix_test::TestRequest::get().uri("/api/languages/1"), "Failed to fetch language")]
#[case(
    actix_test::TestRequest::post().uri("/api/languages").set_json(json!({"code": "en", "name": "English"})),
    "Failed to create language"
)]
#[case(
    actix_test::TestRequest::put().uri("/api/languages/1").set_json(json!({"code": "en", "name": "English"})),
    "Failed to update language"
)]
#[actix_web::test]
async fn repository_failures_return_fixed_message(
    #[case] req: actix_test::TestRequest,
    #[case] message: &str,
) {
    let app = app!(refusing_state());
    let res = actix_test::call_service(&app, req.to_request()).await;

    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body, json!({"error": message, "code": "internal_error"}));
}

#[actix_web::test]
async fn missing_repository_is_internal_error() {
    let app = app!(refusing_state());
    let res = actix_test::call_service(&app, actix_test::TestRequest::get().uri("/api/users").to_request()).await;

    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["error"], "Failed to fetch users");
}
