//! Tests for domain error construction.

use rstest::rstest;
use serde_json::json;

use super::*;

#[rstest]
#[case(Error::invalid_request("bad"), ErrorCode::InvalidRequest)]
#[case(Error::not_found("missing"), ErrorCode::NotFound)]
#[case(Error::internal("boom"), ErrorCode::InternalError)]
fn constructors_set_code(#[case] error: Error, #[case] expected: ErrorCode) {
    assert_eq!(error.code(), expected);
}

#[rstest]
fn error_code_serialises_snake_case() {
    let value = serde_json::to_value(ErrorCode::InternalError).expect("serialise");
    assert_eq!(value, json!("internal_error"));
}

#[rstest]
fn display_uses_message() {
    assert_eq!(Error::not_found("Category not found").to_string(), "Category not found");
}

#[rstest]
fn new_has_no_trace_id_out_of_scope() {
    assert!(Error::internal("boom").trace_id().is_none());
}

#[tokio::test]
async fn new_captures_scoped_trace_id() {
    let trace_id: TraceId = "00000000-0000-0000-0000-000000000001"
        .parse()
        .expect("valid uuid");

    let error = TraceId::scope(trace_id, async { Error::internal("boom") }).await;

    assert_eq!(error.trace_id(), Some("00000000-0000-0000-0000-000000000001"));
}

#[rstest]
fn builders_attach_optional_fields() {
    let error = Error::invalid_request("bad")
        .with_trace_id("abc")
        .with_details(json!({"field": "name"}));

    assert_eq!(error.trace_id(), Some("abc"));
    assert_eq!(error.details(), Some(&json!({"field": "name"})));
}
