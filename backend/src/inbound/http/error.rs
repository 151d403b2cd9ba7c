//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while allowing Actix
//! handlers to turn domain failures into consistent JSON responses and status
//! codes. The body is `{ "error": <message>, "code": <code> }`, plus
//! `details` for client errors only.

use actix_web::error::{JsonPayloadError, PathError};
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode, web};
use serde::Serialize;
use serde_json::{Value, json};

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Message returned for request bodies that fail to deserialise.
pub const INVALID_BODY_MESSAGE: &str = "Invalid request body";

/// Message returned for path segments that fail to parse.
pub const INVALID_PATH_MESSAGE: &str = "Invalid id";

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    code: ErrorCode,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<&'a Value>,
}

impl<'a> From<&'a Error> for ErrorBody<'a> {
    fn from(error: &'a Error) -> Self {
        let details = match error.code() {
            ErrorCode::InternalError => None,
            _ => error.details(),
        };
        Self {
            error: error.message(),
            code: error.code(),
            details,
        }
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }

        builder.json(ErrorBody::from(self))
    }
}

/// JSON extractor configuration mapping malformed bodies to 400.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: JsonPayloadError, _req: &HttpRequest| {
        Error::invalid_request(INVALID_BODY_MESSAGE)
            .with_details(json!({ "reason": err.to_string() }))
            .into()
    })
}

/// Path extractor configuration mapping unparsable ids to 400.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err: PathError, _req: &HttpRequest| {
        Error::invalid_request(INVALID_PATH_MESSAGE)
            .with_details(json!({ "reason": err.to_string() }))
            .into()
    })
}
