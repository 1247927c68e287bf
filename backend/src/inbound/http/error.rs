//! HTTP adapter mapping for domain errors.
//!
//! Keeps the domain error type HTTP-agnostic while letting Actix handlers
//! turn domain failures into consistent JSON responses and status codes.
//! Extractor failures are folded into the same payload shape.

use actix_web::error::{JsonPayloadError, PathError};
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode};
use serde_json::json;
use tracing::debug;

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    // Internal errors keep their cause: clients of the write and read paths
    // expect the store failure in the body.
    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }

        builder.json(self)
    }
}

/// Map JSON body extraction failures to `invalid_request`.
///
/// # Examples
/// ```
/// use actix_web::web;
/// use detail_relay::inbound::http::error::json_error_handler;
///
/// let _config = web::JsonConfig::default().error_handler(json_error_handler);
/// ```
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, "rejecting request body");
    Error::invalid_request("request body is not valid JSON for this endpoint")
        .with_details(json!({ "cause": err.to_string() }))
        .into()
}

/// Map path parameter extraction failures to `invalid_request`.
pub fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, "rejecting path parameters");
    Error::invalid_request("path parameters are invalid")
        .with_details(json!({ "cause": err.to_string() }))
        .into()
}
