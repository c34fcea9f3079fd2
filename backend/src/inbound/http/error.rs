//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while letting Actix
//! handlers turn failures into a consistent JSON envelope and status code.
//! The envelope is the same for every non-2xx response:
//! `{ message, status, timestamp, errors? }` with `timestamp` in epoch
//! milliseconds and `errors` holding `"<field>: <message>"` lines for
//! validation failures.

use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode, web};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::domain::{Error, ErrorCode};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Error envelope serialized on every non-2xx response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    #[schema(example = "User not found with id: 42")]
    pub message: String,
    #[schema(example = 404)]
    pub status: u16,
    /// Epoch milliseconds at the time the response was built.
    pub timestamp: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn body_for(err: &Error, status: StatusCode) -> ErrorBody {
    // Internal detail is logged, never returned to the caller.
    let message = if matches!(err.code(), ErrorCode::InternalError) {
        error!(detail = %err, "internal error");
        "An unexpected error occurred. Please try again later.".to_owned()
    } else {
        err.message().to_owned()
    };
    ErrorBody {
        message,
        status: status.as_u16(),
        timestamp: Utc::now().timestamp_millis(),
        errors: err.errors().map(<[String]>::to_vec),
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        HttpResponse::build(status).json(body_for(self, status))
    }
}

/// JSON extractor configuration that reports malformed bodies in the shared
/// envelope instead of Actix's plain-text default.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, req| {
        warn!(path = %req.path(), error = %err, "malformed JSON request body");
        Error::invalid_request("Invalid JSON format in request body")
            .with_errors(vec!["Malformed JSON request body".to_owned()])
            .into()
    })
}

/// Path extractor configuration covering non-numeric `{id}` segments.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, req| {
        warn!(path = %req.path(), error = %err, "invalid path parameter");
        Error::invalid_request("Invalid parameter type provided")
            .with_errors(vec![
                "Invalid value for parameter 'id'. Expected type: integer".to_owned(),
            ])
            .into()
    })
}

/// App-level fallback for requests no route matched.
///
/// Distinguishes a known path hit with an unsupported verb (405, listing the
/// supported methods) from a path the service does not expose at all (404).
pub async fn unmatched_route(req: HttpRequest) -> ApiResult<HttpResponse> {
    let mut segments = req.path().trim_matches('/').split('/');
    let err = match (segments.next(), segments.next(), segments.next()) {
        (Some("users"), None, _) => Error::method_not_allowed(&["GET", "POST"]),
        (Some("users"), Some(_), None) => Error::method_not_allowed(&["GET", "PUT", "DELETE"]),
        _ => Error::not_found("Resource not found"),
    };
    warn!(method = %req.method(), path = %req.path(), code = ?err.code(), "unmatched route");
    Err(err)
}
