//! Domain-level error type.
//!
//! Transport agnostic: the inbound HTTP adapter maps an [`Error`] to a
//! status code and JSON envelope in `inbound::http::error`. The store and
//! mapper never raise these; absence is an `Option` at the repository
//! boundary and only the service converts it into a reportable `NotFound`.

use crate::domain::user::{FieldError, UserId};

/// Stable machine-readable error code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorCode {
    /// The request is malformed or fails field validation.
    InvalidRequest,
    /// The requested resource does not exist.
    NotFound,
    /// The HTTP verb is not supported on this path.
    MethodNotAllowed,
    /// An unexpected failure inside the service or an adapter.
    InternalError,
}

/// Domain error payload.
///
/// Carries a human-readable message plus, for validation failures, a list of
/// per-field entries formatted as `"<field>: <message>"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    code: ErrorCode,
    message: String,
    errors: Option<Vec<String>>,
}

impl Error {
    fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            errors: None,
        }
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message returned to adapters.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Supplementary per-field or per-cause detail lines, if any.
    pub fn errors(&self) -> Option<&[String]> {
        self.errors.as_deref()
    }

    /// Attach detail lines to the error.
    pub fn with_errors(mut self, errors: Vec<String>) -> Self {
        self.errors = Some(errors);
        self
    }

    /// A user lookup failed; the identifier is echoed in the message.
    pub fn user_not_found(id: UserId) -> Self {
        Self::new(ErrorCode::NotFound, format!("User not found with id: {id}"))
    }

    /// Required-field validation failed on a create/update payload.
    pub fn validation(failures: Vec<FieldError>) -> Self {
        Self::new(
            ErrorCode::InvalidRequest,
            "Validation failed for the provided data",
        )
        .with_errors(failures.iter().map(ToString::to_string).collect())
    }

    /// Convenience constructor for [`ErrorCode::NotFound`] on non-user
    /// resources (unknown paths and the like).
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Convenience constructor for [`ErrorCode::InvalidRequest`].
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Convenience constructor for [`ErrorCode::MethodNotAllowed`].
    pub fn method_not_allowed(allowed: &[&str]) -> Self {
        Self::new(ErrorCode::MethodNotAllowed, "HTTP method not supported")
            .with_errors(vec![format!("Supported methods: {}", allowed.join(", "))])
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}
