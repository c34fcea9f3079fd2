//! Domain core: data model, mapper, service, ports, and errors.
//!
//! Everything here is transport agnostic. Inbound adapters translate
//! [`Error`] into HTTP responses; outbound adapters implement the traits in
//! [`ports`].
//!
//! Public surface:
//! - [`UserRecord`] / [`UserView`] — persistence and transport shapes.
//! - [`UserService`] — the CRUD operations over the repository port.
//! - [`Error`] / [`ErrorCode`] — failure taxonomy shared by all adapters.

pub mod error;
pub mod mapper;
pub mod ports;
pub mod user;
pub mod users_service;

pub use self::error::{Error, ErrorCode};
pub use self::user::{FieldError, UserId, UserRecord, UserView, validate_view};
pub use self::users_service::UserService;

/// Convenient result alias for domain operations.
pub type Result<T> = std::result::Result<T, Error>;
