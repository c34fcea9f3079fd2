//! User data model.
//!
//! Two shapes exist on purpose: [`UserRecord`] is the store-resident
//! representation owned by the repository, while [`UserView`] is the
//! request/response shape exchanged over HTTP. The fields are currently
//! identical; the split is kept as a seam so the persistence model can
//! evolve without changing the transport contract.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Numeric user identifier assigned by the store.
pub type UserId = u64;

/// Internal, store-resident representation of a user.
///
/// ## Invariants
/// - `id` is `None` only before the record is first saved; every record held
///   by the store has a unique, non-null identifier.
/// - Mutation happens exclusively through `UserRepository::save` as a full
///   replacement; there are no partial updates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub id: Option<UserId>,
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: Option<String>,
    pub website: Option<String>,
}

/// External, transport-facing representation of a user.
///
/// All fields are optional at the deserialization layer; `name`, `username`
/// and `email` must be present and non-blank on create/update requests,
/// enforced by [`validate_view`] before the service touches the store.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub struct UserView {
    #[schema(example = 1)]
    pub id: Option<UserId>,
    #[schema(example = "Leanne Graham")]
    pub name: Option<String>,
    #[schema(example = "Bret")]
    pub username: Option<String>,
    #[schema(example = "Sincere@april.biz")]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
}

/// A single failed field constraint, rendered as `"<field>: <message>"` in
/// error payloads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

fn is_blank(value: Option<&String>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

/// Check the required-field constraints on a create/update payload.
///
/// Returns one entry per offending field, in declaration order, so callers
/// can report every violation at once rather than failing on the first.
pub fn validate_view(view: &UserView) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();
    if is_blank(view.name.as_ref()) {
        errors.push(FieldError {
            field: "name",
            message: "Name is required and cannot be blank",
        });
    }
    if is_blank(view.username.as_ref()) {
        errors.push(FieldError {
            field: "username",
            message: "Username is required and cannot be blank",
        });
    }
    if is_blank(view.email.as_ref()) {
        errors.push(FieldError {
            field: "email",
            message: "Email is required and cannot be blank",
        });
    }
    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
