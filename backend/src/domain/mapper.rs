//! Pure conversions between the persistence and transport shapes.
//!
//! No validation and no defaulting happens here; both directions copy the
//! shared fields verbatim. Required-field checks live in
//! [`crate::domain::user::validate_view`].

use crate::domain::user::{UserRecord, UserView};

/// Convert a store-resident record into its transport shape.
pub fn to_view(record: UserRecord) -> UserView {
    UserView {
        id: record.id,
        name: Some(record.name),
        username: Some(record.username),
        email: Some(record.email),
        phone: record.phone,
        website: record.website,
    }
}

/// Convert a transport view into a record, preserving any identifier the
/// caller supplied. Callers decide whether that identifier survives; the
/// service clears it on create and overrides it on update.
pub fn to_record(view: UserView) -> UserRecord {
    UserRecord {
        id: view.id,
        name: view.name.unwrap_or_default(),
        username: view.username.unwrap_or_default(),
        email: view.email.unwrap_or_default(),
        phone: view.phone,
        website: view.website,
    }
}

/// Bulk form of [`to_view`], preserving input order.
pub fn to_view_list(records: Vec<UserRecord>) -> Vec<UserView> {
    records.into_iter().map(to_view).collect()
}
