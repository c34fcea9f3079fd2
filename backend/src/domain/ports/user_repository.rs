//! Port abstraction for user persistence adapters and their errors.
//!
//! The store is agnostic to "not found" semantics: lookups return `Option`
//! and deletion of an absent identifier is a no-op. The error enum exists
//! for adapter-level failures only, so a database-backed implementation can
//! substitute for the in-memory one without changing the service.

use async_trait::async_trait;

use crate::domain::user::{UserId, UserRecord};

/// Persistence errors raised by user repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserPersistenceError {
    /// Repository backing store could not be reached.
    #[error("user repository connection failed: {message}")]
    Connection { message: String },
    /// Query or mutation failed during execution.
    #[error("user repository query failed: {message}")]
    Query { message: String },
}

impl UserPersistenceError {
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Driven port for user persistence.
///
/// `save` is an upsert: an unset identifier is assigned from the adapter's
/// monotonic counter (starting at 1, atomic across concurrent callers); a
/// set identifier overwrites any existing record wholesale.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Return all current records; iteration order is unspecified.
    async fn find_all(&self) -> Result<Vec<UserRecord>, UserPersistenceError>;

    /// Fetch a record by identifier. Absence is `Ok(None)`, never an error.
    async fn find_by_id(&self, id: UserId) -> Result<Option<UserRecord>, UserPersistenceError>;

    /// Insert or fully replace a record, returning the stored value with its
    /// identifier populated.
    async fn save(&self, record: UserRecord) -> Result<UserRecord, UserPersistenceError>;

    /// Remove a record if present; a no-op when the identifier is absent.
    async fn delete_by_id(&self, id: UserId) -> Result<(), UserPersistenceError>;

    /// True iff a record with this identifier is currently stored.
    async fn exists_by_id(&self, id: UserId) -> Result<bool, UserPersistenceError>;
}
