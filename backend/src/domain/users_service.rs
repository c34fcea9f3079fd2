//! User CRUD service.
//!
//! Orchestrates the repository port and the mapper, and enforces the
//! existence invariants the store itself does not know about: absence on
//! get/update/delete becomes a reportable `NotFound` here and nowhere else.
//! Required-field validation runs before any store mutation, so a rejected
//! request leaves no partial side effects.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::mapper;
use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::user::{UserId, UserView, validate_view};
use crate::domain::{Error, Result};

/// Stateless facade over the repository; operations are transformations of
/// the store's state with no internal state machine.
#[derive(Clone)]
pub struct UserService {
    repo: Arc<dyn UserRepository>,
}

impl UserService {
    /// Create a service backed by the given repository adapter.
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    fn map_repo_error(error: UserPersistenceError) -> Error {
        match error {
            UserPersistenceError::Connection { message } => {
                Error::internal(format!("user repository unavailable: {message}"))
            }
            UserPersistenceError::Query { message } => {
                Error::internal(format!("user repository error: {message}"))
            }
        }
    }

    /// List every stored user; never fails on an empty store.
    pub async fn get_all_users(&self) -> Result<Vec<UserView>> {
        let records = self.repo.find_all().await.map_err(Self::map_repo_error)?;
        debug!(count = records.len(), "retrieved users");
        Ok(mapper::to_view_list(records))
    }

    /// Fetch a single user or fail with `NotFound`.
    pub async fn get_user_by_id(&self, id: UserId) -> Result<UserView> {
        let record = self
            .repo
            .find_by_id(id)
            .await
            .map_err(Self::map_repo_error)?
            .ok_or_else(|| Error::user_not_found(id))?;
        Ok(mapper::to_view(record))
    }

    /// Create a user from a client-supplied view.
    ///
    /// Any identifier in the input is discarded; creation always assigns a
    /// fresh one from the store's counter.
    pub async fn create_user(&self, view: UserView) -> Result<UserView> {
        validate_view(&view).map_err(Error::validation)?;
        if let Some(client_id) = view.id {
            warn!(client_id, "ignoring client-supplied id on create");
        }
        let mut record = mapper::to_record(view);
        record.id = None;
        let saved = self.repo.save(record).await.map_err(Self::map_repo_error)?;
        Ok(mapper::to_view(saved))
    }

    /// Replace the user stored under `id` with the supplied view.
    ///
    /// The update is keyed by the path identifier; a disagreeing body
    /// identifier is overridden and only logged. Full replacement: fields
    /// absent from the view become blank, not merged.
    pub async fn update_user(&self, id: UserId, view: UserView) -> Result<UserView> {
        validate_view(&view).map_err(Error::validation)?;
        let exists = self
            .repo
            .exists_by_id(id)
            .await
            .map_err(Self::map_repo_error)?;
        if !exists {
            return Err(Error::user_not_found(id));
        }
        if view.id.is_some_and(|body_id| body_id != id) {
            warn!(path_id = id, body_id = ?view.id, "id mismatch between path and body");
        }
        let mut record = mapper::to_record(view);
        record.id = Some(id);
        let saved = self.repo.save(record).await.map_err(Self::map_repo_error)?;
        Ok(mapper::to_view(saved))
    }

    /// Delete the user stored under `id`, failing with `NotFound` if absent.
    pub async fn delete_user(&self, id: UserId) -> Result<()> {
        let exists = self
            .repo
            .exists_by_id(id)
            .await
            .map_err(Self::map_repo_error)?;
        if !exists {
            return Err(Error::user_not_found(id));
        }
        self.repo
            .delete_by_id(id)
            .await
            .map_err(Self::map_repo_error)
    }
}
