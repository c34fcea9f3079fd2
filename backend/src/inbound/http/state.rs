//! Shared HTTP adapter state.
//!
//! Handlers receive this via `actix_web::web::Data`, so they depend only on
//! the domain service and stay testable with any repository behind it.

use std::sync::Arc;

use crate::domain::UserService;
use crate::domain::ports::UserRepository;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: UserService,
}

impl HttpState {
    /// Build state from a repository adapter.
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self {
            users: UserService::new(repo),
        }
    }
}
