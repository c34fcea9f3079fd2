//! Domain ports for the hexagonal boundary.

mod user_repository;

pub use user_repository::{UserPersistenceError, UserRepository};
