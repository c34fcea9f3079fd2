//! In-memory user repository.
//!
//! The only concrete adapter for the `UserRepository` port in this service.
//! A single `RwLock` around the map serializes mutations; the identifier
//! counter is a separate atomic so concurrent saves with unset identifiers
//! can never receive the same value. Identifiers are never reused, even
//! after deletion, because the counter only moves forward.

use std::collections::HashMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::user::{UserId, UserRecord};

/// Map-backed repository with an atomic identifier counter starting at 1.
#[derive(Debug)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<UserId, UserRecord>>,
    next_id: AtomicU64,
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryUserRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Create a store seeded with five fixed sample users (identifiers 1-5).
    ///
    /// Demo data only; the seeding is not part of the repository contract
    /// and is toggled off by configuration for anything but local runs.
    pub fn with_sample_data() -> Self {
        let repo = Self::new();
        let samples = [
            (
                "Leanne Graham",
                "Bret",
                "Sincere@april.biz",
                "1-770-736-8031 x56442",
                "hildegard.org",
            ),
            (
                "Ervin Howell",
                "Antonette",
                "Shanna@melissa.tv",
                "010-692-6593 x09125",
                "anastasia.net",
            ),
            (
                "Clementine Bauch",
                "Samantha",
                "Nathan@yesenia.net",
                "1-463-123-4447",
                "ramiro.info",
            ),
            (
                "Patricia Lebsack",
                "Karianne",
                "Julianne.OConner@kory.org",
                "493-170-9623 x156",
                "kale.biz",
            ),
            (
                "Chelsey Dietrich",
                "Kamren",
                "Lucio_Hettinger@annie.ca",
                "(254)954-1289",
                "demarco.info",
            ),
        ];
        {
            let mut users = repo
                .users
                .write()
                .unwrap_or_else(std::sync::PoisonError::into_inner);
            for (name, username, email, phone, website) in samples {
                let id = repo.next_id.fetch_add(1, Ordering::Relaxed);
                users.insert(
                    id,
                    UserRecord {
                        id: Some(id),
                        name: name.to_owned(),
                        username: username.to_owned(),
                        email: email.to_owned(),
                        phone: Some(phone.to_owned()),
                        website: Some(website.to_owned()),
                    },
                );
            }
        }
        repo
    }

    fn read_guard(
        &self,
    ) -> Result<std::sync::RwLockReadGuard<'_, HashMap<UserId, UserRecord>>, UserPersistenceError>
    {
        self.users
            .read()
            .map_err(|_| UserPersistenceError::query("user map lock poisoned"))
    }

    fn write_guard(
        &self,
    ) -> Result<std::sync::RwLockWriteGuard<'_, HashMap<UserId, UserRecord>>, UserPersistenceError>
    {
        self.users
            .write()
            .map_err(|_| UserPersistenceError::query("user map lock poisoned"))
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_all(&self) -> Result<Vec<UserRecord>, UserPersistenceError> {
        Ok(self.read_guard()?.values().cloned().collect())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<UserRecord>, UserPersistenceError> {
        Ok(self.read_guard()?.get(&id).cloned())
    }

    async fn save(&self, mut record: UserRecord) -> Result<UserRecord, UserPersistenceError> {
        let id = match record.id {
            Some(id) => id,
            None => self.next_id.fetch_add(1, Ordering::Relaxed),
        };
        record.id = Some(id);
        self.write_guard()?.insert(id, record.clone());
        Ok(record)
    }

    async fn delete_by_id(&self, id: UserId) -> Result<(), UserPersistenceError> {
        self.write_guard()?.remove(&id);
        Ok(())
    }

    async fn exists_by_id(&self, id: UserId) -> Result<bool, UserPersistenceError> {
        Ok(self.read_guard()?.contains_key(&id))
    }
}
