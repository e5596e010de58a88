use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::errors::StoreError;
use crate::domain::identity::models::User;
use crate::domain::identity::models::Username;
use crate::domain::identity::ports::UserLookup;
use crate::domain::identity::ports::UserStore;

/// In-memory user store keyed by username.
///
/// Backs integration tests and local runs. The lock is held only for the
/// map operation itself, never across password hashing or other slow work.
pub struct InMemoryUserStore {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserLookup for InMemoryUserStore {
    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, StoreError> {
        let users = self.users.read().await;
        Ok(users.get(username.as_str()).cloned())
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn insert(&self, user: User) -> Result<User, StoreError> {
        let mut users = self.users.write().await;

        let key = user.username.as_str().to_string();
        if users.contains_key(&key) {
            return Err(StoreError::Duplicate(key));
        }

        users.insert(key, user.clone());
        Ok(user)
    }
}
