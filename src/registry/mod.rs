//! The user registry.
//!
//! [`UserRegistry`] owns the storage. [`SharedRegistry`] is the cloneable
//! handle the HTTP layer holds; every method takes the lock for exactly one
//! registry operation, so a single create/update/delete never interleaves
//! with another.

pub mod store;

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::RwLock;

use crate::models::{User, UserId};

pub use store::UserRegistry;

/// Errors from registry operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("user {0} was not found")]
    NotFound(UserId),
}

/// Shared, thread-safe handle to a [`UserRegistry`].
#[derive(Debug, Clone, Default)]
pub struct SharedRegistry {
    inner: Arc<RwLock<UserRegistry>>,
}

impl SharedRegistry {
    /// Create a handle around an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing registry.
    pub fn from_registry(registry: UserRegistry) -> Self {
        Self {
            inner: Arc::new(RwLock::new(registry)),
        }
    }

    /// Snapshot of all users in insertion order.
    pub async fn list(&self) -> Vec<User> {
        self.inner.read().await.list().to_vec()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn create(&self, username: String, age: u8) -> User {
        let user = self.inner.write().await.create(username, age);
        tracing::info!(user_id = user.id, username = %user.username, age = user.age, "user created");
        user
    }

    pub async fn get(&self, id: UserId) -> Result<User, RegistryError> {
        self.inner.read().await.get(id).cloned()
    }

    pub async fn update(&self, id: UserId, username: String, age: u8) -> Result<User, RegistryError> {
        let user = self.inner.write().await.update(id, username, age)?.clone();
        tracing::info!(user_id = user.id, username = %user.username, age = user.age, "user updated");
        Ok(user)
    }

    pub async fn delete(&self, id: UserId) -> Result<User, RegistryError> {
        let user = self.inner.write().await.delete(id)?;
        tracing::info!(user_id = user.id, "user deleted");
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn clones_share_storage() {
        let registry = SharedRegistry::new();
        let handle = registry.clone();

        handle.create("UrbanUser".to_string(), 24).await;
        assert_eq!(registry.len().await, 1);
        assert_eq!(registry.get(1).await.unwrap().username, "UrbanUser");
    }

    #[tokio::test]
    async fn from_registry_keeps_existing_users() {
        let mut inner = UserRegistry::new();
        inner.create("alice", 30);
        let registry = SharedRegistry::from_registry(inner);

        let created = registry.create("bobby".to_string(), 31).await;
        assert_eq!(created.id, 2);
        assert_eq!(registry.list().await.len(), 2);
    }

    #[tokio::test]
    async fn concurrent_creates_get_distinct_ids() {
        let registry = SharedRegistry::new();
        let mut handles = Vec::new();
        for i in 0..32 {
            let registry = registry.clone();
            handles.push(tokio::spawn(async move {
                registry.create(format!("user{i:02}"), 30).await.id
            }));
        }

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }
        ids.sort_unstable();
        assert_eq!(ids, (1..=32).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn errors_pass_through() {
        let registry = SharedRegistry::new();
        assert_eq!(registry.get(3).await, Err(RegistryError::NotFound(3)));
        assert_eq!(
            registry.update(3, "UrbanProfi".to_string(), 28).await,
            Err(RegistryError::NotFound(3))
        );
        assert_eq!(registry.delete(3).await, Err(RegistryError::NotFound(3)));
    }
}
