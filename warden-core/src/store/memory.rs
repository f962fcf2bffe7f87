/// In-memory credential store for testing and demos
///
/// This store keeps user records in a `HashMap` behind an async lock. It's
/// useful for:
/// - Testing the auth service without a database
/// - Demonstrating the registration/login flow
/// - Quick local experiments
///
/// It enforces the same username-uniqueness rule as the PostgreSQL store,
/// so the auth service behaves identically over either implementation.
///
/// Clones share the same underlying map, which lets a test hold one handle
/// for the service and another for inspecting stored state.
///
/// # Example
///
/// ```
/// use warden_core::models::user::CreateUser;
/// use warden_core::store::{CredentialStore, MemoryCredentialStore};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let store = MemoryCredentialStore::new();
///
/// store
///     .insert(CreateUser {
///         username: "alice".to_string(),
///         password_hash: "$argon2id$...".to_string(),
///     })
///     .await?;
///
/// assert!(store.find_by_username("alice").await?.is_some());
/// assert_eq!(store.count().await?, 1);
/// # Ok(())
/// # }
/// ```

use crate::models::user::{CreateUser, User};
use crate::store::{CredentialStore, StoreError, StoreResult};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// In-memory credential store
///
/// Generates the ID and timestamp a database would, so records look the
/// same as rows from the PostgreSQL store.
#[derive(Debug, Clone, Default)]
pub struct MemoryCredentialStore {
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl MemoryCredentialStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn find_by_username(&self, username: &str) -> StoreResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(username).cloned())
    }

    async fn insert(&self, data: CreateUser) -> StoreResult<User> {
        let mut users = self.users.write().await;

        if users.contains_key(&data.username) {
            return Err(StoreError::DuplicateUsername(data.username));
        }

        let user = User {
            id: Uuid::new_v4(),
            username: data.username.clone(),
            password_hash: data.password_hash,
            created_at: Utc::now(),
        };

        users.insert(data.username, user.clone());
        Ok(user)
    }

    async fn count(&self) -> StoreResult<i64> {
        let users = self.users.read().await;
        Ok(users.len() as i64)
    }

    async fn delete_all(&self) -> StoreResult<u64> {
        let mut users = self.users.write().await;
        let removed = users.len() as u64;
        users.clear();
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_alice() -> CreateUser {
        CreateUser {
            username: "alice".to_string(),
            password_hash: "$argon2id$fake".to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        let store = MemoryCredentialStore::new();

        let inserted = store.insert(create_alice()).await.unwrap();
        assert_eq!(inserted.username, "alice");
        assert_eq!(inserted.password_hash, "$argon2id$fake");

        let found = store
            .find_by_username("alice")
            .await
            .unwrap()
            .expect("alice should be stored");
        assert_eq!(found.id, inserted.id);
    }

    #[tokio::test]
    async fn test_find_absent_user() {
        let store = MemoryCredentialStore::new();

        let found = store.find_by_username("nobody").await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_insert_duplicate_username() {
        let store = MemoryCredentialStore::new();

        store.insert(create_alice()).await.unwrap();
        let result = store.insert(create_alice()).await;

        assert!(matches!(
            result,
            Err(StoreError::DuplicateUsername(ref name)) if name == "alice"
        ));

        // The original row is untouched
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_lookup_is_case_sensitive() {
        let store = MemoryCredentialStore::new();

        store.insert(create_alice()).await.unwrap();

        assert!(store.find_by_username("Alice").await.unwrap().is_none());
        assert!(store.find_by_username("alice").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let store = MemoryCredentialStore::new();
        let handle = store.clone();

        store.insert(create_alice()).await.unwrap();

        let found = handle.find_by_username("alice").await.unwrap();
        assert!(found.is_some());
        assert_eq!(handle.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_count_and_delete_all() {
        let store = MemoryCredentialStore::new();
        assert_eq!(store.count().await.unwrap(), 0);

        store.insert(create_alice()).await.unwrap();
        store
            .insert(CreateUser {
                username: "bob".to_string(),
                password_hash: "$argon2id$other".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(store.count().await.unwrap(), 2);

        let removed = store.delete_all().await.unwrap();
        assert_eq!(removed, 2);
        assert_eq!(store.count().await.unwrap(), 0);
        assert!(store.find_by_username("alice").await.unwrap().is_none());
    }
}
