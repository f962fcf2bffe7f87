/// Core CredentialStore trait and types
///
/// This module defines the contract the auth service uses to reach the user
/// table. The service never touches storage directly; it goes through this
/// seam, so the same registration/login logic runs against PostgreSQL in
/// production and against the in-memory store in tests and demos.
///
/// # Store Contract
///
/// All stores must:
/// 1. Implement the `CredentialStore` trait (async)
/// 2. Enforce username uniqueness on insert
/// 3. Make inserts durable before returning (no separate commit step)
///
/// # Example
///
/// ```no_run
/// use warden_core::models::user::{CreateUser, User};
/// use warden_core::store::{CredentialStore, StoreResult};
/// use async_trait::async_trait;
///
/// struct MyStore;
///
/// #[async_trait]
/// impl CredentialStore for MyStore {
///     async fn find_by_username(&self, _username: &str) -> StoreResult<Option<User>> {
///         // Look the row up...
///         Ok(None)
///     }
///
///     async fn insert(&self, _data: CreateUser) -> StoreResult<User> {
///         // Persist the row durably...
///         unimplemented!()
///     }
///
///     async fn count(&self) -> StoreResult<i64> {
///         Ok(0)
///     }
///
///     async fn delete_all(&self) -> StoreResult<u64> {
///         Ok(0)
///     }
/// }
/// ```

use crate::models::user::{CreateUser, User};
use async_trait::async_trait;

/// Credential store error types
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Username is already taken (unique constraint violation)
    #[error("Username already exists: {0}")]
    DuplicateUsername(String),

    /// Underlying database failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Store result type alias
pub type StoreResult<T> = Result<T, StoreError>;

/// Core CredentialStore trait
///
/// The persistence seam for user records. Implementations must be shareable
/// across tasks (`Send + Sync`).
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Looks up a user by username
    ///
    /// The lookup is case-sensitive.
    ///
    /// # Arguments
    ///
    /// * `username` - Username to search for
    ///
    /// # Returns
    ///
    /// The user if found, None otherwise
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Database` if the lookup fails
    async fn find_by_username(&self, username: &str) -> StoreResult<Option<User>>;

    /// Inserts a new user
    ///
    /// The row is durable once this returns; there is no separate commit
    /// step.
    ///
    /// # Arguments
    ///
    /// * `data` - Username and password hash to persist
    ///
    /// # Returns
    ///
    /// The stored user with generated ID and timestamp
    ///
    /// # Errors
    ///
    /// Returns `StoreError::DuplicateUsername` if the username is already
    /// taken, `StoreError::Database` for other storage failures
    async fn insert(&self, data: CreateUser) -> StoreResult<User>;

    /// Counts the users currently stored
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Database` if the count fails
    async fn count(&self) -> StoreResult<i64>;

    /// Deletes every user row (whole-table teardown)
    ///
    /// Only intended for test/reset scenarios; normal operation never
    /// deletes users.
    ///
    /// # Returns
    ///
    /// The number of rows removed
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Database` if the delete fails
    async fn delete_all(&self) -> StoreResult<u64>;
}
