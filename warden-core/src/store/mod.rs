/// Credential store seam for warden
///
/// This module defines the storage boundary of the system. The auth service
/// only ever reaches the user table through the [`CredentialStore`] trait,
/// which keeps the registration/login logic independent of where the records
/// actually live.
///
/// # Store Types
///
/// - **PgCredentialStore**: the production store over a PostgreSQL pool
/// - **MemoryCredentialStore**: an in-process store for tests and demos
///
/// # Example
///
/// ```
/// use warden_core::models::user::CreateUser;
/// use warden_core::store::{CredentialStore, MemoryCredentialStore, StoreError};
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
/// // Usernames are unique across the store
/// let duplicate = store
///     .insert(CreateUser {
///         username: "alice".to_string(),
///         password_hash: "$argon2id$...".to_string(),
///     })
///     .await;
/// assert!(matches!(duplicate, Err(StoreError::DuplicateUsername(_))));
/// # Ok(())
/// # }
/// ```

pub mod memory;
pub mod postgres;
pub mod store_trait;

// Re-export main types
pub use memory::MemoryCredentialStore;
pub use postgres::PgCredentialStore;
pub use store_trait::{CredentialStore, StoreError, StoreResult};
