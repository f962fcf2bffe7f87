/// PostgreSQL credential store
///
/// Production implementation of [`CredentialStore`] over a sqlx connection
/// pool. It delegates to the SQL operations on [`User`] and maps unique
/// constraint violations on the username column to
/// [`StoreError::DuplicateUsername`], so a lost check-then-insert race
/// surfaces as a duplicate rather than a raw database error.
///
/// # Example
///
/// ```no_run
/// use warden_core::db::pool::{create_pool, DatabaseConfig};
/// use warden_core::store::{CredentialStore, PgCredentialStore};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig {
///     url: std::env::var("DATABASE_URL")?,
///     ..Default::default()
/// })
/// .await?;
///
/// let store = PgCredentialStore::new(pool);
/// let user = store.find_by_username("alice").await?;
/// # Ok(())
/// # }
/// ```

use crate::models::user::{CreateUser, User};
use crate::store::{CredentialStore, StoreError, StoreResult};
use async_trait::async_trait;
use sqlx::PgPool;

/// Credential store backed by the `users` table
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct PgCredentialStore {
    pool: PgPool,
}

impl PgCredentialStore {
    /// Creates a store over an existing connection pool
    pub fn new(pool: PgPool) -> Self {
        PgCredentialStore { pool }
    }

    /// Returns a reference to the underlying pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl CredentialStore for PgCredentialStore {
    async fn find_by_username(&self, username: &str) -> StoreResult<Option<User>> {
        let user = User::find_by_username(&self.pool, username).await?;
        Ok(user)
    }

    async fn insert(&self, data: CreateUser) -> StoreResult<User> {
        let username = data.username.clone();

        User::create(&self.pool, data).await.map_err(|err| {
            // The UNIQUE constraint is authoritative for username
            // uniqueness; a violation means someone else registered the
            // name between our existence check and this insert.
            if let sqlx::Error::Database(db_err) = &err {
                if let Some(constraint) = db_err.constraint() {
                    if constraint.contains("username") {
                        return StoreError::DuplicateUsername(username);
                    }
                }
            }
            StoreError::Database(err)
        })
    }

    async fn count(&self) -> StoreResult<i64> {
        let count = User::count(&self.pool).await?;
        Ok(count)
    }

    async fn delete_all(&self) -> StoreResult<u64> {
        let removed = User::delete_all(&self.pool).await?;
        Ok(removed)
    }
}

// Integration tests require a running database
// These are in tests/pg_store_tests.rs
