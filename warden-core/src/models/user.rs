/// User model and database operations
///
/// This module provides the User model and the SQL operations the credential
/// store is built on. A user is created once at registration and never
/// mutated afterwards; rows only disappear through whole-table teardown in
/// test/reset scenarios.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE users (
///     id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
///     username VARCHAR(255) NOT NULL UNIQUE,
///     password_hash VARCHAR(255) NOT NULL,
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// ```
///
/// # Example
///
/// ```no_run
/// use warden_core::models::user::{CreateUser, User};
/// use warden_core::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
///
/// let user = User::create(
///     &pool,
///     CreateUser {
///         username: "alice".to_string(),
///         password_hash: "$argon2id$...".to_string(),
///     },
/// )
/// .await?;
/// println!("Created user: {}", user.id);
///
/// // Look the row up again
/// let found = User::find_by_username(&pool, "alice").await?;
/// assert!(found.is_some());
/// # Ok(())
/// # }
/// ```

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

/// User model representing a registered account
///
/// Passwords are stored as Argon2id hashes in PHC string format, never in
/// plaintext.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID v4)
    pub id: Uuid,

    /// Username (case-sensitive, unique across all users)
    pub username: String,

    /// Argon2id password hash in PHC string format
    ///
    /// Holds a hash, never the plaintext. Skipped when serializing so the
    /// hash cannot leak through a JSON surface.
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// When the account was registered
    pub created_at: DateTime<Utc>,
}

/// Input for creating a new user
///
/// `password_hash` must already be hashed; see [`crate::auth::password`].
#[derive(Debug, Clone)]
pub struct CreateUser {
    /// Username (unique key)
    pub username: String,

    /// Argon2id password hash, already computed by the caller
    pub password_hash: String,
}

impl User {
    /// Creates a new user in the database
    ///
    /// The insert is durable once this returns; there is no separate commit
    /// step.
    ///
    /// # Returns
    ///
    /// The stored row, with the database-generated ID and timestamp
    ///
    /// # Errors
    ///
    /// Returns an error when the username is already taken (unique
    /// constraint violation) or the database is unreachable
    pub async fn create(pool: &PgPool, data: CreateUser) -> Result<Self, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, password_hash)
            VALUES ($1, $2)
            RETURNING id, username, password_hash, created_at
            "#,
        )
        .bind(data.username)
        .bind(data.password_hash)
        .fetch_one(pool)
        .await?;

        Ok(user)
    }

    /// Finds a user by username
    ///
    /// The lookup is case-sensitive: `alice` and `Alice` are distinct
    /// usernames.
    ///
    /// # Returns
    ///
    /// The user when a row matches, `None` otherwise
    ///
    /// # Errors
    ///
    /// Returns an error when the database is unreachable
    pub async fn find_by_username(
        pool: &PgPool,
        username: &str,
    ) -> Result<Option<Self>, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, password_hash, created_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Counts the registered users
    ///
    /// # Errors
    ///
    /// Returns an error when the database is unreachable
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(pool)
            .await?;

        Ok(count)
    }

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
    /// Returns an error when the database is unreachable
    pub async fn delete_all(pool: &PgPool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM users").execute(pool).await?;

        Ok(result.rows_affected())
    }
}
