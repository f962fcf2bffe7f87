/// Database models for warden
///
/// This module contains the persisted models and their SQL operations.
///
/// # Models
///
/// - `user`: user accounts (username + password hash)
///
/// # Example
///
/// ```no_run
/// use warden_core::models::user::{CreateUser, User};
/// use warden_core::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig {
///     url: std::env::var("DATABASE_URL")?,
///     ..Default::default()
/// })
/// .await?;
///
/// let user = User::create(
///     &pool,
///     CreateUser {
///         username: "alice".to_string(),
///         password_hash: "$argon2id$...".to_string(),
///     },
/// )
/// .await?;
/// # Ok(())
/// # }
/// ```
pub mod user;
