/// Authentication for warden
///
/// This module provides the credential-handling pieces of the system:
///
/// # Modules
///
/// - [`password`]: Argon2id password hashing and verification
/// - [`service`]: the registration/login service over a credential store
///
/// # Security Notes
///
/// - Passwords are hashed with Argon2id and a random per-hash salt
/// - Verification is constant-time and reads its parameters from the
///   stored PHC string
/// - Plaintext passwords are never persisted or logged
///
/// # Example
///
/// ```
/// use warden_core::auth::password::{hash_password, verify_password};
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let hash = hash_password("user_password")?;
/// assert!(verify_password("user_password", &hash)?);
/// # Ok(())
/// # }
/// ```
pub mod password;
pub mod service;
