/// Argon2id password hashing and verification
///
/// Passwords are hashed with Argon2id at the `argon2` crate's default
/// parameters and a fresh 16-byte salt from the OS RNG. The output is a PHC
/// string, which carries the algorithm, version, parameters, and salt, so
/// a stored hash is all the verifier ever needs. Hashes written under older
/// parameter choices keep verifying because the parameters travel with the
/// hash.
///
/// # Example
///
/// ```
/// use warden_core::auth::password::{hash_password, verify_password};
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let hash = hash_password("super_secret_password_123")?;
///
/// assert!(verify_password("super_secret_password_123", &hash)?);
/// assert!(!verify_password("wrong_password", &hash)?);
/// # Ok(())
/// # }
/// ```

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

/// Errors from hashing or verifying a password
#[derive(Debug, thiserror::Error)]
pub enum PasswordError {
    /// Hashing the plaintext failed
    #[error("Failed to hash password: {0}")]
    HashError(String),

    /// Verification failed for a reason other than a mismatch
    #[error("Failed to verify password: {0}")]
    VerifyError(String),

    /// The stored hash is not a parseable PHC string
    #[error("Invalid password hash format: {0}")]
    InvalidHash(String),
}

/// Hashes a plaintext password with Argon2id and a random salt
///
/// Two calls with the same plaintext produce different hashes because each
/// call draws a new salt.
///
/// # Returns
///
/// A PHC string, e.g. `$argon2id$v=19$m=19456,t=2,p=1$<salt>$<digest>`
///
/// # Errors
///
/// Returns [`PasswordError::HashError`] if the hasher rejects the input
///
/// # Example
///
/// ```
/// use warden_core::auth::password::hash_password;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let hash = hash_password("my_password")?;
/// assert!(hash.starts_with("$argon2id$"));
/// # Ok(())
/// # }
/// ```
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| PasswordError::HashError(e.to_string()))
}

/// Verifies a plaintext password against a stored PHC hash
///
/// # Returns
///
/// `Ok(true)` when the password matches, `Ok(false)` when it does not
///
/// # Errors
///
/// Returns [`PasswordError::InvalidHash`] when the stored hash cannot be
/// parsed, [`PasswordError::VerifyError`] for any other verifier failure
///
/// # Example
///
/// ```
/// use warden_core::auth::password::{hash_password, verify_password};
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let hash = hash_password("correct_password")?;
///
/// assert!(verify_password("correct_password", &hash)?);
/// assert!(!verify_password("wrong_password", &hash)?);
/// # Ok(())
/// # }
/// ```
pub fn verify_password(password: &str, hash: &str) -> Result<bool, PasswordError> {
    let parsed = PasswordHash::new(hash).map_err(|e| PasswordError::InvalidHash(e.to_string()))?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(PasswordError::VerifyError(e.to_string())),
    }
}
