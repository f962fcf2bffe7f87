/// Registration and login service
///
/// This module implements the two operations of the system:
/// - Registration: hash the password and persist a new user
/// - Login: look the user up and verify the password
///
/// The service talks to the user table through the [`CredentialStore`] seam
/// and receives its store at construction, so the same logic runs against
/// PostgreSQL in production and the in-memory store in tests.
///
/// Domain outcomes (duplicate username, unknown user, wrong password) are
/// ordinary [`AuthOutcome`] values that callers can branch on; `Err` is
/// reserved for infrastructure failures (storage, hashing).
///
/// # Example
///
/// ```
/// use warden_core::auth::service::{AuthOutcome, AuthService};
/// use warden_core::store::MemoryCredentialStore;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let service = AuthService::new(MemoryCredentialStore::new());
///
/// let outcome = service.register("alice", "hunter2").await?;
/// assert_eq!(outcome, AuthOutcome::Registered);
/// assert_eq!(outcome.message(), "User registered successfully.");
///
/// let outcome = service.login("alice", "hunter2").await?;
/// assert_eq!(outcome.message(), "Welcome back, alice!");
/// # Ok(())
/// # }
/// ```

use crate::auth::password::{self, PasswordError};
use crate::models::user::CreateUser;
use crate::store::{CredentialStore, StoreError};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::fmt;
use tracing::{debug, info};

/// Error type for auth operations
///
/// Only infrastructure failures land here; every domain outcome is an
/// [`AuthOutcome`].
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Credential store failure
    #[error("Credential store error: {0}")]
    Store(#[from] StoreError),

    /// Password hashing or verification failure
    #[error("Password error: {0}")]
    Password(#[from] PasswordError),
}

/// Auth result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Outcome of a registration or login attempt
///
/// Callers branch on the variant; `message()` produces the human-readable
/// string for each outcome. Serializes as a mapping with `kind` and
/// `message` keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    /// Registration succeeded and the user row was persisted
    Registered,

    /// Registration rejected: the username is taken
    AlreadyExists,

    /// Login succeeded
    LoggedIn {
        /// The username that logged in
        username: String,
    },

    /// Login rejected: no user with that username
    NotFound,

    /// Login rejected: the password did not match
    WrongPassword,
}

impl AuthOutcome {
    /// Returns the outcome kind as a stable snake_case tag
    pub fn kind(&self) -> &'static str {
        match self {
            AuthOutcome::Registered => "registered",
            AuthOutcome::AlreadyExists => "already_exists",
            AuthOutcome::LoggedIn { .. } => "logged_in",
            AuthOutcome::NotFound => "not_found",
            AuthOutcome::WrongPassword => "wrong_password",
        }
    }

    /// Returns the human-readable message for this outcome
    pub fn message(&self) -> String {
        match self {
            AuthOutcome::Registered => "User registered successfully.".to_string(),
            AuthOutcome::AlreadyExists => "Username already exists.".to_string(),
            AuthOutcome::LoggedIn { username } => format!("Welcome back, {}!", username),
            AuthOutcome::NotFound => "User not found.".to_string(),
            AuthOutcome::WrongPassword => "Incorrect password.".to_string(),
        }
    }

    /// Whether this outcome is a success (registered or logged in)
    pub fn is_success(&self) -> bool {
        matches!(self, AuthOutcome::Registered | AuthOutcome::LoggedIn { .. })
    }
}

impl fmt::Display for AuthOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl Serialize for AuthOutcome {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("kind", self.kind())?;
        map.serialize_entry("message", &self.message())?;
        map.end()
    }
}

/// Registration and login over a credential store
///
/// Stateless between calls; all state lives in the store.
pub struct AuthService<S> {
    store: S,
}

impl<S: CredentialStore> AuthService<S> {
    /// Creates a service over the given credential store
    pub fn new(store: S) -> Self {
        AuthService { store }
    }

    /// Returns a reference to the underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Registers a new user
    ///
    /// If the username is free, hashes the password (Argon2id, random salt)
    /// and persists the new user. If the username is taken, returns
    /// [`AuthOutcome::AlreadyExists`] and writes nothing.
    ///
    /// Inputs are stored verbatim: empty usernames and passwords are
    /// accepted.
    ///
    /// # Arguments
    ///
    /// * `username` - Username to register (unique key)
    /// * `password` - Plaintext password; only its hash is stored
    ///
    /// # Returns
    ///
    /// `AuthOutcome::Registered` or `AuthOutcome::AlreadyExists`
    ///
    /// # Errors
    ///
    /// Returns `AuthError` if hashing fails or the store is unreachable
    ///
    /// # Example
    ///
    /// ```
    /// use warden_core::auth::service::{AuthOutcome, AuthService};
    /// use warden_core::store::MemoryCredentialStore;
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let service = AuthService::new(MemoryCredentialStore::new());
    ///
    /// assert_eq!(
    ///     service.register("alice", "hunter2").await?,
    ///     AuthOutcome::Registered
    /// );
    /// assert_eq!(
    ///     service.register("alice", "hunter2").await?,
    ///     AuthOutcome::AlreadyExists
    /// );
    /// # Ok(())
    /// # }
    /// ```
    pub async fn register(&self, username: &str, password: &str) -> AuthResult<AuthOutcome> {
        // Fast path: reject without hashing when the name is visibly taken
        if self.store.find_by_username(username).await?.is_some() {
            debug!(username = username, "Registration rejected: username taken");
            return Ok(AuthOutcome::AlreadyExists);
        }

        let password_hash = password::hash_password(password)?;

        match self
            .store
            .insert(CreateUser {
                username: username.to_string(),
                password_hash,
            })
            .await
        {
            Ok(user) => {
                info!(username = %user.username, user_id = %user.id, "User registered");
                Ok(AuthOutcome::Registered)
            }
            // Lost the check-then-insert race: someone registered the name
            // after our existence check. Same outcome as the fast path.
            Err(StoreError::DuplicateUsername(_)) => {
                debug!(username = username, "Registration lost insert race");
                Ok(AuthOutcome::AlreadyExists)
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Logs a user in
    ///
    /// Looks the user up by username and verifies the password against the
    /// stored hash. Read-only; no state changes on any outcome.
    ///
    /// # Arguments
    ///
    /// * `username` - Username to look up
    /// * `password` - Plaintext password to verify
    ///
    /// # Returns
    ///
    /// `AuthOutcome::LoggedIn` on success, `AuthOutcome::NotFound` for an
    /// unknown username, `AuthOutcome::WrongPassword` on mismatch
    ///
    /// # Errors
    ///
    /// Returns `AuthError` if the store is unreachable or the stored hash
    /// cannot be parsed
    ///
    /// # Example
    ///
    /// ```
    /// use warden_core::auth::service::{AuthOutcome, AuthService};
    /// use warden_core::store::MemoryCredentialStore;
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let service = AuthService::new(MemoryCredentialStore::new());
    /// service.register("alice", "hunter2").await?;
    ///
    /// let outcome = service.login("alice", "wrong").await?;
    /// assert_eq!(outcome, AuthOutcome::WrongPassword);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn login(&self, username: &str, password: &str) -> AuthResult<AuthOutcome> {
        let user = match self.store.find_by_username(username).await? {
            Some(user) => user,
            None => {
                debug!(username = username, "Login rejected: unknown username");
                return Ok(AuthOutcome::NotFound);
            }
        };

        if password::verify_password(password, &user.password_hash)? {
            info!(username = %user.username, "User logged in");
            Ok(AuthOutcome::LoggedIn {
                username: user.username,
            })
        } else {
            debug!(username = username, "Login rejected: incorrect password");
            Ok(AuthOutcome::WrongPassword)
        }
    }
}
