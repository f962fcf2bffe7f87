/// Integration tests for the registration/login flow
///
/// These tests exercise the auth service end to end over the in-memory
/// credential store, so they need no external services and always run.
/// The live-PostgreSQL counterparts are in pg_store_tests.rs.

use warden_core::auth::service::{AuthOutcome, AuthService};
use warden_core::store::{CredentialStore, MemoryCredentialStore};

/// Helper returning a fresh service plus a handle onto its store
fn fresh_service() -> (AuthService<MemoryCredentialStore>, MemoryCredentialStore) {
    let store = MemoryCredentialStore::new();
    (AuthService::new(store.clone()), store)
}

#[tokio::test]
async fn test_register_then_login_succeeds() {
    let (service, _) = fresh_service();

    let outcome = service.register("alice", "correct horse").await.unwrap();
    assert_eq!(outcome, AuthOutcome::Registered);
    assert_eq!(outcome.message(), "User registered successfully.");

    let outcome = service.login("alice", "correct horse").await.unwrap();
    assert_eq!(
        outcome,
        AuthOutcome::LoggedIn {
            username: "alice".to_string()
        }
    );
    assert_eq!(outcome.message(), "Welcome back, alice!");
}

#[tokio::test]
async fn test_duplicate_registration_does_not_alter_stored_hash() {
    let (service, store) = fresh_service();

    service.register("alice", "first password").await.unwrap();
    let original_hash = store
        .find_by_username("alice")
        .await
        .unwrap()
        .unwrap()
        .password_hash;

    let outcome = service.register("alice", "second password").await.unwrap();

    assert_eq!(outcome, AuthOutcome::AlreadyExists);
    assert_eq!(outcome.message(), "Username already exists.");

    let current_hash = store
        .find_by_username("alice")
        .await
        .unwrap()
        .unwrap()
        .password_hash;
    assert_eq!(original_hash, current_hash);
    assert_eq!(store.count().await.unwrap(), 1);

    // The first password still works, the rejected one never took effect
    let outcome = service.login("alice", "first password").await.unwrap();
    assert!(outcome.is_success());
    let outcome = service.login("alice", "second password").await.unwrap();
    assert_eq!(outcome, AuthOutcome::WrongPassword);
}

#[tokio::test]
async fn test_wrong_password_does_not_mutate_state() {
    let (service, store) = fresh_service();

    service.register("alice", "correct horse").await.unwrap();
    let before = store.find_by_username("alice").await.unwrap().unwrap();

    let outcome = service.login("alice", "battery staple").await.unwrap();

    assert_eq!(outcome, AuthOutcome::WrongPassword);
    assert_eq!(outcome.message(), "Incorrect password.");

    let after = store.find_by_username("alice").await.unwrap().unwrap();
    assert_eq!(before.id, after.id);
    assert_eq!(before.password_hash, after.password_hash);
    assert_eq!(store.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_login_nonexistent_username() {
    let (service, store) = fresh_service();

    let outcome = service.login("ghost", "anything").await.unwrap();

    assert_eq!(outcome, AuthOutcome::NotFound);
    assert_eq!(outcome.message(), "User not found.");
    assert_eq!(store.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_stored_password_is_never_the_plaintext() {
    let (service, store) = fresh_service();

    service.register("alice", "supersecret").await.unwrap();

    let user = store.find_by_username("alice").await.unwrap().unwrap();
    assert_ne!(user.password_hash, "supersecret");
    // Argon2id PHC string, parameters embedded
    assert!(user.password_hash.starts_with("$argon2id$"));
    assert!(user.password_hash.contains("v=19"));
}

#[tokio::test]
async fn test_distinct_users_are_independent() {
    let (service, store) = fresh_service();

    service.register("alice", "alice-pass").await.unwrap();
    service.register("bob", "bob-pass").await.unwrap();
    assert_eq!(store.count().await.unwrap(), 2);

    // Each password only opens its own account
    assert!(service.login("alice", "alice-pass").await.unwrap().is_success());
    assert_eq!(
        service.login("alice", "bob-pass").await.unwrap(),
        AuthOutcome::WrongPassword
    );
    assert!(service.login("bob", "bob-pass").await.unwrap().is_success());

    // Same password, different users: hashes differ (random salt)
    service.register("carol", "alice-pass").await.unwrap();
    let alice = store.find_by_username("alice").await.unwrap().unwrap();
    let carol = store.find_by_username("carol").await.unwrap().unwrap();
    assert_ne!(alice.password_hash, carol.password_hash);
}

/// End-to-end walkthrough of every outcome, message for message
#[tokio::test]
async fn test_full_scenario() {
    let (service, _) = fresh_service();

    let outcome = service.register("shamila", "1234").await.unwrap();
    assert_eq!(outcome.message(), "User registered successfully.");

    let outcome = service.login("shamila", "1234").await.unwrap();
    assert_eq!(outcome.message(), "Welcome back, shamila!");

    let outcome = service.login("shamila", "wrongpass").await.unwrap();
    assert_eq!(outcome.message(), "Incorrect password.");

    let outcome = service.register("shamila", "1234").await.unwrap();
    assert_eq!(outcome.message(), "Username already exists.");
}

#[tokio::test]
async fn test_outcome_serializes_with_kind_and_message() {
    let (service, _) = fresh_service();

    let outcome = service.register("shamila", "1234").await.unwrap();
    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["kind"], "registered");
    assert_eq!(json["message"], "User registered successfully.");

    let outcome = service.login("shamila", "1234").await.unwrap();
    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["kind"], "logged_in");
    assert_eq!(json["message"], "Welcome back, shamila!");
}

#[tokio::test]
async fn test_delete_all_resets_the_store() {
    let (service, store) = fresh_service();

    service.register("alice", "pass").await.unwrap();
    service.register("bob", "pass").await.unwrap();

    let removed = store.delete_all().await.unwrap();
    assert_eq!(removed, 2);

    // After teardown the usernames are free again
    let outcome = service.register("alice", "pass").await.unwrap();
    assert_eq!(outcome, AuthOutcome::Registered);
}
