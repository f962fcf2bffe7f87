//! # Warden Core Library
//!
//! This crate implements a minimal username/password registration and login
//! flow backed by a relational `users` table. It provides the authentication
//! service, the credential store it talks through, and the supporting
//! database plumbing.
//!
//! ## Module Organization
//!
//! - `auth`: password hashing and the registration/login service
//! - `config`: environment-driven configuration
//! - `db`: PostgreSQL connection pool and migrations
//! - `models`: database models
//! - `store`: the credential store seam (PostgreSQL and in-memory)

pub mod auth;
pub mod config;
pub mod db;
pub mod models;
pub mod store;

/// Current version of the warden core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
