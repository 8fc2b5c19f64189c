//! Database operations for the StickerFly `PostgreSQL` database.
//!
//! # Tables
//!
//! - `users` - Accounts (role, argon2 password hash, profile sub-documents)
//! - `products` - Catalog and custom-order products (sizes as JSONB)
//! - `orders` - Orders (line items, shipping, payment as JSONB)
//! - `blog_posts` - Blog content, keyed by unique slug
//! - `contact_messages` - Stored contact-form submissions
//! - tower-sessions storage (managed by the session store)
//!
//! # Migrations
//!
//! Migrations live in `crates/server/migrations/` and run via:
//! ```bash
//! cargo run -p stickerfly-cli -- migrate
//! ```
//!
//! Queries use runtime binding (`sqlx::query_as`) with `FromRow` row structs
//! converted into domain types through `TryFrom`, so an unexpected value in
//! the database surfaces as [`RepositoryError::DataCorruption`] instead of a
//! panic.

pub mod contact;
pub mod orders;
pub mod posts;
pub mod products;
pub mod users;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

/// Error type for repository operations.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,

    /// Constraint violation (e.g., unique email or slug).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

impl RepositoryError {
    /// Wrap a sqlx error, turning unique-key violations into
    /// [`RepositoryError::Conflict`].
    pub(crate) fn from_sqlx(err: sqlx::Error, conflict_message: &str) -> Self {
        if let sqlx::Error::Database(ref db_err) = err
            && db_err.is_unique_violation()
        {
            return Self::Conflict(conflict_message.to_owned());
        }
        Self::Database(err)
    }
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
