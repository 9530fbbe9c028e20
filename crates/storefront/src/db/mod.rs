//! Database operations for storefront `PostgreSQL`.
//!
//! # Database: `gf_storefront`
//!
//! The catalog is read-only for this binary; writes happen in back-office
//! tooling.
//!
//! ## Tables
//!
//! - `categories` / `category_translations` - Category tree and per-language copy
//! - `category_group` - Which customer groups may view a category
//! - `customer_group` - Group memberships for signed-in customers
//! - `products` / `product_translations` / `product_category` - Listing data
//! - `sessions` - Tower-sessions storage
//!
//! # Migrations
//!
//! Migrations are stored in `crates/storefront/migrations/` and run via
//! `sqlx migrate run`.

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

pub mod categories;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
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
