//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page
//! GET  /health                 - Health check
//!
//! # Catalog
//! GET  /c/{slug}               - Category page (friendly URL, "7-shoes")
//! GET  /c/{slug}?partial=1     - Product-grid fragment only
//! GET  /category?id_category=7 - Category page (id addressing)
//! ```
//!
//! Category pages also consume `page` (pagination) and `order`
//! (`field.direction` product sort) query parameters.

pub mod category;
pub mod home;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Create the category routes router.
pub fn category_routes() -> Router<AppState> {
    Router::new()
        .route("/c/{slug}", get(category::show_by_slug))
        .route("/category", get(category::show_by_query))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(home::home))
        // Category routes
        .merge(category_routes())
}
