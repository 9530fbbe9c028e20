//! Storefront services.
//!
//! Small collaborators used by the route handlers: the category content
//! filter extension point and image URL resolution.

pub mod content_filter;
pub mod images;

pub use content_filter::{CategoryContentFilter, ContentFilterError};
pub use images::ImageResolver;
