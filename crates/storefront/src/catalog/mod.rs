//! Category resolution and navigation metadata.
//!
//! This module owns the logic behind a category page that is not plain
//! delegation: resolving a category id into a loaded entity, deciding
//! whether the viewer may see it, normalizing the canonical URL, and
//! assembling the breadcrumb trail from the ancestor chain. Everything
//! else on the page (templates, product search, images) lives elsewhere
//! and is orchestrated by [`crate::routes::category`].

pub mod access;
pub mod breadcrumb;
pub mod canonical;
pub mod category;

pub use access::AccessDecision;
pub use breadcrumb::BreadcrumbLink;
pub use category::{Category, CategoryLookup, CategoryView};

use thiserror::Error;

/// Errors produced by the catalog pipeline.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The canonical base URL could not be parsed.
    #[error("malformed canonical base URL {url:?}: {source}")]
    MalformedUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}
