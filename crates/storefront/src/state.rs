//! Application state shared across handlers.

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::StorefrontConfig;
use crate::links::LinkBuilder;
use crate::services::{CategoryContentFilter, ImageResolver};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// shared resources like database connections and configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    pool: PgPool,
    links: LinkBuilder,
    images: ImageResolver,
    content_filters: Vec<CategoryContentFilter>,
}

impl AppState {
    /// Create a new application state.
    ///
    /// `content_filters` is the ordered chain of category content filters
    /// registered at startup; most deployments pass an empty list.
    #[must_use]
    pub fn new(
        config: StorefrontConfig,
        pool: PgPool,
        content_filters: Vec<CategoryContentFilter>,
    ) -> Self {
        let links = LinkBuilder::new(&config.base_url);
        let images = ImageResolver::new(&config.base_url);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                pool,
                links,
                images,
                content_filters,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the database connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }

    /// Get a reference to the link builder.
    #[must_use]
    pub fn links(&self) -> &LinkBuilder {
        &self.inner.links
    }

    /// Get a reference to the image resolver.
    #[must_use]
    pub fn images(&self) -> &ImageResolver {
        &self.inner.images
    }

    /// Registered category content filters, in application order.
    #[must_use]
    pub fn content_filters(&self) -> &[CategoryContentFilter] {
        &self.inner.content_filters
    }
}
