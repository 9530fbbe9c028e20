//! URL construction for storefront pages.
//!
//! All page links are absolute, built from the configured public base URL,
//! so the same values can be used for navigation, breadcrumbs, and the
//! canonical `<link>` tag.

use golden_fig_core::{CategoryId, ProductId};

use crate::catalog::Category;

/// Builds absolute storefront URLs.
#[derive(Debug, Clone)]
pub struct LinkBuilder {
    base_url: String,
}

impl LinkBuilder {
    /// Create a link builder from the public base URL.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Link to the site home page.
    #[must_use]
    pub fn home(&self) -> String {
        format!("{}/", self.base_url)
    }

    /// Base link for a loaded category (no pagination).
    #[must_use]
    pub fn category(&self, category: &Category) -> String {
        self.category_parts(category.id, &category.slug)
    }

    /// Base link for a category known only by id and slug, as with raw
    /// subcategory records.
    #[must_use]
    pub fn category_parts(&self, id: CategoryId, slug: &str) -> String {
        format!("{}/c/{id}-{slug}", self.base_url)
    }

    /// Link to a product page.
    #[must_use]
    pub fn product_parts(&self, id: ProductId, slug: &str) -> String {
        format!("{}/p/{id}-{slug}", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use golden_fig_core::ImageId;

    use super::*;

    #[test]
    fn test_trailing_slash_is_normalized() {
        let links = LinkBuilder::new("https://shop.example/");
        assert_eq!(links.home(), "https://shop.example/");
        assert_eq!(
            links.category_parts(CategoryId::new(3), "summer-sale"),
            "https://shop.example/c/3-summer-sale"
        );
    }

    #[test]
    fn test_category_link_uses_id_and_slug() {
        let links = LinkBuilder::new("https://shop.example");
        let category = Category {
            id: CategoryId::new(7),
            parent_id: CategoryId::new(3),
            is_root: false,
            active: true,
            name: "Shoes".to_string(),
            slug: "shoes".to_string(),
            description: String::new(),
            depth: 2,
            image_id: Some(ImageId::new(12)),
        };
        assert_eq!(links.category(&category), "https://shop.example/c/7-shoes");
    }
}
