//! Image URL resolution for catalog imagery.

use golden_fig_core::ImageId;

/// Resolves image ids into public image URLs.
///
/// Image binaries are served by the asset host under the public base URL;
/// this only knows the path convention.
#[derive(Debug, Clone)]
pub struct ImageResolver {
    base_url: String,
}

impl ImageResolver {
    /// Create a resolver from the public base URL.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// URL for a category image, if the category has one.
    #[must_use]
    pub fn category_image(&self, image_id: Option<ImageId>) -> Option<String> {
        image_id.map(|id| format!("{}/img/c/{id}.jpg", self.base_url))
    }

    /// URL for a product cover image, if the product has one.
    #[must_use]
    pub fn product_image(&self, image_id: Option<ImageId>) -> Option<String> {
        image_id.map(|id| format!("{}/img/p/{id}.jpg", self.base_url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_image_url() {
        let images = ImageResolver::new("https://shop.example/");
        assert_eq!(
            images.category_image(Some(ImageId::new(12))),
            Some("https://shop.example/img/c/12.jpg".to_string())
        );
    }

    #[test]
    fn test_missing_image_resolves_to_none() {
        let images = ImageResolver::new("https://shop.example");
        assert_eq!(images.category_image(None), None);
        assert_eq!(images.product_image(None), None);
    }
}
