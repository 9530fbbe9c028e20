//! Category entity and lookup result.

use golden_fig_core::{CategoryId, ImageId};

/// A catalog category as loaded from the store, in one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    /// Parent category id; [`CategoryId::NONE`] for the absolute root.
    pub parent_id: CategoryId,
    /// Synthetic shop-root placeholder, never shown in navigation.
    pub is_root: bool,
    pub active: bool,
    pub name: String,
    /// URL slug ("link rewrite") for friendly URLs.
    pub slug: String,
    pub description: String,
    /// Distance from the shop root.
    pub depth: i32,
    pub image_id: Option<ImageId>,
}

/// Result of resolving a category id against the store.
///
/// An explicit sum type rather than a category struct with zeroed defaults:
/// code that needs the entity has to prove it was actually loaded, so
/// default field values can never be mistaken for real data.
#[derive(Debug, Clone)]
pub enum CategoryLookup {
    Loaded(Category),
    NotLoaded,
}

impl CategoryLookup {
    /// The loaded category, if any.
    #[must_use]
    pub const fn as_loaded(&self) -> Option<&Category> {
        match self {
            Self::Loaded(category) => Some(category),
            Self::NotLoaded => None,
        }
    }

    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }
}

impl From<Option<Category>> for CategoryLookup {
    fn from(category: Option<Category>) -> Self {
        category.map_or(Self::NotLoaded, Self::Loaded)
    }
}

/// Presented form of a category, as handed to templates and content filters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryView {
    pub id: CategoryId,
    pub name: String,
    pub description: String,
    /// Canonical page URL for this category (without pagination).
    pub url: String,
    pub image_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(id: i32) -> Category {
        Category {
            id: CategoryId::new(id),
            parent_id: CategoryId::new(1),
            is_root: false,
            active: true,
            name: "Shoes".to_string(),
            slug: "shoes".to_string(),
            description: String::new(),
            depth: 2,
            image_id: None,
        }
    }

    #[test]
    fn test_lookup_from_option() {
        let lookup = CategoryLookup::from(Some(category(7)));
        assert!(lookup.is_loaded());
        assert_eq!(
            lookup.as_loaded().map(|c| c.id),
            Some(CategoryId::new(7))
        );

        let lookup = CategoryLookup::from(None);
        assert!(!lookup.is_loaded());
        assert!(lookup.as_loaded().is_none());
    }
}
