//! Category content filter extension point.
//!
//! Deployments can register filters that rewrite the presented category
//! before it reaches the template (seasonal banners, A/B copy swaps).
//! This is deliberately a single narrow extension point over one view
//! type, not a general plugin bus.

use std::sync::Arc;

use thiserror::Error;

use crate::catalog::CategoryView;

/// Error raised by a content filter.
///
/// Filters are third-party code; their failures are logged and swallowed,
/// never surfaced to the page.
#[derive(Debug, Error)]
#[error("content filter failed: {0}")]
pub struct ContentFilterError(pub String);

/// A registered category content filter.
///
/// Returns `Ok(Some(view))` to replace the presented category, `Ok(None)`
/// to pass.
pub type CategoryContentFilter =
    Arc<dyn Fn(&CategoryView) -> Result<Option<CategoryView>, ContentFilterError> + Send + Sync>;

/// Run `view` through the registered filters.
///
/// The first filter that returns a replacement wins; later filters are not
/// consulted. A filter that errors is skipped and the original content is
/// retained.
#[must_use]
pub fn apply(filters: &[CategoryContentFilter], view: CategoryView) -> CategoryView {
    for filter in filters {
        match filter(&view) {
            Ok(Some(replacement)) => return replacement,
            Ok(None) => {}
            Err(err) => {
                tracing::warn!(error = %err, category_id = %view.id, "category content filter failed");
            }
        }
    }
    view
}

#[cfg(test)]
mod tests {
    use golden_fig_core::CategoryId;

    use super::*;

    fn view(name: &str) -> CategoryView {
        CategoryView {
            id: CategoryId::new(7),
            name: name.to_string(),
            description: String::new(),
            url: "https://shop.example/c/7-shoes".to_string(),
            image_url: None,
        }
    }

    #[test]
    fn test_no_filters_returns_original() {
        let original = view("Shoes");
        assert_eq!(apply(&[], original.clone()), original);
    }

    #[test]
    fn test_first_replacement_wins() {
        let filters: Vec<CategoryContentFilter> = vec![
            Arc::new(|_| Ok(None)),
            Arc::new(|v| {
                Ok(Some(CategoryView {
                    name: "Summer Shoes".to_string(),
                    ..v.clone()
                }))
            }),
            Arc::new(|v| {
                Ok(Some(CategoryView {
                    name: "Never Applied".to_string(),
                    ..v.clone()
                }))
            }),
        ];
        let filtered = apply(&filters, view("Shoes"));
        assert_eq!(filtered.name, "Summer Shoes");
    }

    #[test]
    fn test_failing_filter_is_skipped_and_original_retained() {
        let filters: Vec<CategoryContentFilter> = vec![Arc::new(|_| {
            Err(ContentFilterError("module exploded".to_string()))
        })];
        let original = view("Shoes");
        assert_eq!(apply(&filters, original.clone()), original);
    }

    #[test]
    fn test_failure_does_not_block_later_filters() {
        let filters: Vec<CategoryContentFilter> = vec![
            Arc::new(|_| Err(ContentFilterError("module exploded".to_string()))),
            Arc::new(|v| {
                Ok(Some(CategoryView {
                    name: "Rescued".to_string(),
                    ..v.clone()
                }))
            }),
        ];
        assert_eq!(apply(&filters, view("Shoes")).name, "Rescued");
    }
}
