//! Breadcrumb trail construction from a category's ancestor chain.

use super::category::Category;

/// One navigational link in the breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreadcrumbLink {
    pub title: String,
    pub url: String,
}

/// Upper bound on ancestors walked per trail.
///
/// The ancestor chain comes from the store; a malformed chain containing a
/// cycle would otherwise make this the one place the page could loop forever.
const MAX_TRAIL_LEN: usize = 64;

/// Whether a category may appear as a crumb.
///
/// True root-level categories (parent is the absolute root) are shown as a
/// single top-level crumb; the synthetic shop-root placeholder and inactive
/// nodes are suppressed. Evaluated per node: an inactive ancestor in the
/// middle of the chain is skipped without truncating what follows.
fn visible_as_crumb(category: &Category) -> bool {
    !category.parent_id.is_none() && !category.is_root && category.active
}

/// Build the breadcrumb trail for `category`.
///
/// `prefix` is the externally supplied base trail (site home and the like),
/// passed through unchanged. `ancestors` must be ordered outermost first,
/// excluding `category` itself; `link` renders a category into its page URL.
/// The result is ordered root-to-leaf with `category` as the final crumb
/// when it qualifies.
pub fn build_trail(
    prefix: Vec<BreadcrumbLink>,
    ancestors: &[Category],
    category: &Category,
    link: impl Fn(&Category) -> String,
) -> Vec<BreadcrumbLink> {
    let mut trail = prefix;

    for ancestor in ancestors.iter().take(MAX_TRAIL_LEN) {
        if visible_as_crumb(ancestor) {
            trail.push(BreadcrumbLink {
                title: ancestor.name.clone(),
                url: link(ancestor),
            });
        }
    }

    if visible_as_crumb(category) {
        trail.push(BreadcrumbLink {
            title: category.name.clone(),
            url: link(category),
        });
    }

    trail
}

#[cfg(test)]
mod tests {
    use golden_fig_core::CategoryId;

    use super::*;

    fn category(id: i32, parent_id: i32, name: &str) -> Category {
        Category {
            id: CategoryId::new(id),
            parent_id: CategoryId::new(parent_id),
            is_root: false,
            active: true,
            name: name.to_string(),
            slug: name.to_lowercase(),
            description: String::new(),
            depth: 0,
            image_id: None,
        }
    }

    fn link(c: &Category) -> String {
        format!("/c/{}-{}", c.id, c.slug)
    }

    fn home_prefix() -> Vec<BreadcrumbLink> {
        vec![BreadcrumbLink {
            title: "Home".to_string(),
            url: "/".to_string(),
        }]
    }

    fn titles(trail: &[BreadcrumbLink]) -> Vec<&str> {
        trail.iter().map(|l| l.title.as_str()).collect()
    }

    #[test]
    fn test_root_placeholder_ancestor_is_excluded() {
        // Chain root -> A -> B -> C where A is the shop-root placeholder.
        let mut a = category(2, 1, "A");
        a.is_root = true;
        let b = category(3, 2, "B");
        let c = category(4, 3, "C");

        let trail = build_trail(home_prefix(), &[a, b], &c, link);
        assert_eq!(titles(&trail), vec!["Home", "B", "C"]);
    }

    #[test]
    fn test_category_with_no_parent_is_not_appended() {
        let orphan = category(5, 0, "Orphan");
        let trail = build_trail(home_prefix(), &[], &orphan, link);
        assert_eq!(titles(&trail), vec!["Home"]);
    }

    #[test]
    fn test_inactive_middle_ancestor_is_skipped_not_truncating() {
        let a = category(2, 1, "A");
        let mut b = category(3, 2, "B");
        b.active = false;
        let c = category(4, 3, "C");
        let leaf = category(5, 4, "D");

        let trail = build_trail(Vec::new(), &[a, b, c], &leaf, link);
        assert_eq!(titles(&trail), vec!["A", "C", "D"]);
    }

    #[test]
    fn test_prefix_passes_through_unchanged() {
        let prefix = vec![
            BreadcrumbLink {
                title: "Home".to_string(),
                url: "/".to_string(),
            },
            BreadcrumbLink {
                title: "Catalog".to_string(),
                url: "/catalog".to_string(),
            },
        ];
        let leaf = category(7, 3, "Shoes");
        let trail = build_trail(prefix.clone(), &[], &leaf, link);
        assert_eq!(trail.first(), prefix.first());
        assert_eq!(trail.get(1), prefix.get(1));
        assert_eq!(titles(&trail), vec!["Home", "Catalog", "Shoes"]);
    }

    #[test]
    fn test_crumb_links_use_link_service() {
        let leaf = category(7, 3, "Shoes");
        let trail = build_trail(Vec::new(), &[], &leaf, link);
        assert_eq!(
            trail,
            vec![BreadcrumbLink {
                title: "Shoes".to_string(),
                url: "/c/7-shoes".to_string(),
            }]
        );
    }

    #[test]
    fn test_malformed_cyclic_chain_is_capped() {
        // A store bug returning a cyclic chain must not blow up the trail.
        let looped: Vec<Category> = (0..500)
            .map(|i| category(2 + (i % 2), 1 + (i % 2), "Loop"))
            .collect();
        let leaf = category(9, 3, "Leaf");
        let trail = build_trail(Vec::new(), &looped, &leaf, link);
        assert_eq!(trail.len(), MAX_TRAIL_LEN + 1);
    }
}
