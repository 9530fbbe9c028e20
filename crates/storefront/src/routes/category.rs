//! Category page route handlers.
//!
//! The orchestrator over the catalog pipeline: resolve the category,
//! decide access, then assemble the view-models, breadcrumb trail,
//! canonical URL, and product listing for the templates.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use golden_fig_core::{CategoryId, CustomerId, Price, ProductId};
use serde::Deserialize;
use tracing::instrument;

use crate::catalog::{
    AccessDecision, BreadcrumbLink, Category, CategoryLookup, CategoryView, access, breadcrumb,
    canonical,
};
use crate::db::categories::CategoryRepository;
use crate::error::Result;
use crate::filters;
use crate::middleware::OptionalCustomer;
use crate::search::{self, ProductSearchQuery, SortOrder};
use crate::services::content_filter;
use crate::state::AppState;

/// Products per page for the category listing.
const PRODUCTS_PER_PAGE: u32 = 12;

const NOT_FOUND_TITLE: &str = "The page you are looking for was not found.";
const FORBIDDEN_MESSAGE: &str = "You do not have access to this category.";

/// Category page query parameters.
///
/// Raw strings, not integers: request input follows coercion semantics
/// (anything that is not a positive integer counts as absent) instead of
/// rejecting the request with a 400.
#[derive(Debug, Deserialize)]
pub struct CategoryPageQuery {
    pub id_category: Option<String>,
    pub page: Option<String>,
    pub order: Option<String>,
    /// `partial=1` returns only the product-grid fragment.
    pub partial: Option<String>,
}

impl CategoryPageQuery {
    fn is_partial(&self) -> bool {
        self.partial.as_deref() == Some("1")
    }
}

/// Page-level metadata handed to the base template.
#[derive(Debug, Clone)]
pub struct PageMeta {
    /// Internal page name ("category", "pagenotfound", ...).
    pub name: String,
    pub title: String,
    pub body_classes: Vec<String>,
}

impl PageMeta {
    /// Space-joined class list for the `<body>` tag.
    #[must_use]
    pub fn class_attr(&self) -> String {
        self.body_classes.join(" ")
    }
}

/// Subcategory display data for the grid.
pub struct SubcategoryView {
    pub id: CategoryId,
    pub name: String,
    pub description: String,
    pub url: String,
    pub image_url: Option<String>,
}

/// Product display data for listing cards.
pub struct ProductCardView {
    pub id: ProductId,
    pub name: String,
    pub url: String,
    pub price: String,
    pub image_url: Option<String>,
}

/// Product listing data for the grid partial.
pub struct ListingView {
    /// Localized listing label ("Category: Shoes").
    pub label: String,
    pub products: Vec<ProductCardView>,
    pub total: i64,
    pub current_page: u32,
    pub total_pages: u32,
    pub has_more: bool,
}

/// Category page template.
#[derive(Template, WebTemplate)]
#[template(path = "catalog/category.html")]
pub struct CategoryPageTemplate {
    pub page: PageMeta,
    pub category: CategoryView,
    pub subcategories: Vec<SubcategoryView>,
    pub breadcrumbs: Vec<BreadcrumbLink>,
    pub canonical_url: Option<String>,
    pub listing: ListingView,
    pub full_width: bool,
}

/// Product-grid fragment template, also embedded in the full page.
#[derive(Template, WebTemplate)]
#[template(path = "catalog/_products.html")]
pub struct CategoryProductsPartial {
    pub listing: ListingView,
}

/// Not-found page template.
#[derive(Template, WebTemplate)]
#[template(path = "errors/not_found.html")]
pub struct NotFoundTemplate {
    pub page: PageMeta,
}

/// Forbidden page template.
#[derive(Template, WebTemplate)]
#[template(path = "errors/forbidden.html")]
pub struct ForbiddenTemplate {
    pub page: PageMeta,
    pub message: String,
}

// =============================================================================
// Handlers
// =============================================================================

/// Display a category page addressed by friendly URL (`/c/{id}-{slug}`).
#[instrument(skip(state, viewer))]
pub async fn show_by_slug(
    State(state): State<AppState>,
    OptionalCustomer(viewer): OptionalCustomer,
    Path(slug): Path<String>,
    Query(query): Query<CategoryPageQuery>,
) -> Result<Response> {
    render(&state, viewer, slug_id(&slug), &query).await
}

/// Display a category page addressed by the `id_category` query parameter.
#[instrument(skip(state, viewer))]
pub async fn show_by_query(
    State(state): State<AppState>,
    OptionalCustomer(viewer): OptionalCustomer,
    Query(query): Query<CategoryPageQuery>,
) -> Result<Response> {
    render(&state, viewer, coerce_id(query.id_category.as_deref()), &query).await
}

async fn render(
    state: &AppState,
    viewer: Option<CustomerId>,
    id: i32,
    query: &CategoryPageQuery,
) -> Result<Response> {
    let repo = CategoryRepository::new(state.pool());
    let language_id = state.config().language_id;

    let lookup = if id > 0 {
        CategoryLookup::from(repo.load(CategoryId::new(id), language_id).await?)
    } else {
        CategoryLookup::NotLoaded
    };

    // First access check; only meaningful for a loaded, active category.
    let may_view = match lookup.as_loaded() {
        Some(category) if category.active => repo.check_access(category.id, viewer).await?,
        _ => false,
    };

    match access::evaluate(&lookup, may_view) {
        AccessDecision::NotFound => {
            tracing::debug!(id_category = id, "category not found");
            Ok((
                StatusCode::NOT_FOUND,
                NotFoundTemplate {
                    page: not_found_page(),
                },
            )
                .into_response())
        }
        AccessDecision::Forbidden => {
            tracing::debug!(id_category = id, "category access denied");
            let page = lookup
                .as_loaded()
                .map_or_else(not_found_page, category_page);
            Ok((
                StatusCode::FORBIDDEN,
                ForbiddenTemplate {
                    page,
                    message: FORBIDDEN_MESSAGE.to_string(),
                },
            )
                .into_response())
        }
        AccessDecision::Allowed => {
            let CategoryLookup::Loaded(category) = lookup else {
                return Ok((
                    StatusCode::NOT_FOUND,
                    NotFoundTemplate {
                        page: not_found_page(),
                    },
                )
                    .into_response());
            };
            listing_page(state, &repo, viewer, &category, query).await
        }
    }
}

async fn listing_page(
    state: &AppState,
    repo: &CategoryRepository<'_>,
    viewer: Option<CustomerId>,
    category: &Category,
    query: &CategoryPageQuery,
) -> Result<Response> {
    let language_id = state.config().language_id;
    let current_page = coerce_page(query.page.as_deref());
    let sort = SortOrder::parse(query.order.as_deref().unwrap_or_default());

    let listing_data = search::run(
        state.pool(),
        &ProductSearchQuery {
            category_id: category.id,
            language_id,
            sort,
            page: current_page.max(1),
            per_page: PRODUCTS_PER_PAGE,
        },
    )
    .await?;

    let listing = ListingView {
        label: format!("Category: {}", category.name),
        products: listing_data
            .products
            .iter()
            .map(|product| ProductCardView {
                id: product.id,
                name: product.name.clone(),
                url: state.links().product_parts(product.id, &product.slug),
                price: Price::new(product.price, state.config().currency).display(),
                image_url: state.images().product_image(product.image_id),
            })
            .collect(),
        total: listing_data.total,
        current_page: listing_data.page,
        total_pages: listing_data.total_pages(),
        has_more: listing_data.has_more(),
    };

    if query.is_partial() {
        return Ok(CategoryProductsPartial { listing }.into_response());
    }

    let ancestors = repo.ancestors(category, language_id).await?;
    let prefix = vec![BreadcrumbLink {
        title: "Home".to_string(),
        url: state.links().home(),
    }];
    let breadcrumbs =
        breadcrumb::build_trail(prefix, &ancestors, category, |c| state.links().category(c));

    let canonical_url = match canonical::build(&state.links().category(category), current_page) {
        Ok(url) => Some(url),
        Err(err) => {
            tracing::warn!(error = %err, category_id = %category.id, "canonical URL omitted");
            None
        }
    };

    let view = CategoryView {
        id: category.id,
        name: category.name.clone(),
        description: category.description.clone(),
        url: state.links().category(category),
        image_url: state.images().category_image(category.image_id),
    };
    let view = content_filter::apply(state.content_filters(), view);

    let subcategories = repo
        .sub_categories(category.id, language_id)
        .await?
        .into_iter()
        .map(|sub| SubcategoryView {
            url: state.links().category_parts(sub.id, &sub.slug),
            image_url: state.images().category_image(sub.image_id),
            id: sub.id,
            name: sub.name,
            description: sub.description,
        })
        .collect();

    // Independent access re-check when choosing the layout; the first
    // result is deliberately not reused.
    let full_width = !repo.check_access(category.id, viewer).await?;

    Ok(CategoryPageTemplate {
        page: category_page(category),
        category: view,
        subcategories,
        breadcrumbs,
        canonical_url,
        listing,
        full_width,
    }
    .into_response())
}

// =============================================================================
// Request parsing & page metadata
// =============================================================================

/// Integer coercion for request ids: anything that is not a positive
/// integer counts as 0 ("no category").
fn coerce_id(raw: Option<&str>) -> i32 {
    raw.and_then(|s| s.trim().parse::<i32>().ok())
        .filter(|id| *id > 0)
        .unwrap_or(0)
}

/// Page-number coercion: non-numeric input counts as 0 ("omit the page
/// parameter").
fn coerce_page(raw: Option<&str>) -> u32 {
    raw.and_then(|s| s.trim().parse::<u32>().ok()).unwrap_or(0)
}

/// Category id from a friendly URL segment ("7-shoes" -> 7).
fn slug_id(slug: &str) -> i32 {
    let digits: String = slug.chars().take_while(char::is_ascii_digit).collect();
    coerce_id(Some(&digits))
}

fn not_found_page() -> PageMeta {
    PageMeta {
        name: "pagenotfound".to_string(),
        title: NOT_FOUND_TITLE.to_string(),
        body_classes: vec!["pagenotfound".to_string()],
    }
}

fn category_page(category: &Category) -> PageMeta {
    PageMeta {
        name: "category".to_string(),
        title: category.name.clone(),
        body_classes: vec![
            format!("category-id-{}", category.id),
            format!("category-{}", category.name),
            format!("category-id-parent-{}", category.parent_id),
            format!("category-depth-level-{}", category.depth),
        ],
    }
}

#[cfg(test)]
mod tests {
    use golden_fig_core::ImageId;

    use super::*;

    #[test]
    fn test_coerce_id() {
        assert_eq!(coerce_id(Some("7")), 7);
        assert_eq!(coerce_id(Some(" 7 ")), 7);
        assert_eq!(coerce_id(Some("abc")), 0);
        assert_eq!(coerce_id(Some("-3")), 0);
        assert_eq!(coerce_id(Some("0")), 0);
        assert_eq!(coerce_id(None), 0);
    }

    #[test]
    fn test_coerce_page() {
        assert_eq!(coerce_page(Some("4")), 4);
        assert_eq!(coerce_page(Some("four")), 0);
        assert_eq!(coerce_page(Some("-2")), 0);
        assert_eq!(coerce_page(None), 0);
    }

    #[test]
    fn test_slug_id() {
        assert_eq!(slug_id("7-shoes"), 7);
        assert_eq!(slug_id("123"), 123);
        assert_eq!(slug_id("shoes"), 0);
        assert_eq!(slug_id("-7-shoes"), 0);
        assert_eq!(slug_id(""), 0);
    }

    #[test]
    fn test_not_found_page_meta() {
        let page = not_found_page();
        assert_eq!(page.name, "pagenotfound");
        assert_eq!(page.title, NOT_FOUND_TITLE);
        assert_eq!(page.class_attr(), "pagenotfound");
    }

    #[test]
    fn test_category_page_body_classes() {
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
        let page = category_page(&category);
        assert_eq!(page.name, "category");
        assert_eq!(page.title, "Shoes");
        assert_eq!(
            page.body_classes,
            vec![
                "category-id-7",
                "category-Shoes",
                "category-id-parent-3",
                "category-depth-level-2",
            ]
        );
    }

    #[test]
    fn test_partial_flag() {
        let query = CategoryPageQuery {
            id_category: None,
            page: None,
            order: None,
            partial: Some("1".to_string()),
        };
        assert!(query.is_partial());

        let query = CategoryPageQuery {
            id_category: None,
            page: None,
            order: None,
            partial: None,
        };
        assert!(!query.is_partial());
    }
}
