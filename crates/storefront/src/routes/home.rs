//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use axum::response::IntoResponse;
use tracing::instrument;

use crate::error::Result;
use crate::filters;
use crate::routes::category::PageMeta;
use crate::state::AppState;

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub page: PageMeta,
    pub top_categories: Vec<TopCategoryView>,
}

/// A top-level category teaser on the home page.
pub struct TopCategoryView {
    pub name: String,
    pub url: String,
}

/// Display the home page with the active top-level categories.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let repo = crate::db::categories::CategoryRepository::new(state.pool());
    let language_id = state.config().language_id;

    // Top-level categories hang off the shop root placeholder.
    let top_categories = match repo.shop_root(language_id).await? {
        Some(root) => repo
            .sub_categories(root.id, language_id)
            .await?
            .into_iter()
            .map(|category| TopCategoryView {
                url: state.links().category_parts(category.id, &category.slug),
                name: category.name,
            })
            .collect(),
        None => Vec::new(),
    };

    Ok(HomeTemplate {
        page: PageMeta {
            name: "index".to_string(),
            title: "Golden Fig".to_string(),
            body_classes: vec!["index".to_string()],
        },
        top_categories,
    })
}
