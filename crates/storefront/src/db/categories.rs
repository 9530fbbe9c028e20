//! Category repository for database operations.
//!
//! Queries are runtime-checked (`sqlx::query_as`) rather than macro-verified
//! so the crate builds without a live database.

use golden_fig_core::{CategoryId, CustomerGroupId, CustomerId, ImageId, LanguageId};
use sqlx::PgPool;

use super::RepositoryError;
use crate::catalog::Category;

/// Group applied to anonymous viewers.
const GUEST_GROUP: CustomerGroupId = CustomerGroupId::new(1);

/// Hard cap on ancestor-chain recursion inside the database.
///
/// Matches the trail cap in [`crate::catalog::breadcrumb`]; a cyclic
/// `parent_id` chain terminates here instead of spinning the query.
const MAX_CHAIN_DEPTH: i32 = 64;

const CATEGORY_COLUMNS: &str = "c.id, c.parent_id, c.is_root, c.active, \
     t.name, t.slug, t.description, c.depth, c.image_id";

/// Row shape shared by every category query.
#[derive(sqlx::FromRow)]
struct CategoryRow {
    id: CategoryId,
    parent_id: CategoryId,
    is_root: bool,
    active: bool,
    name: String,
    slug: String,
    description: String,
    depth: i32,
    image_id: Option<ImageId>,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Self {
            id: row.id,
            parent_id: row.parent_id,
            is_root: row.is_root,
            active: row.active,
            name: row.name,
            slug: row.slug,
            description: row.description,
            depth: row.depth,
            image_id: row.image_id,
        }
    }
}

/// Repository for category reads.
pub struct CategoryRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CategoryRepository<'a> {
    /// Create a new category repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Load a category by id in the given language.
    ///
    /// Returns `None` when no such category exists or it has no copy in
    /// that language.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn load(
        &self,
        id: CategoryId,
        language_id: LanguageId,
    ) -> Result<Option<Category>, RepositoryError> {
        let row = sqlx::query_as::<_, CategoryRow>(&format!(
            "SELECT {CATEGORY_COLUMNS}
             FROM categories c
             JOIN category_translations t
               ON t.category_id = c.id AND t.language_id = $2
             WHERE c.id = $1"
        ))
        .bind(id)
        .bind(language_id)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(Category::from))
    }

    /// The shop-root placeholder category, if one exists.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn shop_root(
        &self,
        language_id: LanguageId,
    ) -> Result<Option<Category>, RepositoryError> {
        let row = sqlx::query_as::<_, CategoryRow>(&format!(
            "SELECT {CATEGORY_COLUMNS}
             FROM categories c
             JOIN category_translations t
               ON t.category_id = c.id AND t.language_id = $1
             WHERE c.is_root
             ORDER BY c.id
             LIMIT 1"
        ))
        .bind(language_id)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(Category::from))
    }

    /// Ancestor chain of a category, outermost (root side) first, excluding
    /// the category itself.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn ancestors(
        &self,
        category: &Category,
        language_id: LanguageId,
    ) -> Result<Vec<Category>, RepositoryError> {
        let rows = sqlx::query_as::<_, CategoryRow>(&format!(
            "WITH RECURSIVE chain (id, distance) AS (
                 SELECT c.parent_id, 1
                 FROM categories c
                 WHERE c.id = $1
                 UNION ALL
                 SELECT c.parent_id, chain.distance + 1
                 FROM categories c
                 JOIN chain ON c.id = chain.id
                 WHERE chain.distance < $3
             )
             SELECT {CATEGORY_COLUMNS}
             FROM chain
             JOIN categories c ON c.id = chain.id
             JOIN category_translations t
               ON t.category_id = c.id AND t.language_id = $2
             ORDER BY chain.distance DESC"
        ))
        .bind(category.id)
        .bind(language_id)
        .bind(MAX_CHAIN_DEPTH)
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Category::from).collect())
    }

    /// Active direct subcategories of a category, in display order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn sub_categories(
        &self,
        id: CategoryId,
        language_id: LanguageId,
    ) -> Result<Vec<Category>, RepositoryError> {
        let rows = sqlx::query_as::<_, CategoryRow>(&format!(
            "SELECT {CATEGORY_COLUMNS}
             FROM categories c
             JOIN category_translations t
               ON t.category_id = c.id AND t.language_id = $2
             WHERE c.parent_id = $1 AND c.active
             ORDER BY c.position, c.id"
        ))
        .bind(id)
        .bind(language_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Category::from).collect())
    }

    /// Whether `viewer` may view the category's contents.
    ///
    /// A category is viewable when it is associated with at least one of
    /// the viewer's groups; anonymous viewers carry the guest group. This
    /// predicate is pure with respect to the request and is deliberately
    /// re-evaluated where the page needs it a second time.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn check_access(
        &self,
        id: CategoryId,
        viewer: Option<CustomerId>,
    ) -> Result<bool, RepositoryError> {
        let allowed = match viewer {
            Some(customer_id) => {
                sqlx::query_scalar::<_, bool>(
                    "SELECT EXISTS (
                         SELECT 1
                         FROM category_group cg
                         JOIN customer_group ug ON ug.group_id = cg.group_id
                         WHERE cg.category_id = $1 AND ug.customer_id = $2
                     )",
                )
                .bind(id)
                .bind(customer_id)
                .fetch_one(self.pool)
                .await?
            }
            None => {
                sqlx::query_scalar::<_, bool>(
                    "SELECT EXISTS (
                         SELECT 1 FROM category_group
                         WHERE category_id = $1 AND group_id = $2
                     )",
                )
                .bind(id)
                .bind(GUEST_GROUP)
                .fetch_one(self.pool)
                .await?
            }
        };

        Ok(allowed)
    }
}
