//! Category product search pipeline.
//!
//! Executes the product listing query for a category page: filter by
//! category, apply the requested sort order, and paginate. The sort order
//! arrives from the request as an opaque `field.direction` token and is
//! mapped onto a fixed column whitelist before it ever reaches SQL.

use golden_fig_core::{CategoryId, ImageId, LanguageId, ProductId};
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::db::RepositoryError;

/// Sortable product fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    /// Merchandised position within the category.
    #[default]
    Position,
    Name,
    Price,
}

impl SortField {
    /// Column the field maps to. Only these identifiers are ever
    /// interpolated into the query.
    const fn column(self) -> &'static str {
        match self {
            Self::Position => "pc.position",
            Self::Name => "t.name",
            Self::Price => "p.price",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s {
            "position" => Some(Self::Position),
            "name" => Some(Self::Name),
            "price" => Some(Self::Price),
            _ => None,
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    const fn keyword(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s {
            "asc" => Some(Self::Asc),
            "desc" => Some(Self::Desc),
            _ => None,
        }
    }
}

/// A product sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortOrder {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortOrder {
    /// Parse a request-supplied `field.direction` token.
    ///
    /// Unknown or malformed tokens fall back to the default order rather
    /// than erroring; the parameter is user input.
    #[must_use]
    pub fn parse(token: &str) -> Self {
        let mut parts = token.splitn(2, '.');
        let field = parts.next().and_then(SortField::parse);
        let direction = parts.next().and_then(SortDirection::parse);
        match (field, direction) {
            (Some(field), Some(direction)) => Self { field, direction },
            _ => Self::default(),
        }
    }
}

/// Parameters for one category listing query.
#[derive(Debug, Clone, Copy)]
pub struct ProductSearchQuery {
    pub category_id: CategoryId,
    pub language_id: LanguageId,
    pub sort: SortOrder,
    /// 1-based page number.
    pub page: u32,
    pub per_page: u32,
}

/// One product in a listing.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ProductRecord {
    pub id: ProductId,
    pub name: String,
    pub slug: String,
    pub price: Decimal,
    pub image_id: Option<ImageId>,
}

/// A page of listing results.
#[derive(Debug, Clone)]
pub struct ProductListing {
    pub products: Vec<ProductRecord>,
    /// Total matching products across all pages.
    pub total: i64,
    pub page: u32,
    pub per_page: u32,
}

impl ProductListing {
    /// Number of pages the listing spans (at least 1).
    #[must_use]
    pub fn total_pages(&self) -> u32 {
        let per_page = i64::from(self.per_page.max(1));
        let pages = (self.total + per_page - 1) / per_page;
        u32::try_from(pages.max(1)).unwrap_or(u32::MAX)
    }

    /// Whether pages exist past the current one.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.page < self.total_pages()
    }
}

/// Execute the listing query for a category.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if either query fails.
pub async fn run(
    pool: &PgPool,
    query: &ProductSearchQuery,
) -> Result<ProductListing, RepositoryError> {
    let page = query.page.max(1);
    let per_page = i64::from(query.per_page.max(1));
    let offset = i64::from(page - 1) * per_page;

    let products = sqlx::query_as::<_, ProductRecord>(&format!(
        "SELECT p.id, t.name, t.slug, p.price, p.image_id
         FROM products p
         JOIN product_category pc ON pc.product_id = p.id
         JOIN product_translations t
           ON t.product_id = p.id AND t.language_id = $2
         WHERE pc.category_id = $1 AND p.active
         ORDER BY {} {}, p.id
         LIMIT $3 OFFSET $4",
        query.sort.field.column(),
        query.sort.direction.keyword(),
    ))
    .bind(query.category_id)
    .bind(query.language_id)
    .bind(per_page)
    .bind(offset)
    .fetch_all(pool)
    .await?;

    let total = sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*)
         FROM products p
         JOIN product_category pc ON pc.product_id = p.id
         WHERE pc.category_id = $1 AND p.active",
    )
    .bind(query.category_id)
    .fetch_one(pool)
    .await?;

    Ok(ProductListing {
        products,
        total,
        page,
        per_page: query.per_page,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_order_parses_known_tokens() {
        assert_eq!(
            SortOrder::parse("price.desc"),
            SortOrder {
                field: SortField::Price,
                direction: SortDirection::Desc,
            }
        );
        assert_eq!(
            SortOrder::parse("name.asc"),
            SortOrder {
                field: SortField::Name,
                direction: SortDirection::Asc,
            }
        );
    }

    #[test]
    fn test_sort_order_falls_back_to_default() {
        let default = SortOrder::default();
        assert_eq!(SortOrder::parse(""), default);
        assert_eq!(SortOrder::parse("price"), default);
        assert_eq!(SortOrder::parse("price.sideways"), default);
        assert_eq!(SortOrder::parse("sku.asc"), default);
        assert_eq!(SortOrder::parse("p.price; DROP TABLE products"), default);
    }

    #[test]
    fn test_default_sort_is_position_asc() {
        let order = SortOrder::default();
        assert_eq!(order.field, SortField::Position);
        assert_eq!(order.direction, SortDirection::Asc);
    }

    fn listing(total: i64, page: u32, per_page: u32) -> ProductListing {
        ProductListing {
            products: Vec::new(),
            total,
            page,
            per_page,
        }
    }

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(listing(0, 1, 12).total_pages(), 1);
        assert_eq!(listing(12, 1, 12).total_pages(), 1);
        assert_eq!(listing(13, 1, 12).total_pages(), 2);
    }

    #[test]
    fn test_has_more() {
        assert!(listing(25, 1, 12).has_more());
        assert!(listing(25, 2, 12).has_more());
        assert!(!listing(25, 3, 12).has_more());
    }
}
