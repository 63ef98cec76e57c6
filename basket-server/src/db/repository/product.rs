//! Product Repository

use super::RepoResult;
use shared::models::ProductWithCategory;
use sqlx::SqlitePool;

const PRODUCT_WITH_CATEGORY_SELECT: &str = "SELECT p.id, p.name, p.category_id, c.name AS category_name, p.price, p.compare_at_price, p.is_active, p.created_at FROM product p JOIN category c ON p.category_id = c.id";

/// Active products, optionally filtered by name substring and exact
/// category name. `LIKE` is case-insensitive for ASCII in SQLite.
pub async fn find_active(
    pool: &SqlitePool,
    q: Option<&str>,
    category: Option<&str>,
) -> RepoResult<Vec<ProductWithCategory>> {
    let mut sql = format!("{PRODUCT_WITH_CATEGORY_SELECT} WHERE p.is_active = 1");
    if q.is_some() {
        sql.push_str(" AND p.name LIKE ?");
    }
    if category.is_some() {
        sql.push_str(" AND c.name = ?");
    }
    sql.push_str(" ORDER BY p.name ASC");

    let mut query = sqlx::query_as::<_, ProductWithCategory>(&sql);
    if let Some(q) = q {
        query = query.bind(format!("%{q}%"));
    }
    if let Some(category) = category {
        query = query.bind(category.to_string());
    }

    let rows = query.fetch_all(pool).await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<ProductWithCategory>> {
    let row = sqlx::query_as::<_, ProductWithCategory>(&format!(
        "{PRODUCT_WITH_CATEGORY_SELECT} WHERE p.id = ?"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}
