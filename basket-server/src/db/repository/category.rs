//! Category Repository

use super::RepoResult;
use shared::models::Category;
use sqlx::SqlitePool;

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Category>> {
    let rows =
        sqlx::query_as::<_, Category>("SELECT id, name, created_at FROM category ORDER BY name ASC")
            .fetch_all(pool)
            .await?;
    Ok(rows)
}
