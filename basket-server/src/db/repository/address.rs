//! Address Repository

use super::{RepoError, RepoResult};
use shared::models::{Address, AddressCreate};
use sqlx::SqlitePool;

const ADDRESS_SELECT: &str =
    "SELECT id, user_id, city, district, street, notes, created_at FROM address";

/// Create an address for a user. Any city is accepted here; the service
/// area gate applies at order time.
pub async fn create(pool: &SqlitePool, user_id: i64, data: AddressCreate) -> RepoResult<Address> {
    let now = shared::util::now_millis();
    let id = shared::util::snowflake_id();

    // city presence is validated by the handler
    sqlx::query(
        "INSERT INTO address (id, user_id, city, district, street, notes, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
    )
    .bind(id)
    .bind(user_id)
    .bind(data.city.unwrap_or_default())
    .bind(data.district)
    .bind(data.street)
    .bind(data.notes)
    .bind(now)
    .execute(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create address".into()))
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Address>> {
    let row = sqlx::query_as::<_, Address>(&format!("{ADDRESS_SELECT} WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn find_all_by_user(pool: &SqlitePool, user_id: i64) -> RepoResult<Vec<Address>> {
    let rows = sqlx::query_as::<_, Address>(&format!(
        "{ADDRESS_SELECT} WHERE user_id = ? ORDER BY created_at DESC"
    ))
    .bind(user_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}
