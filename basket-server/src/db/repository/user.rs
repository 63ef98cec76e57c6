//! User Repository

use super::{RepoError, RepoResult};
use shared::models::{DEFAULT_FAMILY_SIZE, DEFAULT_MONTHLY_BUDGET, User};
use sqlx::SqlitePool;

const USER_SELECT: &str = "SELECT id, phone, city, created_at FROM user";

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<User>> {
    let row = sqlx::query_as::<_, User>(&format!("{USER_SELECT} WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn find_by_phone(pool: &SqlitePool, phone: &str) -> RepoResult<Option<User>> {
    let row = sqlx::query_as::<_, User>(&format!("{USER_SELECT} WHERE phone = ?"))
        .bind(phone)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// Create a user together with their default household profile.
///
/// One transaction: a user row without a profile row is never observable.
pub async fn create_with_profile(pool: &SqlitePool, phone: &str, city: &str) -> RepoResult<User> {
    let now = shared::util::now_millis();
    let id = shared::util::snowflake_id();

    let mut tx = pool.begin().await?;
    sqlx::query("INSERT INTO user (id, phone, city, created_at) VALUES (?1, ?2, ?3, ?4)")
        .bind(id)
        .bind(phone)
        .bind(city)
        .bind(now)
        .execute(&mut *tx)
        .await?;
    sqlx::query(
        "INSERT INTO household_profile (user_id, family_size, monthly_budget, updated_at) VALUES (?1, ?2, ?3, ?4)",
    )
    .bind(id)
    .bind(DEFAULT_FAMILY_SIZE)
    .bind(DEFAULT_MONTHLY_BUDGET)
    .bind(now)
    .execute(&mut *tx)
    .await?;
    tx.commit().await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create user".into()))
}
