//! Household Profile Repository

use super::{RepoError, RepoResult};
use shared::models::{
    DEFAULT_FAMILY_SIZE, DEFAULT_MONTHLY_BUDGET, HouseholdProfile, ProfileUpdate, User,
};
use sqlx::SqlitePool;

const PROFILE_SELECT: &str =
    "SELECT user_id, family_size, monthly_budget, updated_at FROM household_profile WHERE user_id = ?";

/// Profile for a user; falls back to the defaults {2, 600} when no row
/// exists yet.
pub async fn find_or_default(pool: &SqlitePool, user_id: i64) -> RepoResult<HouseholdProfile> {
    let row = sqlx::query_as::<_, HouseholdProfile>(PROFILE_SELECT)
        .bind(user_id)
        .fetch_optional(pool)
        .await?;
    Ok(row.unwrap_or_else(|| HouseholdProfile::default_for(user_id)))
}

/// Partial profile update; an optional `city` lands on the user record.
///
/// The profile row is created on demand so the update also works for
/// accounts that predate their profile row.
pub async fn update(
    pool: &SqlitePool,
    user_id: i64,
    data: ProfileUpdate,
) -> RepoResult<(User, HouseholdProfile)> {
    if super::user::find_by_id(pool, user_id).await?.is_none() {
        return Err(RepoError::NotFound(format!("User {user_id} not found")));
    }

    let now = shared::util::now_millis();
    let mut tx = pool.begin().await?;

    if let Some(city) = &data.city {
        sqlx::query("UPDATE user SET city = ?1 WHERE id = ?2")
            .bind(city)
            .bind(user_id)
            .execute(&mut *tx)
            .await?;
    }

    sqlx::query(
        "INSERT OR IGNORE INTO household_profile (user_id, family_size, monthly_budget, updated_at) VALUES (?1, ?2, ?3, ?4)",
    )
    .bind(user_id)
    .bind(DEFAULT_FAMILY_SIZE)
    .bind(DEFAULT_MONTHLY_BUDGET)
    .bind(now)
    .execute(&mut *tx)
    .await?;

    sqlx::query(
        "UPDATE household_profile SET family_size = COALESCE(?1, family_size), monthly_budget = COALESCE(?2, monthly_budget), updated_at = ?3 WHERE user_id = ?4",
    )
    .bind(data.family_size)
    .bind(data.monthly_budget)
    .bind(now)
    .bind(user_id)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    let user = super::user::find_by_id(pool, user_id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("User {user_id} not found")))?;
    let profile = find_or_default(pool, user_id).await?;
    Ok((user, profile))
}
