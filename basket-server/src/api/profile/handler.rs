//! Profile API Handlers

use axum::{Json, extract::State};
use serde::Serialize;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::profile;
use crate::utils::validation::{
    MAX_SHORT_TEXT_LEN, validate_optional_text, validate_positive_amount, validate_positive_int,
};
use crate::utils::{AppError, AppResult};
use shared::models::{HouseholdProfile, ProfileUpdate, User};

/// GET /api/me/profile - 当前用户的家庭档案
pub async fn get_profile(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<HouseholdProfile>> {
    let profile = profile::find_or_default(&state.pool, user.id).await?;
    Ok(Json(profile))
}

#[derive(Serialize)]
pub struct ProfileResponse {
    pub user: User,
    pub profile: HouseholdProfile,
}

/// PUT /api/me/profile - 更新家庭档案 (部分字段)
pub async fn update_profile(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<ProfileUpdate>,
) -> AppResult<Json<ProfileResponse>> {
    validate_positive_int(payload.family_size, "family_size")?;
    validate_positive_amount(payload.monthly_budget, "monthly_budget")?;
    validate_optional_text(&payload.city, "city", MAX_SHORT_TEXT_LEN)?;

    // 城市门禁：MVP 仅服务单一城市
    if let Some(city) = &payload.city
        && city != &state.config.allowed_city
    {
        return Err(AppError::policy_violation(format!(
            "Service limited to {}",
            state.config.allowed_city
        )));
    }

    let (user, profile) = profile::update(&state.pool, user.id, payload).await?;
    Ok(Json(ProfileResponse { user, profile }))
}
