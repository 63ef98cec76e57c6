//! Recommendation API Handlers

use axum::{Json, extract::State};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::{product, profile};
use crate::recommend::Recommendations;
use crate::utils::AppResult;

/// GET /api/recommendations/home - 家庭预算购物推荐
///
/// 纯读：每次调用基于当前目录快照和家庭档案重新计算。
pub async fn home(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<Recommendations>> {
    let profile = profile::find_or_default(&state.pool, user.id).await?;
    let catalog = product::find_active(&state.pool, None, None).await?;
    Ok(Json(state.engine.recommend(catalog, &profile)))
}
