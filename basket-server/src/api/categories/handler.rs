//! Category API Handlers

use axum::{Json, extract::State};
use serde::Serialize;

use crate::core::ServerState;
use crate::db::repository::category;
use crate::utils::AppResult;
use shared::models::Category;

#[derive(Serialize)]
pub struct CategoryList {
    pub items: Vec<Category>,
}

/// GET /api/categories - 获取所有分类 (按名称排序)
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<CategoryList>> {
    let items = category::find_all(&state.pool).await?;
    Ok(Json(CategoryList { items }))
}
