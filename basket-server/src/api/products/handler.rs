//! Product API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};

use crate::core::ServerState;
use crate::db::repository::product;
use crate::utils::{AppError, AppResult};
use shared::models::ProductWithCategory;

#[derive(Deserialize)]
pub struct ProductQuery {
    /// 名称子串过滤 (大小写不敏感)
    pub q: Option<String>,
    /// 分类名精确过滤
    pub category: Option<String>,
}

#[derive(Serialize)]
pub struct ProductList {
    pub items: Vec<ProductWithCategory>,
}

/// GET /api/products - 在售商品
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ProductQuery>,
) -> AppResult<Json<ProductList>> {
    let q = query.q.as_deref().filter(|s| !s.is_empty());
    let category = query.category.as_deref().filter(|s| !s.is_empty());
    let items = product::find_active(&state.pool, q, category).await?;
    Ok(Json(ProductList { items }))
}

/// GET /api/products/{id} - 获取单个商品
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ProductWithCategory>> {
    let product = product::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Product {id} not found")))?;
    Ok(Json(product))
}
