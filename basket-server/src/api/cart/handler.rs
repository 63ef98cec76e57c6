//! Cart API Handlers
//!
//! 每个端点都返回完整购物车视图，派生金额已在仓储事务内重算。

use axum::{
    Json,
    extract::{Path, State},
};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::cart;
use crate::utils::{AppError, AppResult};
use shared::models::{CartAddItem, CartDetail};

/// GET /api/cart - 当前用户的购物车 (首次访问时创建)
pub async fn get_cart(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<CartDetail>> {
    let detail = cart::get_detail(&state.pool, user.id).await?;
    Ok(Json(detail))
}

/// POST /api/cart/items - 添加商品或覆盖已有行
pub async fn add_item(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<CartAddItem>,
) -> AppResult<Json<CartDetail>> {
    let product_id = payload
        .product_id
        .ok_or_else(|| AppError::validation("product_id required"))?;

    let detail = cart::add_item(&state.pool, user.id, product_id, payload.qty).await?;
    Ok(Json(detail))
}

/// DELETE /api/cart/items/{id} - 删除一行 (不存在则为空操作)
pub async fn remove_item(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> AppResult<Json<CartDetail>> {
    let detail = cart::remove_item(&state.pool, user.id, id).await?;
    Ok(Json(detail))
}
