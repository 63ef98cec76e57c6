//! Order API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::order;
use crate::utils::{AppError, AppResult};
use shared::models::{Order, OrderDetail, OrderPlace};

/// POST /api/orders - 将购物车冻结为订单
pub async fn place(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<OrderPlace>,
) -> AppResult<Json<OrderDetail>> {
    let address_id = payload
        .address_id
        .ok_or_else(|| AppError::validation("address_id required"))?;

    let detail = order::place_from_cart(
        &state.pool,
        user.id,
        address_id,
        &state.config.allowed_city,
    )
    .await?;
    Ok(Json(detail))
}

#[derive(Serialize)]
pub struct OrderList {
    pub items: Vec<Order>,
}

/// GET /api/orders - 当前用户订单 (新→旧)
pub async fn list(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<OrderList>> {
    let items = order::find_all_by_user(&state.pool, user.id).await?;
    Ok(Json(OrderList { items }))
}

/// GET /api/orders/{id} - 订单详情 (仅限本人)
pub async fn get_by_id(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> AppResult<Json<OrderDetail>> {
    let detail = order::find_detail(&state.pool, user.id, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Order {id} not found")))?;
    Ok(Json(detail))
}
