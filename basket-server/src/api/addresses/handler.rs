//! Address API Handlers

use axum::{Json, extract::State};
use serde::Serialize;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::address;
use crate::utils::validation::{
    MAX_ADDRESS_LEN, MAX_SHORT_TEXT_LEN, validate_optional_text, validate_required_text,
};
use crate::utils::AppResult;
use shared::models::{Address, AddressCreate};

/// POST /api/addresses - 新增收货地址
///
/// 任意城市都可以保存；服务区域门禁在下单时执行。
pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<AddressCreate>,
) -> AppResult<Json<Address>> {
    validate_required_text(
        payload.city.as_deref().unwrap_or_default(),
        "city",
        MAX_SHORT_TEXT_LEN,
    )?;
    validate_optional_text(&payload.district, "district", MAX_ADDRESS_LEN)?;
    validate_optional_text(&payload.street, "street", MAX_ADDRESS_LEN)?;
    validate_optional_text(&payload.notes, "notes", MAX_ADDRESS_LEN)?;

    let address = address::create(&state.pool, user.id, payload).await?;
    Ok(Json(address))
}

#[derive(Serialize)]
pub struct AddressList {
    pub items: Vec<Address>,
}

/// GET /api/addresses - 当前用户的地址
pub async fn list(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<AddressList>> {
    let items = address::find_all_by_user(&state.pool, user.id).await?;
    Ok(Json(AddressList { items }))
}
