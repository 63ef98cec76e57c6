//! Auth API Handlers
//!
//! OTP 流程为模拟实现：验证码来自配置，不经过短信网关。
//! 验证通过即登录；手机号首次出现时注册用户和默认档案。

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::core::ServerState;
use crate::db::repository::user;
use crate::utils::validation::{MAX_SHORT_TEXT_LEN, validate_required_text};
use crate::utils::{AppError, AppResult};
use shared::models::User;

#[derive(Deserialize)]
pub struct RequestOtp {
    pub phone: Option<String>,
}

#[derive(Serialize)]
pub struct RequestOtpResponse {
    pub ok: bool,
    /// 开发用验证码；生产环境应改为短信下发
    pub dev_otp: String,
}

/// POST /api/auth/request-otp - 请求验证码 (模拟)
pub async fn request_otp(
    State(state): State<ServerState>,
    Json(payload): Json<RequestOtp>,
) -> AppResult<Json<RequestOtpResponse>> {
    let phone = payload.phone.unwrap_or_default();
    validate_required_text(&phone, "phone", MAX_SHORT_TEXT_LEN)?;

    tracing::info!(target: "auth", phone = %phone, "OTP requested");

    Ok(Json(RequestOtpResponse {
        ok: true,
        dev_otp: state.config.otp_code.clone(),
    }))
}

#[derive(Deserialize)]
pub struct VerifyOtp {
    pub phone: Option<String>,
    pub code: Option<String>,
}

#[derive(Serialize)]
pub struct VerifyOtpResponse {
    pub token: String,
    pub user: User,
}

/// POST /api/auth/verify-otp - 验证并登录 (首次即注册)
pub async fn verify_otp(
    State(state): State<ServerState>,
    Json(payload): Json<VerifyOtp>,
) -> AppResult<Json<VerifyOtpResponse>> {
    let phone = payload.phone.unwrap_or_default();
    let code = payload.code.unwrap_or_default();
    validate_required_text(&phone, "phone", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&code, "code", MAX_SHORT_TEXT_LEN)?;

    if code != state.config.otp_code {
        return Err(AppError::validation("Invalid code"));
    }

    let user = match user::find_by_phone(&state.pool, &phone).await? {
        Some(user) => user,
        None => {
            // 新用户的城市取服务城市，家庭档案取默认值
            user::create_with_profile(&state.pool, &phone, &state.config.allowed_city).await?
        }
    };

    let token = state
        .jwt_service
        .generate_token(user.id)
        .map_err(|e| AppError::internal(format!("Token generation failed: {e}")))?;

    Ok(Json(VerifyOtpResponse { token, user }))
}
