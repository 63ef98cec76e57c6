//! Auth API 模块 (OTP 模拟 + JWT)

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/auth", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/request-otp", post(handler::request_otp))
        .route("/verify-otp", post(handler::verify_otp))
}
