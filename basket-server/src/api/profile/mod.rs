//! Profile API 模块

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/me", routes())
}

fn routes() -> Router<ServerState> {
    Router::new().route(
        "/profile",
        get(handler::get_profile).put(handler::update_profile),
    )
}
