//! HTTP API - 路由和处理器
//!
//! 每个区域一个 `{mod.rs, handler.rs}` 对；`router()` 把处理器挂到
//! 自己的路径前缀下，由 `core::server::build_app` 统一合并。

pub mod addresses;
pub mod auth;
pub mod cart;
pub mod categories;
pub mod health;
pub mod orders;
pub mod products;
pub mod profile;
pub mod recommendations;
