//! Data models
//!
//! Shared between basket-server and API clients.
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY, snowflake-generated).

pub mod address;
pub mod cart;
pub mod category;
pub mod order;
pub mod product;
pub mod profile;
pub mod user;

// Re-exports
pub use address::*;
pub use cart::*;
pub use category::*;
pub use order::*;
pub use product::*;
pub use profile::*;
pub use user::*;
