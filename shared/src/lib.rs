//! Shared types for the Smart Basket backend
//!
//! Data models and small utilities used by `basket-server` (and by API
//! clients that want typed payloads).

pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};
