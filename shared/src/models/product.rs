//! Product Model

use serde::{Deserialize, Serialize};

/// Product entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub category_id: i64,
    /// Current shelf price in currency units
    pub price: f64,
    /// Pre-discount reference price; `None` means the product has no deal
    pub compare_at_price: Option<f64>,
    pub is_active: bool,
    pub created_at: i64,
}

/// Product with category name (for list/detail views and the allocator)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct ProductWithCategory {
    pub id: i64,
    pub name: String,
    pub category_id: i64,
    pub category_name: String,
    pub price: f64,
    pub compare_at_price: Option<f64>,
    pub is_active: bool,
    pub created_at: i64,
}
