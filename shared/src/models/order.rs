//! Order Model

use serde::{Deserialize, Serialize};

/// Order entity (immutable snapshot of a finalized cart)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Order {
    pub id: i64,
    pub user_id: i64,
    pub address_id: i64,
    /// Total in currency units, copied from the cart at finalize time
    pub total: f64,
    /// Savings in currency units, copied from the cart at finalize time
    pub savings: f64,
    pub created_at: i64,
}

/// Order line entity (product reference + qty + price snapshot)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct OrderLine {
    pub id: i64,
    pub order_id: i64,
    pub product_id: i64,
    pub qty: i64,
    pub unit_price: f64,
}

/// Order with its lines
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderDetail {
    #[serde(flatten)]
    pub order: Order,
    pub items: Vec<OrderLine>,
}

/// Place order payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderPlace {
    pub address_id: Option<i64>,
}
