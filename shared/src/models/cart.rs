//! Cart Model

use serde::{Deserialize, Serialize};

/// Cart entity (one active cart per user, created lazily)
///
/// `total` and `savings` are derived fields, recomputed from the full line
/// set after every mutation. They are never written independently.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Cart {
    pub id: i64,
    pub user_id: i64,
    pub total: f64,
    pub savings: f64,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Cart line entity
///
/// `unit_price` is a snapshot of the product price at the moment the line
/// was created or last touched, not a live reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct CartLine {
    pub id: i64,
    pub cart_id: i64,
    pub product_id: i64,
    pub qty: i64,
    pub unit_price: f64,
}

/// Cart line with product info (for cart views and ledger recompute)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct CartLineDetail {
    pub id: i64,
    pub cart_id: i64,
    pub product_id: i64,
    pub product_name: String,
    pub qty: i64,
    pub unit_price: f64,
    /// Product's current reference price (drives the savings figure)
    pub compare_at_price: Option<f64>,
}

/// Full cart view: the cart plus its lines
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartDetail {
    #[serde(flatten)]
    pub cart: Cart,
    pub items: Vec<CartLineDetail>,
}

/// Add/update cart line payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartAddItem {
    /// Required; checked by the handler so a missing field is a 400
    pub product_id: Option<i64>,
    /// Coerced to an integer >= 1 (values below 1 are clamped)
    pub qty: Option<i64>,
}
