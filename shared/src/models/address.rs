//! Address Model

use serde::{Deserialize, Serialize};

/// Delivery address entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Address {
    pub id: i64,
    pub user_id: i64,
    pub city: String,
    pub district: Option<String>,
    pub street: Option<String>,
    pub notes: Option<String>,
    pub created_at: i64,
}

/// Create address payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddressCreate {
    /// Required; checked by the handler so a missing field is a 400
    pub city: Option<String>,
    pub district: Option<String>,
    pub street: Option<String>,
    pub notes: Option<String>,
}
