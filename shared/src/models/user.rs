//! User Model

use serde::{Deserialize, Serialize};

/// User entity
///
/// Created implicitly on first successful OTP verification. `city` starts
/// as the configured service city and may only be changed to it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct User {
    pub id: i64,
    pub phone: String,
    pub city: String,
    pub created_at: i64,
}
