//! Household Profile Model

use serde::{Deserialize, Serialize};

/// Default family size for new profiles
pub const DEFAULT_FAMILY_SIZE: i64 = 2;

/// Default monthly budget for new profiles (currency units)
pub const DEFAULT_MONTHLY_BUDGET: f64 = 600.0;

/// Household profile entity (one per user)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct HouseholdProfile {
    pub user_id: i64,
    pub family_size: i64,
    /// Monthly grocery budget in currency units
    pub monthly_budget: f64,
    pub updated_at: i64,
}

impl HouseholdProfile {
    /// Profile with the standard defaults, used when no row exists yet
    pub fn default_for(user_id: i64) -> Self {
        Self {
            user_id,
            family_size: DEFAULT_FAMILY_SIZE,
            monthly_budget: DEFAULT_MONTHLY_BUDGET,
            updated_at: 0,
        }
    }
}

/// Update profile payload (partial; `city` lands on the user record)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub family_size: Option<i64>,
    pub monthly_budget: Option<f64>,
    pub city: Option<String>,
}
