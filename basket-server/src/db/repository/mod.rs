//! Repository Module
//!
//! Free functions over the SQLite pool, one module per aggregate.
//! Multi-step writes run inside a single transaction so cart totals and
//! order snapshots are never observed half-written.

pub mod address;
pub mod cart;
pub mod category;
pub mod order;
pub mod product;
pub mod profile;
pub mod user;

use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    /// 业务规则拒绝 (如配送城市不在服务区)
    #[error("Policy violation: {0}")]
    PolicyViolation(String),

    /// 资源状态不允许该操作 (如对空购物车下单)
    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;
