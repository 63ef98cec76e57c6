//! Smart Basket Server - 预算感知的杂货购物后端
//!
//! # 架构概述
//!
//! 提供以下核心功能：
//!
//! - **推荐引擎** (`recommend`): 按月度预算分桶的贪心购物推荐
//! - **购物车账本** (`cart_money` + `db`): 派生金额的全量重算
//! - **数据库** (`db`): sqlx SQLite 存储，事务内完成每次变更
//! - **认证** (`auth`): OTP 模拟登录 + JWT 会话
//! - **HTTP API** (`api`): RESTful API 接口
//!
//! # 模块结构
//!
//! ```text
//! basket-server/src/
//! ├── core/        # 配置、状态、服务器
//! ├── auth/        # JWT 认证
//! ├── api/         # HTTP 路由和处理器
//! ├── db/          # 数据库层 (仓储 + 迁移 + 种子数据)
//! ├── cart_money/  # 购物车金额重算 (Decimal)
//! ├── recommend/   # 预算分配推荐引擎
//! └── utils/       # 工具函数
//! ```

pub mod api;
pub mod auth;
pub mod cart_money;
pub mod core;
pub mod db;
pub mod recommend;
pub mod utils;

// Re-export 公共类型
pub use auth::{CurrentUser, JwtService};
pub use core::{Config, Server, ServerState};
pub use recommend::{Bucket, RecommendConfig, Recommendations, RecommendationEngine};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};
