use std::sync::Arc;

use sqlx::SqlitePool;

use crate::auth::JwtService;
use crate::core::Config;
use crate::db::{DbService, seed};
use crate::recommend::{RecommendConfig, RecommendationEngine};
use crate::utils::AppError;

/// 服务器状态 - 持有所有服务的共享引用
///
/// 连接池和 Arc 都是浅拷贝，Clone 成本极低。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | pool | SqlitePool | SQLite 连接池 |
/// | jwt_service | Arc<JwtService> | JWT 认证服务 |
/// | engine | RecommendationEngine | 推荐引擎 (纯计算，无状态) |
#[derive(Clone)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// SQLite 连接池
    pub pool: SqlitePool,
    /// JWT 认证服务 (Arc 共享所有权)
    pub jwt_service: Arc<JwtService>,
    /// 推荐引擎
    pub engine: RecommendationEngine,
}

impl ServerState {
    /// 初始化服务器状态
    ///
    /// 按顺序初始化：
    /// 1. 工作目录
    /// 2. 数据库 (work_dir/basket.db, WAL + 迁移)
    /// 3. 演示数据 (SEED_DEMO=true 时)
    /// 4. JWT 服务与推荐引擎
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        std::fs::create_dir_all(&config.work_dir)
            .map_err(|e| AppError::internal(format!("Failed to create work dir: {e}")))?;

        let db = DbService::new(&format!("{}/basket.db", config.work_dir)).await?;

        if config.seed_demo {
            seed::seed_demo(&db.pool).await?;
        }

        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));
        let engine = RecommendationEngine::new(RecommendConfig::default());

        Ok(Self {
            config: config.clone(),
            pool: db.pool,
            jwt_service,
            engine,
        })
    }
}
