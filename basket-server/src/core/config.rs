use crate::auth::JwtConfig;

/// 服务器配置 - Smart Basket 的所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | WORK_DIR | ./data | 工作目录 (数据库、日志) |
/// | HTTP_PORT | 3000 | HTTP 服务端口 |
/// | ALLOWED_CITY | Buraidah | 唯一配送城市 (下单门禁) |
/// | OTP_CODE | 123456 | OTP 验证码占位值 |
/// | SEED_DEMO | false | 启动时写入演示目录数据 |
/// | ENVIRONMENT | development | 运行环境 |
///
/// JWT 相关变量见 [`JwtConfig`]。
///
/// # 示例
///
/// ```ignore
/// WORK_DIR=/data/basket HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 工作目录，存储数据库和日志文件
    pub work_dir: String,
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 服务区域：仅接受该城市的收货地址
    pub allowed_city: String,
    /// OTP 验证码占位值 (真实短信发送不在范围内)
    pub otp_code: String,
    /// 启动时是否填充演示目录数据
    pub seed_demo: bool,
    /// JWT 认证配置
    pub jwt: JwtConfig,
    /// 运行环境: development | staging | production
    pub environment: String,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "./data".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            allowed_city: std::env::var("ALLOWED_CITY").unwrap_or_else(|_| "Buraidah".into()),
            otp_code: std::env::var("OTP_CODE").unwrap_or_else(|_| "123456".into()),
            seed_demo: std::env::var("SEED_DEMO")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            jwt: JwtConfig::default(),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 是否开发环境
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
