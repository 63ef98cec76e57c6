//! 认证模块 - OTP 模拟登录 + JWT 会话
//!
//! OTP 验证通过后签发 JWT；受保护的 API 通过 [`CurrentUser`]
//! 提取器校验令牌并取得用户 ID。

mod extractor;
pub mod jwt;

pub use jwt::{Claims, JwtConfig, JwtError, JwtService};

/// 当前登录用户 (从 JWT Claims 解析)
#[derive(Debug, Clone)]
pub struct CurrentUser {
    /// 用户 ID
    pub id: i64,
}

impl TryFrom<Claims> for CurrentUser {
    type Error = String;

    fn try_from(claims: Claims) -> Result<Self, Self::Error> {
        let id = claims
            .sub
            .parse::<i64>()
            .map_err(|_| format!("Invalid subject: {}", claims.sub))?;
        Ok(Self { id })
    }
}
