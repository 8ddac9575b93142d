//! JWT 인증 토큰 클레임과 토큰 쌍
//!
//! 액세스 토큰과 리프레시 토큰은 같은 클레임 구조를 가지며 유효 기간만 다릅니다.
use serde::{Deserialize, Serialize};
use crate::domain::models::auth::principal::Principal;

/// 토큰 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// API 호출용 단기 토큰
    Access,
    /// 토큰 재발급 전용 장기 토큰
    Refresh,
}

/// JWT 토큰의 클레임(Payload) 구조체
///
/// - `sub`: 토큰의 주체 (사용자 이메일)
/// - `role`: 단일 역할 문자열
/// - `iss`: 토큰을 발급한 경로
/// - `iat`: 발급 시간 (Unix timestamp)
/// - `exp`: 만료 시간 (Unix timestamp)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    pub role: String,
    pub iss: String,
    pub iat: i64,
    pub exp: i64,
}

impl TokenClaims {
    pub fn principal(&self) -> Principal {
        Principal::new(self.sub.clone(), self.role.clone())
    }
}

/// 클라이언트에게 전달되는 토큰 쌍
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}
