//! 인증 서비스 모듈
//!
//! - [`TokenService`] - HMAC-SHA256 JWT 발급과 검증 (토큰 코덱)
//! - [`AuthService`] - 로그인과 리프레시 토큰 흐름

pub mod token_service;
pub mod auth_service;

pub use token_service::{TokenService, BEARER_PREFIX};
pub use auth_service::AuthService;
