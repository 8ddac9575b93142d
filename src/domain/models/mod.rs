//! 도메인 모델
//!
//! 영속화되지 않는 인증 관련 값 객체들입니다.

pub mod auth;
pub mod token;

pub use auth::{AccessRule, OptionalPrincipal, Principal, RequiredAuthority, SecurityContext};
pub use token::{TokenClaims, TokenKind, TokenPair};
