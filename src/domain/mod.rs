//! 도메인 계층
//!
//! - [`entities`] - 저장소에 보관되는 사용자 엔티티
//! - [`models`] - 인증 주체, 보안 컨텍스트, 토큰 클레임
//! - [`dto`] - HTTP 요청/응답 데이터

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::{Role, User};
pub use dto::{CreateUserRequest, CurrentUserResponse, LoginRequest, UserResponse};
pub use models::{
    AccessRule, OptionalPrincipal, Principal, RequiredAuthority, SecurityContext, TokenClaims,
    TokenKind, TokenPair,
};
