//! 인증 주체와 접근 규칙 모델

pub mod principal;
pub mod access_rule;

pub use principal::{OptionalPrincipal, Principal, SecurityContext};
pub use access_rule::{AccessRule, RequiredAuthority};
