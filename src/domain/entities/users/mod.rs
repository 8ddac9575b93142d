//! 사용자 엔티티 모듈

pub mod user;
pub mod role;

pub use user::User;
pub use role::Role;
