//! 영속화 대상 엔티티

pub mod users;

pub use users::{Role, User};
