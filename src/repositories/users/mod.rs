//! 사용자 리포지토리 모듈

pub mod user_repo;
pub mod memory_user_repo;

pub use user_repo::{MongoUserRepository, UserRepository};
pub use memory_user_repo::InMemoryUserRepository;
