//! # Configuration Module
//!
//! 환경 변수 기반 설정값을 중앙에서 관리합니다.
//!
//! - [`data_config`] - 실행 환경, 서버, 저장소, 비밀번호 해싱, 시드 설정
//! - [`auth_config`] - JWT 서명 키와 토큰 수명 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//! export WORKERS="4"
//!
//! # JWT 설정
//! export JWT_SECRET="your-super-secret-key"
//! export JWT_ACCESS_TTL_MINUTES="10"
//! export JWT_REFRESH_TTL_MINUTES="30"
//!
//! # 저장소 (없으면 메모리 저장소)
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="health_tracker"
//!
//! # 기타
//! export ENVIRONMENT="production"  # development, test, staging, production
//! export BCRYPT_COST="12"          # 4-15 범위
//! export SEED_DEFAULT_USER="false"
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
