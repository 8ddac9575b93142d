//! 건강 기록 서비스 인증 백엔드
//!
//! 상태를 저장하지 않는 JWT 인증과 요청 단위 인가를 제공합니다.
//!
//! # Features
//!
//! - **로그인**: 이메일/비밀번호 검증 후 액세스(10분)/리프레시(30분) 토큰 발급
//! - **인가 게이트**: 모든 요청의 Bearer 토큰 검증과 보안 컨텍스트 저장
//! - **토큰 갱신**: 리프레시 토큰으로 새 토큰 쌍 발급
//! - **저장소**: MongoDB 또는 메모리 저장소
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │ AuthorizationGate│ ← Bearer 토큰 검증, SecurityContext 저장
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ Routes/Handlers │ ← AccessPolicy, 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← TokenService, UserService, AuthService
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← MongoDB / In-memory
//! └─────────────────┘
//! ```

pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;
