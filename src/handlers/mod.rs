//! # HTTP Request Handlers Module
//!
//! 서비스는 `web::Data`로 주입받습니다.
//!
//! - [`auth`] - 로그인 (`POST /login`)
//! - [`token_handlers`] - 토큰 갱신 (`GET /token/refresh`)
//! - [`users`] - 현재 사용자와 사용자 조회

pub mod users;
pub mod auth;
pub mod token_handlers;
