//! 미들웨어 모듈
//!
//! # 제공 미들웨어
//!
//! ### 1. 인가 게이트 (AuthorizationGate)
//! - 모든 요청의 Bearer 토큰 검증
//! - 토큰이 없으면 익명으로 통과, 잘못된 토큰이면 403으로 즉시 거절
//! - 검증된 주체를 request extension에 저장
//!
//! ### 2. 접근 정책 (AccessPolicy)
//! - 스코프 단위로 인증 여부와 권한을 확인
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! App::new()
//!     .wrap(AuthorizationGate::new(token_service).permit(PUBLIC_PATHS))
//!     .service(
//!         web::scope("/api/me")
//!             .wrap(AccessPolicy::authenticated())
//!             .service(handlers::users::get_current_user)
//!     )
//! ```

pub mod authorization_gate;
pub mod access_policy;
mod gate_inner;

pub use authorization_gate::AuthorizationGate;
pub use access_policy::AccessPolicy;
