//! # User HTTP Handlers
//!
//! | 메서드 | 경로 | 설명 | 접근 |
//! |--------|------|------|------|
//! | `GET` | `/api/me` | 현재 로그인 사용자 조회 | 인증 필요 |
//! | `GET` | `/api/users/{email}` | 이메일로 사용자 조회 | `ROLE_ADMIN` |
//!
//! 응답에는 비밀번호 해시가 포함되지 않습니다.
use actix_web::{get, web, HttpResponse};
use crate::domain::dto::users::response::{CurrentUserResponse, UserResponse};
use crate::domain::models::auth::principal::Principal;
use crate::errors::errors::AppError;
use crate::services::users::UserService;

/// 현재 사용자 조회
///
/// 보안 컨텍스트의 주체로 사용자를 조회합니다.
#[get("")]
pub async fn get_current_user(
    principal: Principal,
    user_service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    let user = user_service.get_user_by_email(principal.identity()).await?;

    Ok(HttpResponse::Ok().json(CurrentUserResponse {
        user: UserResponse::from(user),
        authorities: principal.authorities(),
    }))
}

/// 이메일로 사용자 조회
#[get("/{email}")]
pub async fn get_user(
    email: web::Path<String>,
    user_service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    let user = user_service.get_user_by_email(&email).await?;

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}
