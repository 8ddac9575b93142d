//! 기본 사용자 시드

use crate::domain::dto::users::request::CreateUserRequest;
use crate::domain::entities::users::role::Role;
use crate::domain::entities::users::user::User;
use crate::errors::errors::AppError;
use crate::services::users::UserService;

/// 시작 시 보장되는 기본 사용자
pub fn default_user() -> CreateUserRequest {
    CreateUserRequest {
        name: "John".to_string(),
        surname: "Smith".to_string(),
        email: "john@gmail.com".to_string(),
        password: "12345".to_string(),
        role: Role::User,
    }
}

/// 기본 사용자가 없으면 생성합니다.
pub async fn seed_default_user(user_service: &UserService) -> Result<User, AppError> {
    let user = user_service.ensure_user(default_user()).await?;
    log::info!("🌱 기본 사용자 준비 완료: {} ({})", user.email, user.role);
    Ok(user)
}
