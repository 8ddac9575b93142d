//! 사용자 생성 요청 DTO
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};
use crate::domain::entities::users::role::Role;

/// 새로운 사용자 계정 생성을 위한 요청 DTO
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    /// 이름 (2-20자)
    #[validate(length(min = 2, max = 20, message = "이름은 2-20자 사이여야 합니다"))]
    pub name: String,

    /// 성 (2-20자)
    #[validate(length(min = 2, max = 20, message = "성은 2-20자 사이여야 합니다"))]
    pub surname: String,

    /// 사용자 이메일 주소 (인증 주체)
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    /// 평문 비밀번호 (공백만으로 구성될 수 없음)
    #[validate(custom(function = "validate_not_blank"))]
    pub password: String,

    /// 역할 (없으면 `ROLE_USER`)
    #[serde(default)]
    pub role: Role,
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank")
            .with_message("비밀번호를 입력해주세요".into()));
    }
    Ok(())
}
