use serde::Deserialize;
use validator::Validate;

/// 로그인 요청 DTO
///
/// JSON 본문과 `application/x-www-form-urlencoded` 폼 모두에서 읽습니다.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    /// 사용자 이메일
    #[validate(length(min = 1, message = "사용자 이름을 입력해주세요"))]
    pub username: String,

    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    pub password: String,
}
