//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다.
//!
//! 인증 경로(로그인, 토큰 검증, 토큰 갱신)의 에러는 다음 형식으로 응답됩니다.
//!
//! ```text
//! HTTP/1.1 403 Forbidden
//! error: Token has expired
//! content-type: application/json
//!
//! {"error_message": "Token has expired"}
//! ```
//!
//! 그 외의 에러는 `{"error": "..."}` 형식을 사용합니다.

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use thiserror::Error;

/// 인증 실패 시 진단 메시지를 담는 응답 헤더 이름
pub const ERROR_HEADER: &str = "error";

/// 토큰 검증 실패 유형
///
/// 호출자는 모든 변형을 "인증되지 않음"으로 취급해야 합니다.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// 구조적으로 잘못된 토큰 (디코딩 불가, 필수 클레임 누락)
    #[error("Malformed token")]
    Malformed,

    /// 서명 불일치 (변조되었거나 다른 키로 서명됨)
    #[error("The token's signature is invalid")]
    BadSignature,

    /// 서명은 유효하지만 만료됨
    #[error("The token has expired")]
    Expired,

    /// 고정된 발급자와 `iss` 클레임이 다름
    #[error("The token was issued by an untrusted issuer")]
    UntrustedIssuer,
}

/// 애플리케이션 전역 에러 타입
#[derive(Error, Debug)]
pub enum AppError {
    /// 토큰 검증 실패 (403 Forbidden)
    #[error(transparent)]
    Token(#[from] TokenError),

    /// Bearer 헤더 없음 또는 형식 오류 (401 Unauthorized)
    #[error("No bearer authorization header with refresh token")]
    MissingBearerToken,

    /// 잘못된 자격 증명 (401 Unauthorized)
    ///
    /// 존재하지 않는 사용자와 비밀번호 불일치를 구분하지 않습니다.
    #[error("Bad credentials")]
    BadCredentials,

    /// 토큰은 유효하지만 해당 사용자가 더 이상 존재하지 않음 (403 Forbidden)
    #[error("The token subject no longer exists")]
    UserVanished,

    /// 보호된 리소스에 익명으로 접근 (401 Unauthorized)
    #[error("Full authentication is required to access this resource")]
    AuthenticationRequired,

    /// 권한 부족 (403 Forbidden)
    #[error("Access is denied")]
    AccessDenied,

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 충돌/중복 에러 (409 Conflict)
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 인증 경로 에러 여부
    ///
    /// 이 에러들은 `error` 헤더와 `error_message` 본문으로 응답합니다.
    pub fn is_auth_failure(&self) -> bool {
        matches!(
            self,
            AppError::Token(_)
                | AppError::MissingBearerToken
                | AppError::BadCredentials
                | AppError::UserVanished
                | AppError::AuthenticationRequired
                | AppError::AccessDenied
        )
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Token(_) => StatusCode::FORBIDDEN,
            AppError::MissingBearerToken => StatusCode::UNAUTHORIZED,
            AppError::BadCredentials => StatusCode::UNAUTHORIZED,
            AppError::UserVanished => StatusCode::FORBIDDEN,
            AppError::AuthenticationRequired => StatusCode::UNAUTHORIZED,
            AppError::AccessDenied => StatusCode::FORBIDDEN,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    fn error_response(&self) -> HttpResponse {
        if self.is_auth_failure() {
            return error_payload_response(self.status_code(), &self.to_string());
        }

        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "error": self.to_string()
        }))
    }
}

/// 구조화된 인증 에러 응답을 만듭니다.
///
/// `error` 헤더와 `{"error_message": ...}` 본문을 함께 설정합니다.
pub fn error_payload_response(status: StatusCode, message: &str) -> HttpResponse {
    HttpResponse::build(status)
        .insert_header((ERROR_HEADER, message.to_string()))
        .json(serde_json::json!({
            "error_message": message
        }))
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}
