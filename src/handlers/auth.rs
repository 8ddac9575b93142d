//! Authentication HTTP Handlers
//!
//! 이메일/비밀번호 로그인을 처리합니다. 로그인 경로는 인가 게이트의 검사 대상이 아닙니다.
//!
//! # Endpoint
//!
//! - `POST /login` - JSON 또는 폼(`username`, `password`)으로 로그인하고 토큰 쌍 발급
use actix_web::http::header::{CacheControl, CacheDirective};
use actix_web::{post, web, Either, HttpRequest, HttpResponse};
use validator::Validate;
use crate::domain::dto::users::request::LoginRequest;
use crate::errors::errors::AppError;
use crate::services::auth::AuthService;

/// 로컬 로그인 핸들러
///
/// 성공하면 `{access_token, refresh_token}`을 반환합니다. 두 토큰의 발급자는 요청 경로입니다.
/// 사용자가 없거나 비밀번호가 틀리면 같은 401 응답을 반환합니다.
///
/// ```bash
/// curl -X POST http://localhost:8080/login \
///   -d 'username=john@gmail.com&password=12345'
/// ```
#[post("/login")]
pub async fn login(
    req: HttpRequest,
    payload: Either<web::Json<LoginRequest>, web::Form<LoginRequest>>,
    auth_service: web::Data<AuthService>,
) -> Result<HttpResponse, AppError> {
    let credentials = match payload {
        Either::Left(json) => json.into_inner(),
        Either::Right(form) => form.into_inner(),
    };

    credentials.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    log::info!("로그인 시도 - 사용자: {}", credentials.username);

    let token_pair = auth_service
        .login(&credentials.username, &credentials.password, req.path())
        .await?;

    Ok(HttpResponse::Ok()
        .insert_header(CacheControl(vec![CacheDirective::NoStore]))
        .json(token_pair))
}
