//! 토큰 갱신 핸들러

use actix_web::http::header::{self, CacheControl, CacheDirective};
use actix_web::http::StatusCode;
use actix_web::{routes, web, HttpRequest, HttpResponse, ResponseError};
use crate::errors::errors::{error_payload_response, AppError};
use crate::services::auth::AuthService;

/// 내부 오류 시 노출하는 메시지
const REFRESH_FAILED: &str = "Unable to refresh token";

/// 토큰 갱신 API 핸들러
///
/// `Authorization: Bearer <refresh_token>` 헤더로 새 토큰 쌍을 발급합니다.
///
/// - Bearer 헤더 없음: 401
/// - 토큰 검증 실패, 사용자 없음, 기타 오류: 403
///
/// 모든 실패 응답은 `error` 헤더와 `{"error_message"}` 본문을 가집니다.
#[routes]
#[get("/token/refresh")]
#[get("/api/users/token/refresh")]
pub async fn refresh_token(
    req: HttpRequest,
    auth_service: web::Data<AuthService>,
) -> HttpResponse {
    let authorization = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    match auth_service.refresh(authorization, req.path()).await {
        Ok(token_pair) => HttpResponse::Ok()
            .insert_header(CacheControl(vec![CacheDirective::NoStore]))
            .json(token_pair),
        Err(err @ AppError::MissingBearerToken) => err.error_response(),
        Err(err) if err.is_auth_failure() => {
            error_payload_response(StatusCode::FORBIDDEN, &err.to_string())
        }
        Err(err) => {
            log::error!("토큰 갱신 중 내부 오류: {}", err);
            error_payload_response(StatusCode::FORBIDDEN, REFRESH_FAILED)
        }
    }
}
