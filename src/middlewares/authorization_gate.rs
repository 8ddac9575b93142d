//! 인가 게이트 미들웨어
//!
//! 모든 요청의 Authorization 헤더를 확인합니다.
//!
//! - 헤더가 없거나 `"Bearer "`로 시작하지 않으면 익명으로 통과시킵니다.
//! - Bearer 토큰이 있으면 검증하고, 실패하면 핸들러에 도달하기 전에 403으로 거절합니다.
//! - 검증에 성공하면 [`SecurityContext`](crate::domain::models::auth::SecurityContext)를
//!   request extensions에 저장합니다.

use std::future::{ready, Ready};
use std::rc::Rc;
use std::sync::Arc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
    body::EitherBody,
};
use crate::middlewares::gate_inner::AuthorizationGateService;
use crate::services::auth::TokenService;

/// JWT 인가 게이트
pub struct AuthorizationGate {
    token_service: Arc<TokenService>,
    /// 토큰 검사를 건너뛰는 경로
    public_paths: Vec<String>,
}

impl AuthorizationGate {
    pub fn new(token_service: Arc<TokenService>) -> Self {
        Self {
            token_service,
            public_paths: Vec::new(),
        }
    }

    /// 토큰 검사를 건너뛸 경로를 지정합니다. 경로는 정확히 일치해야 합니다.
    pub fn permit<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        self.public_paths.extend(paths.into_iter().map(Into::into));
        self
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthorizationGate
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthorizationGateService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthorizationGateService {
            service: Rc::new(service),
            token_service: self.token_service.clone(),
            public_paths: Rc::new(self.public_paths.clone()),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{get, test, App, HttpResponse, Responder};
    use actix_web::http::{header, StatusCode};
    use chrono::{Duration, Utc};
    use crate::config::TokenSettings;
    use crate::domain::models::auth::principal::{OptionalPrincipal, Principal};
    use crate::domain::models::token::token::TokenKind;
    use crate::errors::errors::ERROR_HEADER;

    #[get("/whoami")]
    async fn whoami(principal: OptionalPrincipal) -> impl Responder {
        match principal.0 {
            Some(principal) => HttpResponse::Ok().body(principal.identity().to_string()),
            None => HttpResponse::Ok().body("anonymous"),
        }
    }

    #[get("/login")]
    async fn login() -> impl Responder {
        HttpResponse::Ok().body("public")
    }

    fn token_service() -> Arc<TokenService> {
        Arc::new(TokenService::new(TokenSettings::new("secret")))
    }

    fn john() -> Principal {
        Principal::new("john@gmail.com", "ROLE_USER")
    }

    macro_rules! gated_app {
        ($tokens:expr) => {
            test::init_service(
                App::new()
                    .wrap(AuthorizationGate::new($tokens).permit(["/login"]))
                    .service(whoami)
                    .service(login),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_anonymous_request_passes_through() {
        let app = gated_app!(token_service());

        let req = test::TestRequest::get().uri("/whoami").to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert_eq!(body, "anonymous");
    }

    #[actix_web::test]
    async fn test_non_bearer_header_is_anonymous() {
        let app = gated_app!(token_service());

        let req = test::TestRequest::get()
            .uri("/whoami")
            .insert_header((header::AUTHORIZATION, "Basic dXNlcjpwYXNz"))
            .to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert_eq!(body, "anonymous");
    }

    #[actix_web::test]
    async fn test_valid_token_populates_security_context() {
        let tokens = token_service();
        let token = tokens.issue(&john(), TokenKind::Access, "/login").unwrap();
        let app = gated_app!(tokens);

        let req = test::TestRequest::get()
            .uri("/whoami")
            .insert_header((header::AUTHORIZATION, format!("Bearer {}", token)))
            .to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert_eq!(body, "john@gmail.com");
    }

    #[actix_web::test]
    async fn test_invalid_token_is_rejected_before_handler() {
        let app = gated_app!(token_service());

        let req = test::TestRequest::get()
            .uri("/whoami")
            .insert_header((header::AUTHORIZATION, "Bearer not-a-token"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
        assert_eq!(resp.headers().get(ERROR_HEADER).unwrap(), "Malformed token");
    }

    #[actix_web::test]
    async fn test_expired_token_is_rejected() {
        let tokens = token_service();
        let stale = tokens
            .issue_at(&john(), TokenKind::Access, "/login", Utc::now() - Duration::minutes(11))
            .unwrap();
        let app = gated_app!(tokens);

        let req = test::TestRequest::get()
            .uri("/whoami")
            .insert_header((header::AUTHORIZATION, format!("Bearer {}", stale)))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error_message"], "The token has expired");
    }

    #[actix_web::test]
    async fn test_foreign_key_token_is_rejected() {
        let foreign = TokenService::new(TokenSettings::new("another-secret"));
        let token = foreign.issue(&john(), TokenKind::Access, "/login").unwrap();
        let app = gated_app!(token_service());

        let req = test::TestRequest::get()
            .uri("/whoami")
            .insert_header((header::AUTHORIZATION, format!("Bearer {}", token)))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }

    #[actix_web::test]
    async fn test_public_path_skips_token_check() {
        let app = gated_app!(token_service());

        let req = test::TestRequest::get()
            .uri("/login")
            .insert_header((header::AUTHORIZATION, "Bearer not-a-token"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
    }
}
