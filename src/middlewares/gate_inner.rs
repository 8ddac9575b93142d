//! AuthorizationGate 토큰 검증 로직
use std::rc::Rc;
use std::sync::Arc;
use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::http::{header, StatusCode};
use actix_web::{Error, HttpMessage};
use futures_util::future::LocalBoxFuture;
use crate::domain::models::auth::principal::SecurityContext;
use crate::errors::errors::{error_payload_response, TokenError};
use crate::services::auth::{TokenService, BEARER_PREFIX};

/// 실제 토큰 검증을 수행하는 서비스
pub struct AuthorizationGateService<S> {
    pub service: Rc<S>,
    pub token_service: Arc<TokenService>,
    pub public_paths: Rc<Vec<String>>,
}

impl<S, B> Service<ServiceRequest> for AuthorizationGateService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();

        if self.public_paths.iter().any(|path| path == req.path()) {
            return Box::pin(async move {
                let res = service.call(req).await?;
                Ok(res.map_into_left_body())
            });
        }

        let token_service = self.token_service.clone();

        Box::pin(async move {
            let bearer = req
                .headers()
                .get(header::AUTHORIZATION)
                .and_then(|h| h.to_str().ok())
                .and_then(|h| h.strip_prefix(BEARER_PREFIX))
                .map(str::to_owned);

            match bearer {
                // 헤더 없음: 익명 요청, 접근 정책이 이후에 판단
                None => {
                    log::debug!("익명 요청: {}", req.path());
                }
                Some(token) => match token_service.verify(&token) {
                    Ok(principal) => {
                        log::debug!("토큰 검증 성공: {} ({})", principal.identity(), principal.role());
                        req.extensions_mut().insert(SecurityContext::new(principal));
                    }
                    Err(err) => {
                        if err == TokenError::Expired {
                            log::debug!("만료된 토큰 - path: {}", req.path());
                        } else {
                            log::warn!("토큰 검증 실패 - path: {}, reason: {}", req.path(), err);
                        }
                        let response = error_payload_response(StatusCode::FORBIDDEN, &err.to_string());
                        let (req, _) = req.into_parts();
                        return Ok(ServiceResponse::new(req, response).map_into_right_body());
                    }
                },
            }

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}
