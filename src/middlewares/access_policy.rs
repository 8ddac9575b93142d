//! 스코프 단위 접근 정책 미들웨어
//!
//! 인가 게이트가 저장한 보안 컨텍스트를 보고 요청을 허용하거나 거절합니다.
//! 보안 컨텍스트가 없으면 401, 권한이 부족하면 403입니다.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    Error, HttpMessage, ResponseError,
};
use futures_util::future::LocalBoxFuture;
use crate::domain::models::auth::access_rule::{AccessRule, RequiredAuthority};
use crate::domain::models::auth::principal::SecurityContext;
use crate::errors::errors::AppError;

/// 접근 정책
///
/// ```rust,ignore
/// web::scope("/api/users")
///     .wrap(AccessPolicy::with_authority("ROLE_ADMIN"))
///     .service(handlers::users::get_user)
/// ```
pub struct AccessPolicy {
    rule: AccessRule,
}

impl AccessPolicy {
    /// 인증된 요청만 허용
    pub fn authenticated() -> Self {
        Self { rule: AccessRule::Authenticated }
    }

    /// 특정 권한 요구
    pub fn with_authority(authority: &str) -> Self {
        Self {
            rule: AccessRule::Authority(RequiredAuthority::Single(authority.to_string())),
        }
    }

    /// 여러 권한 중 하나 요구
    pub fn with_any_authority(authorities: Vec<&str>) -> Self {
        let authorities = authorities.into_iter().map(|s| s.to_string()).collect();
        Self {
            rule: AccessRule::Authority(RequiredAuthority::Any(authorities)),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for AccessPolicy
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AccessPolicyService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AccessPolicyService {
            service: Rc::new(service),
            rule: self.rule.clone(),
        }))
    }
}

pub struct AccessPolicyService<S> {
    service: Rc<S>,
    rule: AccessRule,
}

impl<S, B> Service<ServiceRequest> for AccessPolicyService<S>
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

        let verdict = match req.extensions().get::<SecurityContext>() {
            None => Err(AppError::AuthenticationRequired),
            Some(context) if !self.rule.permits(context.principal()) => {
                log::warn!(
                    "권한 부족: {} ({:?}), 필요 권한: {:?}",
                    context.principal().identity(),
                    context.authorities(),
                    self.rule
                );
                Err(AppError::AccessDenied)
            }
            Some(_) => Ok(()),
        };

        Box::pin(async move {
            if let Err(err) = verdict {
                let response = err.error_response();
                let (req, _) = req.into_parts();
                return Ok(ServiceResponse::new(req, response).map_into_right_body());
            }

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}
