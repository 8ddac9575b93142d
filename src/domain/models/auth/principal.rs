use std::future::{ready, Ready};
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};
use crate::errors::errors::AppError;

/// 인증된 주체 (identity + 단일 역할)
///
/// 요청 처리 동안 변경되지 않도록 필드는 읽기 전용으로만 노출합니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    identity: String,
    role: String,
}

impl Principal {
    pub fn new(identity: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            role: role.into(),
        }
    }

    /// 사용자 식별자 (이메일)
    pub fn identity(&self) -> &str {
        &self.identity
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    /// 역할 하나가 곧 권한 하나입니다.
    pub fn authorities(&self) -> Vec<String> {
        vec![self.role.clone()]
    }

    pub fn has_authority(&self, authority: &str) -> bool {
        self.role == authority
    }

    /// 여러 권한 중 하나라도 보유하고 있는지 확인
    pub fn has_any_authority(&self, authorities: &[&str]) -> bool {
        authorities.iter().any(|&authority| self.has_authority(authority))
    }
}

/// 요청 단위 보안 컨텍스트
///
/// 인가 게이트가 토큰 검증에 성공했을 때만 request extensions에 저장됩니다.
/// 요청이 끝나면 함께 사라지며 다른 요청과 공유되지 않습니다.
#[derive(Debug, Clone)]
pub struct SecurityContext {
    principal: Principal,
    authorities: Vec<String>,
}

impl SecurityContext {
    pub fn new(principal: Principal) -> Self {
        let authorities = principal.authorities();
        Self {
            principal,
            authorities,
        }
    }

    pub fn principal(&self) -> &Principal {
        &self.principal
    }

    pub fn authorities(&self) -> &[String] {
        &self.authorities
    }

    /// 현재 요청의 보안 컨텍스트를 조회합니다.
    pub fn of(req: &HttpRequest) -> Option<SecurityContext> {
        req.extensions().get::<SecurityContext>().cloned()
    }
}

/// ActixWeb FromRequest trait 구현
///
/// 보안 컨텍스트가 없으면 401로 거절합니다.
impl FromRequest for Principal {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match SecurityContext::of(req) {
            Some(context) => ready(Ok(context.principal)),
            None => ready(Err(AppError::AuthenticationRequired.into())),
        }
    }
}

/// 선택적 인증 주체 추출자
#[derive(Debug, Clone)]
pub struct OptionalPrincipal(pub Option<Principal>);

impl FromRequest for OptionalPrincipal {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let principal = SecurityContext::of(req).map(|context| context.principal);
        ready(Ok(OptionalPrincipal(principal)))
    }
}
