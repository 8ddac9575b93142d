//! 로그인과 토큰 갱신 흐름
//!
//! 자격 증명 검증기([`UserService`])와 토큰 코덱([`TokenService`])을 조합합니다.

use std::sync::Arc;
use crate::domain::models::token::token::TokenPair;
use crate::errors::errors::AppError;
use crate::services::auth::token_service::TokenService;
use crate::services::users::user_service::UserService;

/// 인증 흐름 서비스
pub struct AuthService {
    user_service: Arc<UserService>,
    token_service: Arc<TokenService>,
}

impl AuthService {
    pub fn new(user_service: Arc<UserService>, token_service: Arc<TokenService>) -> Self {
        Self {
            user_service,
            token_service,
        }
    }

    /// 로그인
    ///
    /// 자격 증명이 맞으면 `issuer`를 발급자로 하는 토큰 쌍을 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::BadCredentials` - 사용자 없음 또는 비밀번호 불일치
    pub async fn login(&self, username: &str, password: &str, issuer: &str) -> Result<TokenPair, AppError> {
        let user = match self.user_service.verify_credentials(username, password).await {
            Ok(user) => user,
            Err(e) => {
                log::warn!("로그인 실패: {}", e);
                return Err(e);
            }
        };

        let pair = self.token_service.issue_pair(&user.principal(), issuer)?;
        log::info!("로그인 성공 - email: {}", user.email);

        Ok(pair)
    }

    /// 리프레시 토큰으로 새 토큰 쌍 발급
    ///
    /// 1. Authorization 헤더에서 Bearer 토큰을 꺼냅니다.
    /// 2. 토큰을 검증합니다.
    /// 3. 토큰 주체를 다시 조회합니다. 역할은 저장소의 현재 값을 사용합니다.
    /// 4. 새 액세스/리프레시 토큰을 발급합니다.
    ///
    /// 이전 리프레시 토큰은 만료될 때까지 계속 유효합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::MissingBearerToken` - 헤더 없음 또는 Bearer 접두사 불일치
    /// * `AppError::Token` - 토큰 검증 실패
    /// * `AppError::UserVanished` - 토큰 주체가 더 이상 존재하지 않음
    pub async fn refresh(&self, authorization: Option<&str>, issuer: &str) -> Result<TokenPair, AppError> {
        let token = authorization
            .and_then(TokenService::extract_bearer_token)
            .ok_or(AppError::MissingBearerToken)?;

        let principal = self.token_service.verify(token).map_err(|e| {
            log::warn!("리프레시 토큰 검증 실패: {}", e);
            AppError::from(e)
        })?;

        let user = self
            .user_service
            .find_user_by_email(principal.identity())
            .await?
            .ok_or_else(|| {
                log::warn!("토큰 주체가 존재하지 않습니다 - email: {}", principal.identity());
                AppError::UserVanished
            })?;

        let pair = self.token_service.issue_pair(&user.principal(), issuer)?;
        log::debug!("토큰 갱신 완료 - email: {}", user.email);

        Ok(pair)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use crate::config::TokenSettings;
    use crate::domain::dto::users::request::CreateUserRequest;
    use crate::domain::entities::users::role::Role;
    use crate::domain::models::auth::principal::Principal;
    use crate::domain::models::token::token::TokenKind;
    use crate::errors::errors::TokenError;
    use crate::repositories::users::memory_user_repo::InMemoryUserRepository;

    struct Fixture {
        repo: Arc<InMemoryUserRepository>,
        tokens: Arc<TokenService>,
        auth: AuthService,
    }

    async fn fixture() -> Fixture {
        fixture_with(TokenSettings::new("secret")).await
    }

    async fn fixture_with(settings: TokenSettings) -> Fixture {
        let repo = Arc::new(InMemoryUserRepository::new());
        let users = Arc::new(UserService::new(repo.clone(), 4).unwrap());
        let tokens = Arc::new(TokenService::new(settings));

        users
            .create_user(CreateUserRequest {
                name: "John".to_string(),
                surname: "Smith".to_string(),
                email: "john@gmail.com".to_string(),
                password: "12345".to_string(),
                role: Role::User,
            })
            .await
            .unwrap();

        Fixture {
            repo,
            tokens: tokens.clone(),
            auth: AuthService::new(users, tokens),
        }
    }

    fn bearer(token: &str) -> String {
        format!("Bearer {}", token)
    }

    #[actix_web::test]
    async fn test_login_issues_pair_for_subject() {
        let f = fixture().await;
        let pair = f.auth.login("john@gmail.com", "12345", "/login").await.unwrap();

        let access = f.tokens.decode_claims(&pair.access_token).unwrap();
        let refresh = f.tokens.decode_claims(&pair.refresh_token).unwrap();
        assert_eq!(access.sub, "john@gmail.com");
        assert_eq!(access.role, "ROLE_USER");
        assert_eq!(access.iss, "/login");
        assert!(access.exp < refresh.exp);
    }

    #[actix_web::test]
    async fn test_login_failures_are_identical() {
        let f = fixture().await;

        let wrong = f.auth.login("john@gmail.com", "wrong", "/login").await.unwrap_err();
        let unknown = f.auth.login("nobody@gmail.com", "12345", "/login").await.unwrap_err();

        assert!(matches!(wrong, AppError::BadCredentials));
        assert!(matches!(unknown, AppError::BadCredentials));
    }

    #[actix_web::test]
    async fn test_refresh_issues_new_pair() {
        let f = fixture().await;
        let pair = f.auth.login("john@gmail.com", "12345", "/login").await.unwrap();

        let header = bearer(&pair.refresh_token);
        let renewed = f.auth.refresh(Some(&header), "/token/refresh").await.unwrap();

        let access = f.tokens.decode_claims(&renewed.access_token).unwrap();
        let refresh = f.tokens.decode_claims(&renewed.refresh_token).unwrap();
        assert_eq!(access.sub, "john@gmail.com");
        assert_eq!(access.iss, "/token/refresh");
        assert_eq!(refresh.sub, "john@gmail.com");
        assert_eq!(refresh.iss, "/token/refresh");
    }

    #[actix_web::test]
    async fn test_refresh_chain_with_pinned_issuer() {
        let f = fixture_with(TokenSettings::new("secret").with_pinned_issuer("health-tracker-auth")).await;
        let pair = f.auth.login("john@gmail.com", "12345", "/login").await.unwrap();

        let renewed = f.auth.refresh(Some(&bearer(&pair.refresh_token)), "/token/refresh").await.unwrap();
        assert_eq!(f.tokens.verify(&renewed.access_token).unwrap().identity(), "john@gmail.com");
        assert_eq!(f.tokens.verify(&renewed.refresh_token).unwrap().identity(), "john@gmail.com");

        // 갱신된 리프레시 토큰으로 다시 갱신
        let again = f
            .auth
            .refresh(Some(&bearer(&renewed.refresh_token)), "/api/users/token/refresh")
            .await
            .unwrap();
        let claims = f.tokens.decode_claims(&again.access_token).unwrap();
        assert_eq!(claims.sub, "john@gmail.com");
        assert_eq!(claims.iss, "health-tracker-auth");
    }

    #[actix_web::test]
    async fn test_refresh_without_bearer() {
        let f = fixture().await;

        assert!(matches!(
            f.auth.refresh(None, "/token/refresh").await,
            Err(AppError::MissingBearerToken)
        ));
        assert!(matches!(
            f.auth.refresh(Some("Basic abc"), "/token/refresh").await,
            Err(AppError::MissingBearerToken)
        ));
    }

    #[actix_web::test]
    async fn test_refresh_with_expired_token() {
        let f = fixture().await;
        let principal = Principal::new("john@gmail.com", "ROLE_USER");
        let stale = f
            .tokens
            .issue_at(&principal, TokenKind::Refresh, "/login", Utc::now() - Duration::minutes(31))
            .unwrap();

        let result = f.auth.refresh(Some(&bearer(&stale)), "/token/refresh").await;
        assert!(matches!(result, Err(AppError::Token(TokenError::Expired))));
    }

    #[actix_web::test]
    async fn test_refresh_for_deleted_user() {
        let f = fixture().await;
        let pair = f.auth.login("john@gmail.com", "12345", "/login").await.unwrap();
        assert!(f.repo.remove("john@gmail.com").unwrap());

        let result = f.auth.refresh(Some(&bearer(&pair.refresh_token)), "/token/refresh").await;
        assert!(matches!(result, Err(AppError::UserVanished)));
    }
}
