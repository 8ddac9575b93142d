//! JWT 토큰 관리 서비스 구현
//!
//! HMAC-SHA256으로 서명된 액세스/리프레시 토큰을 발급하고 검증합니다.
//! 서버에는 어떤 토큰도 저장하지 않으며, 유효성은 서명과 `exp` 클레임만으로 결정됩니다.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use crate::config::TokenSettings;
use crate::domain::models::auth::principal::Principal;
use crate::domain::models::token::token::{TokenClaims, TokenKind, TokenPair};
use crate::errors::errors::{AppError, TokenError};

/// Authorization 헤더의 Bearer 접두사 (대소문자 구분)
pub const BEARER_PREFIX: &str = "Bearer ";

/// JWT 토큰 관리 서비스
///
/// 서명 키는 생성 시 한 번 고정되며 이후 변경되지 않습니다.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_ttl: Duration,
    refresh_ttl: Duration,
    pinned_issuer: Option<String>,
}

impl TokenService {
    pub fn new(settings: TokenSettings) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(settings.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(settings.secret.as_bytes()),
            access_ttl: Duration::minutes(settings.access_ttl_minutes),
            refresh_ttl: Duration::minutes(settings.refresh_ttl_minutes),
            pinned_issuer: settings.pinned_issuer,
        }
    }

    /// 토큰 종류별 유효 기간
    pub fn ttl(&self, kind: TokenKind) -> Duration {
        match kind {
            TokenKind::Access => self.access_ttl,
            TokenKind::Refresh => self.refresh_ttl,
        }
    }

    /// 토큰 발급
    ///
    /// # Arguments
    ///
    /// * `principal` - 토큰 주체
    /// * `kind` - 액세스 또는 리프레시
    /// * `issuer` - 토큰을 발급한 경로 (`iss` 클레임)
    ///
    /// 발급자가 고정된 경우 `issuer` 대신 고정된 발급자를 기록합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 클레임 직렬화 실패
    pub fn issue(&self, principal: &Principal, kind: TokenKind, issuer: &str) -> Result<String, AppError> {
        self.issue_at(principal, kind, issuer, Utc::now())
    }

    /// 지정한 시각 기준으로 토큰을 발급합니다.
    pub fn issue_at(
        &self,
        principal: &Principal,
        kind: TokenKind,
        issuer: &str,
        now: DateTime<Utc>,
    ) -> Result<String, AppError> {
        let expiration = now + self.ttl(kind);

        let claims = TokenClaims {
            sub: principal.identity().to_string(),
            role: principal.role().to_string(),
            iss: self.pinned_issuer.as_deref().unwrap_or(issuer).to_string(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    /// 액세스 토큰과 리프레시 토큰 쌍 발급
    ///
    /// ```rust,ignore
    /// let pair = token_service.issue_pair(&user.principal(), "/login")?;
    /// println!("Access token: {}", pair.access_token);
    /// ```
    pub fn issue_pair(&self, principal: &Principal, issuer: &str) -> Result<TokenPair, AppError> {
        let now = Utc::now();

        Ok(TokenPair {
            access_token: self.issue_at(principal, TokenKind::Access, issuer, now)?,
            refresh_token: self.issue_at(principal, TokenKind::Refresh, issuer, now)?,
        })
    }

    /// 토큰 검증 후 인증 주체 반환
    ///
    /// # Errors
    ///
    /// * `TokenError::Malformed` - 디코딩 불가 또는 필수 클레임 누락
    /// * `TokenError::BadSignature` - 서명 불일치
    /// * `TokenError::Expired` - `exp`가 현재 시각 이전
    /// * `TokenError::UntrustedIssuer` - 고정된 발급자와 다름
    pub fn verify(&self, token: &str) -> Result<Principal, TokenError> {
        self.verify_at(token, Utc::now())
    }

    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<Principal, TokenError> {
        self.decode_claims_at(token, now).map(|claims| claims.principal())
    }

    /// 토큰 검증 후 전체 클레임 반환
    pub fn decode_claims(&self, token: &str) -> Result<TokenClaims, TokenError> {
        self.decode_claims_at(token, Utc::now())
    }

    /// 지정한 시각 기준으로 토큰을 검증합니다.
    ///
    /// 서명을 먼저 확인하고 만료는 그 다음에 확인합니다.
    /// 시계 오차 보정(leeway)은 하지 않습니다.
    pub fn decode_claims_at(&self, token: &str, now: DateTime<Utc>) -> Result<TokenClaims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.validate_exp = false;
        validation.set_required_spec_claims(&["exp", "sub", "iss"]);
        if let Some(issuer) = &self.pinned_issuer {
            validation.set_issuer(&[issuer]);
        }

        let claims = decode::<TokenClaims>(token, &self.decoding_key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| classify(e.kind()))?;

        if claims.exp <= now.timestamp() {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }

    /// Bearer 토큰에서 실제 토큰 부분 추출
    ///
    /// 접두사가 정확히 `"Bearer "`가 아니거나 토큰이 비어 있으면 `None`.
    pub fn extract_bearer_token(auth_header: &str) -> Option<&str> {
        auth_header
            .strip_prefix(BEARER_PREFIX)
            .filter(|token| !token.is_empty())
    }
}

fn classify(kind: &ErrorKind) -> TokenError {
    match kind {
        ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => TokenError::BadSignature,
        ErrorKind::ExpiredSignature => TokenError::Expired,
        ErrorKind::InvalidIssuer => TokenError::UntrustedIssuer,
        _ => TokenError::Malformed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(secret: &str) -> TokenService {
        TokenService::new(TokenSettings::new(secret))
    }

    fn john() -> Principal {
        Principal::new("john@gmail.com", "ROLE_USER")
    }

    #[test]
    fn test_issue_then_verify_returns_principal() {
        let service = service("secret");

        for kind in [TokenKind::Access, TokenKind::Refresh] {
            let token = service.issue(&john(), kind, "/login").unwrap();
            let principal = service.verify(&token).unwrap();

            assert_eq!(principal.identity(), "john@gmail.com");
            assert_eq!(principal.role(), "ROLE_USER");
        }
    }

    #[test]
    fn test_claims_wire_format() {
        let service = service("secret");
        let now = Utc::now();
        let token = service.issue_at(&john(), TokenKind::Access, "/login", now).unwrap();

        let claims = service.decode_claims(&token).unwrap();
        assert_eq!(claims.sub, "john@gmail.com");
        assert_eq!(claims.role, "ROLE_USER");
        assert_eq!(claims.iss, "/login");
        assert_eq!(claims.exp, now.timestamp() + 10 * 60);
    }

    #[test]
    fn test_refresh_token_outlives_access_token() {
        let service = service("secret");
        let pair = service.issue_pair(&john(), "/login").unwrap();

        let access = service.decode_claims(&pair.access_token).unwrap();
        let refresh = service.decode_claims(&pair.refresh_token).unwrap();
        assert!(access.exp < refresh.exp);
        assert_eq!(refresh.exp - refresh.iat, 30 * 60);
    }

    #[test]
    fn test_token_signed_with_other_key_is_bad_signature() {
        let issuer = service("another-secret");
        let verifier = service("secret");
        let token = issuer.issue(&john(), TokenKind::Access, "/login").unwrap();

        assert_eq!(verifier.verify(&token), Err(TokenError::BadSignature));
    }

    #[test]
    fn test_tampered_payload_is_bad_signature() {
        let service = service("secret");
        let token = service.issue(&john(), TokenKind::Access, "/login").unwrap();
        let admin = service
            .issue(&Principal::new("john@gmail.com", "ROLE_ADMIN"), TokenKind::Access, "/login")
            .unwrap();

        // 관리자 토큰의 payload에 원래 서명을 붙임
        let parts: Vec<&str> = token.split('.').collect();
        let admin_parts: Vec<&str> = admin.split('.').collect();
        let forged = format!("{}.{}.{}", parts[0], admin_parts[1], parts[2]);

        assert_eq!(service.verify(&forged), Err(TokenError::BadSignature));
    }

    #[test]
    fn test_expired_token() {
        let service = service("secret");
        let issued_at = Utc::now();
        let token = service.issue_at(&john(), TokenKind::Access, "/login", issued_at).unwrap();

        // 만료 직전까지는 유효
        let before = issued_at + Duration::minutes(10) - Duration::seconds(1);
        assert!(service.verify_at(&token, before).is_ok());

        let after = issued_at + Duration::minutes(10);
        assert_eq!(service.verify_at(&token, after), Err(TokenError::Expired));
    }

    #[test]
    fn test_expired_refresh_token() {
        let service = service("secret");
        let issued_at = Utc::now() - Duration::minutes(31);
        let token = service.issue_at(&john(), TokenKind::Refresh, "/login", issued_at).unwrap();

        assert_eq!(service.verify(&token), Err(TokenError::Expired));
    }

    #[test]
    fn test_malformed_tokens() {
        let service = service("secret");

        assert_eq!(service.verify("not-a-jwt"), Err(TokenError::Malformed));
        assert_eq!(service.verify(""), Err(TokenError::Malformed));
        assert_eq!(service.verify("a.b.c"), Err(TokenError::Malformed));
    }

    #[test]
    fn test_pinned_issuer() {
        let pinned = TokenService::new(TokenSettings::new("secret").with_pinned_issuer("auth.health"));

        for path in ["/login", "/token/refresh", "/api/users/token/refresh"] {
            let token = pinned.issue(&john(), TokenKind::Access, path).unwrap();
            let claims = pinned.decode_claims(&token).unwrap();
            assert_eq!(claims.iss, "auth.health");
        }

        // 같은 키라도 다른 발급자가 만든 토큰은 거부
        let foreign = service("secret").issue(&john(), TokenKind::Access, "/login").unwrap();
        assert_eq!(pinned.verify(&foreign), Err(TokenError::UntrustedIssuer));
    }

    #[test]
    fn test_extract_bearer_token() {
        assert_eq!(TokenService::extract_bearer_token("Bearer abc.def"), Some("abc.def"));
        assert_eq!(TokenService::extract_bearer_token("bearer abc.def"), None);
        assert_eq!(TokenService::extract_bearer_token("Basic dXNlcg=="), None);
        assert_eq!(TokenService::extract_bearer_token("Bearer "), None);
        assert_eq!(TokenService::extract_bearer_token("Bearerabc"), None);
    }
}
