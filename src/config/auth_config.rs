//! # Authentication Configuration Module
//!
//! JWT 토큰 서명 키와 토큰 수명 등 인증 관련 설정을 관리하는 모듈입니다.
//!
//! ## 필수 환경 변수 설정
//!
//! ```bash
//! export JWT_SECRET="your-super-secret-jwt-key"
//! export JWT_ACCESS_TTL_MINUTES="10"
//! export JWT_REFRESH_TTL_MINUTES="30"
//! # 선택: 발급자(iss) 고정. 발급과 검증 모두 이 값을 사용
//! export JWT_ISSUER="health-tracker-auth"
//! ```
//!
//! 서명 키는 프로세스 시작 시 한 번만 읽어 [`TokenSettings`]에 담습니다.
//! 키를 바꾸면 이미 발급된 모든 토큰이 무효가 됩니다.

use std::env;

/// 액세스 토큰 기본 수명 (분)
pub const DEFAULT_ACCESS_TTL_MINUTES: i64 = 10;

/// 리프레시 토큰 기본 수명 (분)
pub const DEFAULT_REFRESH_TTL_MINUTES: i64 = 30;

/// JWT 토큰 관련 환경 변수 접근자
pub struct JwtConfig;

impl JwtConfig {
    /// HMAC 서명 키를 반환합니다.
    ///
    /// `JWT_SECRET`이 없으면 경고 후 개발용 기본값을 사용합니다.
    pub fn secret() -> String {
        env::var("JWT_SECRET")
            .ok()
            .filter(|secret| !secret.is_empty())
            .unwrap_or_else(|| {
                log::warn!("JWT_SECRET not set, using default (not secure for production!)");
                "secret".to_string()
            })
    }

    pub fn access_ttl_minutes() -> i64 {
        Self::positive_minutes("JWT_ACCESS_TTL_MINUTES", DEFAULT_ACCESS_TTL_MINUTES)
    }

    pub fn refresh_ttl_minutes() -> i64 {
        Self::positive_minutes("JWT_REFRESH_TTL_MINUTES", DEFAULT_REFRESH_TTL_MINUTES)
    }

    /// 고정 발급자. 발급 시 `iss`에 기록되고 검증 시 이 값만 신뢰합니다.
    ///
    /// 설정되지 않으면 발급 경로를 `iss`로 쓰고 발급자 검사를 하지 않습니다.
    pub fn pinned_issuer() -> Option<String> {
        env::var("JWT_ISSUER").ok().filter(|iss| !iss.trim().is_empty())
    }

    fn positive_minutes(key: &str, default: i64) -> i64 {
        match env::var(key) {
            Ok(raw) => match raw.parse::<i64>() {
                Ok(minutes) if minutes > 0 => minutes,
                _ => {
                    log::error!("{} 파싱 실패: {}. 기본값 {} 사용", key, raw, default);
                    default
                }
            },
            Err(_) => default,
        }
    }
}

/// 토큰 발급/검증에 필요한 불변 설정 묶음
///
/// 시작 시 한 번 만들어 `TokenService`에 넘깁니다.
#[derive(Debug, Clone)]
pub struct TokenSettings {
    pub secret: String,
    pub access_ttl_minutes: i64,
    pub refresh_ttl_minutes: i64,
    pub pinned_issuer: Option<String>,
}

impl TokenSettings {
    /// 기본 수명(10분/30분)을 가진 설정을 만듭니다.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            access_ttl_minutes: DEFAULT_ACCESS_TTL_MINUTES,
            refresh_ttl_minutes: DEFAULT_REFRESH_TTL_MINUTES,
            pinned_issuer: None,
        }
    }

    /// 환경 변수에서 설정을 읽습니다.
    pub fn from_env() -> Self {
        Self {
            secret: JwtConfig::secret(),
            access_ttl_minutes: JwtConfig::access_ttl_minutes(),
            refresh_ttl_minutes: JwtConfig::refresh_ttl_minutes(),
            pinned_issuer: JwtConfig::pinned_issuer(),
        }
        .normalized()
    }

    pub fn with_pinned_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.pinned_issuer = Some(issuer.into());
        self
    }

    pub fn with_ttls(mut self, access_minutes: i64, refresh_minutes: i64) -> Self {
        self.access_ttl_minutes = access_minutes;
        self.refresh_ttl_minutes = refresh_minutes;
        self.normalized()
    }

    /// 리프레시 토큰 수명은 액세스 토큰보다 길어야 합니다.
    fn normalized(mut self) -> Self {
        if self.access_ttl_minutes <= 0 || self.refresh_ttl_minutes <= self.access_ttl_minutes {
            log::warn!(
                "토큰 수명 설정이 유효하지 않습니다 (access={}m, refresh={}m). 기본값 사용",
                self.access_ttl_minutes,
                self.refresh_ttl_minutes
            );
            self.access_ttl_minutes = DEFAULT_ACCESS_TTL_MINUTES;
            self.refresh_ttl_minutes = DEFAULT_REFRESH_TTL_MINUTES;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_settings_defaults() {
        let settings = TokenSettings::new("k");
        assert_eq!(settings.access_ttl_minutes, 10);
        assert_eq!(settings.refresh_ttl_minutes, 30);
        assert!(settings.pinned_issuer.is_none());
    }

    #[test]
    fn test_refresh_ttl_must_exceed_access_ttl() {
        let settings = TokenSettings::new("k").with_ttls(15, 15);
        assert_eq!(settings.access_ttl_minutes, DEFAULT_ACCESS_TTL_MINUTES);
        assert_eq!(settings.refresh_ttl_minutes, DEFAULT_REFRESH_TTL_MINUTES);

        let settings = TokenSettings::new("k").with_ttls(5, 60);
        assert_eq!(settings.access_ttl_minutes, 5);
        assert_eq!(settings.refresh_ttl_minutes, 60);
    }

    #[test]
    fn test_pinned_issuer() {
        let settings = TokenSettings::new("k").with_pinned_issuer("/login");
        assert_eq!(settings.pinned_issuer.as_deref(), Some("/login"));
    }
}
