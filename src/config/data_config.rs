//! 데이터 및 서버 설정 관리 모듈
//!
//! 데이터베이스, 서버, 환경 및 비밀번호 해싱 관련 설정을 관리합니다.

use std::env;

/// 애플리케이션 실행 환경
///
/// `ENVIRONMENT` 환경 변수로 결정되며, 값이 없거나 알 수 없는 경우
/// 가장 보수적인 `Production`으로 취급합니다.
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Development,
    Test,
    Staging,
    Production,
}

impl Environment {
    /// 현재 실행 환경을 반환합니다.
    pub fn current() -> Self {
        Self::from_str(&env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()))
    }

    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

/// 비밀번호 해싱 설정
pub struct PasswordConfig;

impl PasswordConfig {
    /// bcrypt cost 값을 반환합니다.
    ///
    /// `BCRYPT_COST`가 4-15 범위의 정수이면 그 값을, 아니면 환경별 기본값을 사용합니다.
    pub fn bcrypt_cost() -> u32 {
        if let Ok(cost_str) = env::var("BCRYPT_COST") {
            if let Ok(cost) = cost_str.parse::<u32>() {
                if (4..=15).contains(&cost) {
                    return cost;
                }
            }
            log::warn!("BCRYPT_COST 값이 유효하지 않습니다: {}", cost_str);
        }

        Self::bcrypt_cost_for_env(&Environment::current())
    }

    pub fn bcrypt_cost_for_env(env: &Environment) -> u32 {
        match env {
            Environment::Development => 4,
            Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }
}

/// HTTP 서버 설정
pub struct ServerConfig;

impl ServerConfig {
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080)
    }

    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string())
    }

    /// 워커 스레드 수 (기본값: 4)
    pub fn workers() -> usize {
        env::var("WORKERS")
            .ok()
            .and_then(|w| w.parse().ok())
            .filter(|w: &usize| *w > 0)
            .unwrap_or(4)
    }

    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// 사용자 저장소 설정
///
/// `MONGODB_URI`가 설정되지 않으면 메모리 저장소로 동작합니다.
pub struct DatabaseConfig;

impl DatabaseConfig {
    pub fn mongodb_uri() -> Option<String> {
        env::var("MONGODB_URI").ok().filter(|uri| !uri.trim().is_empty())
    }

    pub fn database_name() -> String {
        env::var("DATABASE_NAME").unwrap_or_else(|_| "health_tracker".to_string())
    }
}

/// 기본 사용자 시드 설정
pub struct SeedConfig;

impl SeedConfig {
    /// `SEED_DEFAULT_USER`가 없으면 프로덕션을 제외한 환경에서 활성화됩니다.
    pub fn enabled() -> bool {
        match env::var("SEED_DEFAULT_USER") {
            Ok(value) => Self::parse_flag(&value),
            Err(_) => !Environment::current().is_production(),
        }
    }

    fn parse_flag(value: &str) -> bool {
        matches!(value.trim().to_lowercase().as_str(), "1" | "true" | "yes" | "on")
    }
}
