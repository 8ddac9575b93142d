use crate::domain::models::auth::principal::Principal;

/// 라우트 접근 규칙
#[derive(Debug, Clone, PartialEq)]
pub enum AccessRule {
    /// 인증만 되어 있으면 허용
    Authenticated,
    /// 특정 권한 요구
    Authority(RequiredAuthority),
}

/// 요구되는 권한 정보
#[derive(Debug, Clone, PartialEq)]
pub enum RequiredAuthority {
    /// 특정 단일 권한이 필요
    Single(String),
    /// 여러 권한 중 하나라도 있으면 허용 (OR 조건)
    Any(Vec<String>),
}

impl RequiredAuthority {
    /// 주체가 요구 권한을 보유하는지 확인
    pub fn is_satisfied_by(&self, principal: &Principal) -> bool {
        match self {
            RequiredAuthority::Single(required) => principal.has_authority(required),
            RequiredAuthority::Any(required) => {
                let required: Vec<&str> = required.iter().map(String::as_str).collect();
                principal.has_any_authority(&required)
            }
        }
    }
}

impl AccessRule {
    pub fn permits(&self, principal: &Principal) -> bool {
        match self {
            AccessRule::Authenticated => true,
            AccessRule::Authority(required) => required.is_satisfied_by(principal),
        }
    }
}
