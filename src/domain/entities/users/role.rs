//! 사용자 역할 정의

use serde::{Deserialize, Serialize};

/// 시스템에서 사용하는 역할
///
/// 역할은 계층 없이 문자열 권한 하나로만 비교됩니다.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[default]
    #[serde(rename = "ROLE_USER")]
    User,
    #[serde(rename = "ROLE_ANALYST")]
    Analyst,
    #[serde(rename = "ROLE_ADMIN")]
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "ROLE_USER",
            Role::Analyst => "ROLE_ANALYST",
            Role::Admin => "ROLE_ADMIN",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_authority_string() {
        assert_eq!(Role::User.as_str(), "ROLE_USER");
        assert_eq!(Role::Admin.to_string(), "ROLE_ADMIN");
        assert_eq!(Role::default(), Role::User);
    }

    #[test]
    fn test_role_serialization() {
        let json = serde_json::to_string(&Role::Analyst).unwrap();
        assert_eq!(json, "\"ROLE_ANALYST\"");
        let role: Role = serde_json::from_str(&json).unwrap();
        assert_eq!(role, Role::Analyst);
    }
}
