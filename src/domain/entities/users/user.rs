//! User Entity Implementation
//!
//! 건강 기록 서비스의 사용자 계정 엔티티입니다.
//! 이메일이 인증 주체(identity)로 사용됩니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use crate::domain::entities::users::role::Role;
use crate::domain::models::auth::principal::Principal;

/// 사용자 엔티티
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 이름
    pub name: String,
    /// 성
    pub surname: String,
    /// 사용자 이메일 (unique, 인증 주체)
    pub email: String,
    /// bcrypt 해시된 비밀번호
    pub password_hash: String,
    /// 단일 역할 문자열 (예: `ROLE_USER`)
    pub role: String,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl User {
    /// 새 사용자 생성
    pub fn new(name: String, surname: String, email: String, password_hash: String, role: Role) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            name,
            surname,
            email,
            password_hash,
            role: role.as_str().to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 인증 주체로 변환
    pub fn principal(&self) -> Principal {
        Principal::new(self.email.clone(), self.role.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_principal() {
        let user = User::new(
            "John".to_string(),
            "Smith".to_string(),
            "john@gmail.com".to_string(),
            "hash".to_string(),
            Role::User,
        );

        let principal = user.principal();
        assert_eq!(principal.identity(), "john@gmail.com");
        assert_eq!(principal.role(), "ROLE_USER");
        assert!(user.id_string().is_none());
    }
}
