use serde::{Deserialize, Serialize};
use crate::domain::entities::users::user::User;

/// 사용자 조회 응답
///
/// 비밀번호 해시는 포함하지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub role: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let id = user.id_string().unwrap_or_default();
        let User {
            name,
            surname,
            email,
            role,
            created_at,
            updated_at,
            ..
        } = user;

        Self {
            id,
            name,
            surname,
            email,
            role,
            created_at: created_at.try_to_rfc3339_string().unwrap_or_default(),
            updated_at: updated_at.try_to_rfc3339_string().unwrap_or_default(),
        }
    }
}

/// 현재 로그인 사용자 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUserResponse {
    pub user: UserResponse,
    pub authorities: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::users::role::Role;

    #[test]
    fn test_user_response_hides_password_hash() {
        let user = User::new(
            "John".to_string(),
            "Smith".to_string(),
            "john@gmail.com".to_string(),
            "$2b$04$secret-hash".to_string(),
            Role::User,
        );

        let json = serde_json::to_string(&UserResponse::from(user)).unwrap();
        assert!(!json.contains("secret-hash"));
        assert!(json.contains("john@gmail.com"));
    }

    #[test]
    fn test_user_response_id_is_hex() {
        let mut user = User::new(
            "John".to_string(),
            "Smith".to_string(),
            "john@gmail.com".to_string(),
            "$2b$04$secret-hash".to_string(),
            Role::User,
        );
        assert_eq!(UserResponse::from(user.clone()).id, "");

        let id = mongodb::bson::oid::ObjectId::new();
        user.id = Some(id);
        assert_eq!(UserResponse::from(user).id, id.to_hex());
    }
}
