//! 메모리 기반 사용자 리포지토리
//!
//! 데이터베이스 없이 실행하거나 테스트할 때 사용합니다.
//! 프로세스가 종료되면 데이터가 사라집니다.

use std::collections::HashMap;
use std::sync::RwLock;
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use crate::domain::entities::users::user::User;
use crate::errors::errors::AppError;
use crate::repositories::users::user_repo::UserRepository;

/// 이메일을 키로 사용자를 보관하는 리포지토리
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 사용자를 삭제합니다. 삭제되었으면 `true`.
    pub fn remove(&self, email: &str) -> Result<bool, AppError> {
        let mut users = self.users.write().map_err(|_| lock_poisoned())?;
        Ok(users.remove(email).is_some())
    }

    pub fn len(&self) -> usize {
        self.users.read().map(|users| users.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn lock_poisoned() -> AppError {
    AppError::InternalError("사용자 저장소 잠금이 손상되었습니다".to_string())
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let users = self.users.read().map_err(|_| lock_poisoned())?;
        Ok(users.get(email).cloned())
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, AppError> {
        let users = self.users.read().map_err(|_| lock_poisoned())?;
        Ok(users.contains_key(email))
    }

    async fn create(&self, mut user: User) -> Result<User, AppError> {
        let mut users = self.users.write().map_err(|_| lock_poisoned())?;

        if users.contains_key(&user.email) {
            return Err(AppError::ConflictError("이미 사용 중인 이메일입니다".to_string()));
        }

        user.id = Some(ObjectId::new());
        users.insert(user.email.clone(), user.clone());

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::users::role::Role;

    fn user(email: &str) -> User {
        User::new(
            "John".to_string(),
            "Smith".to_string(),
            email.to_string(),
            "hash".to_string(),
            Role::User,
        )
    }

    #[actix_web::test]
    async fn test_create_and_find() {
        let repo = InMemoryUserRepository::new();

        let created = repo.create(user("john@gmail.com")).await.unwrap();
        assert!(created.id.is_some());

        let found = repo.find_by_email("john@gmail.com").await.unwrap().unwrap();
        assert_eq!(found.id, created.id);
        assert!(repo.exists_by_email("john@gmail.com").await.unwrap());
        assert!(repo.find_by_email("nobody@gmail.com").await.unwrap().is_none());
    }

    #[actix_web::test]
    async fn test_duplicate_email_conflict() {
        let repo = InMemoryUserRepository::new();
        repo.create(user("john@gmail.com")).await.unwrap();

        let result = repo.create(user("john@gmail.com")).await;
        assert!(matches!(result, Err(AppError::ConflictError(_))));
        assert_eq!(repo.len(), 1);
    }

    #[actix_web::test]
    async fn test_remove() {
        let repo = InMemoryUserRepository::new();
        repo.create(user("john@gmail.com")).await.unwrap();

        assert!(repo.remove("john@gmail.com").unwrap());
        assert!(!repo.remove("john@gmail.com").unwrap());
        assert!(repo.is_empty());
    }
}
