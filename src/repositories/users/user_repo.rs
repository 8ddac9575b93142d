//! # 사용자 리포지토리
//!
//! 인증 코어가 사용하는 사용자 조회 협력자입니다.
//! 코어는 [`UserRepository`] trait에만 의존하며, 실제 저장소는
//! MongoDB 구현([`MongoUserRepository`]) 또는 메모리 구현
//! ([`InMemoryUserRepository`](super::memory_user_repo::InMemoryUserRepository)) 중
//! 시작 시 선택됩니다.

use async_trait::async_trait;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};
use crate::{
    db::Database,
    domain::entities::users::user::User,
};
use crate::errors::errors::AppError;

/// 사용자 데이터 액세스 추상화
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 이메일(인증 주체)로 사용자를 조회합니다.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    async fn exists_by_email(&self, email: &str) -> Result<bool, AppError>;

    /// 사용자를 저장하고 ID가 채워진 엔티티를 반환합니다.
    ///
    /// 이메일이 중복되면 `AppError::ConflictError`를 반환합니다.
    async fn create(&self, user: User) -> Result<User, AppError>;
}

/// MongoDB `user_account` 컬렉션 기반 리포지토리
pub struct MongoUserRepository {
    collection: Collection<User>,
}

impl MongoUserRepository {
    pub const COLLECTION_NAME: &'static str = "user_account";

    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.get_database().collection::<User>(Self::COLLECTION_NAME),
        }
    }

    /// 이메일 유니크 인덱스를 생성합니다.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        self.collection
            .create_index(email_index)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        log::info!("✅ {} 인덱스 준비 완료", Self::COLLECTION_NAME);
        Ok(())
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        self.collection
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, AppError> {
        let count = self.collection
            .count_documents(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(count > 0)
    }

    async fn create(&self, mut user: User) -> Result<User, AppError> {
        if self.exists_by_email(&user.email).await? {
            return Err(AppError::ConflictError("이미 사용 중인 이메일입니다".to_string()));
        }

        let result = self.collection
            .insert_one(&user)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        user.id = result.inserted_id.as_object_id();

        Ok(user)
    }
}
