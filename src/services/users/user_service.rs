//! # 사용자 관리 서비스
//!
//! 사용자 등록, 조회, 그리고 자격 증명 검증(Credential Verifier)을 담당합니다.
//!
//! ## 보안 설계
//!
//! - **bcrypt 해싱**: 환경별 cost로 비밀번호를 해싱합니다.
//! - **사용자 열거 방지**: 존재하지 않는 이메일과 틀린 비밀번호는 같은
//!   `AppError::BadCredentials`로 응답합니다. 존재하지 않는 이메일도 더미 해시와
//!   한 번 비교하여 응답 시간 차이를 줄입니다.
//! - **블로킹 격리**: 해싱과 비교는 `web::block`으로 워커 밖에서 실행합니다.

use std::sync::Arc;
use actix_web::web;
use validator::Validate;
use crate::{
    domain::{
        entities::users::user::User,
        dto::users::request::CreateUserRequest,
    },
    repositories::users::user_repo::UserRepository,
    errors::errors::{AppError, ErrorContext},
};

/// 존재하지 않는 사용자에 대한 비교용 평문
const DUMMY_PASSWORD: &str = "dummy-password-for-timing";

/// 사용자 관리 비즈니스 로직 서비스
pub struct UserService {
    user_repo: Arc<dyn UserRepository>,
    bcrypt_cost: u32,
    dummy_hash: String,
}

impl UserService {
    /// 새 서비스를 생성합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - bcrypt cost가 허용 범위를 벗어남
    pub fn new(user_repo: Arc<dyn UserRepository>, bcrypt_cost: u32) -> Result<Self, AppError> {
        let dummy_hash = bcrypt::hash(DUMMY_PASSWORD, bcrypt_cost)
            .with_context(|| format!("더미 해시 생성 실패 (cost: {})", bcrypt_cost))?;

        Ok(Self {
            user_repo,
            bcrypt_cost,
            dummy_hash,
        })
    }

    /// 새 사용자를 생성합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 입력값 검증 실패
    /// * `AppError::ConflictError` - 이메일 중복
    pub async fn create_user(&self, request: CreateUserRequest) -> Result<User, AppError> {
        request.validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        let hash_start = std::time::Instant::now();
        let password = request.password.clone();
        let cost = self.bcrypt_cost;
        let password_hash = web::block(move || bcrypt::hash(password, cost))
            .await
            .context("비밀번호 해싱 작업 실패")?
            .context("비밀번호 해싱 실패")?;
        log::debug!("Password hashing took: {:?}", hash_start.elapsed());

        let user = User::new(
            request.name,
            request.surname,
            request.email,
            password_hash,
            request.role,
        );

        let created = self.user_repo.create(user).await?;
        log::info!("사용자 생성 완료 - email: {}, role: {}", created.email, created.role);

        Ok(created)
    }

    /// 사용자가 없을 때만 생성합니다. 이미 있으면 기존 사용자를 반환합니다.
    pub async fn ensure_user(&self, request: CreateUserRequest) -> Result<User, AppError> {
        if let Some(existing) = self.user_repo.find_by_email(&request.email).await? {
            log::debug!("사용자가 이미 존재합니다 - email: {}", existing.email);
            return Ok(existing);
        }

        self.create_user(request).await
    }

    /// 이메일로 사용자 조회 (없으면 `None`)
    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        self.user_repo.find_by_email(email).await
    }

    /// 이메일로 사용자 조회
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 해당 이메일의 사용자가 없음
    pub async fn get_user_by_email(&self, email: &str) -> Result<User, AppError> {
        self.user_repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {}", email)))
    }

    /// 자격 증명 검증
    ///
    /// 이메일과 평문 비밀번호가 저장된 해시와 일치하면 사용자를 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::BadCredentials` - 사용자 없음 또는 비밀번호 불일치 (구분하지 않음)
    /// * `AppError::InternalError` - 저장된 해시 형식 오류
    pub async fn verify_credentials(&self, email: &str, password: &str) -> Result<User, AppError> {
        let start_time = std::time::Instant::now();

        let user = match self.user_repo.find_by_email(email).await? {
            Some(user) => user,
            None => {
                // 응답 시간을 맞추기 위한 비교
                let _ = verify_password(password, &self.dummy_hash).await;
                log::debug!("Credential check for unknown identity took: {:?}", start_time.elapsed());
                return Err(AppError::BadCredentials);
            }
        };

        let is_valid = verify_password(password, &user.password_hash).await?;

        log::debug!("Credential check took: {:?}", start_time.elapsed());

        if !is_valid {
            return Err(AppError::BadCredentials);
        }

        Ok(user)
    }
}

/// 블로킹 스레드 풀에서 bcrypt 비교를 실행합니다.
async fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    let password = password.to_owned();
    let hash = hash.to_owned();

    web::block(move || bcrypt::verify(password, &hash))
        .await
        .context("비밀번호 검증 작업 실패")?
        .context("비밀번호 검증 실패")
}
