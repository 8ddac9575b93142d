//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스들은 [`AppServices`]에서 한 번 생성되고, `web::Data`로 핸들러와
//! 미들웨어에 명시적으로 주입됩니다.
//!
//! ```rust,ignore
//! let services = AppServices::new(repo, TokenSettings::from_env(), PasswordConfig::bcrypt_cost())?;
//!
//! App::new().configure(|cfg| services.register(cfg));
//! ```

pub mod users;
pub mod auth;

use std::sync::Arc;
use actix_web::web;
use crate::config::TokenSettings;
use crate::errors::errors::AppError;
use crate::repositories::users::user_repo::UserRepository;
use self::auth::{AuthService, TokenService};
use self::users::UserService;

/// 애플리케이션 서비스 묶음
#[derive(Clone)]
pub struct AppServices {
    pub token_service: Arc<TokenService>,
    pub user_service: Arc<UserService>,
    pub auth_service: Arc<AuthService>,
}

impl AppServices {
    /// 저장소와 설정으로 모든 서비스를 생성합니다.
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        token_settings: TokenSettings,
        bcrypt_cost: u32,
    ) -> Result<Self, AppError> {
        let token_service = Arc::new(TokenService::new(token_settings));
        let user_service = Arc::new(UserService::new(user_repo, bcrypt_cost)?);
        let auth_service = Arc::new(AuthService::new(user_service.clone(), token_service.clone()));

        Ok(Self {
            token_service,
            user_service,
            auth_service,
        })
    }

    /// 서비스들을 `app_data`로 등록합니다.
    pub fn register(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(web::Data::from(self.token_service.clone()))
            .app_data(web::Data::from(self.user_service.clone()))
            .app_data(web::Data::from(self.auth_service.clone()));
    }
}
