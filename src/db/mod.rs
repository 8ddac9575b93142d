//! MongoDB 연결 관리와 기본 데이터 시드

pub mod seed;

use mongodb::{Client, options::ClientOptions};
use log::info;
use crate::config::DatabaseConfig;
use crate::errors::errors::AppError;

/// MongoDB 데이터베이스 핸들
#[derive(Clone)]
pub struct Database {
    client: Client,
    database_name: String,
}

impl Database {
    /// 주어진 URI로 연결하고 `ping`으로 연결을 확인합니다.
    pub async fn connect(mongodb_uri: &str, database_name: &str) -> Result<Self, AppError> {
        let mut client_options = ClientOptions::parse(mongodb_uri)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;
        client_options.app_name = Some("health_tracker_auth".to_string());

        let client = Client::with_options(client_options)
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        client
            .database(database_name)
            .run_command(mongodb::bson::doc! { "ping": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        info!("✅ MongoDB 연결 성공: {}", database_name);

        Ok(Self {
            client,
            database_name: database_name.to_string(),
        })
    }

    /// 환경 변수 설정으로 연결합니다. `MONGODB_URI`가 없으면 `None`.
    pub async fn from_env() -> Result<Option<Self>, AppError> {
        match DatabaseConfig::mongodb_uri() {
            Some(uri) => Self::connect(&uri, &DatabaseConfig::database_name()).await.map(Some),
            None => Ok(None),
        }
    }

    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }

    pub fn database_name(&self) -> &str {
        &self.database_name
    }
}
