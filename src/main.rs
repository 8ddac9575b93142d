//! 건강 기록 서비스 인증 백엔드 메인 애플리케이션
//!
//! 저장소와 서비스를 초기화하고 Actix-web HTTP 서버를 구동합니다.

use std::io;
use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};
use health_tracker_auth::config::{PasswordConfig, SeedConfig, ServerConfig, TokenSettings};
use health_tracker_auth::db::{seed, Database};
use health_tracker_auth::errors::errors::AppError;
use health_tracker_auth::middlewares::AuthorizationGate;
use health_tracker_auth::repositories::users::{InMemoryUserRepository, MongoUserRepository, UserRepository};
use health_tracker_auth::routes::{configure_all_routes, PUBLIC_PATHS};
use health_tracker_auth::services::AppServices;

/// Rate Limiting 설정 구조체
#[derive(Debug)]
struct RateLimitConfig {
    per_second: u64,
    burst_size: u32,
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 건강 기록 인증 서비스 시작중...");

    let user_repo = initialize_user_store().await.map_err(into_io_error)?;

    let services = AppServices::new(
        user_repo,
        TokenSettings::from_env(),
        PasswordConfig::bcrypt_cost(),
    )
    .map_err(into_io_error)?;

    if SeedConfig::enabled() {
        seed::seed_default_user(&services.user_service)
            .await
            .map_err(into_io_error)?;
    }

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(services).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(services: AppServices) -> io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/", bind_address);

    // Rate Limiting 설정
    let rate_limit_config = load_rate_limit_config();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "잘못된 Rate Limiting 설정"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    HttpServer::new(move || {
        let cors = configure_cors();
        let gate = AuthorizationGate::new(services.token_service.clone()).permit(PUBLIC_PATHS);

        App::new()
            // 게이트는 경로 정규화 이후에 실행됩니다
            .wrap(gate)
            .wrap(Governor::new(&governor_conf))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())

            .configure(|cfg| services.register(cfg))
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .workers(ServerConfig::workers())
        .run()
        .await
}

/// 사용자 저장소를 선택합니다
///
/// `MONGODB_URI`가 있으면 MongoDB, 없으면 메모리 저장소를 사용합니다.
async fn initialize_user_store() -> Result<Arc<dyn UserRepository>, AppError> {
    match Database::from_env().await? {
        Some(database) => {
            let repo = MongoUserRepository::new(&database);
            repo.create_indexes().await?;
            info!("📡 MongoDB 사용자 저장소 사용: {}", database.database_name());
            Ok(Arc::new(repo))
        }
        None => {
            warn!("MONGODB_URI가 없습니다. 메모리 사용자 저장소를 사용합니다");
            Ok(Arc::new(InMemoryUserRepository::new()))
        }
    }
}

fn into_io_error(e: AppError) -> io::Error {
    error!("초기화 실패: {}", e);
    io::Error::other(e.to_string())
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    match profile.as_str() {
        "prod" => {
            if let Err(e) = dotenv::from_filename(".env.prod") {
                eprintln!(".env.prod 파일 로드 실패: {}", e);
            }
        }
        "dev" => {
            if let Err(e) = dotenv::from_filename(".env.dev") {
                eprintln!(".env.dev 파일 로드 실패: {}", e);
            }
        }
        _ => {
            dotenv().ok();
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=debug")
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// CORS 설정을 구성합니다
fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .expose_headers(vec![header::HeaderName::from_static("error")])
        .max_age(3600)
}

/// 환경변수에서 Rate Limiting 설정을 로드합니다
///
/// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
/// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
fn load_rate_limit_config() -> RateLimitConfig {
    let per_second = std::env::var("RATE_LIMIT_PER_SECOND")
        .unwrap_or_else(|_| "100".to_string())
        .parse::<u64>()
        .unwrap_or_else(|e| {
            error!("RATE_LIMIT_PER_SECOND 파싱 실패: {}. 기본값 100 사용", e);
            100
        });

    let burst_size = std::env::var("RATE_LIMIT_BURST_SIZE")
        .unwrap_or_else(|_| "200".to_string())
        .parse::<u32>()
        .unwrap_or_else(|e| {
            error!("RATE_LIMIT_BURST_SIZE 파싱 실패: {}. 기본값 200 사용", e);
            200
        });

    let config = RateLimitConfig {
        per_second,
        burst_size,
    };

    info!("Rate Limiting 설정 로드됨: {:?}", config);
    config
}
