//! 픽토스 퀴즈 미리보기 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 모든 서비스를 초기화합니다.
//! 크롤러 판별 규칙, 업스트림 문서 클라이언트, 사이트 설정을 한 번 조립하여
//! 모든 워커가 공유합니다.

use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use quiz_preview_service::config::{
    ApiConfig, CorsConfig, CrawlerConfig, RateLimitConfig, ServerConfig, SiteSettings,
};
use quiz_preview_service::core::errors::AppResult;
use quiz_preview_service::routes::configure_all_routes;
use quiz_preview_service::services::crawler::{CrawlerClassifier, CrawlerRules};
use quiz_preview_service::services::documents::HttpDocumentClient;
use quiz_preview_service::services::quiz_detail::QuizDetailService;
use quiz_preview_service::utils::display_terminal::{
    print_boxed_title, print_startup_summary, print_step_complete, print_step_start,
    print_sub_task,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 퀴즈 미리보기 서비스 시작중...");

    let service = match build_service() {
        Ok(service) => web::Data::new(service),
        Err(e) => {
            error!("❌ 서비스 초기화 실패: {}", e);
            return Err(std::io::Error::other(e.to_string()));
        }
    };

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(service).await
}

/// 퀴즈 상세 서비스를 조립합니다
///
/// # Errors
///
/// * `AppError::ConfigError` - 추가 크롤러 패턴이 정규식으로 컴파일되지 않는 경우
/// * `AppError::InternalError` - HTTP 클라이언트 생성 실패
fn build_service() -> AppResult<QuizDetailService> {
    print_boxed_title("Quiz Preview Service");

    print_step_start(1, "Compiling crawler rules");
    let extra_bot = CrawlerConfig::extra_bot_patterns();
    let extra_human = CrawlerConfig::extra_human_patterns();
    let rules = CrawlerRules::with_extra(&extra_bot, &extra_human)?;
    let (human_count, bot_count) = rules.pattern_counts();
    print_sub_task("Human patterns", &human_count.to_string());
    print_sub_task("Bot patterns", &bot_count.to_string());
    print_step_complete(1, "Crawler rules compiled", human_count + bot_count);

    print_step_start(2, "Creating upstream document client");
    let client = HttpDocumentClient::new(ApiConfig::base_url(), ApiConfig::timeout())?;
    print_sub_task("Upstream API", client.base_url());
    print_sub_task("Timeout", &format!("{:?}", ApiConfig::timeout()));
    print_step_complete(2, "Document client ready", 1);

    let settings = SiteSettings::from_env();
    print_startup_summary(&settings, client.base_url(), &ServerConfig::bind_address());

    Ok(QuizDetailService::new(
        Arc::new(client),
        CrawlerClassifier::with_default_detector(rules),
        settings,
    ))
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(service: web::Data<QuizDetailService>) -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 Quiz detail: http://{}/{{locale}}/quiz-detail/{{id}}", bind_address);

    // Rate Limiting 설정
    let rate_limit_config = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| std::io::Error::other("Rate Limiting 설정이 올바르지 않습니다"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    let allowed_origins = CorsConfig::allowed_origins();

    HttpServer::new(move || {
        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors(&allowed_origins))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(service.clone())
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// ```bash
/// PROFILE=prod cargo run
/// ```
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_default();

    // 로거 초기화 전이므로 결과는 stderr로 출력합니다.
    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => eprintln!(".env.prod 파일 로드 됨"),
            Err(e) => eprintln!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => eprintln!(".env.dev 파일 로드 됨"),
            Err(e) => eprintln!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv().ok();
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info")
///
/// ```bash
/// # 크롤러 판별 과정까지 확인
/// RUST_LOG=info,quiz_preview_service::services=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// CORS 설정을 구성합니다
///
/// 페이지와 메타데이터 API는 모두 읽기 전용이므로 GET 요청만 허용합니다.
fn configure_cors(allowed_origins: &[String]) -> Cors {
    allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "OPTIONS"])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .max_age(3600)
}
