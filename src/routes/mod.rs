//! API 라우트 설정 모듈
//!
//! 퀴즈 상세 페이지, 메타데이터 API, 헬스체크 엔드포인트를 등록합니다.
//!
//! # Routes
//!
//! | 메서드 | 경로 | 핸들러 |
//! |--------|------|--------|
//! | `GET` | `/health` | [`health_check`] |
//! | `GET` | `/api/v1/metadata/{locale}/{id}` | `handlers::metadata::get_metadata` |
//! | `GET` | `/api/v1/crawler-check` | `handlers::quiz_detail::crawler_check` |
//! | `GET` | `/quiz-detail/{id}` | `handlers::quiz_detail::legacy_quiz_detail` |
//! | `GET` | `/explore/detail/{id}` | `handlers::quiz_detail::explore_detail` |
//! | `GET` | `/{locale}/quiz-detail/{id}` | `handlers::quiz_detail::localized_quiz_detail` |
//!
//! 고정 경로를 먼저 등록하고 `/{locale}/...` 패턴을 마지막에 등록합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(web::Data::new(quiz_detail_service))
//!     .configure(configure_all_routes);
//! ```

use crate::handlers;
use actix_web::web;
use serde_json::json;

/// 모든 라우트를 설정합니다
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    configure_api_routes(cfg);
    configure_page_routes(cfg);
}

/// JSON API 라우트를 설정합니다
///
/// ```bash
/// curl http://localhost:8080/api/v1/metadata/ko/42
/// curl -A "Discordbot/2.0" http://localhost:8080/api/v1/crawler-check
/// ```
fn configure_api_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .service(handlers::metadata::get_metadata)
            .service(handlers::quiz_detail::crawler_check)
    );
}

/// 퀴즈 상세 페이지 라우트를 설정합니다
fn configure_page_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::quiz_detail::legacy_quiz_detail)
        .service(handlers::quiz_detail::explore_detail)
        .service(handlers::quiz_detail::localized_quiz_detail);
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 로드밸런서나 모니터링 시스템에서 서비스 상태를 확인하는 데 사용됩니다.
/// 업스트림 API 상태는 확인하지 않습니다.
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "quiz_preview_service",
///   "version": "0.1.0",
///   "timestamp": "2024-01-01T00:00:00Z",
///   "features": {
///     "rendering": "Server-side HTML",
///     "crawler_detection": "regex + isbot",
///     "locales": ["ko", "en"]
///   }
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "rendering": "Server-side HTML",
            "crawler_detection": "regex + isbot",
            "locales": ["ko", "en"]
        }
    }))
}
