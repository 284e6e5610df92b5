//! # Quiz Detail HTTP Handlers
//!
//! 퀴즈 상세 페이지 요청을 처리하는 핸들러입니다.
//! 세 가지 URL 형태가 모두 같은 파이프라인([`QuizDetailService::handle`])으로 모입니다.
//!
//! | 메서드 | 경로 | 로케일 | canonical |
//! |--------|------|--------|-----------|
//! | `GET` | `/{locale}/quiz-detail/{id}` | 경로 값 (정규화) | `/{locale}/quiz-detail/{id}` |
//! | `GET` | `/quiz-detail/{id}` | ko | `/explore/detail/{id}` |
//! | `GET` | `/explore/detail/{id}` | ko | `/explore/detail/{id}` |
//!
//! ## 응답
//!
//! - 사람 방문자 (리다이렉트 정책 적용 시): `302 Found`, 빈 본문
//! - 크롤러 또는 리다이렉트하지 않는 경우: `200 OK`, `text/html; charset=utf-8`
//!
//! 업스트림 문서 API가 실패해도 폴백 페이지를 렌더링하므로 에러 응답은 없습니다.
//!
//! ```bash
//! # 크롤러로 요청
//! curl -A "facebookexternalhit/1.1" http://localhost:8080/ko/quiz-detail/42
//!
//! # 사람 브라우저로 요청 (프로덕션이면 302)
//! curl -i -A "Mozilla/5.0 ... Chrome/120.0" http://localhost:8080/en/quiz-detail/42
//! ```

use actix_web::http::header;
use actix_web::{get, web, HttpRequest, HttpResponse};
use log::debug;
use crate::domain::dto::{CrawlerCheckResponse, LocalizedQuizPath, QuizDetailRequest, RouteVariant};
use crate::domain::locale::Locale;
use crate::services::quiz_detail::{QuizDetailOutcome, QuizDetailService};

/// 현재 형식의 퀴즈 상세 페이지
#[get("/{locale}/quiz-detail/{id}")]
pub async fn localized_quiz_detail(
    req: HttpRequest,
    path: web::Path<LocalizedQuizPath>,
    service: web::Data<QuizDetailService>,
) -> HttpResponse {
    let path = path.into_inner();
    let request = QuizDetailRequest {
        locale: Locale::normalize(&path.locale),
        id: path.id,
        user_agent: user_agent(&req),
        variant: RouteVariant::Localized,
    };

    respond(service.handle(&request).await)
}

/// 로케일 없는 구형식 `/quiz-detail/{id}`
#[get("/quiz-detail/{id}")]
pub async fn legacy_quiz_detail(
    req: HttpRequest,
    id: web::Path<String>,
    service: web::Data<QuizDetailService>,
) -> HttpResponse {
    respond(service.handle(&legacy_request(&req, id.into_inner())).await)
}

/// 로케일 없는 구형식 `/explore/detail/{id}`
#[get("/explore/detail/{id}")]
pub async fn explore_detail(
    req: HttpRequest,
    id: web::Path<String>,
    service: web::Data<QuizDetailService>,
) -> HttpResponse {
    respond(service.handle(&legacy_request(&req, id.into_inner())).await)
}

/// 호출자의 User-Agent 판별 결과를 반환합니다.
///
/// ```json
/// { "userAgent": "facebookexternalhit/1.1", "isCrawler": true }
/// ```
#[get("/crawler-check")]
pub async fn crawler_check(
    req: HttpRequest,
    service: web::Data<QuizDetailService>,
) -> HttpResponse {
    let user_agent = user_agent(&req);
    let is_crawler = service.is_crawler(&user_agent);
    debug!("크롤러 판별 요청: {} → {}", user_agent, is_crawler);

    HttpResponse::Ok().json(CrawlerCheckResponse { user_agent, is_crawler })
}

/// 레거시 경로는 한국어 페이지이므로 업스트림에도 `X-Locale: ko`로 요청합니다.
fn legacy_request(req: &HttpRequest, id: String) -> QuizDetailRequest {
    QuizDetailRequest {
        locale: Locale::Ko,
        id,
        user_agent: user_agent(req),
        variant: RouteVariant::Legacy,
    }
}

/// User-Agent 헤더 값 (없거나 ASCII가 아니면 빈 문자열)
fn user_agent(req: &HttpRequest) -> String {
    req.headers()
        .get(header::USER_AGENT)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

fn respond(outcome: QuizDetailOutcome) -> HttpResponse {
    match outcome {
        QuizDetailOutcome::Redirect(url) => HttpResponse::Found()
            .insert_header((header::LOCATION, url))
            .finish(),
        QuizDetailOutcome::Page(html) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(html),
    }
}
