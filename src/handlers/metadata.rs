//! # Metadata JSON Handler
//!
//! 퀴즈 상세 페이지의 메타데이터 번들을 JSON으로 제공합니다.
//! 프론트엔드가 직접 `<head>`를 구성하거나 메타데이터를 점검할 때 사용합니다.
//!
//! 업스트림 문서를 가져오지 못해도 `200 OK`와 함께 폴백 번들을 반환합니다.
//! 정수가 아닌 문서 ID는 업스트림을 호출하지 않고 `400 Bad Request`로 거절합니다.

use actix_web::{get, web, HttpResponse};
use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::RouteVariant;
use crate::domain::locale::Locale;
use crate::services::quiz_detail::QuizDetailService;

/// `GET /api/v1/metadata/{locale}/{id}`
///
/// ```bash
/// curl http://localhost:8080/api/v1/metadata/en/42
/// ```
///
/// Response:
/// ```json
/// {
///   "title": "🌳 Binary Trees - Picktoss",
///   "description": "IT - 5 questions",
///   "openGraph": { "type": "article", "siteName": "Picktoss", ... },
///   "twitter": { "card": "summary_large_image", ... },
///   "alternates": { "canonical": "https://picktoss.com/en/quiz-detail/42" },
///   "jsonLd": { "@type": "CreativeWork", ... }
/// }
/// ```
///
/// # Errors
///
/// * `AppError::ValidationError` - `id`가 정수가 아닌 경우 (400)
#[get("/metadata/{locale}/{id}")]
pub async fn get_metadata(
    path: web::Path<(String, String)>,
    service: web::Data<QuizDetailService>,
) -> AppResult<HttpResponse> {
    let (locale, id) = path.into_inner();
    if id.parse::<i64>().is_err() {
        return Err(AppError::ValidationError(format!("문서 ID는 정수여야 합니다: {}", id)));
    }

    let bundle = service
        .metadata(Locale::normalize(&locale), &id, RouteVariant::Localized)
        .await;

    Ok(HttpResponse::Ok().json(bundle))
}
