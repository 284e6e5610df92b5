//! 퀴즈 상세 요청/응답 DTO

use serde::{Deserialize, Serialize};
use crate::domain::locale::Locale;

/// 퀴즈 상세 페이지의 라우트 변형
///
/// 같은 페이지가 여러 URL 형태로 노출되어 왔기 때문에,
/// 변형에 따라 canonical 경로와 리다이렉트 경로 형식이 달라집니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteVariant {
    /// `/{locale}/quiz-detail/{id}` (현재 형식)
    Localized,
    /// `/quiz-detail/{id}`, `/explore/detail/{id}` (로케일 없는 구형식)
    Legacy,
}

impl RouteVariant {
    /// 이 변형의 canonical 경로를 생성합니다.
    ///
    /// `id`는 경로 세그먼트 하나로 퍼센트 인코딩됩니다.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// assert_eq!(RouteVariant::Localized.path(Locale::En, "42"), "/en/quiz-detail/42");
    /// assert_eq!(RouteVariant::Legacy.path(Locale::Ko, "42"), "/explore/detail/42");
    /// ```
    pub fn path(&self, locale: Locale, id: &str) -> String {
        let id = urlencoding::encode(id);
        match self {
            RouteVariant::Localized => format!("/{}/quiz-detail/{}", locale, id),
            RouteVariant::Legacy => format!("/explore/detail/{}", id),
        }
    }
}

/// `/{locale}/quiz-detail/{id}` 경로 파라미터
#[derive(Debug, Deserialize)]
pub struct LocalizedQuizPath {
    pub locale: String,
    pub id: String,
}

/// 퀴즈 상세 요청
///
/// 핸들러가 라우트와 헤더에서 읽은 값을 정규화하여 서비스 계층에 넘깁니다.
#[derive(Debug, Clone)]
pub struct QuizDetailRequest {
    pub locale: Locale,
    /// 업스트림 API에 그대로 전달되는 불투명 문서 식별자
    pub id: String,
    /// User-Agent 헤더 (없으면 빈 문자열)
    pub user_agent: String,
    pub variant: RouteVariant,
}

/// `/api/v1/crawler-check` 응답
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrawlerCheckResponse {
    pub user_agent: String,
    pub is_crawler: bool,
}
