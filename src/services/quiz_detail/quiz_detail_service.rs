//! # 퀴즈 상세 페이지 처리 서비스
//!
//! 요청 하나를 판별 → 리다이렉트 또는 (조회 → 메타데이터 생성 → 렌더링) 순서로 처리합니다.
//!
//! ```text
//! QuizDetailRequest
//!     │
//!     ├─ 사람 && 리다이렉트 정책 적용 ──► Redirect(https://{host}{path})
//!     │
//!     └─ 그 외
//!         ├─ join(/documents/{id}, /documents/{id}/public)
//!         ├─ <head>  ← 상세 문서, 없으면 공개 문서, 둘 다 없으면 폴백
//!         ├─ JSON-LD ← 공개 문서
//!         └─ <body>  ← 공개 문서
//! ```
//!
//! 업스트림 실패는 로그만 남기고 응답에는 드러나지 않습니다.

use std::sync::Arc;
use futures_util::future::join;
use log::{debug, error, warn};
use crate::config::SiteSettings;
use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::{QuizDetailRequest, RouteVariant};
use crate::domain::entities::Document;
use crate::domain::locale::Locale;
use crate::domain::models::{MetadataBundle, PageContext};
use crate::services::crawler::CrawlerClassifier;
use crate::services::documents::DocumentSource;
use crate::services::metadata::{build_json_ld, build_metadata};
use crate::services::rendering::render_quiz_page;

/// 요청 처리 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizDetailOutcome {
    /// 사람 방문자를 보낼 절대 URL
    Redirect(String),
    /// 크롤러용 HTML 문서
    Page(String),
}

/// 퀴즈 상세 페이지 서비스
///
/// 시작 시 한 번 만들어져 `web::Data`로 모든 워커에 공유됩니다.
/// 내부 상태는 모두 불변입니다.
///
/// # Examples
///
/// ```rust,ignore
/// let service = QuizDetailService::new(
///     Arc::new(HttpDocumentClient::new(ApiConfig::base_url(), ApiConfig::timeout())?),
///     CrawlerClassifier::with_default_detector(CrawlerRules::new()?),
///     SiteSettings::from_env(),
/// );
///
/// match service.handle(&request).await {
///     QuizDetailOutcome::Redirect(url) => { /* 302 */ }
///     QuizDetailOutcome::Page(html) => { /* 200 text/html */ }
/// }
/// ```
pub struct QuizDetailService {
    documents: Arc<dyn DocumentSource>,
    classifier: CrawlerClassifier,
    settings: SiteSettings,
}

impl QuizDetailService {
    pub fn new(
        documents: Arc<dyn DocumentSource>,
        classifier: CrawlerClassifier,
        settings: SiteSettings,
    ) -> Self {
        Self { documents, classifier, settings }
    }

    pub fn is_crawler(&self, user_agent: &str) -> bool {
        self.classifier.is_crawler(user_agent)
    }

    /// 퀴즈 상세 요청을 처리합니다.
    pub async fn handle(&self, request: &QuizDetailRequest) -> QuizDetailOutcome {
        if !self.is_crawler(&request.user_agent) && self.settings.should_redirect_humans() {
            let url = self
                .settings
                .redirect_url(request.variant, request.locale, &request.id);
            debug!("↪️ 사람 방문자 리다이렉트: {}", url);
            return QuizDetailOutcome::Redirect(url);
        }

        QuizDetailOutcome::Page(self.render_page(request).await)
    }

    async fn render_page(&self, request: &QuizDetailRequest) -> String {
        let ctx = self.page_context(request.locale, &request.id, request.variant);

        let (detail, public) = join(
            self.documents.fetch_document(&request.id, request.locale),
            self.documents.fetch_public_document(&request.id, request.locale),
        )
        .await;
        let detail = best_effort(detail, "문서", &request.id);
        let public = best_effort(public, "공개 문서", &request.id);

        let mut bundle = build_metadata(&ctx, detail.as_ref().or(public.as_ref()));
        bundle.json_ld = public.as_ref().map(|document| build_json_ld(&ctx, document));

        render_quiz_page(&ctx, &bundle, public.as_ref())
    }

    /// `/documents/{id}`만으로 메타데이터 번들을 만듭니다.
    ///
    /// 문서를 가져오지 못하면 폴백 번들을 반환합니다.
    pub async fn metadata(&self, locale: Locale, id: &str, variant: RouteVariant) -> MetadataBundle {
        let ctx = self.page_context(locale, id, variant);
        let document = best_effort(self.documents.fetch_document(id, locale).await, "문서", id);

        build_metadata(&ctx, document.as_ref())
    }

    fn page_context(&self, locale: Locale, id: &str, variant: RouteVariant) -> PageContext {
        PageContext::new(locale, id, self.settings.public_base_url.as_str(), variant)
    }
}

fn best_effort(result: AppResult<Document>, what: &str, id: &str) -> Option<Document> {
    match result {
        Ok(document) => Some(document),
        Err(AppError::NotFound(msg)) => {
            warn!("⚠️ {} 조회 실패 (id={}): {}", what, id, msg);
            None
        }
        Err(e) => {
            error!("❌ {} 조회 실패 (id={}): {}", what, id, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};
    use crate::config::{Environment, RedirectPolicy};
    use crate::services::crawler::{BotSignatureDetector, CrawlerRules};
    use crate::services::documents::HttpDocumentClient;

    const CHROME_UA: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 14_0) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
    const FACEBOOK_UA: &str = "facebookexternalhit/1.1";

    struct FlagNothing;

    impl BotSignatureDetector for FlagNothing {
        fn is_bot(&self, _user_agent: &str) -> bool {
            false
        }
    }

    fn document(name: &str) -> Document {
        serde_json::from_value(json!({
            "id": 42,
            "creator": "tosser",
            "name": name,
            "emoji": "🌳",
            "category": "IT",
            "tryCount": 0,
            "totalQuizCount": 1,
            "createdAt": "2024-01-05T12:00:00",
            "quizzes": [
                { "id": 1, "question": "What is a heap", "quizType": "MULTIPLE_CHOICE" }
            ]
        }))
        .unwrap()
    }

    /// 메모리 문서 소스 (호출 횟수 기록)
    struct StubDocuments {
        detail: Option<Document>,
        public: Option<Document>,
        calls: AtomicUsize,
    }

    impl StubDocuments {
        fn new(detail: Option<Document>, public: Option<Document>) -> Arc<Self> {
            Arc::new(Self { detail, public, calls: AtomicUsize::new(0) })
        }

        fn found(document: &Option<Document>, id: &str) -> AppResult<Document> {
            document
                .clone()
                .ok_or_else(|| AppError::NotFound(format!("document {}", id)))
        }
    }

    #[async_trait]
    impl DocumentSource for StubDocuments {
        async fn fetch_document(&self, id: &str, _locale: Locale) -> AppResult<Document> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Self::found(&self.detail, id)
        }

        async fn fetch_public_document(&self, id: &str, _locale: Locale) -> AppResult<Document> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Self::found(&self.public, id)
        }
    }

    fn settings(policy: RedirectPolicy) -> SiteSettings {
        SiteSettings::new("https://picktoss.com", "picktoss.com", policy, Environment::Production)
    }

    fn service(documents: Arc<dyn DocumentSource>, policy: RedirectPolicy) -> QuizDetailService {
        let classifier = CrawlerClassifier::new(CrawlerRules::new().unwrap(), Box::new(FlagNothing));
        QuizDetailService::new(documents, classifier, settings(policy))
    }

    fn request(user_agent: &str, variant: RouteVariant) -> QuizDetailRequest {
        QuizDetailRequest {
            locale: Locale::En,
            id: "42".to_string(),
            user_agent: user_agent.to_string(),
            variant,
        }
    }

    fn page(outcome: QuizDetailOutcome) -> String {
        match outcome {
            QuizDetailOutcome::Page(html) => html,
            QuizDetailOutcome::Redirect(url) => panic!("Expected page, got redirect to {}", url),
        }
    }

    #[actix_web::test]
    async fn test_human_is_redirected_without_fetching() {
        let documents = StubDocuments::new(Some(document("Heaps")), None);
        let service = service(documents.clone(), RedirectPolicy::ProductionOnly);

        let localized = service.handle(&request(CHROME_UA, RouteVariant::Localized)).await;
        let legacy = service.handle(&request("", RouteVariant::Legacy)).await;

        assert_eq!(
            localized,
            QuizDetailOutcome::Redirect("https://picktoss.com/en/quiz-detail/42".to_string())
        );
        assert_eq!(
            legacy,
            QuizDetailOutcome::Redirect("https://picktoss.com/explore/detail/42".to_string())
        );
        assert_eq!(documents.calls.load(Ordering::SeqCst), 0);
    }

    #[actix_web::test]
    async fn test_human_gets_page_when_redirect_disabled() {
        let documents = StubDocuments::new(Some(document("Heaps")), Some(document("Heaps")));
        let service = service(documents.clone(), RedirectPolicy::Never);

        let html = page(service.handle(&request(CHROME_UA, RouteVariant::Localized)).await);

        assert!(html.contains("<title>🌳 Heaps - Picktoss</title>"));
        assert_eq!(documents.calls.load(Ordering::SeqCst), 2);
    }

    #[actix_web::test]
    async fn test_head_uses_detail_and_body_uses_public_document() {
        let documents = StubDocuments::new(Some(document("Detail")), Some(document("Public")));
        let service = service(documents, RedirectPolicy::Always);

        let html = page(service.handle(&request(FACEBOOK_UA, RouteVariant::Localized)).await);

        assert!(html.contains("<title>🌳 Detail - Picktoss</title>"));
        assert!(html.contains("<h1>🌳 Public</h1>"));
        assert!(html.contains("\"name\":\"Public\""));
    }

    #[actix_web::test]
    async fn test_head_falls_back_to_public_document() {
        let documents = StubDocuments::new(None, Some(document("Public")));
        let service = service(documents, RedirectPolicy::Always);

        let html = page(service.handle(&request(FACEBOOK_UA, RouteVariant::Localized)).await);

        assert!(html.contains("<title>🌳 Public - Picktoss</title>"));
    }

    #[actix_web::test]
    async fn test_missing_public_document_drops_json_ld_and_body() {
        let documents = StubDocuments::new(Some(document("Detail")), None);
        let service = service(documents, RedirectPolicy::Always);

        let html = page(service.handle(&request(FACEBOOK_UA, RouteVariant::Localized)).await);

        assert!(html.contains("<title>🌳 Detail - Picktoss</title>"));
        assert!(!html.contains("application/ld+json"));
        assert!(html.contains("<h1>Picktoss Quiz</h1>"));
    }

    #[actix_web::test]
    async fn test_upstream_not_found_yields_fallback_page() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/documents/42"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/documents/42/public"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = HttpDocumentClient::new(server.uri(), Duration::from_secs(2)).unwrap();
        let service = service(Arc::new(client), RedirectPolicy::Always);

        let html = page(service.handle(&request(FACEBOOK_UA, RouteVariant::Localized)).await);
        let bundle = service.metadata(Locale::Ko, "42", RouteVariant::Localized).await;

        assert!(html.contains("<title>Picktoss: AI Quiz for Growth</title>"));
        assert!(!html.contains("application/ld+json"));
        assert_eq!(bundle.title, "픽토스: 나를 성장시키는 AI 퀴즈");
        assert!(bundle.json_ld.is_none());
    }

    #[actix_web::test]
    async fn test_metadata_uses_detail_document() {
        let documents = StubDocuments::new(Some(document("Detail")), None);
        let service = service(documents.clone(), RedirectPolicy::Always);

        let bundle = service.metadata(Locale::En, "42", RouteVariant::Legacy).await;

        assert_eq!(bundle.title, "🌳 Detail - Picktoss");
        assert_eq!(bundle.alternates.canonical, "https://picktoss.com/explore/detail/42");
        assert_eq!(documents.calls.load(Ordering::SeqCst), 1);
    }
}
