//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! 핸들러는 경로/헤더에서 값을 읽어 정규화하고 서비스 계층에 위임하는 일만 합니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (크롤러, 링크 미리보기 봇, 브라우저)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 판별, 조회, 메타데이터, 렌더링           ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Upstream Content API (/documents/{id})        ← External
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 의존성 주입
//!
//! 서비스는 `main`에서 한 번 조립되어 `web::Data`로 주입됩니다.
//!
//! ```rust,ignore
//! #[get("/{locale}/quiz-detail/{id}")]
//! pub async fn localized_quiz_detail(
//!     req: HttpRequest,
//!     path: web::Path<LocalizedQuizPath>,
//!     service: web::Data<QuizDetailService>,
//! ) -> HttpResponse {
//!     // ...
//! }
//! ```
//!
//! ## 모듈 구성
//!
//! - **`quiz_detail`**: 퀴즈 상세 페이지
//!   - 현재 형식 (`GET /{locale}/quiz-detail/{id}`)
//!   - 구형식 (`GET /quiz-detail/{id}`, `GET /explore/detail/{id}`)
//!   - 크롤러 판별 (`GET /api/v1/crawler-check`)
//!
//! - **`metadata`**: 메타데이터 JSON (`GET /api/v1/metadata/{locale}/{id}`)

pub mod quiz_detail;
pub mod metadata;
