//! # Application Error Handling System
//!
//! 퀴즈 미리보기 서비스 전역에서 사용하는 에러 타입입니다.
//! `thiserror`로 `Error` trait을 구현하고, `actix_web::ResponseError`를 구현하여
//! HTTP 응답으로 자동 변환됩니다.
//!
//! ## 에러 처리 원칙
//!
//! 이 서비스는 사용자에게 에러 페이지를 보여주지 않습니다.
//! 업스트림 문서 API 실패는 서비스 계층에서 로그만 남기고 폴백 메타데이터로
//! 복구합니다. `AppError`가 HTTP 응답까지 전파되는 경우는 메타데이터 JSON API의
//! 입력 검증 실패뿐입니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 정수가 아닌 문서 ID (메타데이터 API) |
//! | `NotFound` | 404 Not Found | 업스트림 문서 없음 |
//! | `ConfigError` | 500 Internal Server Error | 잘못된 설정값 (크롤러 패턴 등) |
//! | `ExternalServiceError` | 502 Bad Gateway | 업스트림 API 오류 |
//! | `InternalError` | 500 Internal Server Error | 예상치 못한 오류 |
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, AppResult};
//!
//! async fn fetch(&self, id: &str) -> AppResult<Document> {
//!     let response = self.client.get(url).send().await
//!         .map_err(|e| AppError::ExternalServiceError(format!("문서 요청 실패: {}", e)))?;
//!     // ...
//! }
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// ## 에러 카테고리
///
/// ### 1. 인프라 계층 에러
/// - `ExternalServiceError`: 업스트림 문서 API 호출 실패 (전송 오류, 비정상 상태 코드, JSON 파싱 실패)
/// - `ConfigError`: 시작 시점의 설정 오류
///
/// ### 2. 비즈니스 계층 에러
/// - `ValidationError`: 입력값 검증 실패
/// - `NotFound`: 요청된 문서가 존재하지 않음
///
/// ### 3. 시스템 계층 에러
/// - `InternalError`: 예상하지 못한 시스템 오류
#[derive(Error, Debug)]
pub enum AppError {
    /// 입력값 검증 에러 (400 Bad Request)
    ///
    /// 메타데이터 API에 정수가 아닌 문서 ID가 들어온 경우입니다.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    ///
    /// 업스트림 API가 404를 반환한 경우입니다.
    ///
    /// # 예제
    /// ```rust,ignore
    /// if response.status() == reqwest::StatusCode::NOT_FOUND {
    ///     return Err(AppError::NotFound(format!("문서 {} 없음", id)));
    /// }
    /// ```
    #[error("Not found: {0}")]
    NotFound(String),

    /// 설정 에러 (500 Internal Server Error)
    ///
    /// 환경 변수로 주입된 크롤러 패턴이 정규식으로 컴파일되지 않는 경우처럼
    /// 서버 시작 단계에서 발견되는 설정 문제입니다.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// 외부 서비스 에러 (502 Bad Gateway)
    ///
    /// # 발생 시나리오
    /// - 업스트림 API 연결 실패 또는 타임아웃
    /// - 2xx가 아닌 응답 상태 코드
    /// - 응답 본문 JSON 파싱 실패
    ///
    /// # 예제
    /// ```rust,ignore
    /// let document = response
    ///     .json::<Document>()
    ///     .await
    ///     .map_err(|e| AppError::ExternalServiceError(format!("문서 파싱 실패: {}", e)))?;
    /// ```
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 모든 에러 응답은 다음과 같은 JSON 형식을 따릅니다:
    ///
    /// ```json
    /// {
    ///   "error": "Human readable error message"
    /// }
    /// ```
    fn error_response(&self) -> actix_web::HttpResponse {
        use actix_web::http::StatusCode;

        let status = match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ExternalServiceError(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
///
/// ```rust,ignore
/// use crate::core::errors::AppResult;
///
/// async fn fetch_document(id: &str) -> AppResult<Document> {
///     // 구현...
/// }
/// ```
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// # 예제
///
/// ```rust,ignore
/// use crate::core::errors::ErrorContext;
///
/// let client = reqwest::Client::builder()
///     .timeout(timeout)
///     .build()
///     .context("HTTP 클라이언트 생성 실패")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}
