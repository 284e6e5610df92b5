//! # 업스트림 문서 클라이언트
//!
//! 콘텐츠 API에서 퀴즈 문서를 가져옵니다.
//!
//! | 용도 | 엔드포인트 |
//! |------|------------|
//! | `<head>` 메타데이터 | `GET {API_URL}/documents/{id}` |
//! | 본문, JSON-LD | `GET {API_URL}/documents/{id}/public` |
//!
//! 모든 요청에는 `X-Locale: ko|en` 헤더가 붙습니다.
//! 호출자는 실패를 "문서 없음"으로 취급하므로 재시도하지 않습니다.

use std::time::Duration;
use async_trait::async_trait;
use reqwest::StatusCode;
use crate::core::errors::{AppError, AppResult, ErrorContext};
use crate::domain::entities::Document;
use crate::domain::locale::Locale;

/// 문서 조회 추상화
///
/// 서비스 계층은 이 trait에만 의존하며, 테스트에서는 대체 구현을 주입합니다.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// `/documents/{id}` 조회
    async fn fetch_document(&self, id: &str, locale: Locale) -> AppResult<Document>;

    /// `/documents/{id}/public` 조회
    async fn fetch_public_document(&self, id: &str, locale: Locale) -> AppResult<Document>;
}

/// reqwest 기반 업스트림 클라이언트
///
/// 내부 `reqwest::Client`가 커넥션 풀을 가지므로 프로세스당 하나만 만들어 공유합니다.
#[derive(Debug, Clone)]
pub struct HttpDocumentClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpDocumentClient {
    /// 새 클라이언트를 생성합니다.
    ///
    /// # Arguments
    ///
    /// * `base_url` - 업스트림 API 베이스 URL (끝의 `/`는 제거됨)
    /// * `timeout` - 요청 하나의 전체 타임아웃
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - HTTP 클라이언트 생성 실패
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("HTTP 클라이언트 생성 실패")?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_document(&self, path: String, locale: Locale) -> AppResult<Document> {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .client
            .get(&url)
            .header("X-Locale", locale.as_str())
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("문서 요청 실패 ({}): {}", path, e)))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(AppError::NotFound(format!("문서 없음: {}", path)));
        }
        if !status.is_success() {
            return Err(AppError::ExternalServiceError(format!(
                "HTTP error! status: {} ({})",
                status.as_u16(),
                path
            )));
        }

        response
            .json::<Document>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("문서 응답 파싱 실패 ({}): {}", path, e)))
    }
}

#[async_trait]
impl DocumentSource for HttpDocumentClient {
    async fn fetch_document(&self, id: &str, locale: Locale) -> AppResult<Document> {
        let path = format!("/documents/{}", urlencoding::encode(id));
        self.get_document(path, locale).await
    }

    async fn fetch_public_document(&self, id: &str, locale: Locale) -> AppResult<Document> {
        let path = format!("/documents/{}/public", urlencoding::encode(id));
        self.get_document(path, locale).await
    }
}
