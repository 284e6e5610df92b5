//! 픽토스 퀴즈 미리보기 서비스
//!
//! 퀴즈 상세 페이지의 서버 사이드 메타데이터를 렌더링하는 Rust 서비스입니다.
//! 링크 미리보기 봇과 검색 엔진 크롤러에게는 Open Graph, Twitter Card, JSON-LD가
//! 포함된 정적 HTML을 제공하고, 사람 방문자는 실제 사이트로 리다이렉트합니다.
//!
//! # Features
//!
//! - **크롤러 판별**: 인앱 브라우저 허용 목록, 미리보기 봇 목록, `isbot` 범용 검사
//! - **로케일별 메타데이터**: 한국어/영어 제목, 설명, 키워드, 폴백 문구
//! - **구조화 데이터**: schema.org `CreativeWork` JSON-LD
//! - **정적 HTML 본문**: 퀴즈 문제 목록, 유형 분석, 키워드
//! - **최선 노력 조회**: 업스트림 API 실패 시에도 폴백 페이지 제공
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← 페이지, 메타데이터 API, 헬스체크
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 경로/헤더 정규화
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 판별 → 조회 → 메타데이터 → 렌더링
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Upstream API   │ ← /documents/{id}, /documents/{id}/public
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use quiz_preview_service::services::crawler::{CrawlerClassifier, CrawlerRules};
//!
//! let classifier = CrawlerClassifier::with_default_detector(CrawlerRules::new()?);
//! assert!(classifier.is_crawler("facebookexternalhit/1.1"));
//! ```

pub mod core;
pub mod config;
pub mod domain;
pub mod localization;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
