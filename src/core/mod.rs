//! # Core Module
//!
//! 서비스 전역에서 공유하는 핵심 타입을 제공합니다.
//!
//! ## 모듈 구성
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입 정의
//! - **HTTP 통합**: Actix-Web ResponseError 구현
//! - **ErrorContext**: 외부 라이브러리 에러에 컨텍스트를 붙이는 확장 trait
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, AppResult, ErrorContext};
//!
//! fn build_client(timeout: Duration) -> AppResult<reqwest::Client> {
//!     reqwest::Client::builder()
//!         .timeout(timeout)
//!         .build()
//!         .context("HTTP 클라이언트 생성 실패")
//! }
//! ```

pub mod errors;
