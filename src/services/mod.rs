//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 모든 서비스는 상태가 없거나 불변 상태만 가지며, 시작 시 한 번 조립되어
//! `web::Data`로 핸들러에 주입됩니다.
//!
//! # Modules
//!
//! - [`crawler`] - User-Agent 기반 크롤러 판별
//! - [`documents`] - 업스트림 콘텐츠 API 클라이언트
//! - [`metadata`] - Open Graph, Twitter Card, JSON-LD 메타데이터 생성
//! - [`rendering`] - 크롤러용 HTML 렌더링
//! - [`quiz_detail`] - 위 단계를 묶는 요청 처리 파이프라인
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::quiz_detail::{QuizDetailOutcome, QuizDetailService};
//!
//! let outcome = service.handle(&request).await;
//! ```

pub mod crawler;
pub mod documents;
pub mod metadata;
pub mod rendering;
pub mod quiz_detail;
