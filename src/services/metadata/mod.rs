//! 메타데이터 생성 서비스
//!
//! - [`metadata_service`] - 로케일별 `<head>` 메타데이터 번들
//! - [`json_ld`] - `CreativeWork` 구조화 데이터
//! - [`quiz_analysis`] - 키워드 추출, 문제 유형 집계

pub mod json_ld;
pub mod metadata_service;
pub mod quiz_analysis;

pub use json_ld::build_json_ld;
pub use metadata_service::build_metadata;
pub use quiz_analysis::{extract_keywords, QuizTypeBreakdown};
