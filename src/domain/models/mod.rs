//! 도메인 모델 모듈
//!
//! 요청 처리 중에만 존재하는 파생 모델을 정의합니다.
//!
//! - [`page_context`] - 로케일, 문서 ID, 공개 URL을 묶은 렌더링 컨텍스트
//! - [`metadata`] - Open Graph, Twitter Card, JSON-LD를 포함한 메타데이터 번들

pub mod metadata;
pub mod page_context;

pub use metadata::*;
pub use page_context::PageContext;
