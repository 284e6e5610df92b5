//! 로케일별 문구 테이블
//!
//! 번역 프레임워크 없이 로케일마다 손으로 작성한 테이블을 사용합니다.
//!
//! - [`page_text`] - HTML 본문 라벨
//! - [`metadata_text`] - 제목/설명/키워드 템플릿과 폴백 문구

pub mod metadata_text;
pub mod page_text;

pub use metadata_text::MetadataText;
pub use page_text::PageText;
