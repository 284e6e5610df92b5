//! # Domain Layer
//!
//! 퀴즈 미리보기 서비스의 도메인 타입을 정의하는 모듈입니다.
//! 이 서비스의 모든 도메인 값은 요청 하나의 수명 동안만 존재하며,
//! 저장되거나 요청 간에 공유되지 않습니다.
//!
//! ## 모듈 구성
//!
//! ```text
//! domain/
//! ├── locale.rs           ← 지원 로케일 (ko, en)과 로케일별 파생값
//! ├── entities/
//! │   └── document.rs     ← 업스트림 문서/퀴즈 (읽기 전용)
//! ├── dto/
//! │   └── quiz_detail.rs  ← 라우트 변형, 요청/응답 DTO
//! └── models/
//!     ├── page_context.rs ← canonical URL 등 렌더링 컨텍스트
//!     └── metadata.rs     ← 메타데이터 번들 (OG, Twitter, JSON-LD)
//! ```
//!
//! ## 데이터 흐름
//!
//! ```text
//! Route params + User-Agent
//!          │
//!          ▼
//! QuizDetailRequest ──► Document (업스트림, 실패 시 None)
//!          │                     │
//!          ▼                     ▼
//!     PageContext ─────────► MetadataBundle ──► HTML
//! ```
//!
//! ## 직렬화 규칙
//!
//! - 업스트림 JSON은 camelCase이므로 `#[serde(rename_all = "camelCase")]`를 사용합니다.
//! - `QuizType`은 `MIX_UP`, `MULTIPLE_CHOICE` 문자열로 표현됩니다.
//! - 누락될 수 있는 배열/카운트 필드는 `#[serde(default)]`로 처리합니다.

pub mod locale;
pub mod entities;
pub mod dto;
pub mod models;

pub use locale::Locale;
pub use entities::*;
pub use dto::*;
pub use models::*;
