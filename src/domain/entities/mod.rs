//! 도메인 엔티티 모듈
//!
//! 업스트림 콘텐츠 API에서 읽어오는 문서와 퀴즈 엔티티를 정의합니다.

pub mod document;

pub use document::{Document, Quiz, QuizType};
