//! DTO 모듈
//!
//! HTTP 계층과 서비스 계층 사이에서 주고받는 요청/응답 구조체를 정의합니다.

pub mod quiz_detail;

pub use quiz_detail::{CrawlerCheckResponse, LocalizedQuizPath, QuizDetailRequest, RouteVariant};
