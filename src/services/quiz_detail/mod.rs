//! 퀴즈 상세 요청 처리

pub mod quiz_detail_service;

pub use quiz_detail_service::{QuizDetailOutcome, QuizDetailService};
