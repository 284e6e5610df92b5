//! 공통 유틸리티 함수 모듈
//!
//! 애플리케이션 전체에서 사용되는 공통 유틸리티 함수들을 제공합니다.
//!
//! # Modules
//!
//! - [`string_utils`] - 날짜 포맷팅, `<script>`용 JSON 이스케이프
//! - [`display_terminal`] - 터미널 출력 포맷팅 함수들
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::string_utils::format_created_date;
//! use crate::utils::display_terminal::print_boxed_title;
//!
//! let created = format_created_date("2024-01-05T12:00:00", Locale::Ko); // "2024. 1. 5."
//!
//! print_boxed_title("Quiz Preview Service");
//! ```

pub mod string_utils;
pub mod display_terminal;
