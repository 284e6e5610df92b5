//! 크롤러 판별 서비스
//!
//! User-Agent 규칙 테이블([`CrawlerRules`])과 판별기([`CrawlerClassifier`])를 제공합니다.

pub mod crawler_classifier;

pub use crawler_classifier::{BotSignatureDetector, CrawlerClassifier, CrawlerRules};
