//! # Configuration Module
//!
//! 퀴즈 미리보기 서비스의 설정 관리를 담당하는 모듈입니다.
//! 모든 설정값은 환경 변수에서 읽으며, 시작 시 한 번만 해석되어 불변으로 공유됩니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버 바인딩, Rate Limiting, CORS 설정
//! - [`site_config`] - 업스트림 API, 공개 사이트 URL, 리다이렉트 정책
//! - [`crawler_config`] - 크롤러 판별 규칙 확장 패턴
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{ApiConfig, ServerConfig, SiteSettings};
//!
//! let settings = SiteSettings::from_env();
//! println!("Redirect humans: {}", settings.should_redirect_humans());
//!
//! let upstream = ApiConfig::base_url();
//! println!("Server will bind to {}", ServerConfig::bind_address());
//! ```
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//!
//! # 업스트림 콘텐츠 API
//! export API_URL="https://api.picktoss.com/api/v2"
//! export API_TIMEOUT_SECS="5"
//!
//! # 공개 사이트
//! export PUBLIC_BASE_URL="https://picktoss.com"
//! export PRODUCTION_HOST="picktoss.com"
//! export HUMAN_REDIRECT_POLICY="production"   # production, always, never
//!
//! # 크롤러 판별 확장 (쉼표 구분 정규식, `{1,3}`/`[...]` 안의 쉼표는 유지)
//! export CRAWLER_EXTRA_BOT_PATTERNS="Yeti,Daum/\\d{1,2}"
//! export CRAWLER_EXTRA_HUMAN_PATTERNS="NAVER\\(inapp"
//! ```

pub mod data_config;
pub mod site_config;
pub mod crawler_config;

pub use data_config::*;
pub use site_config::*;
pub use crawler_config::*;
