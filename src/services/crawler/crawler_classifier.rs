//! # 크롤러 판별기
//!
//! User-Agent 문자열만으로 요청자가 크롤러/링크 미리보기 봇인지,
//! 사람의 브라우저인지 판별합니다.
//!
//! ## 판별 순서
//!
//! 먼저 일치하는 규칙이 최종 결과가 됩니다.
//!
//! ```text
//! User-Agent
//!     │
//!     ├─ 빈 문자열 ─────────────────────► 사람
//!     ├─ 인앱 브라우저 허용 목록 일치 ──────► 사람 (이후 규칙 무시)
//!     ├─ 스크랩/미리보기 봇 목록 일치 ─────► 크롤러
//!     └─ 범용 봇 시그니처 검사 ───────────► 그 결과
//! ```
//!
//! 카카오톡 인앱 브라우저(`KAKAOTALK/10.4.3`)는 범용 봇 검사에서 봇으로 오인될 수 있어
//! 허용 목록이 가장 먼저 적용됩니다. 반면 카카오톡 링크 미리보기 봇은 `kakaotalk-scrap`
//! 시그니처로 크롤러로 판별됩니다.

use log::debug;
use regex::{RegexSet, RegexSetBuilder};
use crate::core::errors::{AppError, AppResult};

/// 기본 스크랩/미리보기 봇 패턴
pub const DEFAULT_BOT_PATTERNS: [&str; 11] = [
    "kakaotalk-scrap",
    "facebookexternalhit",
    "Slackbot-LinkExpanding",
    "Slack-ImgProxy",
    "Discordbot",
    "WhatsApp",
    "TelegramBot",
    "SkypeUriPreview",
    "Pinterest",
    "Line/",
    "Viber",
];

/// 기본 인앱 브라우저(사람) 패턴
pub const DEFAULT_HUMAN_PATTERNS: [&str; 1] = [r"KAKAOTALK/\d"];

/// 범용 봇 시그니처 검사기
///
/// 기본 구현은 `isbot` 크레이트이며, 테스트에서는 임의의 구현으로 교체할 수 있습니다.
pub trait BotSignatureDetector: Send + Sync {
    fn is_bot(&self, user_agent: &str) -> bool;
}

impl BotSignatureDetector for isbot::Bots {
    fn is_bot(&self, user_agent: &str) -> bool {
        isbot::Bots::is_bot(self, user_agent)
    }
}

/// 컴파일된 크롤러 판별 규칙
///
/// 모든 패턴은 대소문자를 구분하지 않는 정규식입니다.
/// 시작 시 한 번 만들어지며 이후 변경되지 않습니다.
#[derive(Debug, Clone)]
pub struct CrawlerRules {
    human_patterns: RegexSet,
    bot_patterns: RegexSet,
}

impl CrawlerRules {
    /// 기본 테이블에 추가 패턴을 덧붙여 규칙을 만듭니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConfigError` - 정규식으로 컴파일할 수 없는 패턴이 있는 경우
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let rules = CrawlerRules::with_extra(
    ///     &["Yeti".to_string()],
    ///     &[],
    /// )?;
    /// ```
    pub fn with_extra(extra_bot: &[String], extra_human: &[String]) -> AppResult<Self> {
        let human = DEFAULT_HUMAN_PATTERNS
            .iter()
            .map(|p| p.to_string())
            .chain(extra_human.iter().cloned());
        let bot = DEFAULT_BOT_PATTERNS
            .iter()
            .map(|p| p.to_string())
            .chain(extra_bot.iter().cloned());

        Ok(Self {
            human_patterns: compile(human, "사람")?,
            bot_patterns: compile(bot, "봇")?,
        })
    }

    /// 기본 테이블만 사용하는 규칙
    pub fn new() -> AppResult<Self> {
        Self::with_extra(&[], &[])
    }

    pub fn pattern_counts(&self) -> (usize, usize) {
        (self.human_patterns.len(), self.bot_patterns.len())
    }
}

fn compile(patterns: impl Iterator<Item = String>, kind: &str) -> AppResult<RegexSet> {
    let patterns: Vec<String> = patterns.collect();

    RegexSetBuilder::new(&patterns)
        .case_insensitive(true)
        .build()
        .map_err(|e| AppError::ConfigError(format!("잘못된 {} 패턴: {}", kind, e)))
}

/// 크롤러 판별기
pub struct CrawlerClassifier {
    rules: CrawlerRules,
    detector: Box<dyn BotSignatureDetector>,
}

impl CrawlerClassifier {
    pub fn new(rules: CrawlerRules, detector: Box<dyn BotSignatureDetector>) -> Self {
        Self { rules, detector }
    }

    /// `isbot` 기본 시그니처를 사용하는 판별기
    pub fn with_default_detector(rules: CrawlerRules) -> Self {
        Self::new(rules, Box::new(isbot::Bots::default()))
    }

    /// User-Agent가 크롤러인지 판별합니다.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let classifier = CrawlerClassifier::with_default_detector(CrawlerRules::new()?);
    ///
    /// assert!(classifier.is_crawler("facebookexternalhit/1.1"));
    /// assert!(!classifier.is_crawler("Mozilla/5.0 ... KAKAOTALK/10.4.3"));
    /// assert!(!classifier.is_crawler(""));
    /// ```
    pub fn is_crawler(&self, user_agent: &str) -> bool {
        if user_agent.is_empty() {
            return false;
        }

        if self.rules.human_patterns.is_match(user_agent) {
            debug!("🙋 인앱 브라우저로 판별: {}", user_agent);
            return false;
        }

        if self.rules.bot_patterns.is_match(user_agent) {
            debug!("🤖 미리보기 봇으로 판별: {}", user_agent);
            return true;
        }

        let verdict = self.detector.is_bot(user_agent);
        debug!("🔎 범용 봇 검사 결과 {}: {}", verdict, user_agent);
        verdict
    }
}
