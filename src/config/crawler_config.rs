//! 크롤러 판별 규칙 확장 설정
//!
//! 패턴 목록은 쉼표로 구분합니다. 단 `{1,3}` 같은 반복 지정자나 `[,;]` 같은
//! 문자 클래스 안의 쉼표, `\,`처럼 이스케이프된 쉼표는 구분자로 보지 않습니다.
//!
//! ```bash
//! CRAWLER_EXTRA_BOT_PATTERNS='Bingbot/\d{1,3},MyPreview[,/]'
//! ```

use std::env;

/// 기본 크롤러 패턴 테이블에 덧붙일 패턴
pub struct CrawlerConfig;

impl CrawlerConfig {
    /// `CRAWLER_EXTRA_BOT_PATTERNS` - 추가 스크랩/미리보기 봇 정규식
    pub fn extra_bot_patterns() -> Vec<String> {
        env::var("CRAWLER_EXTRA_BOT_PATTERNS")
            .map(|raw| split_pattern_list(&raw))
            .unwrap_or_default()
    }

    /// `CRAWLER_EXTRA_HUMAN_PATTERNS` - 추가 사람(인앱 브라우저) 정규식
    pub fn extra_human_patterns() -> Vec<String> {
        env::var("CRAWLER_EXTRA_HUMAN_PATTERNS")
            .map(|raw| split_pattern_list(&raw))
            .unwrap_or_default()
    }
}

/// 정규식 목록을 최상위 쉼표로 나눕니다.
///
/// 중괄호/대괄호 안의 쉼표와 `\` 뒤의 문자는 패턴의 일부로 남깁니다.
pub fn split_pattern_list(raw: &str) -> Vec<String> {
    let mut patterns = Vec::new();
    let mut current = String::new();
    let mut brace_depth = 0usize;
    let mut in_class = false;
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                current.push(c);
                if let Some(escaped) = chars.next() {
                    current.push(escaped);
                }
                continue;
            }
            '[' if !in_class => in_class = true,
            ']' if in_class => in_class = false,
            '{' if !in_class => brace_depth += 1,
            '}' if !in_class => brace_depth = brace_depth.saturating_sub(1),
            ',' if !in_class && brace_depth == 0 => {
                patterns.push(std::mem::take(&mut current));
                continue;
            }
            _ => {}
        }
        current.push(c);
    }
    patterns.push(current);

    patterns
        .into_iter()
        .map(|pattern| pattern.trim().to_string())
        .filter(|pattern| !pattern.is_empty())
        .collect()
}
