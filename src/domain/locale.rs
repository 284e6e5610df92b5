//! 로케일 정의
//!
//! 지원하는 두 가지 로케일(`ko`, `en`)과 로케일별로 달라지는 파생값을 제공합니다.

use serde::{Deserialize, Serialize};
use std::fmt;

/// 지원 로케일
///
/// 라우트에서 전달된 로케일 문자열은 [`Locale::normalize`]를 통해서만 생성되며,
/// 정확히 `"en"`이 아닌 모든 입력은 `Ko`로 정규화됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// 한국어 (기본값)
    #[default]
    Ko,
    /// 영어
    En,
}

impl Locale {
    /// 임의의 로케일 문자열을 지원 로케일로 정규화합니다.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// assert_eq!(Locale::normalize("en"), Locale::En);
    /// assert_eq!(Locale::normalize("ja"), Locale::Ko);
    /// assert_eq!(Locale::normalize(""), Locale::Ko);
    /// ```
    pub fn normalize(raw: &str) -> Self {
        match raw {
            "en" => Locale::En,
            _ => Locale::Ko,
        }
    }

    /// 경로와 `X-Locale` 헤더에 쓰이는 로케일 태그
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::Ko => "ko",
            Locale::En => "en",
        }
    }

    /// Open Graph `og:locale` 값
    pub fn og_locale(&self) -> &'static str {
        match self {
            Locale::Ko => "ko_KR",
            Locale::En => "en_US",
        }
    }

    /// JSON-LD `inLanguage` 값
    pub fn language_tag(&self) -> &'static str {
        match self {
            Locale::Ko => "ko-KR",
            Locale::En => "en-US",
        }
    }

    /// 공개 사이트 기준 Open Graph 이미지 경로
    pub fn og_image_path(&self) -> &'static str {
        match self {
            Locale::Ko => "/opengraph-quiz.png",
            Locale::En => "/opengraph-quiz-eng.png",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_defaults_to_ko() {
        assert_eq!(Locale::normalize("en"), Locale::En);
        assert_eq!(Locale::normalize("ko"), Locale::Ko);
        assert_eq!(Locale::normalize(""), Locale::Ko);
        assert_eq!(Locale::normalize("EN"), Locale::Ko);
        assert_eq!(Locale::normalize("en-US"), Locale::Ko);
        assert_eq!(Locale::normalize("ja"), Locale::Ko);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for raw in ["en", "ko", "fr", "", "english"] {
            let once = Locale::normalize(raw);
            let twice = Locale::normalize(once.as_str());
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_derived_values() {
        assert_eq!(Locale::Ko.og_locale(), "ko_KR");
        assert_eq!(Locale::En.og_locale(), "en_US");
        assert_eq!(Locale::Ko.language_tag(), "ko-KR");
        assert_eq!(Locale::En.language_tag(), "en-US");
        assert_eq!(Locale::Ko.og_image_path(), "/opengraph-quiz.png");
        assert_eq!(Locale::En.og_image_path(), "/opengraph-quiz-eng.png");
        assert_eq!(Locale::En.to_string(), "en");
    }
}
