//! `<head>` 메타데이터 문구
//!
//! 제목, 설명, 키워드 템플릿과 문서를 가져오지 못했을 때의 고정 폴백 문구입니다.

use crate::domain::entities::Document;
use crate::domain::locale::Locale;

/// 게시자 이름 (로케일 무관)
pub const PUBLISHER: &str = "픽토스(Picktoss)";
/// Open Graph `og:site_name`
pub const SITE_NAME: &str = "Picktoss";
/// Twitter `twitter:site`
pub const TWITTER_SITE: &str = "@picktoss";
/// 폴백 작성자 및 creator
pub const FALLBACK_AUTHOR: &str = "Picktoss";
/// 폴백 Open Graph 이미지 대체 텍스트
pub const FALLBACK_IMAGE_ALT: &str = "Picktoss - AI 퀴즈 플랫폼";
/// 문서가 있을 때 Open Graph 태그 (카테고리 뒤에 붙음)
pub const ARTICLE_TAGS: [&str; 3] = ["퀴즈", "AI 퀴즈", "학습"];

/// 로케일별 메타데이터 문구
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetadataText {
    locale: Locale,
    title_suffix: &'static str,
    fixed_keywords: &'static [&'static str],
    pub fallback_title: &'static str,
    pub fallback_description: &'static str,
    pub fallback_keywords: &'static str,
    /// 폴백 Twitter 설명 (짧은 태그라인)
    pub fallback_twitter_description: &'static str,
}

const KO: MetadataText = MetadataText {
    locale: Locale::Ko,
    title_suffix: "픽토스",
    fixed_keywords: &["퀴즈", "AI 퀴즈", "학습", "교육", "픽토스", "picktoss", "온라인 퀴즈"],
    fallback_title: "픽토스: 나를 성장시키는 AI 퀴즈",
    fallback_description: "나를 성장시키는 똑똑한 AI 퀴즈 플랫폼. 다양한 카테고리의 퀴즈로 재미있게 학습하세요.",
    fallback_keywords: "퀴즈, AI 퀴즈, 학습, 교육, 픽토스, picktoss, 온라인 퀴즈",
    fallback_twitter_description: "나를 성장시키는 똑똑한 퀴즈",
};

const EN: MetadataText = MetadataText {
    locale: Locale::En,
    title_suffix: "Picktoss",
    fixed_keywords: &["quiz", "AI quiz", "learning", "education", "Picktoss", "online quiz"],
    fallback_title: "Picktoss: AI Quiz for Growth",
    fallback_description: "A smart AI quiz platform to help you grow. Learn with fun quizzes across various categories.",
    fallback_keywords: "quiz, AI quiz, learning, education, Picktoss, online quiz",
    fallback_twitter_description: "A smart quiz experience that helps you grow",
};

impl MetadataText {
    pub fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::Ko => KO,
            Locale::En => EN,
        }
    }

    /// `"{emoji} {name} - 픽토스"` / `"{emoji} {name} - Picktoss"`
    pub fn title(&self, document: &Document) -> String {
        format!("{} {} - {}", document.emoji, document.name, self.title_suffix)
    }

    pub fn description(&self, document: &Document) -> String {
        match self.locale {
            Locale::Ko => format!("{} - {}개의 문제", document.category, document.total_quiz_count),
            Locale::En => format!("{} - {} questions", document.category, document.total_quiz_count),
        }
    }

    /// 카테고리, 고정 키워드, 작성자 순서의 키워드 목록
    pub fn keywords(&self, document: &Document) -> Vec<String> {
        std::iter::once(document.category.clone())
            .chain(self.fixed_keywords.iter().map(|keyword| keyword.to_string()))
            .chain(std::iter::once(document.creator.clone()))
            .collect()
    }

    /// Open Graph 이미지 대체 텍스트
    pub fn image_alt(document: &Document) -> String {
        format!("{} - {} 퀴즈", document.name, document.category)
    }

    /// 제목 끝의 이 로케일 사이트 접미사(`" - 픽토스"` / `" - Picktoss"`)를 한 번만 제거합니다.
    ///
    /// 문서 이름 중간에 같은 문자열이 있어도 그대로 둡니다.
    pub fn strip_site_suffix(&self, title: &str) -> String {
        let suffix = format!(" - {}", self.title_suffix);
        title.strip_suffix(suffix.as_str()).unwrap_or(title).to_string()
    }
}
