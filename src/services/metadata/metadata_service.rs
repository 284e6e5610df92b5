//! # 로케일별 메타데이터 빌더
//!
//! 페이지 컨텍스트와 (가져왔다면) 문서로부터 `<head>` 메타데이터 번들을 만듭니다.
//! 문서가 없으면 로케일별 고정 폴백 번들을 반환하므로 이 함수는 실패하지 않습니다.
//!
//! ```text
//! PageContext ─┬─ Some(Document) ──► 문서 제목/설명/키워드 + JSON-LD
//!              └─ None ────────────► 고정 폴백 (JSON-LD 없음)
//! ```

use std::collections::BTreeMap;
use crate::domain::entities::Document;
use crate::domain::models::{
    Alternates, Author, MetadataBundle, OgImage, OpenGraph, PageContext, Robots, TwitterCard,
    TwitterImage,
};
use crate::localization::metadata_text::{
    ARTICLE_TAGS, FALLBACK_AUTHOR, FALLBACK_IMAGE_ALT, PUBLISHER, SITE_NAME, TWITTER_SITE,
};
use crate::localization::{MetadataText, PageText};
use crate::services::metadata::json_ld::build_json_ld;

const OG_IMAGE_WIDTH: u32 = 1200;
const OG_IMAGE_HEIGHT: u32 = 630;

/// 메타데이터 번들을 생성합니다.
///
/// # Arguments
///
/// * `ctx` - 로케일, 문서 ID, 공개 베이스 URL, 라우트 변형
/// * `document` - 업스트림에서 가져온 문서 (실패 시 `None`)
///
/// # Examples
///
/// ```rust,ignore
/// let ctx = PageContext::new(Locale::Ko, "42", "https://picktoss.com", RouteVariant::Localized);
///
/// let bundle = build_metadata(&ctx, None);
/// assert_eq!(bundle.title, "픽토스: 나를 성장시키는 AI 퀴즈");
/// ```
pub fn build_metadata(ctx: &PageContext, document: Option<&Document>) -> MetadataBundle {
    match document {
        Some(document) => document_bundle(ctx, document),
        None => fallback_bundle(ctx),
    }
}

fn document_bundle(ctx: &PageContext, document: &Document) -> MetadataBundle {
    let text = MetadataText::for_locale(ctx.locale);
    let title = text.title(document);
    let short_title = text.strip_site_suffix(&title);
    let description = text.description(document);
    let image_url = ctx.og_image_url();
    let image_alt = MetadataText::image_alt(document);

    let tags = std::iter::once(document.category.clone())
        .chain(ARTICLE_TAGS.iter().map(|tag| tag.to_string()))
        .collect();

    MetadataBundle {
        keywords: text.keywords(document).join(", "),
        authors: vec![Author { name: document.creator.clone() }],
        creator: document.creator.clone(),
        publisher: PUBLISHER.to_string(),
        robots: Robots::index_all(),
        open_graph: OpenGraph {
            title: short_title.clone(),
            description: description.clone(),
            og_type: "article".to_string(),
            url: ctx.canonical_url(),
            site_name: SITE_NAME.to_string(),
            locale: ctx.locale.og_locale().to_string(),
            published_time: Some(document.created_at.clone()),
            authors: vec![document.creator.clone()],
            tags,
            images: vec![og_image(image_url.clone(), image_alt.clone())],
        },
        twitter: TwitterCard {
            card: "summary_large_image".to_string(),
            site: TWITTER_SITE.to_string(),
            creator: Some(format!("@{}", document.creator)),
            title: short_title,
            description: description.clone(),
            images: vec![TwitterImage { url: image_url, alt: image_alt }],
        },
        alternates: Alternates { canonical: ctx.canonical_url() },
        other: other_meta(),
        json_ld: Some(build_json_ld(ctx, document)),
        text: PageText::for_locale(ctx.locale),
        title,
        description,
    }
}

fn fallback_bundle(ctx: &PageContext) -> MetadataBundle {
    let text = MetadataText::for_locale(ctx.locale);
    let image_url = ctx.og_image_url();

    MetadataBundle {
        title: text.fallback_title.to_string(),
        description: text.fallback_description.to_string(),
        keywords: text.fallback_keywords.to_string(),
        authors: vec![Author { name: FALLBACK_AUTHOR.to_string() }],
        creator: FALLBACK_AUTHOR.to_string(),
        publisher: PUBLISHER.to_string(),
        robots: Robots::index_all(),
        open_graph: OpenGraph {
            title: text.fallback_title.to_string(),
            description: text.fallback_description.to_string(),
            og_type: "article".to_string(),
            url: ctx.canonical_url(),
            site_name: SITE_NAME.to_string(),
            locale: ctx.locale.og_locale().to_string(),
            published_time: None,
            authors: Vec::new(),
            tags: Vec::new(),
            images: vec![og_image(image_url.clone(), FALLBACK_IMAGE_ALT.to_string())],
        },
        twitter: TwitterCard {
            card: "summary_large_image".to_string(),
            site: TWITTER_SITE.to_string(),
            creator: None,
            title: text.fallback_title.to_string(),
            description: text.fallback_twitter_description.to_string(),
            images: vec![TwitterImage {
                url: image_url,
                alt: FALLBACK_IMAGE_ALT.to_string(),
            }],
        },
        alternates: Alternates { canonical: ctx.canonical_url() },
        other: other_meta(),
        json_ld: None,
        text: PageText::for_locale(ctx.locale),
    }
}

fn og_image(url: String, alt: String) -> OgImage {
    OgImage {
        url,
        width: OG_IMAGE_WIDTH,
        height: OG_IMAGE_HEIGHT,
        alt,
        mime_type: "image/png".to_string(),
    }
}

fn other_meta() -> BTreeMap<String, String> {
    [
        ("theme-color", "#6366f1"),
        ("color-scheme", "light dark"),
        ("format-detection", "telephone=no"),
    ]
    .into_iter()
    .map(|(name, content)| (name.to_string(), content.to_string()))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dto::RouteVariant;
    use crate::domain::locale::Locale;
    use serde_json::json;

    fn document() -> Document {
        serde_json::from_value(json!({
            "id": 42,
            "creator": "tosser",
            "name": "자료구조 기초",
            "emoji": "🌳",
            "category": "IT",
            "tryCount": 0,
            "bookmarkCount": 2,
            "totalQuizCount": 5,
            "createdAt": "2024-01-05T12:00:00"
        }))
        .unwrap()
    }

    fn ctx(locale: Locale, variant: RouteVariant) -> PageContext {
        PageContext::new(locale, "42", "https://picktoss.com", variant)
    }

    #[test]
    fn test_document_bundle_ko() {
        let bundle = build_metadata(&ctx(Locale::Ko, RouteVariant::Localized), Some(&document()));

        assert_eq!(bundle.title, "🌳 자료구조 기초 - 픽토스");
        assert_eq!(bundle.description, "IT - 5개의 문제");
        assert_eq!(
            bundle.keywords,
            "IT, 퀴즈, AI 퀴즈, 학습, 교육, 픽토스, picktoss, 온라인 퀴즈, tosser"
        );
        assert_eq!(bundle.open_graph.title, "🌳 자료구조 기초");
        assert_eq!(bundle.open_graph.locale, "ko_KR");
        assert_eq!(bundle.open_graph.tags, vec!["IT", "퀴즈", "AI 퀴즈", "학습"]);
        assert_eq!(bundle.open_graph.images[0].alt, "자료구조 기초 - IT 퀴즈");
        assert_eq!(bundle.twitter.creator.as_deref(), Some("@tosser"));
        assert_eq!(bundle.alternates.canonical, "https://picktoss.com/ko/quiz-detail/42");
        assert!(bundle.json_ld.is_some());
    }

    #[test]
    fn test_document_bundle_en() {
        let bundle = build_metadata(&ctx(Locale::En, RouteVariant::Localized), Some(&document()));

        assert_eq!(bundle.title, "🌳 자료구조 기초 - Picktoss");
        assert_eq!(bundle.description, "IT - 5 questions");
        assert_eq!(bundle.twitter.title, "🌳 자료구조 기초");
        assert_eq!(
            bundle.open_graph.images[0].url,
            "https://picktoss.com/opengraph-quiz-eng.png"
        );
    }

    #[test]
    fn test_short_title_keeps_suffix_text_inside_name() {
        let mut doc = document();
        doc.name = "Why - Picktoss wins".to_string();
        doc.emoji = "🎯".to_string();

        let bundle = build_metadata(&ctx(Locale::En, RouteVariant::Localized), Some(&doc));

        assert_eq!(bundle.title, "🎯 Why - Picktoss wins - Picktoss");
        assert_eq!(bundle.open_graph.title, "🎯 Why - Picktoss wins");
        assert_eq!(bundle.twitter.title, "🎯 Why - Picktoss wins");

        doc.name = "왜 - 픽토스 인가".to_string();
        let bundle = build_metadata(&ctx(Locale::Ko, RouteVariant::Localized), Some(&doc));

        assert_eq!(bundle.open_graph.title, "🎯 왜 - 픽토스 인가");
    }

    #[test]
    fn test_fallback_bundle_per_locale() {
        let ko = build_metadata(&ctx(Locale::Ko, RouteVariant::Localized), None);
        let en = build_metadata(&ctx(Locale::En, RouteVariant::Localized), None);

        assert_eq!(ko.title, "픽토스: 나를 성장시키는 AI 퀴즈");
        assert_eq!(en.title, "Picktoss: AI Quiz for Growth");
        assert_eq!(ko.twitter.description, "나를 성장시키는 똑똑한 퀴즈");
        assert_eq!(en.twitter.description, "A smart quiz experience that helps you grow");
        assert_eq!(en.creator, "Picktoss");
        assert_eq!(en.open_graph.title, en.title);
        assert_eq!(en.open_graph.images[0].alt, "Picktoss - AI 퀴즈 플랫폼");
        assert!(en.twitter.creator.is_none());
        assert!(en.json_ld.is_none());
    }

    #[test]
    fn test_legacy_variant_canonical() {
        let bundle = build_metadata(&ctx(Locale::Ko, RouteVariant::Legacy), None);

        assert_eq!(bundle.alternates.canonical, "https://picktoss.com/explore/detail/42");
        assert_eq!(bundle.open_graph.url, bundle.alternates.canonical);
    }

    #[test]
    fn test_common_fields() {
        let bundle = build_metadata(&ctx(Locale::Ko, RouteVariant::Localized), None);

        assert_eq!(bundle.publisher, "픽토스(Picktoss)");
        assert_eq!(bundle.robots.robots_content(), "index, follow");
        assert_eq!(bundle.other.get("theme-color").map(String::as_str), Some("#6366f1"));
        assert_eq!(bundle.other.len(), 3);
    }

    #[test]
    fn test_bundle_serializes_with_camel_case_keys() {
        let bundle = build_metadata(&ctx(Locale::En, RouteVariant::Localized), Some(&document()));
        let value = serde_json::to_value(&bundle).unwrap();

        assert_eq!(value["openGraph"]["type"], "article");
        assert_eq!(value["openGraph"]["siteName"], "Picktoss");
        assert_eq!(value["alternates"]["canonical"], "https://picktoss.com/en/quiz-detail/42");
        assert!(value.get("text").is_none());
        assert!(value.get("jsonLd").is_some());
    }
}
