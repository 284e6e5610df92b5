//! `CreativeWork` JSON-LD 구조화 데이터
//!
//! 검색 엔진이 퀴즈 문서를 학습 자료로 인식하도록 schema.org 어휘를 사용합니다.
//! 문서를 가져온 경우에만 생성됩니다.

use serde_json::{json, Value};
use crate::domain::entities::Document;
use crate::domain::models::PageContext;
use crate::localization::MetadataText;

/// 퀴즈 문서의 JSON-LD 객체를 생성합니다.
///
/// `keywords`는 `<meta name="keywords">`와 같은 쉼표 구분 문자열입니다.
/// `aggregateRating`은 도전 횟수(`tryCount`)가 1 이상일 때만 포함됩니다.
pub fn build_json_ld(ctx: &PageContext, document: &Document) -> Value {
    let text = MetadataText::for_locale(ctx.locale);
    let canonical = ctx.canonical_url();

    let mut json_ld = json!({
        "@context": "https://schema.org",
        "@type": "CreativeWork",
        "@id": canonical,
        "name": document.name,
        "description": text.description(document),
        "creator": {
            "@type": "Person",
            "name": document.creator,
        },
        "publisher": {
            "@type": "Organization",
            "name": "픽토스",
            "url": "https://picktoss.com",
            "logo": {
                "@type": "ImageObject",
                "url": ctx.logo_url(),
            },
        },
        "dateCreated": document.created_at,
        "datePublished": document.created_at,
        "dateModified": document.created_at,
        "url": canonical,
        "mainEntityOfPage": {
            "@type": "WebPage",
            "@id": canonical,
        },
        "image": {
            "@type": "ImageObject",
            "url": ctx.og_image_url(),
            "width": 1200,
            "height": 630,
        },
        "keywords": text.keywords(document).join(", "),
        "about": {
            "@type": "Thing",
            "name": document.category,
        },
        "educationalLevel": "beginner",
        "learningResourceType": "Quiz",
        "interactionStatistic": [
            {
                "@type": "InteractionCounter",
                "interactionType": "https://schema.org/BookmarkAction",
                "userInteractionCount": document.bookmark_count,
            },
            {
                "@type": "InteractionCounter",
                "interactionType": "https://schema.org/ViewAction",
                "userInteractionCount": document.try_count,
            },
        ],
        "offers": {
            "@type": "Offer",
            "price": "0",
            "priceCurrency": "KRW",
            "availability": "https://schema.org/InStock",
        },
        "inLanguage": ctx.locale.language_tag(),
        "audience": {
            "@type": "EducationalAudience",
            "educationalRole": "student",
        },
    });

    if document.try_count > 0 {
        json_ld["aggregateRating"] = json!({
            "@type": "AggregateRating",
            "ratingValue": "4.5",
            "ratingCount": document.try_count,
            "bestRating": "5",
            "worstRating": "1",
        });
    }

    json_ld
}
