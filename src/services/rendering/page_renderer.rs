//! # 퀴즈 상세 페이지 렌더러
//!
//! 메타데이터 번들과 공개 문서로 크롤러에게 보낼 완성된 HTML 문서를 만듭니다.
//! 스크립트나 스타일 없이 정적인 마크업만 생성합니다.
//!
//! ## 문서 구조
//!
//! ```text
//! <html lang="{locale}">
//! ├── <head>    ← title, meta, og:*, twitter:*, canonical, JSON-LD
//! └── <body>
//!     ├── <header>  ← 사이트 제목, 태그라인
//!     ├── <main>    ← 퀴즈 문서 article 또는 폴백 article
//!     └── <footer>
//! ```
//!
//! 문서에서 온 모든 텍스트는 `html_escape`로 이스케이프합니다.

use html_escape::{encode_double_quoted_attribute, encode_text};
use crate::domain::entities::{Document, Quiz, QuizType};
use crate::domain::models::{MetadataBundle, PageContext};
use crate::localization::PageText;
use crate::services::metadata::{extract_keywords, QuizTypeBreakdown};
use crate::utils::string_utils::{escape_json_for_script, format_created_date};

/// HTML 문서 전체를 렌더링합니다.
///
/// # Arguments
///
/// * `ctx` - 페이지 컨텍스트 (`lang` 속성에 로케일 사용)
/// * `bundle` - `<head>`에 들어갈 메타데이터
/// * `public_document` - 본문에 쓸 공개 문서. 없으면 폴백 본문을 렌더링합니다.
pub fn render_quiz_page(
    ctx: &PageContext,
    bundle: &MetadataBundle,
    public_document: Option<&Document>,
) -> String {
    let mut html = String::with_capacity(8 * 1024);

    html.push_str("<!DOCTYPE html>\n");
    html.push_str(&format!("<html lang=\"{}\">\n", ctx.locale));
    render_head(&mut html, bundle);
    html.push_str("<body>\n");
    render_site_header(&mut html, &bundle.text);
    html.push_str("<main>\n");
    match public_document {
        Some(document) => render_document(&mut html, &bundle.text, ctx, document),
        None => render_fallback(&mut html, &bundle.text),
    }
    html.push_str("</main>\n");
    render_footer(&mut html, &bundle.text);
    html.push_str("</body>\n</html>\n");

    html
}

fn render_head(html: &mut String, bundle: &MetadataBundle) {
    html.push_str("<head>\n");
    html.push_str("<meta charset=\"utf-8\" />\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\" />\n");
    html.push_str(&format!("<title>{}</title>\n", encode_text(&bundle.title)));

    meta_name(html, "description", &bundle.description);
    meta_name(html, "keywords", &bundle.keywords);
    for author in &bundle.authors {
        meta_name(html, "author", &author.name);
    }
    meta_name(html, "creator", &bundle.creator);
    meta_name(html, "publisher", &bundle.publisher);
    meta_name(html, "robots", &bundle.robots.robots_content());
    meta_name(html, "googlebot", &bundle.robots.googlebot_content());
    html.push_str(&format!(
        "<link rel=\"canonical\" href=\"{}\" />\n",
        encode_double_quoted_attribute(&bundle.alternates.canonical)
    ));

    let og = &bundle.open_graph;
    meta_property(html, "og:title", &og.title);
    meta_property(html, "og:description", &og.description);
    meta_property(html, "og:type", &og.og_type);
    meta_property(html, "og:url", &og.url);
    meta_property(html, "og:site_name", &og.site_name);
    meta_property(html, "og:locale", &og.locale);
    if let Some(published_time) = &og.published_time {
        meta_property(html, "article:published_time", published_time);
    }
    for author in &og.authors {
        meta_property(html, "article:author", author);
    }
    for tag in &og.tags {
        meta_property(html, "article:tag", tag);
    }
    for image in &og.images {
        meta_property(html, "og:image", &image.url);
        meta_property(html, "og:image:width", &image.width.to_string());
        meta_property(html, "og:image:height", &image.height.to_string());
        meta_property(html, "og:image:alt", &image.alt);
        meta_property(html, "og:image:type", &image.mime_type);
    }

    let twitter = &bundle.twitter;
    meta_name(html, "twitter:card", &twitter.card);
    meta_name(html, "twitter:site", &twitter.site);
    if let Some(creator) = &twitter.creator {
        meta_name(html, "twitter:creator", creator);
    }
    meta_name(html, "twitter:title", &twitter.title);
    meta_name(html, "twitter:description", &twitter.description);
    for image in &twitter.images {
        meta_name(html, "twitter:image", &image.url);
        meta_name(html, "twitter:image:alt", &image.alt);
    }

    for (name, content) in &bundle.other {
        meta_name(html, name, content);
    }

    if let Some(json_ld) = &bundle.json_ld {
        html.push_str("<script type=\"application/ld+json\">");
        html.push_str(&escape_json_for_script(&json_ld.to_string()));
        html.push_str("</script>\n");
    }

    html.push_str("</head>\n");
}

fn meta_name(html: &mut String, name: &str, content: &str) {
    html.push_str(&format!(
        "<meta name=\"{}\" content=\"{}\" />\n",
        encode_double_quoted_attribute(name),
        encode_double_quoted_attribute(content)
    ));
}

fn meta_property(html: &mut String, property: &str, content: &str) {
    html.push_str(&format!(
        "<meta property=\"{}\" content=\"{}\" />\n",
        encode_double_quoted_attribute(property),
        encode_double_quoted_attribute(content)
    ));
}

fn render_site_header(html: &mut String, text: &PageText) {
    html.push_str("<header>\n<nav>\n");
    html.push_str(&format!("<h1>{}</h1>\n", text.site_title));
    html.push_str(&format!("<p>{}</p>\n", text.site_tagline));
    html.push_str("</nav>\n</header>\n");
}

fn render_document(html: &mut String, text: &PageText, ctx: &PageContext, document: &Document) {
    html.push_str("<article>\n<header>\n");
    html.push_str(&format!(
        "<h1>{} {}</h1>\n",
        encode_text(&document.emoji),
        encode_text(&document.name)
    ));
    html.push_str("<div>\n");
    html.push_str(&format!(
        "<span>{} {}</span>\n",
        text.category_label,
        encode_text(&document.category)
    ));
    html.push_str(&format!(
        "<span>{} {}</span>\n",
        text.author_label,
        encode_text(&document.creator)
    ));
    html.push_str(&format!(
        "<span>{}</span>\n",
        text.total_count_label(document.total_quiz_count)
    ));
    html.push_str("</div>\n</header>\n");

    html.push_str("<section>\n");
    html.push_str(&format!("<h2>{}</h2>\n<ul>\n", text.quiz_info_title));
    html.push_str(&format!("<li>{} {}</li>\n", text.try_count_label, document.try_count));
    html.push_str(&format!("<li>{} {}</li>\n", text.bookmark_label, document.bookmark_count));
    html.push_str(&format!(
        "<li>{} {}</li>\n",
        text.created_at_label,
        encode_text(&format_created_date(&document.created_at, ctx.locale))
    ));
    html.push_str("</ul>\n</section>\n");

    if !document.quizzes.is_empty() {
        render_quiz_list(html, text, document);
    }

    html.push_str("<section>\n");
    html.push_str(&format!("<h2>{}</h2>\n", text.learn_more_title));
    html.push_str(&format!("<p>{}</p>\n", text.learn_more_body));
    html.push_str(&format!("<p>{}</p>\n", text.learn_more_body2));
    html.push_str("</section>\n</article>\n");
}

fn render_quiz_list(html: &mut String, text: &PageText, document: &Document) {
    let category = encode_text(&document.category);

    html.push_str("<section>\n");
    html.push_str(&format!("<h2>{}</h2>\n", text.quiz_list_title));
    html.push_str(&format!(
        "<p>{}</p>\n<div>\n",
        text.quiz_list_summary(document.quizzes.len(), &category)
    ));

    for (index, quiz) in document.quizzes.iter().enumerate() {
        render_quiz(html, text, index + 1, quiz, &category);
    }
    html.push_str("</div>\n");

    let breakdown = QuizTypeBreakdown::from_quizzes(&document.quizzes);
    let keywords = extract_keywords(document.questions());
    html.push_str("<div>\n");
    html.push_str(&format!("<h3>{}</h3>\n", text.analysis_title));
    html.push_str(&format!(
        "<p>{}</p>\n",
        text.analysis_body(breakdown.multiple_choice, breakdown.mix_up)
    ));
    html.push_str(&format!(
        "<p>{} {}</p>\n",
        text.keywords_label,
        encode_text(&keywords.join(", "))
    ));
    html.push_str("</div>\n</section>\n");
}

fn render_quiz(html: &mut String, text: &PageText, number: usize, quiz: &Quiz, category: &str) {
    let type_label = match quiz.quiz_type {
        QuizType::MultipleChoice => text.type_multiple,
        QuizType::MixUp => text.type_mix_up,
    };

    html.push_str("<article>\n<header>\n");
    html.push_str(&format!("<h3>{}</h3>\n", text.question_label(number)));
    html.push_str(&format!("<span>{} {}</span>\n", text.quiz_type_label, type_label));
    html.push_str("</header>\n<div>\n");
    html.push_str(&format!("<h4>{}</h4>\n", text.question_title));
    html.push_str(&format!("<p>{}</p>\n", encode_text(&quiz.question)));

    if !quiz.options.is_empty() {
        html.push_str(&format!("<div>\n<h5>{}</h5>\n<ul>\n", text.options_title));
        for option in &quiz.options {
            html.push_str(&format!("<li>{}</li>\n", encode_text(option)));
        }
        html.push_str("</ul>\n</div>\n");
    }

    html.push_str("<div>\n");
    html.push_str(&format!("<h5>{}</h5>\n", text.learning_point_title));
    html.push_str(&format!("<p>{}</p>\n", text.learning_point_body(category)));
    html.push_str("</div>\n</div>\n</article>\n");
}

fn render_fallback(html: &mut String, text: &PageText) {
    html.push_str("<article>\n");
    html.push_str(&format!("<h1>{}</h1>\n", text.fallback_title));
    html.push_str(&format!("<p>{}</p>\n", text.fallback_body1));
    html.push_str(&format!("<p>{}</p>\n", text.fallback_body2));
    html.push_str("</article>\n");
}

fn render_footer(html: &mut String, text: &PageText) {
    html.push_str("<footer>\n");
    html.push_str(&format!("<p>{}</p>\n", text.footer_line1));
    html.push_str(&format!("<p>{}</p>\n", text.footer_line2));
    html.push_str("</footer>\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dto::RouteVariant;
    use crate::domain::locale::Locale;
    use crate::services::metadata::{build_json_ld, build_metadata};
    use serde_json::json;

    fn document() -> Document {
        serde_json::from_value(json!({
            "id": 42,
            "creator": "<b>tosser</b>",
            "name": "Trees & </script> Graphs",
            "emoji": "🌳",
            "category": "IT",
            "tryCount": 12,
            "bookmarkCount": 3,
            "totalQuizCount": 2,
            "createdAt": "2024-01-05T12:00:00",
            "quizzes": [
                {
                    "id": 1,
                    "question": "What is a binary tree data structure",
                    "options": ["<script>alert(1)</script>", "A graph"],
                    "quizType": "MULTIPLE_CHOICE"
                },
                {
                    "id": 2,
                    "question": "Stacks are LIFO",
                    "quizType": "MIX_UP"
                }
            ]
        }))
        .unwrap()
    }

    fn render(locale: Locale, document: Option<&Document>) -> String {
        let ctx = PageContext::new(locale, "42", "https://picktoss.com", RouteVariant::Localized);
        let mut bundle = build_metadata(&ctx, document);
        bundle.json_ld = document.map(|doc| build_json_ld(&ctx, doc));
        render_quiz_page(&ctx, &bundle, document)
    }

    #[test]
    fn test_document_page_en() {
        let html = render(Locale::En, Some(&document()));

        assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"en\">"));
        assert!(html.contains("<link rel=\"canonical\" href=\"https://picktoss.com/en/quiz-detail/42\" />"));
        assert!(html.contains("<meta property=\"og:locale\" content=\"en_US\" />"));
        assert!(html.contains("<meta name=\"twitter:card\" content=\"summary_large_image\" />"));
        assert!(html.contains("<meta name=\"theme-color\" content=\"#6366f1\" />"));
        assert!(html.contains("<span>Total 2 questions</span>"));
        assert!(html.contains("<li>Created: 1/5/2024</li>"));
        assert!(html.contains("<h3>Question 1</h3>"));
        assert!(html.contains(
            "<p>This quiz has 1 multiple-choice questions and 1 ordering questions.</p>"
        ));
        assert!(html.contains("Category keywords: What, binary, tree, data, structure, Stacks, are, LIFO"));
    }

    #[test]
    fn test_document_page_ko_labels() {
        let html = render(Locale::Ko, Some(&document()));

        assert!(html.contains("<html lang=\"ko\">"));
        assert!(html.contains("<span>총 2개의 문제</span>"));
        assert!(html.contains("<li>생성일: 2024. 1. 5.</li>"));
        assert!(html.contains("<span>유형: 순서맞추기 문제</span>"));
    }

    #[test]
    fn test_document_text_is_escaped() {
        let html = render(Locale::En, Some(&document()));

        assert!(html.contains("<span>Creator: &lt;b&gt;tosser&lt;/b&gt;</span>"));
        assert!(html.contains("<li>&lt;script&gt;alert(1)&lt;/script&gt;</li>"));
        assert!(!html.contains("<script>alert(1)"));
    }

    #[test]
    fn test_json_ld_cannot_close_script_tag() {
        let html = render(Locale::En, Some(&document()));
        let start = html.find("<script type=\"application/ld+json\">").unwrap();
        let body = &html[start + "<script type=\"application/ld+json\">".len()..];
        let end = body.find("</script>").unwrap();
        let json_ld: serde_json::Value = serde_json::from_str(&body[..end]).unwrap();

        assert_eq!(json_ld["name"], "Trees & </script> Graphs");
        assert!(!body[..end].contains('<'));
    }

    #[test]
    fn test_fallback_page() {
        let html = render(Locale::Ko, None);

        assert!(html.contains("<title>픽토스: 나를 성장시키는 AI 퀴즈</title>"));
        assert!(html.contains("<h1>픽토스 퀴즈</h1>"));
        assert!(html.contains("<p>© 2024 픽토스(Picktoss). 모든 권리 보유.</p>"));
        assert!(!html.contains("application/ld+json"));
    }
}
