//! 메타데이터 번들 모델
//!
//! 크롤러에게 제공할 `<head>` 메타데이터 전체를 표현합니다.
//! 요청마다 새로 만들어지며 저장되지 않습니다.
//! JSON으로 직렬화하면 `/api/v1/metadata/{locale}/{id}` 응답이 됩니다.

use std::collections::BTreeMap;
use serde::Serialize;
use serde_json::Value;
use crate::localization::PageText;

/// 메타데이터 번들
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataBundle {
    pub title: String,
    pub description: String,
    /// `", "`로 이어 붙인 키워드 문자열
    pub keywords: String,
    pub authors: Vec<Author>,
    pub creator: String,
    pub publisher: String,
    pub robots: Robots,
    pub open_graph: OpenGraph,
    pub twitter: TwitterCard,
    pub alternates: Alternates,
    /// `theme-color`, `color-scheme`, `format-detection` 등 기타 메타 태그
    pub other: BTreeMap<String, String>,
    /// `CreativeWork` JSON-LD (문서가 있을 때만)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json_ld: Option<Value>,
    /// 페이지 본문 라벨
    #[serde(skip)]
    pub text: PageText,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Author {
    pub name: String,
}

/// 검색 엔진 색인 지시자
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Robots {
    pub index: bool,
    pub follow: bool,
    pub google_bot: GoogleBot,
}

#[derive(Debug, Clone, Serialize)]
pub struct GoogleBot {
    pub index: bool,
    pub follow: bool,
    #[serde(rename = "max-video-preview")]
    pub max_video_preview: i32,
    #[serde(rename = "max-image-preview")]
    pub max_image_preview: String,
    #[serde(rename = "max-snippet")]
    pub max_snippet: i32,
}

impl Robots {
    /// 색인/팔로우 모두 허용하는 기본 지시자
    pub fn index_all() -> Self {
        Self {
            index: true,
            follow: true,
            google_bot: GoogleBot {
                index: true,
                follow: true,
                max_video_preview: -1,
                max_image_preview: "large".to_string(),
                max_snippet: -1,
            },
        }
    }

    /// `<meta name="robots">` content 값
    pub fn robots_content(&self) -> String {
        directive_pair(self.index, self.follow)
    }

    /// `<meta name="googlebot">` content 값
    pub fn googlebot_content(&self) -> String {
        let bot = &self.google_bot;
        format!(
            "{}, max-snippet:{}, max-image-preview:{}, max-video-preview:{}",
            directive_pair(bot.index, bot.follow),
            bot.max_snippet,
            bot.max_image_preview,
            bot.max_video_preview
        )
    }
}

fn directive_pair(index: bool, follow: bool) -> String {
    format!(
        "{}, {}",
        if index { "index" } else { "noindex" },
        if follow { "follow" } else { "nofollow" }
    )
}

/// Open Graph 필드
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenGraph {
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub og_type: String,
    pub url: String,
    pub site_name: String,
    pub locale: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_time: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub authors: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    pub images: Vec<OgImage>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OgImage {
    pub url: String,
    pub width: u32,
    pub height: u32,
    pub alt: String,
    #[serde(rename = "type")]
    pub mime_type: String,
}

/// Twitter Card 필드
#[derive(Debug, Clone, Serialize)]
pub struct TwitterCard {
    pub card: String,
    pub site: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,
    pub title: String,
    pub description: String,
    pub images: Vec<TwitterImage>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TwitterImage {
    pub url: String,
    pub alt: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Alternates {
    pub canonical: String,
}
