//! 페이지 렌더링 컨텍스트

use crate::domain::dto::RouteVariant;
use crate::domain::locale::Locale;

/// 메타데이터 생성과 페이지 렌더링에 필요한 요청 단위 컨텍스트
///
/// 절대 URL(canonical, Open Graph 이미지, 로고)은 모두 공개 베이스 URL을 기준으로 만듭니다.
#[derive(Debug, Clone)]
pub struct PageContext {
    pub locale: Locale,
    pub id: String,
    /// 공개 베이스 URL (끝의 `/` 제거됨)
    pub base_url: String,
    pub variant: RouteVariant,
}

impl PageContext {
    pub fn new(
        locale: Locale,
        id: impl Into<String>,
        base_url: impl Into<String>,
        variant: RouteVariant,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            locale,
            id: id.into(),
            base_url,
            variant,
        }
    }

    pub fn canonical_url(&self) -> String {
        format!("{}{}", self.base_url, self.variant.path(self.locale, &self.id))
    }

    pub fn og_image_url(&self) -> String {
        format!("{}{}", self.base_url, self.locale.og_image_path())
    }

    pub fn logo_url(&self) -> String {
        format!("{}/logo.png", self.base_url)
    }
}
