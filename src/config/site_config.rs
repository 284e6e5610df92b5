//! 업스트림 API 및 공개 사이트 설정
//!
//! 콘텐츠 API 위치, 공개 베이스 URL, 사람 방문자 리다이렉트 정책을 관리합니다.

use std::env;
use std::time::Duration;
use log::warn;
use crate::config::data_config::Environment;
use crate::domain::dto::RouteVariant;
use crate::domain::locale::Locale;

/// 업스트림 콘텐츠 API 설정
pub struct ApiConfig;

impl ApiConfig {
    /// 업스트림 API 베이스 URL
    ///
    /// `API_URL` 환경 변수를 사용하며 끝의 `/`는 제거합니다.
    /// 기본값: `http://localhost:8081`
    pub fn base_url() -> String {
        env::var("API_URL")
            .unwrap_or_else(|_| "http://localhost:8081".to_string())
            .trim_end_matches('/')
            .to_string()
    }

    /// 업스트림 요청 타임아웃. 기본값: 5초
    pub fn timeout() -> Duration {
        let secs = env::var("API_TIMEOUT_SECS")
            .ok()
            .and_then(|raw| raw.parse::<u64>().ok())
            .unwrap_or(5);

        Duration::from_secs(secs)
    }
}

/// 사람 방문자 리다이렉트 정책
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RedirectPolicy {
    /// 프로덕션 환경에서만 리다이렉트
    #[default]
    ProductionOnly,
    /// 항상 리다이렉트
    Always,
    /// 리다이렉트하지 않고 항상 페이지를 렌더링
    Never,
}

impl RedirectPolicy {
    /// `production`, `always`, `never` 중 하나를 파싱합니다.
    ///
    /// 알 수 없는 값은 경고를 남기고 `ProductionOnly`로 처리합니다.
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "always" => RedirectPolicy::Always,
            "never" => RedirectPolicy::Never,
            "production" | "" => RedirectPolicy::ProductionOnly,
            other => {
                warn!("⚠️ 알 수 없는 HUMAN_REDIRECT_POLICY 값: {}. production 정책 사용", other);
                RedirectPolicy::ProductionOnly
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RedirectPolicy::ProductionOnly => "production",
            RedirectPolicy::Always => "always",
            RedirectPolicy::Never => "never",
        }
    }
}

/// 공개 사이트 설정
///
/// 시작 시 한 번 만들어져 `web::Data`로 공유되며 이후 변경되지 않습니다.
#[derive(Debug, Clone)]
pub struct SiteSettings {
    /// canonical URL, Open Graph 이미지에 쓰이는 베이스 URL (끝의 `/` 제거됨)
    pub public_base_url: String,
    /// 사람 방문자를 보낼 호스트 (`picktoss.com`)
    pub production_host: String,
    pub redirect_policy: RedirectPolicy,
    pub environment: Environment,
}

impl SiteSettings {
    pub fn new(
        public_base_url: impl Into<String>,
        production_host: impl Into<String>,
        redirect_policy: RedirectPolicy,
        environment: Environment,
    ) -> Self {
        Self {
            public_base_url: public_base_url.into().trim_end_matches('/').to_string(),
            production_host: production_host.into(),
            redirect_policy,
            environment,
        }
    }

    /// 환경 변수에서 사이트 설정을 읽습니다.
    ///
    /// # Environment Variables
    ///
    /// - `PUBLIC_BASE_URL` (없으면 `NEXT_PUBLIC_BASE_URL`, 기본값 `https://picktoss.com`)
    /// - `PRODUCTION_HOST` (기본값 `picktoss.com`)
    /// - `HUMAN_REDIRECT_POLICY` (`production` | `always` | `never`)
    pub fn from_env() -> Self {
        let public_base_url = env::var("PUBLIC_BASE_URL")
            .or_else(|_| env::var("NEXT_PUBLIC_BASE_URL"))
            .unwrap_or_else(|_| "https://picktoss.com".to_string());
        let production_host =
            env::var("PRODUCTION_HOST").unwrap_or_else(|_| "picktoss.com".to_string());
        let redirect_policy = env::var("HUMAN_REDIRECT_POLICY")
            .map(|raw| RedirectPolicy::from_str(&raw))
            .unwrap_or_default();

        Self::new(public_base_url, production_host, redirect_policy, Environment::current())
    }

    /// 사람 방문자를 프로덕션 사이트로 리다이렉트해야 하는지 여부
    pub fn should_redirect_humans(&self) -> bool {
        match self.redirect_policy {
            RedirectPolicy::Always => true,
            RedirectPolicy::Never => false,
            RedirectPolicy::ProductionOnly => self.environment.is_production(),
        }
    }

    /// 사람 방문자용 리다이렉트 URL
    ///
    /// ```rust,ignore
    /// settings.redirect_url(RouteVariant::Localized, Locale::En, "42");
    /// // => "https://picktoss.com/en/quiz-detail/42"
    /// ```
    pub fn redirect_url(&self, variant: RouteVariant, locale: Locale, id: &str) -> String {
        format!("https://{}{}", self.production_host, variant.path(locale, id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(policy: RedirectPolicy, environment: Environment) -> SiteSettings {
        SiteSettings::new("https://picktoss.com/", "picktoss.com", policy, environment)
    }

    #[test]
    fn test_redirect_policy_parsing() {
        assert_eq!(RedirectPolicy::from_str("always"), RedirectPolicy::Always);
        assert_eq!(RedirectPolicy::from_str("NEVER"), RedirectPolicy::Never);
        assert_eq!(RedirectPolicy::from_str("production"), RedirectPolicy::ProductionOnly);
        assert_eq!(RedirectPolicy::from_str("sometimes"), RedirectPolicy::ProductionOnly);
    }

    #[test]
    fn test_should_redirect_humans() {
        assert!(settings(RedirectPolicy::ProductionOnly, Environment::Production).should_redirect_humans());
        assert!(!settings(RedirectPolicy::ProductionOnly, Environment::Development).should_redirect_humans());
        assert!(settings(RedirectPolicy::Always, Environment::Development).should_redirect_humans());
        assert!(!settings(RedirectPolicy::Never, Environment::Production).should_redirect_humans());
    }

    #[test]
    fn test_redirect_url_per_variant() {
        let settings = settings(RedirectPolicy::Always, Environment::Production);

        assert_eq!(
            settings.redirect_url(RouteVariant::Localized, Locale::En, "42"),
            "https://picktoss.com/en/quiz-detail/42"
        );
        assert_eq!(
            settings.redirect_url(RouteVariant::Legacy, Locale::Ko, "42"),
            "https://picktoss.com/explore/detail/42"
        );
    }

    #[test]
    fn test_public_base_url_is_trimmed() {
        assert_eq!(
            settings(RedirectPolicy::Never, Environment::Test).public_base_url,
            "https://picktoss.com"
        );
    }
}
