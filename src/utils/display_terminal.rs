//! 터미널 출력 포맷팅 유틸리티
//!
//! 서버 시작 과정에서 사용되는 터미널 출력 함수들을 제공합니다.
//! 박스 형태의 제목, 진행 단계 표시, 설정 요약을 시각적으로 표현합니다.

use crate::config::SiteSettings;

/// 박스 형태로 둘러싸인 제목을 출력합니다
///
/// Unicode 박스 문자를 사용하며 텍스트는 중앙 정렬됩니다.
///
/// Output:
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║                  Server Started                  ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn print_boxed_title(title: &str) {
    let content_width = 50;
    let border = "═".repeat(content_width);

    println!("╔{}╗", border);
    println!("║{:^50}║", title);
    println!("╚{}╝", border);
}

/// 진행 단계 시작을 표시합니다
///
/// ```text
/// → Step 1: Compiling crawler rules
/// ```
pub fn print_step_start(step: u8, description: &str) {
    println!("→ Step {}: {}", step, description);
}

/// 진행 단계 완료를 표시합니다
///
/// ```text
/// ✓ Step 1: Crawler rules compiled (12 items)
/// ```
pub fn print_step_complete(step: u8, description: &str, count: usize) {
    println!("✓ Step {}: {} ({} items)", step, description, count);
}

/// 서브 작업의 상태를 표시합니다
///
/// ```text
///    ├─ Upstream API: http://localhost:8081
/// ```
pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

/// 시작 설정 요약을 출력합니다
///
/// # Arguments
///
/// * `settings` - 공개 사이트 설정
/// * `api_url` - 업스트림 API 베이스 URL
/// * `bind_address` - 서버 바인딩 주소
///
/// Output:
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║            🎉 QUIZ PREVIEW SERVICE READY          ║
/// ╚══════════════════════════════════════════════════╝
///    🌍 Environment: production
///    🔗 Upstream API: http://localhost:8081
///    🏠 Public Base URL: https://picktoss.com
///    ↪️ Human Redirect: production (active)
///    🚀 Listening: 0.0.0.0:8080
/// ```
pub fn print_startup_summary(settings: &SiteSettings, api_url: &str, bind_address: &str) {
    let redirect_state = if settings.should_redirect_humans() { "active" } else { "inactive" };

    println!();
    print_boxed_title("🎉 QUIZ PREVIEW SERVICE READY");
    println!("   🌍 Environment: {}", settings.environment.as_str());
    println!("   🔗 Upstream API: {}", api_url);
    println!("   🏠 Public Base URL: {}", settings.public_base_url);
    println!(
        "   ↪️ Human Redirect: {} ({}) → https://{}",
        settings.redirect_policy.as_str(),
        redirect_state,
        settings.production_host
    );
    println!("   🚀 Listening: {}", bind_address);
    println!();
}
