//! # 문자열 유틸리티
//!
//! HTML 렌더링에 쓰이는 문자열 처리 함수들입니다.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use crate::domain::locale::Locale;

/// 업스트림 생성 시각을 로케일별 날짜 문자열로 변환합니다.
///
/// RFC 3339, 타임존 없는 ISO-8601 날짜시각, 날짜만 있는 형식을 순서대로 시도하며
/// 모두 실패하면 원문을 그대로 반환합니다.
///
/// | 로케일 | 형식 | 예 |
/// |--------|------|----|
/// | ko | `YYYY. M. D.` | `2024. 1. 5.` |
/// | en | `M/D/YYYY` | `1/5/2024` |
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::format_created_date;
///
/// assert_eq!(format_created_date("2024-01-05T12:00:00", Locale::Ko), "2024. 1. 5.");
/// assert_eq!(format_created_date("not a date", Locale::En), "not a date");
/// ```
pub fn format_created_date(raw: &str, locale: Locale) -> String {
    let Some(date) = parse_date(raw.trim()) else {
        return raw.to_string();
    };

    match locale {
        Locale::Ko => date.format("%Y. %-m. %-d.").to_string(),
        Locale::En => date.format("%-m/%-d/%Y").to_string(),
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(date_time) = DateTime::parse_from_rfc3339(raw) {
        return Some(date_time.date_naive());
    }
    if let Ok(date_time) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(date_time.date());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// `<script>` 안에 넣을 JSON 문자열을 안전하게 만듭니다.
///
/// `<`를 `\u003c`로 바꾸어 문서 텍스트에 `</script>`가 있어도 스크립트가 닫히지 않게 합니다.
/// JSON 문자열 안의 `\u003c`는 파싱 시 다시 `<`가 되므로 데이터는 바뀌지 않습니다.
pub fn escape_json_for_script(json: &str) -> String {
    json.replace('<', "\\u003c")
}
