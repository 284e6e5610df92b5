//! Document Entity
//!
//! 업스트림 콘텐츠 API(`/documents/{id}`, `/documents/{id}/public`)가 반환하는
//! 퀴즈 문서의 읽기 전용 표현입니다. 이 서비스는 문서를 소유하거나 수정하지 않으며,
//! 요청 하나의 수명 동안만 사용합니다.

use serde::{Deserialize, Serialize};

/// 퀴즈 유형
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuizType {
    /// 순서 맞추기
    MixUp,
    /// 객관식
    MultipleChoice,
}

/// 문서에 포함된 개별 퀴즈
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub id: i64,
    pub question: String,
    #[serde(default)]
    pub answer: String,
    #[serde(default)]
    pub explanation: String,
    /// 선택지 (순서 맞추기 문제는 비어 있을 수 있음)
    #[serde(default)]
    pub options: Vec<String>,
    pub quiz_type: QuizType,
}

/// 퀴즈 문서
///
/// 업스트림 JSON 필드는 camelCase이며, 누락된 불리언/배열 필드는 기본값으로 채웁니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: i64,
    /// 작성자 이름
    pub creator: String,
    /// 문서 제목
    pub name: String,
    pub emoji: String,
    pub category: String,
    /// 도전 횟수
    #[serde(default)]
    pub try_count: i64,
    #[serde(default)]
    pub bookmark_count: i64,
    #[serde(default)]
    pub total_quiz_count: i64,
    #[serde(default)]
    pub is_bookmarked: bool,
    /// ISO-8601 생성 시각 (원문 그대로 보관)
    pub created_at: String,
    #[serde(default)]
    pub is_owner: bool,
    #[serde(default)]
    pub quizzes: Vec<Quiz>,
}

impl Document {
    /// 문서에 포함된 퀴즈 문제 텍스트를 순서대로 반환합니다.
    pub fn questions(&self) -> impl Iterator<Item = &str> {
        self.quizzes.iter().map(|quiz| quiz.question.as_str())
    }
}
