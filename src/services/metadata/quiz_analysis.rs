//! 퀴즈 목록 분석
//!
//! 페이지 본문의 "문제 유형 분석" 단락과 키워드 목록을 만드는 순수 함수들입니다.

use crate::domain::entities::{Quiz, QuizType};

/// 추출할 키워드 최대 개수
pub const MAX_KEYWORDS: usize = 10;

/// 문제 텍스트에서 키워드를 추출합니다.
///
/// 공백으로 분리한 토큰 중 2글자보다 긴 것만 남기고,
/// 처음 등장한 순서대로 중복을 제거한 뒤 최대 [`MAX_KEYWORDS`]개를 반환합니다.
/// 길이는 바이트가 아닌 문자 수로 셉니다.
///
/// # Examples
///
/// ```rust,ignore
/// let keywords = extract_keywords(["What is a binary tree data structure"]);
/// assert_eq!(keywords, vec!["What", "binary", "tree", "data", "structure"]);
/// ```
pub fn extract_keywords<'a, I>(questions: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut keywords: Vec<String> = Vec::new();

    for token in questions.into_iter().flat_map(str::split_whitespace) {
        if keywords.len() == MAX_KEYWORDS {
            break;
        }
        if token.chars().count() > 2 && !keywords.iter().any(|k| k == token) {
            keywords.push(token.to_string());
        }
    }

    keywords
}

/// 문제 유형별 개수
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QuizTypeBreakdown {
    pub multiple_choice: usize,
    pub mix_up: usize,
}

impl QuizTypeBreakdown {
    pub fn from_quizzes(quizzes: &[Quiz]) -> Self {
        let count = |quiz_type: QuizType| {
            quizzes.iter().filter(|quiz| quiz.quiz_type == quiz_type).count()
        };

        Self {
            multiple_choice: count(QuizType::MultipleChoice),
            mix_up: count(QuizType::MixUp),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiz(id: i64, quiz_type: QuizType) -> Quiz {
        Quiz {
            id,
            question: format!("question {}", id),
            answer: String::new(),
            explanation: String::new(),
            options: Vec::new(),
            quiz_type,
        }
    }

    #[test]
    fn test_extract_keywords_keeps_order_and_drops_short_tokens() {
        let keywords = extract_keywords(["What is a binary tree data structure"]);

        assert_eq!(keywords, vec!["What", "binary", "tree", "data", "structure"]);
    }

    #[test]
    fn test_extract_keywords_over_two_questions() {
        let keywords = extract_keywords(["What is a binary tree", "A binary tree is a data structure"]);

        assert_eq!(keywords, vec!["What", "binary", "tree", "data", "structure"]);
        assert!(!keywords.iter().any(|keyword| keyword == "is" || keyword == "a" || keyword == "A"));
    }

    #[test]
    fn test_extract_keywords_deduplicates_across_questions() {
        let keywords = extract_keywords(["binary tree basics", "balanced binary tree"]);

        assert_eq!(keywords, vec!["binary", "tree", "basics", "balanced"]);
    }

    #[test]
    fn test_extract_keywords_caps_at_ten() {
        let question = "alpha bravo charlie delta echo foxtrot golf hotel india juliet kilo lima";
        let keywords = extract_keywords([question]);

        assert_eq!(keywords.len(), MAX_KEYWORDS);
        assert_eq!(keywords.last().map(String::as_str), Some("juliet"));
    }

    #[test]
    fn test_extract_keywords_counts_characters_not_bytes() {
        // 한글 2글자는 6바이트지만 제외되어야 합니다.
        let keywords = extract_keywords(["스택 자료구조 큐"]);

        assert_eq!(keywords, vec!["자료구조"]);
    }

    #[test]
    fn test_type_breakdown() {
        let quizzes = vec![
            quiz(1, QuizType::MultipleChoice),
            quiz(2, QuizType::MixUp),
            quiz(3, QuizType::MultipleChoice),
            quiz(4, QuizType::MixUp),
            quiz(5, QuizType::MultipleChoice),
        ];

        let breakdown = QuizTypeBreakdown::from_quizzes(&quizzes);

        assert_eq!(breakdown, QuizTypeBreakdown { multiple_choice: 3, mix_up: 2 });
        assert_eq!(QuizTypeBreakdown::from_quizzes(&[]), QuizTypeBreakdown::default());
    }

    #[test]
    fn test_type_breakdown_ignores_order() {
        let expected = QuizTypeBreakdown { multiple_choice: 3, mix_up: 2 };
        let orderings = [
            [QuizType::MultipleChoice, QuizType::MultipleChoice, QuizType::MultipleChoice, QuizType::MixUp, QuizType::MixUp],
            [QuizType::MixUp, QuizType::MixUp, QuizType::MultipleChoice, QuizType::MultipleChoice, QuizType::MultipleChoice],
            [QuizType::MixUp, QuizType::MultipleChoice, QuizType::MixUp, QuizType::MultipleChoice, QuizType::MultipleChoice],
        ];

        for ordering in orderings {
            let quizzes: Vec<Quiz> = ordering
                .into_iter()
                .enumerate()
                .map(|(i, quiz_type)| quiz(i as i64, quiz_type))
                .collect();

            assert_eq!(QuizTypeBreakdown::from_quizzes(&quizzes), expected);

            let reversed: Vec<Quiz> = quizzes.into_iter().rev().collect();
            assert_eq!(QuizTypeBreakdown::from_quizzes(&reversed), expected);
        }
    }
}
