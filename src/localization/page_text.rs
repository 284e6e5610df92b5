//! 페이지 본문 라벨 테이블
//!
//! 크롤러용 HTML 본문에 쓰이는 사람이 읽는 문자열입니다.
//! 로케일마다 하나의 테이블이 있고, 숫자나 카테고리가 들어가는 라벨은 메서드로 제공합니다.

use crate::domain::locale::Locale;

/// 로케일별 페이지 본문 라벨
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageText {
    locale: Locale,
    pub site_title: &'static str,
    pub site_tagline: &'static str,
    pub quiz_info_title: &'static str,
    pub quiz_list_title: &'static str,
    pub quiz_type_label: &'static str,
    pub type_multiple: &'static str,
    pub type_mix_up: &'static str,
    pub question_title: &'static str,
    pub options_title: &'static str,
    pub learning_point_title: &'static str,
    pub analysis_title: &'static str,
    pub keywords_label: &'static str,
    pub learn_more_title: &'static str,
    pub learn_more_body: &'static str,
    pub learn_more_body2: &'static str,
    pub fallback_title: &'static str,
    pub fallback_body1: &'static str,
    pub fallback_body2: &'static str,
    pub footer_line1: &'static str,
    pub footer_line2: &'static str,
    pub created_at_label: &'static str,
    pub try_count_label: &'static str,
    pub bookmark_label: &'static str,
    pub author_label: &'static str,
    pub category_label: &'static str,
}

const KO: PageText = PageText {
    locale: Locale::Ko,
    site_title: "픽토스",
    site_tagline: "나를 성장시키는 AI 퀴즈",
    quiz_info_title: "퀴즈 정보",
    quiz_list_title: "퀴즈 문제 목록",
    quiz_type_label: "유형:",
    type_multiple: "객관식 문제",
    type_mix_up: "순서맞추기 문제",
    question_title: "문제",
    options_title: "선택지",
    learning_point_title: "학습 포인트",
    analysis_title: "문제 유형 분석",
    keywords_label: "관련 키워드:",
    learn_more_title: "픽토스에서 학습하기",
    learn_more_body: "이 퀴즈는 픽토스 플랫폼에서 직접 풀어볼 수 있습니다. AI가 생성한 똑똑한 문제들로 재미있게 학습해보세요.",
    learn_more_body2: "퀴즈를 풀고 나서는 상세한 해설을 통해 더 깊이 있는 학습이 가능합니다.",
    fallback_title: "픽토스 퀴즈",
    fallback_body1: "AI가 만든 똑똑한 퀴즈로 재미있게 학습하세요.",
    fallback_body2: "다양한 카테고리의 퀴즈가 준비되어 있습니다.",
    footer_line1: "© 2024 픽토스(Picktoss). 모든 권리 보유.",
    footer_line2: "나를 성장시키는 AI 퀴즈 플랫폼",
    created_at_label: "생성일:",
    try_count_label: "도전한 사람:",
    bookmark_label: "북마크:",
    author_label: "작성자:",
    category_label: "카테고리:",
};

const EN: PageText = PageText {
    locale: Locale::En,
    site_title: "Picktoss",
    site_tagline: "AI quizzes that help you grow",
    quiz_info_title: "Quiz Info",
    quiz_list_title: "Quiz Questions",
    quiz_type_label: "Type:",
    type_multiple: "Multiple choice",
    type_mix_up: "Ordering",
    question_title: "Question",
    options_title: "Choices",
    learning_point_title: "Learning Point",
    analysis_title: "Question Type Breakdown",
    keywords_label: "Category keywords:",
    learn_more_title: "Learn on Picktoss",
    learn_more_body: "You can solve this quiz on the Picktoss platform. Enjoy AI-generated questions and learn with fun.",
    learn_more_body2: "After solving, deepen your understanding with detailed explanations.",
    fallback_title: "Picktoss Quiz",
    fallback_body1: "Enjoy smart AI-made quizzes and learn with fun.",
    fallback_body2: "A variety of categories are ready for you.",
    footer_line1: "© 2024 Picktoss. All rights reserved.",
    footer_line2: "AI quiz platform for growth",
    created_at_label: "Created:",
    try_count_label: "Attempts:",
    bookmark_label: "Bookmarks:",
    author_label: "Creator:",
    category_label: "Category:",
};

impl PageText {
    pub fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::Ko => KO,
            Locale::En => EN,
        }
    }

    pub fn quiz_list_summary(&self, count: usize, category: &str) -> String {
        match self.locale {
            Locale::Ko => format!(
                "총 {}개의 문제가 포함되어 있습니다. 각 문제를 통해 {} 분야의 지식을 학습할 수 있습니다.",
                count, category
            ),
            Locale::En => format!(
                "This quiz includes {} questions. Learn key concepts in {}.",
                count, category
            ),
        }
    }

    /// 1부터 시작하는 문제 번호 라벨
    pub fn question_label(&self, index: usize) -> String {
        match self.locale {
            Locale::Ko => format!("문제 {}", index),
            Locale::En => format!("Question {}", index),
        }
    }

    pub fn learning_point_body(&self, category: &str) -> String {
        match self.locale {
            Locale::Ko => format!(
                "이 문제는 {} 분야의 핵심 개념을 다루고 있습니다. 정답과 상세한 해설은 픽토스 플랫폼에서 확인하실 수 있습니다.",
                category
            ),
            Locale::En => format!(
                "This question covers core concepts in {}. Find answers and full explanations on Picktoss.",
                category
            ),
        }
    }

    pub fn analysis_body(&self, multiple_choice: usize, mix_up: usize) -> String {
        match self.locale {
            Locale::Ko => format!(
                "이 퀴즈는 {}개의 객관식 문제와 {}개의 순서맞추기 문제로 구성되어 있습니다.",
                multiple_choice, mix_up
            ),
            Locale::En => format!(
                "This quiz has {} multiple-choice questions and {} ordering questions.",
                multiple_choice, mix_up
            ),
        }
    }

    pub fn total_count_label(&self, count: i64) -> String {
        match self.locale {
            Locale::Ko => format!("총 {}개의 문제", count),
            Locale::En => format!("Total {} questions", count),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_count_label() {
        assert_eq!(PageText::for_locale(Locale::Ko).total_count_label(5), "총 5개의 문제");
        assert!(PageText::for_locale(Locale::En).total_count_label(5).ends_with("5 questions"));
    }

    #[test]
    fn test_templated_labels_per_locale() {
        let ko = PageText::for_locale(Locale::Ko);
        let en = PageText::for_locale(Locale::En);

        assert_eq!(ko.question_label(3), "문제 3");
        assert_eq!(en.question_label(3), "Question 3");
        assert_eq!(
            en.analysis_body(3, 2),
            "This quiz has 3 multiple-choice questions and 2 ordering questions."
        );
        assert!(ko.quiz_list_summary(4, "IT").starts_with("총 4개의 문제가"));
        assert!(en.learning_point_body("History").contains("in History."));
    }

    #[test]
    fn test_tables_are_locale_specific() {
        assert_eq!(PageText::for_locale(Locale::Ko).site_title, "픽토스");
        assert_eq!(PageText::for_locale(Locale::En).site_title, "Picktoss");
    }
}
