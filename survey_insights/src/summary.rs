//! Key insights: one summary card per question, highlighting the most
//! frequent answer.

use crate::config::{KeyInsight, QuestionData};

/// Question texts longer than this are shortened in the card titles.
pub const MAX_TITLE_LENGTH: usize = 60;

/// Shortens a question to at most `MAX_TITLE_LENGTH` characters, followed by `...` if it was cut.
pub fn short_title(full_title: &str) -> String {
    if full_title.chars().count() <= MAX_TITLE_LENGTH {
        return full_title.to_string();
    }
    let cut: String = full_title.chars().take(MAX_TITLE_LENGTH).collect();
    format!("{}...", cut)
}

/// The summary card of a question.
///
/// The top finding is the answer with the largest value. In case of ties, the
/// first answer wins.
pub fn key_insight(question: &QuestionData) -> KeyInsight {
    let mut top: Option<(usize, i64)> = None;
    for (idx, v) in question.data.values.iter().enumerate() {
        match top {
            Some((_, best)) if *v <= best => {}
            _ => top = Some((idx, *v)),
        }
    }
    let (top_finding, percentage) = match top {
        Some((idx, v)) => (
            question.data.labels.get(idx).cloned().unwrap_or_default(),
            v,
        ),
        None => (String::new(), 0),
    };
    KeyInsight {
        question_id: question.question_id,
        title: format!(
            "Q{}: {}",
            question.question_id,
            short_title(&question.question_text)
        ),
        top_finding,
        percentage,
        description: question.key_takeaways.first().cloned().unwrap_or_default(),
    }
}

/// The summary cards of all the questions, in the same order.
pub fn key_insights(questions: &[QuestionData]) -> Vec<KeyInsight> {
    questions.iter().map(key_insight).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ChartData, ChartType};

    fn question(values: Vec<i64>) -> QuestionData {
        QuestionData {
            question_id: 6,
            question_text: "Do You Prefer Buying Jewelry Online Or In-store?".to_string(),
            chart_type: ChartType::HorizontalBar,
            data: ChartData {
                labels: vec!["In-store".to_string(), "Online".to_string(), "Both".to_string()],
                values,
                colors: None,
            },
            key_takeaways: vec!["first".to_string(), "second".to_string()],
            insights: String::new(),
        }
    }

    #[test]
    fn short_titles() {
        let short = "How Often Do You Purchase Jewelry For Personal Use?";
        assert_eq!(short_title(short), short);
        let long = crate::QUESTIONS[0].question_text;
        assert_eq!(
            short_title(long),
            "What Motivates Your Decision To Purchase Jewelry Worth ₹50,0..."
        );
        let exact: String = "x".repeat(MAX_TITLE_LENGTH);
        assert_eq!(short_title(&exact), exact);
    }

    #[test]
    fn top_finding_is_the_largest_value() {
        let insight = key_insight(&question(vec![44, 46, 10]));
        assert_eq!(insight.top_finding, "Online");
        assert_eq!(insight.percentage, 46);
        assert_eq!(insight.description, "first");
        assert_eq!(
            insight.title,
            "Q6: Do You Prefer Buying Jewelry Online Or In-store?"
        );
    }

    #[test]
    fn ties_go_to_the_first_answer() {
        let insight = key_insight(&question(vec![45, 45, 10]));
        assert_eq!(insight.top_finding, "In-store");
        assert_eq!(insight.percentage, 45);
    }

    #[test]
    fn insights_for_a_city() {
        let idx = crate::navigation::SurveyIndex::new().unwrap();
        let city = idx.find_city("mumbai-mar-w1").unwrap().city.clone();
        let data = idx.resolve(&city).unwrap();
        let cards = key_insights(&data.questions);
        assert_eq!(cards.len(), 14);
        assert_eq!(cards[0].top_finding, "Bridal/Marriage");
        assert_eq!(cards[0].percentage, 45);
        assert_eq!(cards[7].top_finding, "Stick to Known Brands");
        assert_eq!(cards[7].percentage, 56);
        assert!(cards[0].title.starts_with("Q1: What Motivates"));
    }
}
