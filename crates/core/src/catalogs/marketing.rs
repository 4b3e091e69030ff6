use crate::error::Error;
use crate::model::{Catalog, OptionLabel, Question, Topic};

use crate::model::OptionLabel::{A, B, C, D};

pub const DIGITAL_MARKETING: &str = "Digital Marketing Fundamentals";
pub const CONTENT_STRATEGY: &str = "Content Strategy";
pub const PERSONAL_BRANDING: &str = "Personal Branding";

fn question(prompt: &str, options: [&str; 4], correct: OptionLabel) -> Result<Question, Error> {
    Ok(Question::new(
        prompt,
        [A, B, C, D].into_iter().zip(options),
        correct,
    )?)
}

/// The marketing knowledge assessment: three topics, two questions each.
///
/// # Errors
///
/// Only fails if the literal data below is malformed.
pub fn marketing() -> Result<Catalog, Error> {
    let digital = Topic::new(
        DIGITAL_MARKETING,
        vec![
            question(
                "Which digital marketing channel typically has the highest ROI?",
                [
                    "Email Marketing",
                    "Social Media Marketing",
                    "Display Advertising",
                    "Print Media",
                ],
                A,
            )?,
            question(
                "What is the primary purpose of SEO?",
                [
                    "To increase website loading speed",
                    "To improve search engine rankings",
                    "To manage social media posts",
                    "To create email campaigns",
                ],
                B,
            )?,
        ],
    );

    let content = Topic::new(
        CONTENT_STRATEGY,
        vec![
            question(
                "What is the most important factor in creating a successful content strategy?",
                [
                    "Posting frequently",
                    "Understanding your audience",
                    "Using trending hashtags",
                    "Having a large budget",
                ],
                B,
            )?,
            question(
                "Which metric best indicates content engagement?",
                [
                    "Number of views",
                    "Time spent on page",
                    "Social media shares",
                    "Number of backlinks",
                ],
                B,
            )?,
        ],
    );

    let branding = Topic::new(
        PERSONAL_BRANDING,
        vec![
            question(
                "Which element is most crucial for personal branding?",
                [
                    "Having a large following",
                    "Posting daily content",
                    "Consistency in messaging and values",
                    "Using professional photos",
                ],
                C,
            )?,
            question(
                "What is the best platform for B2B personal branding?",
                ["TikTok", "Instagram", "LinkedIn", "Facebook"],
                C,
            )?,
        ],
    );

    Ok(Catalog::new(vec![digital, content, branding])?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locator::{Location, locate};
    use crate::model::QuestionKey;

    #[test]
    fn has_three_topics_of_two_questions() {
        let catalog = marketing().unwrap();
        let names: Vec<_> = catalog.topics().iter().map(Topic::name).collect();
        assert_eq!(names, vec![DIGITAL_MARKETING, CONTENT_STRATEGY, PERSONAL_BRANDING]);
        assert_eq!(catalog.total_questions(), 6);
        assert!(catalog.topics().iter().all(|t| t.len() == 2));
    }

    #[test]
    fn fourth_question_is_second_content_question() {
        let catalog = marketing().unwrap();
        let Location::Question(key) = locate(3, &catalog) else {
            panic!("cursor 3 is inside the catalog");
        };
        assert_eq!(key, QuestionKey::new(CONTENT_STRATEGY, 1));
        let question = catalog.question(&key).unwrap();
        assert_eq!(question.correct(), B);
        assert_eq!(question.option_text(B), Some("Time spent on page"));
    }
}
