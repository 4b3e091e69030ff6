use serde::Serialize;

use assess_core::model::OptionLabel;

use super::parse::{McqQuestion, parse_mcq};
use super::prompt::render_prompt;
use crate::error::AptitudeError;

/// Questions per test, the open-ended opener included.
pub const QUESTION_COUNT: usize = 10;

/// One generated question and the user's response to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Exchange {
    pub question: String,
    pub answer: String,
}

/// What the user should see next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AptitudeStep {
    /// The generator has to be called before anything can be shown.
    Pending,
    OpenEnded { number: usize, prompt: String },
    MultipleChoice { number: usize, question: McqQuestion },
    Complete { summary: String },
}

/// In-memory state of one aptitude test.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AptitudeSession {
    current: usize,
    exchanges: Vec<Exchange>,
    summary: Option<String>,
}

impl AptitudeSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero-based index of the question being asked.
    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn exchanges(&self) -> &[Exchange] {
        &self.exchanges
    }

    #[must_use]
    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.summary.is_some()
    }

    #[must_use]
    pub fn needs_question(&self) -> bool {
        self.current < QUESTION_COUNT && self.exchanges.len() <= self.current
    }

    #[must_use]
    pub fn awaiting_summary(&self) -> bool {
        self.current >= QUESTION_COUNT && self.summary.is_none()
    }

    /// Prompt for the next generator call.
    #[must_use]
    pub fn prompt(&self) -> String {
        render_prompt(self.current, &self.exchanges)
    }

    /// Store the generated text for the current question.
    ///
    /// # Errors
    ///
    /// Returns `AptitudeError::Completed` when no question is missing, either
    /// because the current one was already generated or all have been asked.
    pub fn push_question(&mut self, text: impl Into<String>) -> Result<(), AptitudeError> {
        if !self.needs_question() {
            return Err(AptitudeError::Completed);
        }
        self.exchanges.push(Exchange {
            question: text.into(),
            answer: String::new(),
        });
        Ok(())
    }

    #[must_use]
    pub fn step(&self) -> AptitudeStep {
        if let Some(summary) = &self.summary {
            return AptitudeStep::Complete {
                summary: summary.clone(),
            };
        }
        let Some(exchange) = self.exchanges.get(self.current) else {
            return AptitudeStep::Pending;
        };
        let number = self.current + 1;
        if self.current == 0 {
            AptitudeStep::OpenEnded {
                number,
                prompt: exchange.question.clone(),
            }
        } else {
            AptitudeStep::MultipleChoice {
                number,
                question: parse_mcq(&exchange.question),
            }
        }
    }

    /// Record the response to the current question and move on.
    ///
    /// Multiple-choice responses must name one of the parsed options, unless
    /// the generated question had none. Returns `true` when this was the last
    /// question and the summary is due.
    ///
    /// # Errors
    ///
    /// Returns `AptitudeError::Completed` after the last question,
    /// `AptitudeError::NoPendingQuestion` before the current question exists,
    /// and `AptitudeError::InvalidChoice` for an unknown option.
    pub fn answer(&mut self, response: &str) -> Result<bool, AptitudeError> {
        if self.current >= QUESTION_COUNT {
            return Err(AptitudeError::Completed);
        }
        let current = self.current;
        let Some(exchange) = self.exchanges.get_mut(current) else {
            return Err(AptitudeError::NoPendingQuestion);
        };

        let answer = if current == 0 {
            response.trim().to_string()
        } else {
            let question = parse_mcq(&exchange.question);
            if question.options.is_empty() {
                response.trim().to_string()
            } else {
                let label = response
                    .parse::<OptionLabel>()
                    .ok()
                    .filter(|label| question.has_option(*label))
                    .ok_or_else(|| AptitudeError::InvalidChoice(response.to_string()))?;
                label.to_string()
            }
        };

        exchange.answer = answer;
        self.current += 1;
        Ok(self.current == QUESTION_COUNT)
    }

    /// Store the final summary and complete the test.
    ///
    /// # Errors
    ///
    /// Returns `AptitudeError::NoPendingQuestion` while questions remain and
    /// `AptitudeError::Completed` if a summary is already present.
    pub fn finish(&mut self, summary: impl Into<String>) -> Result<(), AptitudeError> {
        if self.summary.is_some() {
            return Err(AptitudeError::Completed);
        }
        if self.current < QUESTION_COUNT {
            return Err(AptitudeError::NoPendingQuestion);
        }
        self.summary = Some(summary.into());
        Ok(())
    }

    pub fn restart(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MCQ: &str = "Pick an approach\nA) Script it\nB) Model the cost\nC) Sketch it\nD) Survey users";

    fn answered_opener() -> AptitudeSession {
        let mut session = AptitudeSession::new();
        session.push_question("How do you approach problems?").unwrap();
        assert!(!session.answer("Break them down").unwrap());
        session
    }

    #[test]
    fn opener_is_open_ended() {
        let mut session = AptitudeSession::new();
        assert!(session.needs_question());
        assert_eq!(session.step(), AptitudeStep::Pending);

        session.push_question("How do you approach problems?").unwrap();
        assert!(!session.needs_question());
        assert_eq!(
            session.step(),
            AptitudeStep::OpenEnded {
                number: 1,
                prompt: "How do you approach problems?".into()
            }
        );
    }

    #[test]
    fn answering_before_generation_is_rejected() {
        let mut session = AptitudeSession::new();
        assert!(matches!(
            session.answer("anything"),
            Err(AptitudeError::NoPendingQuestion)
        ));
    }

    #[test]
    fn multiple_choice_requires_offered_label() {
        let mut session = answered_opener();
        session.push_question(MCQ).unwrap();

        let AptitudeStep::MultipleChoice { number, question } = session.step() else {
            panic!("second question is multiple choice");
        };
        assert_eq!(number, 2);
        assert_eq!(question.options.len(), 4);

        assert!(matches!(
            session.answer("E"),
            Err(AptitudeError::InvalidChoice(_))
        ));
        assert_eq!(session.current(), 1);

        session.answer("C").unwrap();
        assert_eq!(session.exchanges()[1].answer, "C");
        assert!(session.prompt().contains("Q2: Pick an approach"));
        assert!(session.prompt().contains("A2: C"));
    }

    #[test]
    fn tenth_answer_requests_summary() {
        let mut session = answered_opener();
        for i in 1..QUESTION_COUNT {
            session.push_question(MCQ).unwrap();
            let last = session.answer("A").unwrap();
            assert_eq!(last, i == QUESTION_COUNT - 1);
        }

        assert!(session.awaiting_summary());
        assert!(!session.needs_question());
        assert!(session.push_question(MCQ).is_err());
        assert!(matches!(session.answer("A"), Err(AptitudeError::Completed)));
        assert_eq!(session.step(), AptitudeStep::Pending);

        session.finish("You favour design.").unwrap();
        assert!(session.is_complete());
        assert_eq!(
            session.step(),
            AptitudeStep::Complete {
                summary: "You favour design.".into()
            }
        );
        assert!(session.finish("again").is_err());
    }

    #[test]
    fn early_finish_is_rejected() {
        let mut session = answered_opener();
        assert!(matches!(
            session.finish("too soon"),
            Err(AptitudeError::NoPendingQuestion)
        ));
    }

    #[test]
    fn restart_clears_everything() {
        let mut session = answered_opener();
        session.restart();
        assert_eq!(session, AptitudeSession::new());
        assert!(session.needs_question());
    }
}
