use serde::Serialize;
use thiserror::Error;

use crate::model::label::OptionLabel;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question prompt cannot be empty")]
    EmptyPrompt,

    #[error("question must offer at least one option")]
    NoOptions,

    #[error("option {0} is listed more than once")]
    DuplicateLabel(OptionLabel),

    #[error("correct label {0} is not one of the options")]
    MissingCorrectLabel(OptionLabel),
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// One labelled choice of a question, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerOption {
    pub label: OptionLabel,
    pub text: String,
}

/// A multiple-choice question with exactly one correct label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    prompt: String,
    options: Vec<AnswerOption>,
    correct: OptionLabel,
}

impl Question {
    /// Builds a question from its prompt, ordered options and correct label.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the prompt is blank, there are no options,
    /// a label repeats, or `correct` is not among the options.
    pub fn new<I, S>(
        prompt: impl Into<String>,
        options: I,
        correct: OptionLabel,
    ) -> Result<Self, QuestionError>
    where
        I: IntoIterator<Item = (OptionLabel, S)>,
        S: Into<String>,
    {
        let prompt = prompt.into();
        if prompt.trim().is_empty() {
            return Err(QuestionError::EmptyPrompt);
        }

        let mut collected: Vec<AnswerOption> = Vec::with_capacity(OptionLabel::ALL.len());
        for (label, text) in options {
            if collected.iter().any(|o| o.label == label) {
                return Err(QuestionError::DuplicateLabel(label));
            }
            collected.push(AnswerOption {
                label,
                text: text.into(),
            });
        }

        if collected.is_empty() {
            return Err(QuestionError::NoOptions);
        }
        if !collected.iter().any(|o| o.label == correct) {
            return Err(QuestionError::MissingCorrectLabel(correct));
        }

        Ok(Self {
            prompt,
            options: collected,
            correct,
        })
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &[AnswerOption] {
        &self.options
    }

    #[must_use]
    pub fn correct(&self) -> OptionLabel {
        self.correct
    }

    #[must_use]
    pub fn option_text(&self, label: OptionLabel) -> Option<&str> {
        self.options
            .iter()
            .find(|o| o.label == label)
            .map(|o| o.text.as_str())
    }

    #[must_use]
    pub fn has_option(&self, label: OptionLabel) -> bool {
        self.option_text(label).is_some()
    }

    #[must_use]
    pub fn is_correct(&self, label: OptionLabel) -> bool {
        self.correct == label
    }
}
