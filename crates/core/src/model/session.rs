use thiserror::Error;

use crate::locator::{Location, locate};
use crate::model::answers::AnswerRecord;
use crate::model::catalog::Catalog;
use crate::model::ids::QuestionKey;
use crate::model::label::OptionLabel;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SubmitError {
    #[error("quiz already complete")]
    Completed,

    #[error("unknown topic: {0:?}")]
    UnknownTopic(String),

    #[error("topic {topic:?} has no question {index}")]
    UnknownQuestion { topic: String, index: usize },

    #[error("{label} is not an option of question {key}")]
    UnknownLabel { key: QuestionKey, label: OptionLabel },

    #[error("expected an answer for {expected}, got {got}")]
    NotCurrent {
        expected: QuestionKey,
        got: QuestionKey,
    },
}

//
// ─── SESSION STATE ─────────────────────────────────────────────────────────────
//

/// Per-session quiz progress: the flat cursor and the answers so far.
///
/// Values are never shared between sessions. A submission leaves the given
/// state untouched and returns the next one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    cursor: usize,
    answers: AnswerRecord,
    complete: bool,
}

impl SessionState {
    /// Fresh state positioned at the first question of `catalog`.
    #[must_use]
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            cursor: 0,
            answers: AnswerRecord::new(),
            complete: catalog.total_questions() == 0,
        }
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn answers(&self) -> &AnswerRecord {
        &self.answers
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    #[must_use]
    pub fn location(&self, catalog: &Catalog) -> Location {
        locate(self.cursor, catalog)
    }
}

/// Records `label` for the question at `topic`/`index` and advances the cursor.
///
/// # Errors
///
/// Returns `SubmitError::Completed` once every question has been answered,
/// and rejects keys or labels the catalog does not contain as well as keys
/// the cursor is not pointing at.
pub fn submit(
    state: &SessionState,
    catalog: &Catalog,
    topic: &str,
    index: usize,
    label: OptionLabel,
) -> Result<SessionState, SubmitError> {
    if state.complete {
        return Err(SubmitError::Completed);
    }

    let found = catalog
        .topic(topic)
        .ok_or_else(|| SubmitError::UnknownTopic(topic.to_string()))?;
    let question = found.question(index).ok_or_else(|| SubmitError::UnknownQuestion {
        topic: topic.to_string(),
        index,
    })?;

    let key = QuestionKey::new(topic, index);
    if !question.has_option(label) {
        return Err(SubmitError::UnknownLabel { key, label });
    }

    match state.location(catalog) {
        Location::Question(expected) if expected == key => {}
        Location::Question(expected) => {
            return Err(SubmitError::NotCurrent { expected, got: key });
        }
        Location::Complete => return Err(SubmitError::Completed),
    }

    let mut answers = state.answers.clone();
    answers.insert(key, label);
    let cursor = state.cursor + 1;

    Ok(SessionState {
        cursor,
        answers,
        complete: cursor >= catalog.total_questions(),
    })
}

/// Initial state for `catalog`, discarding all answers.
#[must_use]
pub fn restart(catalog: &Catalog) -> SessionState {
    SessionState::new(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Question, Topic};
    use crate::model::OptionLabel::{A, B, C};

    fn catalog() -> Catalog {
        let q = |correct| Question::new("q", [(A, "a"), (B, "b"), (C, "c")], correct).unwrap();
        Catalog::new(vec![
            Topic::new("TopicA", vec![q(A), q(B)]),
            Topic::new("TopicB", vec![q(C)]),
        ])
        .unwrap()
    }

    #[test]
    fn submit_advances_and_completes() {
        let catalog = catalog();
        let state = SessionState::new(&catalog);

        let state = submit(&state, &catalog, "TopicA", 0, A).unwrap();
        assert_eq!(state.cursor(), 1);
        assert!(!state.is_complete());

        let state = submit(&state, &catalog, "TopicA", 1, C).unwrap();
        let state = submit(&state, &catalog, "TopicB", 0, C).unwrap();
        assert_eq!(state.cursor(), 3);
        assert!(state.is_complete());
        assert_eq!(state.answers().len(), 3);
        assert_eq!(state.location(&catalog), Location::Complete);

        let err = submit(&state, &catalog, "TopicB", 0, C).unwrap_err();
        assert_eq!(err, SubmitError::Completed);
    }

    #[test]
    fn resubmitting_a_stale_state_overwrites_the_entry() {
        let catalog = catalog();
        let start = SessionState::new(&catalog);

        let first = submit(&start, &catalog, "TopicA", 0, A).unwrap();
        let again = submit(&start, &catalog, "TopicA", 0, B).unwrap();

        assert_eq!(first.cursor(), again.cursor());
        assert_eq!(again.answers().len(), 1);
        assert_eq!(again.answers().get(&QuestionKey::new("TopicA", 0)), Some(B));
    }

    #[test]
    fn rejects_unknown_keys_and_labels() {
        let catalog = catalog();
        let state = SessionState::new(&catalog);

        assert_eq!(
            submit(&state, &catalog, "Nope", 0, A).unwrap_err(),
            SubmitError::UnknownTopic("Nope".into())
        );
        assert_eq!(
            submit(&state, &catalog, "TopicB", 5, A).unwrap_err(),
            SubmitError::UnknownQuestion {
                topic: "TopicB".into(),
                index: 5
            }
        );
        assert_eq!(
            submit(&state, &catalog, "TopicA", 0, OptionLabel::D).unwrap_err(),
            SubmitError::UnknownLabel {
                key: QuestionKey::new("TopicA", 0),
                label: OptionLabel::D
            }
        );
        assert_eq!(
            submit(&state, &catalog, "TopicB", 0, A).unwrap_err(),
            SubmitError::NotCurrent {
                expected: QuestionKey::new("TopicA", 0),
                got: QuestionKey::new("TopicB", 0)
            }
        );
    }

    #[test]
    fn restart_returns_to_first_question() {
        let catalog = catalog();
        let state = submit(&SessionState::new(&catalog), &catalog, "TopicA", 0, A).unwrap();
        assert_eq!(state.cursor(), 1);

        let state = restart(&catalog);
        assert_eq!(state.cursor(), 0);
        assert!(state.answers().is_empty());
        assert!(!state.is_complete());
        assert_eq!(
            locate(state.cursor(), &catalog),
            Location::Question(QuestionKey::new("TopicA", 0))
        );
    }

    #[test]
    fn empty_catalog_starts_complete() {
        let catalog = Catalog::new(vec![Topic::new("Empty", vec![])]).unwrap();
        let state = SessionState::new(&catalog);
        assert!(state.is_complete());
    }
}
