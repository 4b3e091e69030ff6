use chrono::{DateTime, Utc};
use log::{debug, info};
use std::fmt;

use assess_core::model::{Catalog, OptionLabel, QuestionKey, SessionState, SubmitError};
use assess_core::{Clock, Location, restart, submit};

use super::progress::AssessmentProgress;
use super::view::{AssessmentReport, QuestionView};
use crate::error::AssessmentError;

/// Outcome of answering the current question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerResult {
    pub key: QuestionKey,
    pub label: OptionLabel,
    pub is_complete: bool,
}

//
// ─── SERVICE ───────────────────────────────────────────────────────────────────
//

/// In-memory assessment over a static catalog.
///
/// Steps through the catalog one question at a time. Scores are derived from
/// the session's answer record whenever a report is requested.
pub struct AssessmentService {
    catalog: Catalog,
    clock: Clock,
    state: SessionState,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl AssessmentService {
    #[must_use]
    pub fn new(catalog: Catalog, clock: Clock) -> Self {
        let state = SessionState::new(&catalog);
        let started_at = clock.now();
        let completed_at = state.is_complete().then_some(started_at);
        Self {
            catalog,
            clock,
            state,
            started_at,
            completed_at,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.state.is_complete()
    }

    #[must_use]
    pub fn progress(&self) -> AssessmentProgress {
        let total = self.catalog.total_questions();
        let answered = self.state.cursor().min(total);
        AssessmentProgress {
            total,
            answered,
            remaining: total - answered,
            is_complete: self.is_complete(),
        }
    }

    #[must_use]
    pub fn current_question(&self) -> Option<QuestionView<'_>> {
        let Location::Question(key) = self.state.location(&self.catalog) else {
            return None;
        };
        let topic = self.catalog.topic(key.topic())?;
        let question = topic.question(key.index())?;
        Some(QuestionView {
            number: self.state.cursor() + 1,
            total: self.catalog.total_questions(),
            topic: topic.name(),
            prompt: question.prompt(),
            options: question.options(),
            key,
        })
    }

    /// Answer the current question and advance.
    ///
    /// # Errors
    ///
    /// Returns `AssessmentError::Submit` if the assessment is already complete
    /// or `label` is not one of the current question's options.
    pub fn submit(&mut self, label: OptionLabel) -> Result<AnswerResult, AssessmentError> {
        let key = match self.state.location(&self.catalog) {
            Location::Question(key) => key,
            Location::Complete => return Err(SubmitError::Completed.into()),
        };

        self.state = submit(&self.state, &self.catalog, key.topic(), key.index(), label)?;
        debug!("answered {key} with {label}");

        let is_complete = self.state.is_complete();
        if is_complete {
            let now = self.clock.now();
            self.completed_at = Some(now);
            info!(
                "assessment complete: {} answers recorded",
                self.state.answers().len()
            );
        }

        Ok(AnswerResult {
            key,
            label,
            is_complete,
        })
    }

    /// Scores and recommendations for the finished assessment.
    ///
    /// # Errors
    ///
    /// Returns `AssessmentError::Incomplete` while questions remain.
    pub fn report(&self) -> Result<AssessmentReport, AssessmentError> {
        let completed_at = self
            .completed_at
            .filter(|_| self.is_complete())
            .ok_or(AssessmentError::Incomplete)?;
        Ok(AssessmentReport::build(
            self.state.answers(),
            &self.catalog,
            self.started_at,
            completed_at,
        ))
    }

    /// Discard all answers and start over from the first question.
    pub fn restart(&mut self) {
        self.state = restart(&self.catalog);
        self.started_at = self.clock.now();
        self.completed_at = self.state.is_complete().then_some(self.started_at);
        debug!("assessment restarted");
    }
}

impl fmt::Debug for AssessmentService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssessmentService")
            .field("topics", &self.catalog.topics().len())
            .field("cursor", &self.state.cursor())
            .field("answers", &self.state.answers().len())
            .field("started_at", &self.started_at)
            .field("completed_at", &self.completed_at)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
