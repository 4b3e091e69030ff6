use chrono::{DateTime, Utc};
use serde::Serialize;

use assess_core::model::{AnswerOption, AnswerRecord, Catalog, QuestionKey};
use assess_core::time::completion_seconds;
use assess_core::{Recommendation, TopicScores, recommend, score};

/// The question the cursor points at, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionView<'a> {
    /// 1-based position across the whole catalog.
    pub number: usize,
    pub total: usize,
    pub key: QuestionKey,
    pub topic: &'a str,
    pub prompt: &'a str,
    pub options: &'a [AnswerOption],
}

impl QuestionView<'_> {
    #[must_use]
    pub fn heading(&self) -> String {
        format!("Question {} of {}", self.number, self.total)
    }
}

/// Results of a completed assessment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentReport {
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
    pub duration_secs: u64,
    pub overall: f64,
    pub scores: TopicScores,
    pub recommendations: Vec<Recommendation>,
}

impl AssessmentReport {
    pub(crate) fn build(
        answers: &AnswerRecord,
        catalog: &Catalog,
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
    ) -> Self {
        let scores = score(answers, catalog);
        let recommendations = recommend(&scores);
        Self {
            started_at,
            completed_at,
            duration_secs: completion_seconds(started_at, completed_at),
            overall: scores.overall(),
            scores,
            recommendations,
        }
    }

    /// Recommendation texts in catalog order.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.recommendations.iter().map(Recommendation::message).collect()
    }

    /// # Errors
    ///
    /// Returns `serde_json::Error` if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
