//! Per-topic percentage scores and the recommendations derived from them.
//!
//! Scores are always recomputed from the `AnswerRecord`; nothing here keeps a
//! running tally, so resubmitted answers can never drift from the record.

use std::fmt;

use serde::Serialize;

use crate::model::{AnswerRecord, Catalog, QuestionKey};

/// Below this score a topic needs improvement.
pub const IMPROVEMENT_THRESHOLD: f64 = 60.0;
/// At or above this score a topic is excellent.
pub const EXCELLENT_THRESHOLD: f64 = 80.0;

//
// ─── SCORES ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopicScore {
    pub topic: String,
    pub correct: usize,
    pub total: usize,
    /// 0.0..=100.0
    pub percent: f64,
}

/// Scores for every topic, in catalog order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopicScores {
    scores: Vec<TopicScore>,
}

impl TopicScores {
    #[must_use]
    pub fn get(&self, topic: &str) -> Option<f64> {
        self.scores
            .iter()
            .find(|s| s.topic == topic)
            .map(|s| s.percent)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TopicScore> {
        self.scores.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Percentage of all questions answered correctly.
    #[must_use]
    pub fn overall(&self) -> f64 {
        let correct: usize = self.scores.iter().map(|s| s.correct).sum();
        let total: usize = self.scores.iter().map(|s| s.total).sum();
        percentage(correct, total)
    }
}

// Bare percentages carry no counts, so `overall()` is meaningless on the result.
#[cfg(test)]
impl FromIterator<(String, f64)> for TopicScores {
    fn from_iter<T: IntoIterator<Item = (String, f64)>>(iter: T) -> Self {
        Self {
            scores: iter
                .into_iter()
                .map(|(topic, percent)| TopicScore {
                    topic,
                    correct: 0,
                    total: 0,
                    percent,
                })
                .collect(),
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn percentage(correct: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    correct as f64 / total as f64 * 100.0
}

/// Scores each topic as the share of its questions answered correctly.
///
/// Topics without questions score 0.
#[must_use]
pub fn score(answers: &AnswerRecord, catalog: &Catalog) -> TopicScores {
    let scores = catalog
        .topics()
        .iter()
        .map(|topic| {
            let correct = topic
                .questions()
                .iter()
                .enumerate()
                .filter(|(index, question)| {
                    answers
                        .get(&QuestionKey::new(topic.name(), *index))
                        .is_some_and(|label| question.is_correct(label))
                })
                .count();
            TopicScore {
                topic: topic.name().to_string(),
                correct,
                total: topic.len(),
                percent: percentage(correct, topic.len()),
            }
        })
        .collect();
    TopicScores { scores }
}

//
// ─── RECOMMENDATIONS ───────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Tier {
    NeedsImprovement,
    AdvancedLearning,
    Excellent,
}

impl Tier {
    #[must_use]
    pub fn for_score(percent: f64) -> Self {
        if percent < IMPROVEMENT_THRESHOLD {
            Tier::NeedsImprovement
        } else if percent < EXCELLENT_THRESHOLD {
            Tier::AdvancedLearning
        } else {
            Tier::Excellent
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tier::NeedsImprovement => write!(f, "needs improvement"),
            Tier::AdvancedLearning => write!(f, "advanced learning"),
            Tier::Excellent => write!(f, "excellent"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub topic: String,
    pub tier: Tier,
}

impl Recommendation {
    #[must_use]
    pub fn message(&self) -> String {
        match self.tier {
            Tier::NeedsImprovement => {
                format!("Focus on improving your knowledge of {}", self.topic)
            }
            Tier::AdvancedLearning => format!("Consider advanced learning in {}", self.topic),
            Tier::Excellent => format!("Excellent understanding of {}!", self.topic),
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.tier, self.topic)
    }
}

/// One recommendation per topic, in the same order as `scores`.
#[must_use]
pub fn recommend(scores: &TopicScores) -> Vec<Recommendation> {
    scores
        .iter()
        .map(|s| Recommendation {
            topic: s.topic.clone(),
            tier: Tier::for_score(s.percent),
        })
        .collect()
}
