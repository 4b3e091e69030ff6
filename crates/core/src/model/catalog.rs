use serde::Serialize;
use thiserror::Error;

use crate::model::ids::QuestionKey;
use crate::model::question::Question;
use crate::model::topic::Topic;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("topic name cannot be empty")]
    EmptyTopicName,

    #[error("topic {0:?} appears more than once")]
    DuplicateTopic(String),
}

/// Ordered collection of topics. Topic names are unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    topics: Vec<Topic>,
}

impl Catalog {
    /// # Errors
    ///
    /// Returns `CatalogError` if a topic name is blank or repeated.
    pub fn new(topics: Vec<Topic>) -> Result<Self, CatalogError> {
        for (i, topic) in topics.iter().enumerate() {
            if topic.name().trim().is_empty() {
                return Err(CatalogError::EmptyTopicName);
            }
            if topics[..i].iter().any(|t| t.name() == topic.name()) {
                return Err(CatalogError::DuplicateTopic(topic.name().to_string()));
            }
        }
        Ok(Self { topics })
    }

    #[must_use]
    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    #[must_use]
    pub fn topic(&self, name: &str) -> Option<&Topic> {
        self.topics.iter().find(|t| t.name() == name)
    }

    #[must_use]
    pub fn question(&self, key: &QuestionKey) -> Option<&Question> {
        self.topic(key.topic())?.question(key.index())
    }

    /// Number of questions across all topics.
    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.topics.iter().map(Topic::len).sum()
    }

    /// Flat cursor position of `key`, if the key exists.
    #[must_use]
    pub fn flat_index(&self, key: &QuestionKey) -> Option<usize> {
        let mut seen = 0;
        for topic in &self.topics {
            if topic.name() == key.topic() {
                return (key.index() < topic.len()).then_some(seen + key.index());
            }
            seen += topic.len();
        }
        None
    }
}
