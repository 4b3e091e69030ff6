use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies a question by its topic name and position inside that topic.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct QuestionKey {
    topic: String,
    index: usize,
}

impl QuestionKey {
    #[must_use]
    pub fn new(topic: impl Into<String>, index: usize) -> Self {
        Self {
            topic: topic.into(),
            index,
        }
    }

    #[must_use]
    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// Zero-based index within the topic.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }
}

impl fmt::Debug for QuestionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "QuestionKey({:?}, {})", self.topic, self.index)
    }
}

impl fmt::Display for QuestionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.topic, self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_joins_topic_and_index() {
        let key = QuestionKey::new("Content Strategy", 1);
        assert_eq!(key.to_string(), "Content Strategy_1");
    }

    #[test]
    fn keys_order_by_topic_then_index() {
        let a = QuestionKey::new("A", 1);
        let b = QuestionKey::new("A", 0);
        let c = QuestionKey::new("B", 0);
        let mut keys = vec![c.clone(), a.clone(), b.clone()];
        keys.sort();
        assert_eq!(keys, vec![b, a, c]);
    }
}
