//! Resolves a flat question cursor to a topic and local index.

use crate::model::{Catalog, QuestionKey};

/// Where a flat cursor lands in a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    Question(QuestionKey),
    /// The cursor is at or past the last question.
    Complete,
}

impl Location {
    #[must_use]
    pub fn key(&self) -> Option<&QuestionKey> {
        match self {
            Location::Question(key) => Some(key),
            Location::Complete => None,
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        matches!(self, Location::Complete)
    }
}

/// Finds the question at `cursor`, walking topics in catalog order.
///
/// The first topic whose cumulative question count exceeds the cursor holds
/// the question; its local index is the cursor minus the questions seen before
/// that topic.
#[must_use]
pub fn locate(cursor: usize, catalog: &Catalog) -> Location {
    let mut seen = 0_usize;
    for topic in catalog.topics() {
        if seen + topic.len() > cursor {
            return Location::Question(QuestionKey::new(topic.name(), cursor - seen));
        }
        seen += topic.len();
    }
    Location::Complete
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{OptionLabel, Question, Topic};

    fn question() -> Question {
        Question::new("q", [(OptionLabel::A, "a"), (OptionLabel::B, "b")], OptionLabel::A).unwrap()
    }

    fn catalog(sizes: &[(&str, usize)]) -> Catalog {
        Catalog::new(
            sizes
                .iter()
                .map(|(name, n)| Topic::new(*name, (0..*n).map(|_| question()).collect()))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn resolves_two_topic_catalog() {
        let catalog = catalog(&[("TopicA", 2), ("TopicB", 1)]);
        assert_eq!(
            locate(0, &catalog),
            Location::Question(QuestionKey::new("TopicA", 0))
        );
        assert_eq!(
            locate(1, &catalog),
            Location::Question(QuestionKey::new("TopicA", 1))
        );
        assert_eq!(
            locate(2, &catalog),
            Location::Question(QuestionKey::new("TopicB", 0))
        );
        assert_eq!(locate(3, &catalog), Location::Complete);
        assert_eq!(locate(usize::MAX, &catalog), Location::Complete);
    }

    #[test]
    fn every_cursor_reconstructs_from_preceding_counts() {
        let catalog = catalog(&[("a", 3), ("empty", 0), ("b", 1), ("c", 4), ("tail", 0)]);
        let total = catalog.total_questions();

        for cursor in 0..total {
            let Location::Question(key) = locate(cursor, &catalog) else {
                panic!("cursor {cursor} should resolve to a question");
            };
            let before: usize = catalog
                .topics()
                .iter()
                .take_while(|t| t.name() != key.topic())
                .map(Topic::len)
                .sum();
            assert_eq!(before + key.index(), cursor);
            assert!(catalog.question(&key).is_some());
        }
        assert!(locate(total, &catalog).is_complete());
    }

    #[test]
    fn empty_catalog_is_complete_immediately() {
        let catalog = catalog(&[("nothing", 0)]);
        assert_eq!(locate(0, &catalog), Location::Complete);
    }
}
