use std::collections::BTreeMap;

use crate::model::ids::QuestionKey;
use crate::model::label::OptionLabel;

/// Submitted answers keyed by topic and local question index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerRecord {
    entries: BTreeMap<QuestionKey, OptionLabel>,
}

impl AnswerRecord {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `label` for `key`, returning the label it replaced.
    pub fn insert(&mut self, key: QuestionKey, label: OptionLabel) -> Option<OptionLabel> {
        self.entries.insert(key, label)
    }

    #[must_use]
    pub fn get(&self, key: &QuestionKey) -> Option<OptionLabel> {
        self.entries.get(key).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&QuestionKey, OptionLabel)> {
        self.entries.iter().map(|(k, v)| (k, *v))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl FromIterator<(QuestionKey, OptionLabel)> for AnswerRecord {
    fn from_iter<T: IntoIterator<Item = (QuestionKey, OptionLabel)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
