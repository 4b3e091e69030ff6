use serde::Serialize;

use assess_core::model::{AnswerOption, OptionLabel};

/// A generated multiple-choice question split into stem and options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct McqQuestion {
    pub stem: String,
    pub options: Vec<AnswerOption>,
}

impl McqQuestion {
    #[must_use]
    pub fn has_option(&self, label: OptionLabel) -> bool {
        self.options.iter().any(|o| o.label == label)
    }
}

/// Splits generator output into a question stem and its lettered options.
///
/// The first line is the stem. Every later line that starts with `A`–`D`
/// becomes an option whose text begins at the third character, so both
/// `A) text` and `A: text` parse. Option text is trimmed. A repeated letter
/// replaces the earlier text.
#[must_use]
pub fn parse_mcq(text: &str) -> McqQuestion {
    let mut lines = text.lines();
    let stem = lines.next().unwrap_or_default().to_string();

    let mut options: Vec<AnswerOption> = Vec::new();
    for line in lines {
        let Some(label) = line.chars().next().and_then(OptionLabel::from_char) else {
            continue;
        };
        let body = line.chars().skip(2).collect::<String>().trim().to_string();
        if let Some(existing) = options.iter_mut().find(|o| o.label == label) {
            existing.text = body;
        } else {
            options.push(AnswerOption { label, text: body });
        }
    }

    McqQuestion { stem, options }
}
