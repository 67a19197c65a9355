/// One selectable option of a question, keyed `option_a`, `option_b`, ...
/// in bank order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionOption {
    pub key: String,
    pub text: String,
}

/// A normalized quiz question. Immutable once selected into a session.
#[derive(Debug, Clone)]
pub struct Question {
    /// Synthetic sequential identifier, 1-based, assigned at selection.
    pub id: u32,
    pub prompt: String,
    pub options: Vec<QuestionOption>,
    /// Key of the correct option (`option_a`, ...).
    pub correct_key: String,
    /// Skill tag the question was drawn for (the "course" in results).
    pub skill: String,
}

impl Question {
    /// Resolve an option's display text by key.
    pub fn option_text(&self, key: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|o| o.key == key)
            .map(|o| o.text.as_str())
    }

    /// Text of the correct option.
    pub fn correct_text(&self) -> &str {
        self.option_text(&self.correct_key).unwrap_or_default()
    }
}
