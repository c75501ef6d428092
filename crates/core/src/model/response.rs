use serde::{Deserialize, Serialize};

/// One recorded answer: the slide it belongs to and the option chosen there.
///
/// Serializes with the camelCase field names the store endpoint expects:
/// `{"questionIndex": 0, "selectedOption": "Yes"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    question_index: usize,
    selected_option: String,
}

impl Response {
    #[must_use]
    pub fn new(question_index: usize, selected_option: impl Into<String>) -> Self {
        Self {
            question_index,
            selected_option: selected_option.into(),
        }
    }

    // Accessors
    #[must_use]
    pub fn question_index(&self) -> usize {
        self.question_index
    }

    #[must_use]
    pub fn selected_option(&self) -> &str {
        &self.selected_option
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
