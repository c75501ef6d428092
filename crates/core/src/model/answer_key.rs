use thiserror::Error;

use crate::model::response::Response;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AnswerKeyError {
    #[error("answer key cannot be empty")]
    Empty,
}

//
// ─── ANSWER KEY ────────────────────────────────────────────────────────────────
//

/// Index-aligned expected options, used to mark submitted responses as
/// positive or negative in the result dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerKey {
    expected: Vec<String>,
}

impl AnswerKey {
    /// Creates an answer key from the expected option per question index.
    ///
    /// # Errors
    ///
    /// Returns `AnswerKeyError::Empty` if no expected options are given.
    pub fn new<S: Into<String>>(expected: Vec<S>) -> Result<Self, AnswerKeyError> {
        if expected.is_empty() {
            return Err(AnswerKeyError::Empty);
        }

        Ok(Self {
            expected: expected.into_iter().map(Into::into).collect(),
        })
    }

    // Accessors
    #[must_use]
    pub fn len(&self) -> usize {
        self.expected.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.expected.is_empty()
    }

    /// Expected option for a question index, if the key covers it.
    #[must_use]
    pub fn expected(&self, index: usize) -> Option<&str> {
        self.expected.get(index).map(String::as_str)
    }

    /// Returns true if the response matches the expected option for its
    /// question index. Indices outside the key grade as incorrect.
    #[must_use]
    pub fn is_correct(&self, response: &Response) -> bool {
        self.expected
            .get(response.question_index())
            .is_some_and(|expected| expected == response.selected_option())
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
