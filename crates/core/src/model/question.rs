use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question text cannot be empty")]
    EmptyText,

    #[error("question option cannot be empty")]
    EmptyOption,

    #[error("question options must be distinct")]
    DuplicateOptions,
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A single survey question with exactly two answer options.
///
/// Questions are immutable once constructed and keep their options in the
/// order they were given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    text: String,
    options: [String; 2],
}

impl Question {
    /// Creates a new question. Text and options are trimmed.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyText` if the text is blank,
    /// `QuestionError::EmptyOption` if either option is blank, and
    /// `QuestionError::DuplicateOptions` if both options read the same.
    pub fn new<S: Into<String>>(
        text: impl Into<String>,
        options: [S; 2],
    ) -> Result<Self, QuestionError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(QuestionError::EmptyText);
        }

        let [first, second] = options;
        let first = first.into().trim().to_owned();
        let second = second.into().trim().to_owned();
        if first.is_empty() || second.is_empty() {
            return Err(QuestionError::EmptyOption);
        }
        if first == second {
            return Err(QuestionError::DuplicateOptions);
        }

        Ok(Self {
            text: text.trim().to_owned(),
            options: [first, second],
        })
    }

    /// Creates a question with the standard Yes/No options.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyText` if the text is blank.
    pub fn yes_no(text: impl Into<String>) -> Result<Self, QuestionError> {
        Self::new(text, ["Yes", "No"])
    }

    // Accessors
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn options(&self) -> &[String; 2] {
        &self.options
    }

    /// Returns true if `option` is one of this question's options.
    #[must_use]
    pub fn has_option(&self, option: &str) -> bool {
        self.options.iter().any(|candidate| candidate == option)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
