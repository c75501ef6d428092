use std::time::Duration;

use thiserror::Error;

use crate::model::question::Question;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SurveyError {
    #[error("survey name cannot be empty")]
    EmptyName,

    #[error("survey must contain at least one question")]
    NoQuestions,

    #[error("advance delay must be > 0")]
    InvalidAdvanceDelay,
}

//
// ─── SETTINGS ──────────────────────────────────────────────────────────────────
//

/// Behavioural settings for running a survey.
///
/// Controls the pause before auto-advancing past an answered slide and
/// whether previously stored submissions are fetched for audit on startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurveySettings {
    advance_delay_ms: u64,
    audit_prior_submissions: bool,
}

impl SurveySettings {
    /// Creates the standard settings:
    /// - one second advance delay after answering a slide
    /// - prior-submission audit fetch enabled
    #[must_use]
    pub fn standard() -> Self {
        Self {
            advance_delay_ms: 1_000,
            audit_prior_submissions: true,
        }
    }

    /// Creates custom settings.
    ///
    /// # Errors
    ///
    /// Returns `SurveyError::InvalidAdvanceDelay` if the delay is zero.
    pub fn new(advance_delay_ms: u64, audit_prior_submissions: bool) -> Result<Self, SurveyError> {
        if advance_delay_ms == 0 {
            return Err(SurveyError::InvalidAdvanceDelay);
        }

        Ok(Self {
            advance_delay_ms,
            audit_prior_submissions,
        })
    }

    // Accessors
    #[must_use]
    pub fn advance_delay_ms(&self) -> u64 {
        self.advance_delay_ms
    }

    #[must_use]
    pub fn advance_delay(&self) -> Duration {
        Duration::from_millis(self.advance_delay_ms)
    }

    #[must_use]
    pub fn audit_prior_submissions(&self) -> bool {
        self.audit_prior_submissions
    }
}

//
// ─── SURVEY ────────────────────────────────────────────────────────────────────
//

/// A named, ordered set of questions presented one slide at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Survey {
    name: String,
    questions: Vec<Question>,
}

impl Survey {
    /// Creates a new survey.
    ///
    /// # Errors
    ///
    /// Returns `SurveyError::EmptyName` if the name is blank or
    /// `SurveyError::NoQuestions` if the question list is empty.
    pub fn new(name: impl Into<String>, questions: Vec<Question>) -> Result<Self, SurveyError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(SurveyError::EmptyName);
        }
        if questions.is_empty() {
            return Err(SurveyError::NoQuestions);
        }

        Ok(Self {
            name: name.trim().to_owned(),
            questions,
        })
    }

    // Accessors
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// Index of the final slide.
    #[must_use]
    pub fn last_index(&self) -> usize {
        self.questions.len() - 1
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
