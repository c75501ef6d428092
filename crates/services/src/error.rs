//! Shared error types for the services crate.

use thiserror::Error;

use store::StoreError;

/// Errors emitted by `SurveySession`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SurveySessionError {
    #[error("slide {index} is out of range for a survey of {total} slides")]
    SlideOutOfRange { index: usize, total: usize },

    #[error("option {option:?} is not offered by the current question")]
    UnknownOption { option: String },
}

/// Errors emitted by `SubmissionService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SubmissionError {
    #[error("survey incomplete: {missing} unanswered question(s)")]
    Incomplete { missing: usize },

    #[error(transparent)]
    Store(#[from] StoreError),
}
