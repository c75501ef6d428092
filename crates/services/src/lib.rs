#![forbid(unsafe_code)]

pub mod error;
pub mod submission_service;
pub mod survey_session;

pub use pulse_core::Clock;

pub use error::{SubmissionError, SurveySessionError};
pub use submission_service::{SubmissionReceipt, SubmissionService};
pub use survey_session::{AnswerOutcome, SurveyProgress, SurveySession};
