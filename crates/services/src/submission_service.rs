use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use pulse_core::Clock;
use serde_json::Value;
use store::ResponseStore;

use crate::error::SubmissionError;
use crate::survey_session::SurveySession;

//
// ─── RECEIPT ───────────────────────────────────────────────────────────────────
//

/// An acknowledged submission: the store's reply, kept verbatim, and the
/// time it was accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReceipt {
    pub ack: String,
    pub submitted_at: DateTime<Utc>,
}

//
// ─── SERVICE ───────────────────────────────────────────────────────────────────
//

/// Forwards completed response sets to the store and reads back prior
/// submissions for audit.
#[derive(Clone)]
pub struct SubmissionService {
    clock: Clock,
    store: Arc<dyn ResponseStore>,
}

impl SubmissionService {
    #[must_use]
    pub fn new(clock: Clock, store: Arc<dyn ResponseStore>) -> Self {
        Self { clock, store }
    }

    /// Submit the session's full ordered response set.
    ///
    /// Completeness is checked before anything reaches the store; an
    /// incomplete session never causes a network call.
    ///
    /// # Errors
    ///
    /// Returns `SubmissionError::Incomplete` if any slide is unanswered and
    /// `SubmissionError::Store` if the store rejects the submission. The
    /// session is left untouched either way, so the same call can simply be
    /// retried.
    pub async fn submit(
        &self,
        session: &SurveySession,
    ) -> Result<SubmissionReceipt, SubmissionError> {
        let Some(responses) = session.completed_responses() else {
            return Err(SubmissionError::Incomplete {
                missing: session.progress().remaining,
            });
        };

        let ack = self.store.append_responses(&responses).await?;
        log::info!("submitted {} response(s)", responses.len());

        Ok(SubmissionReceipt {
            ack,
            submitted_at: self.clock.now(),
        })
    }

    /// Fetch every previously stored submission for audit.
    ///
    /// # Errors
    ///
    /// Returns `SubmissionError::Store` if the store cannot be read.
    pub async fn fetch_prior(&self) -> Result<Vec<Value>, SubmissionError> {
        let submissions = self.store.list_submissions().await?;
        log::info!("fetched {} prior submission(s) for audit", submissions.len());
        Ok(submissions)
    }
}

impl fmt::Debug for SubmissionService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubmissionService")
            .field("clock", &self.clock)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
