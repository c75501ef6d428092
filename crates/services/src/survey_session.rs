use std::fmt;

use pulse_core::model::{Question, Response, Survey};

use crate::error::SurveySessionError;

//
// ─── PROGRESS ──────────────────────────────────────────────────────────────────
//

/// Aggregated view of survey progress, useful for UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurveyProgress {
    pub total: usize,
    pub answered: usize,
    pub remaining: usize,
    pub is_complete: bool,
}

//
// ─── ANSWER OUTCOME ────────────────────────────────────────────────────────────
//

/// Captures the effect of recording an answer on the current slide.
///
/// `advance_to` names the slide the deck should move to once the advance
/// delay elapses; it is `None` when the answered slide is the last one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub response: Response,
    pub advance_to: Option<usize>,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// In-memory state of one pass through a survey.
///
/// Tracks the current slide and one overwritable response slot per question.
/// Navigation is unrestricted: any slide can be selected at any time,
/// answered or not, in either direction.
#[derive(Clone)]
pub struct SurveySession {
    survey: Survey,
    current: usize,
    responses: Vec<Option<Response>>,
}

impl SurveySession {
    /// Creates a session positioned on the first slide with every response
    /// slot empty.
    #[must_use]
    pub fn new(survey: Survey) -> Self {
        let slots = survey.len();
        Self {
            survey,
            current: 0,
            responses: vec![None; slots],
        }
    }

    // Accessors
    #[must_use]
    pub fn survey(&self) -> &Survey {
        &self.survey
    }

    #[must_use]
    pub fn current_slide(&self) -> usize {
        self.current
    }

    /// The question shown on the current slide.
    #[must_use]
    pub fn current_question(&self) -> &Question {
        // current is always in range: new() starts at 0 and every
        // transition is bounds-checked.
        &self.survey.questions()[self.current]
    }

    #[must_use]
    pub fn responses(&self) -> &[Option<Response>] {
        &self.responses
    }

    #[must_use]
    pub fn response_at(&self, index: usize) -> Option<&Response> {
        self.responses.get(index).and_then(Option::as_ref)
    }

    /// The option recorded for a slide, if any.
    #[must_use]
    pub fn selected_option(&self, index: usize) -> Option<&str> {
        self.response_at(index).map(Response::selected_option)
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.responses.iter().filter(|slot| slot.is_some()).count()
    }

    /// True once every slide has a recorded response.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.responses.iter().all(Option::is_some)
    }

    /// Returns a summary of the current survey progress.
    #[must_use]
    pub fn progress(&self) -> SurveyProgress {
        let total = self.survey.len();
        let answered = self.answered_count();
        SurveyProgress {
            total,
            answered,
            remaining: total - answered,
            is_complete: answered == total,
        }
    }

    /// The full ordered response set, or `None` while any slot is empty.
    #[must_use]
    pub fn completed_responses(&self) -> Option<Vec<Response>> {
        self.responses.iter().cloned().collect()
    }

    /// Jump to a slide. Navigation is free in both directions and does not
    /// depend on which slides have been answered.
    ///
    /// # Errors
    ///
    /// Returns `SurveySessionError::SlideOutOfRange` if no such slide
    /// exists.
    pub fn select_slide(&mut self, index: usize) -> Result<(), SurveySessionError> {
        if index >= self.survey.len() {
            return Err(SurveySessionError::SlideOutOfRange {
                index,
                total: self.survey.len(),
            });
        }
        self.current = index;
        Ok(())
    }

    /// Record an answer for the current slide, replacing any earlier one.
    ///
    /// # Errors
    ///
    /// Returns `SurveySessionError::UnknownOption` if `option` is not one
    /// of the current question's options.
    pub fn record_answer(&mut self, option: &str) -> Result<AnswerOutcome, SurveySessionError> {
        if !self.current_question().has_option(option) {
            return Err(SurveySessionError::UnknownOption {
                option: option.to_owned(),
            });
        }

        let response = Response::new(self.current, option);
        self.responses[self.current] = Some(response.clone());

        let advance_to = if self.current < self.survey.last_index() {
            Some(self.current + 1)
        } else {
            None
        };

        Ok(AnswerOutcome {
            response,
            advance_to,
        })
    }
}

impl fmt::Debug for SurveySession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SurveySession")
            .field("survey", &self.survey.name())
            .field("current", &self.current)
            .field("answered", &self.answered_count())
            .field("total", &self.survey.len())
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
