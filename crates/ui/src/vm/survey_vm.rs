use pulse_core::model::{AnswerKey, Question, Survey};
use services::{AnswerOutcome, SurveyProgress, SurveySession, SurveySessionError};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SurveyIntent {
    SelectSlide(usize),
    Answer(String),
    Submit,
    DismissResult,
}

/// Lifecycle of one submission attempt. The phase resets to `Idle` when the
/// result is dismissed, so a later attempt starts clean.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Pending,
    Succeeded { ack: String },
    Failed { message: String },
}

impl SubmissionPhase {
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }
}

/// One graded line of the result list: the question, the chosen option, and
/// whether it matched the expected answer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultRow {
    pub question: String,
    pub selected: String,
    pub correct: bool,
}

pub struct SurveyVm {
    session: SurveySession,
}

impl SurveyVm {
    #[must_use]
    pub fn new(survey: Survey) -> Self {
        Self {
            session: SurveySession::new(survey),
        }
    }

    #[must_use]
    pub fn session(&self) -> &SurveySession {
        &self.session
    }

    #[must_use]
    pub fn survey_name(&self) -> &str {
        self.session.survey().name()
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.session.survey().len()
    }

    #[must_use]
    pub fn current_slide(&self) -> usize {
        self.session.current_slide()
    }

    #[must_use]
    pub fn current_question(&self) -> &Question {
        self.session.current_question()
    }

    #[must_use]
    pub fn selected_option(&self, index: usize) -> Option<&str> {
        self.session.selected_option(index)
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.session.is_complete()
    }

    #[must_use]
    pub fn progress(&self) -> SurveyProgress {
        self.session.progress()
    }

    /// # Errors
    ///
    /// Returns `SurveySessionError::SlideOutOfRange` for an index past the
    /// last question.
    pub fn select_slide(&mut self, index: usize) -> Result<(), SurveySessionError> {
        self.session.select_slide(index)
    }

    /// # Errors
    ///
    /// Returns `SurveySessionError::UnknownOption` when the option is not one
    /// the current question offers.
    pub fn record_answer(&mut self, option: &str) -> Result<AnswerOutcome, SurveySessionError> {
        self.session.record_answer(option)
    }

    /// Grades the answered questions against the expected answers, in
    /// question order. Unanswered slots are skipped.
    #[must_use]
    pub fn result_rows(&self, key: &AnswerKey) -> Vec<ResultRow> {
        self.session
            .survey()
            .questions()
            .iter()
            .enumerate()
            .filter_map(|(index, question)| {
                let response = self.session.response_at(index)?;
                Some(ResultRow {
                    question: question.text().to_string(),
                    selected: response.selected_option().to_string(),
                    correct: key.is_correct(response),
                })
            })
            .collect()
    }
}
