use std::sync::Arc;

use pulse_core::model::{AnswerKey, Survey, SurveySettings};
use services::SubmissionService;

pub trait UiApp: Send + Sync {
    fn survey(&self) -> Survey;
    fn settings(&self) -> SurveySettings;

    fn answer_key(&self) -> Arc<AnswerKey>;
    fn submissions(&self) -> Arc<SubmissionService>;
}

#[derive(Clone)]
pub struct AppContext {
    survey: Survey,
    settings: SurveySettings,

    answer_key: Arc<AnswerKey>,
    submissions: Arc<SubmissionService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        let survey = app.survey();
        let settings = app.settings();

        let answer_key = app.answer_key();
        let submissions = app.submissions();

        Self {
            survey,
            settings,
            answer_key,
            submissions,
        }
    }

    #[must_use]
    pub fn survey(&self) -> Survey {
        self.survey.clone()
    }

    #[must_use]
    pub fn settings(&self) -> SurveySettings {
        self.settings
    }

    #[must_use]
    pub fn answer_key(&self) -> Arc<AnswerKey> {
        Arc::clone(&self.answer_key)
    }

    #[must_use]
    pub fn submissions(&self) -> Arc<SubmissionService> {
        Arc::clone(&self.submissions)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
