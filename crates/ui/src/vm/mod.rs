mod survey_vm;

pub use survey_vm::{ResultRow, SubmissionPhase, SurveyIntent, SurveyVm};
