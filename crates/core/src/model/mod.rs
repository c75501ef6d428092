mod answer_key;
mod question;
mod response;
mod survey;

pub use answer_key::{AnswerKey, AnswerKeyError};
pub use question::{Question, QuestionError};
pub use response::Response;
pub use survey::{Survey, SurveyError, SurveySettings};
