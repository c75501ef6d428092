mod survey;

pub use survey::SurveyView;

#[cfg(test)]
mod view_smoke;
