pub mod api;
pub mod estimator;
pub mod models;
pub mod survey;

pub use models::{AggregateRecord, LanguageStats, SurveyResult};
pub use survey::{aggregate, survey_languages, LANGUAGES};
