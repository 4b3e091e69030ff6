mod progress;
mod service;
mod view;

// Public API of the assessment subsystem.
pub use crate::error::AssessmentError;
pub use progress::AssessmentProgress;
pub use service::{AnswerResult, AssessmentService};
pub use view::{AssessmentReport, QuestionView};
