mod answers;
mod catalog;
mod ids;
mod label;
mod question;
mod session;
mod topic;

pub use answers::AnswerRecord;
pub use catalog::{Catalog, CatalogError};
pub use ids::QuestionKey;
pub use label::{OptionLabel, ParseLabelError};
pub use question::{AnswerOption, Question, QuestionError};
pub use session::{SessionState, SubmitError, restart, submit};
pub use topic::Topic;
