//! Shared error types for the services crate.

use thiserror::Error;

use assess_core::model::SubmitError;

/// Errors emitted by a `QuestionGenerator`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GeneratorError {
    #[error("question generator is not configured")]
    Disabled,
    #[error("question generator returned an empty response")]
    EmptyResponse,
    #[error("question generator request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted by `AssessmentService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AssessmentError {
    #[error("assessment is not complete yet")]
    Incomplete,
    #[error(transparent)]
    Submit(#[from] SubmitError),
}

/// Errors emitted by the aptitude test.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AptitudeError {
    #[error("aptitude test already completed")]
    Completed,
    #[error("no question is waiting for an answer")]
    NoPendingQuestion,
    #[error("{0:?} is not one of the offered choices")]
    InvalidChoice(String),
    #[error(transparent)]
    Generator(#[from] GeneratorError),
}
