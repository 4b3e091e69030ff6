use thiserror::Error;

use crate::model::{CatalogError, QuestionError, SubmitError};

/// Top-level error for the assessment domain.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Submit(#[from] SubmitError),
}
