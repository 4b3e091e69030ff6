#![forbid(unsafe_code)]

pub mod aptitude;
pub mod assessment;
pub mod error;

pub use assess_core::Clock;

pub use error::{AptitudeError, AssessmentError, GeneratorError};

pub use aptitude::{
    AptitudeService, AptitudeSession, AptitudeStep, ChatGenerator, GeneratorConfig,
    QuestionGenerator,
};
pub use assessment::{AssessmentProgress, AssessmentReport, AssessmentService, QuestionView};
