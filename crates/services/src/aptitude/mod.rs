//! Adaptive problem-solving aptitude test.
//!
//! A `QuestionGenerator` (normally an LLM) writes each question from the
//! prompt in [`prompt`]; the first question is open-ended, the rest offer
//! choices A–D. After the last answer the generator writes a summary of the
//! user's problem-solving style.

mod generator;
mod parse;
pub mod prompt;
mod session;
mod workflow;

pub use crate::error::AptitudeError;
pub use generator::{ChatGenerator, GeneratorConfig, QuestionGenerator};
pub use parse::{McqQuestion, parse_mcq};
pub use session::{AptitudeSession, AptitudeStep, Exchange, QUESTION_COUNT};
pub use workflow::AptitudeService;
