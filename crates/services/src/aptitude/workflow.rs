use log::{debug, info};

use super::generator::QuestionGenerator;
use super::session::{AptitudeSession, AptitudeStep};
use crate::error::AptitudeError;

/// Drives an `AptitudeSession`, calling the generator whenever the session
/// needs a question or its summary.
#[derive(Clone)]
pub struct AptitudeService<G> {
    generator: G,
}

impl<G: QuestionGenerator> AptitudeService<G> {
    #[must_use]
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    #[must_use]
    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Generate whatever the session is missing and return the step to show.
    ///
    /// # Errors
    ///
    /// Returns `AptitudeError::Generator` if the generator call fails. The
    /// session is left as it was, so the call can simply be repeated.
    pub async fn next_step(
        &self,
        session: &mut AptitudeSession,
    ) -> Result<AptitudeStep, AptitudeError> {
        if session.needs_question() {
            debug!("generating aptitude question {}", session.current() + 1);
            let text = self.generator.generate(&session.prompt()).await?;
            session.push_question(text)?;
        } else if session.awaiting_summary() {
            debug!("generating aptitude summary");
            let summary = self.generator.generate(&session.prompt()).await?;
            session.finish(summary)?;
            info!("aptitude test complete");
        }
        Ok(session.step())
    }

    /// Answer the current question, then fetch the next question or summary.
    ///
    /// # Errors
    ///
    /// Propagates answer validation and generator failures.
    pub async fn submit(
        &self,
        session: &mut AptitudeSession,
        response: &str,
    ) -> Result<AptitudeStep, AptitudeError> {
        session.answer(response)?;
        self.next_step(session).await
    }
}
