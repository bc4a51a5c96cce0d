//! Capability trait for everything the tutor says to the learner.

use async_trait::async_trait;

use fraction_core::{LessonType, Problem};

use crate::error::FeedbackError;

/// Everything the explanation prompt needs: the posed problem, the verdict,
/// and the answer fields exactly as the learner typed them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplanationRequest {
    pub problem: Problem,
    pub is_correct: bool,
    pub numerator: Option<String>,
    pub denominator: Option<String>,
    pub value: Option<String>,
}

impl ExplanationRequest {
    /// Request for a representation (write-the-fraction) answer.
    #[must_use]
    pub fn representation(
        problem: Problem,
        is_correct: bool,
        numerator: &str,
        denominator: &str,
    ) -> Self {
        debug_assert_eq!(problem.lesson_type(), LessonType::Representation);
        Self {
            problem,
            is_correct,
            numerator: Some(numerator.to_string()),
            denominator: Some(denominator.to_string()),
            value: None,
        }
    }

    /// Request for a value-finding answer.
    #[must_use]
    pub fn value(problem: Problem, is_correct: bool, value: &str) -> Self {
        debug_assert_eq!(problem.lesson_type(), LessonType::ValueFinding);
        Self {
            problem,
            is_correct,
            numerator: None,
            denominator: None,
            value: Some(value.to_string()),
        }
    }
}

/// Source of tutor text. The UI depends on this trait only, so tests swap in
/// a deterministic provider and the app wires in the real service.
#[async_trait]
pub trait FeedbackProvider: Send + Sync {
    /// Immediate phrase shown the moment an answer resolves. Pure random
    /// choice over a fixed pool; never fails.
    fn pick_local_feedback(&self, is_correct: bool) -> String;

    /// Richer explanation fetched in the background.
    ///
    /// # Errors
    ///
    /// Returns `FeedbackError` when the service is disabled, the request
    /// fails, or the response is empty. Callers keep the local phrase.
    async fn request_explanation(
        &self,
        request: &ExplanationRequest,
    ) -> Result<String, FeedbackError>;

    /// Greeting for the lesson-select screen.
    ///
    /// # Errors
    ///
    /// Returns `FeedbackError` on service failure; callers fall back to a
    /// built-in greeting.
    async fn greeting(&self) -> Result<String, FeedbackError>;
}
