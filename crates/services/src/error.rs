//! Shared error types for the services crate.

use thiserror::Error;

/// Errors emitted by feedback providers. None of these ever surface to the
/// learner; callers keep the already-shown local phrase and log the failure.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FeedbackError {
    #[error("tutor service is not configured")]
    Disabled,
    #[error("tutor service returned an empty response")]
    EmptyResponse,
    #[error("tutor request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}
