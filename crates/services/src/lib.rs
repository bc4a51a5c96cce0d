#![forbid(unsafe_code)]

pub mod error;
pub mod phrases;
pub mod prompt;
pub mod provider;
pub mod tutor;

pub use error::FeedbackError;
pub use phrases::pick_local_feedback;
pub use provider::{ExplanationRequest, FeedbackProvider};
pub use tutor::{TutorConfig, TutorService};
