use std::sync::Arc;

use services::FeedbackProvider;

/// Capabilities the shell injects into the view tree. Keeping this a trait
/// lets tests run the views against a deterministic provider.
pub trait UiApp: Send + Sync {
    fn feedback(&self) -> Arc<dyn FeedbackProvider>;
}

#[derive(Clone)]
pub struct AppContext {
    feedback: Arc<dyn FeedbackProvider>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            feedback: app.feedback(),
        }
    }

    #[must_use]
    pub fn feedback(&self) -> Arc<dyn FeedbackProvider> {
        Arc::clone(&self.feedback)
    }
}

/// Build the context the binary hands to `LaunchBuilder::with_context`.
#[must_use]
pub fn build_app_context(app: Arc<dyn UiApp>) -> AppContext {
    AppContext::new(&app)
}
