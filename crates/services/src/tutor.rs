use std::env;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::FeedbackError;
use crate::phrases::pick_local_feedback;
use crate::prompt::{GREETING, explanation_prompt};
use crate::provider::{ExplanationRequest, FeedbackProvider};

/// Explanations should sound fresh, hence the high temperature; they are one
/// or two sentences, hence the small token cap.
const TEMPERATURE: f32 = 0.9;
const MAX_TOKENS: u32 = 150;

#[derive(Clone, Debug)]
pub struct TutorConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
}

impl TutorConfig {
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let api_key = env::var("FRACTION_AI_API_KEY").ok()?;
        if api_key.trim().is_empty() {
            return None;
        }
        let base_url =
            env::var("FRACTION_AI_BASE_URL").unwrap_or_else(|_| "https://api.openai.com/v1".into());
        let model = env::var("FRACTION_AI_MODEL").unwrap_or_else(|_| "gpt-4o-mini".into());
        Some(Self {
            base_url,
            api_key,
            model,
        })
    }
}

/// Chat-completions client behind the `FeedbackProvider` capability. Without
/// a configured API key it stays in disabled mode and every explanation
/// request reports `Disabled`, which callers absorb silently.
#[derive(Clone)]
pub struct TutorService {
    client: Client,
    config: Option<TutorConfig>,
}

impl TutorService {
    #[must_use]
    pub fn from_env() -> Self {
        let config = TutorConfig::from_env();
        if config.is_none() {
            tracing::info!("FRACTION_AI_API_KEY not set; explanations fall back to local phrases");
        }
        Self::new(config)
    }

    #[must_use]
    pub fn new(config: Option<TutorConfig>) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.config.is_some()
    }

    async fn generate(&self, prompt: &str) -> Result<String, FeedbackError> {
        let config = self.config.as_ref().ok_or(FeedbackError::Disabled)?;

        let url = format!("{}/chat/completions", config.base_url.trim_end_matches('/'));
        let payload = ChatRequest {
            model: config.model.clone(),
            messages: vec![ChatMessage {
                role: "user",
                content: prompt.to_string(),
            }],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let response = self
            .client
            .post(url)
            .bearer_auth(&config.api_key)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(FeedbackError::HttpStatus(response.status()));
        }

        let body: ChatResponse = response.json().await?;
        let content = body
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(FeedbackError::EmptyResponse)?;

        Ok(content.trim().to_string())
    }
}

#[async_trait]
impl FeedbackProvider for TutorService {
    fn pick_local_feedback(&self, is_correct: bool) -> String {
        pick_local_feedback(&mut rand::rng(), is_correct)
    }

    async fn request_explanation(
        &self,
        request: &ExplanationRequest,
    ) -> Result<String, FeedbackError> {
        let prompt = explanation_prompt(request);
        let text = self.generate(&prompt).await?;
        if text.is_empty() {
            return Err(FeedbackError::EmptyResponse);
        }
        Ok(text)
    }

    async fn greeting(&self) -> Result<String, FeedbackError> {
        Ok(GREETING.to_string())
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessageResponse,
}

#[derive(Debug, Deserialize)]
struct ChatMessageResponse {
    content: Option<String>,
}
