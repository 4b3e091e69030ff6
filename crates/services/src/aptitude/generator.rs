use std::env;
use std::time::Duration;

use async_trait::async_trait;
use log::warn;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::GeneratorError;

/// Produces aptitude questions and the closing summary from a prompt.
#[async_trait]
pub trait QuestionGenerator: Send + Sync {
    /// # Errors
    ///
    /// Returns `GeneratorError` when no text could be produced.
    async fn generate(&self, prompt: &str) -> Result<String, GeneratorError>;
}

#[derive(Clone, Debug)]
pub struct GeneratorConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
    pub timeout: Duration,
    pub max_attempts: u32,
}

impl GeneratorConfig {
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let api_key = env::var("ASSESS_AI_API_KEY").ok()?;
        if api_key.trim().is_empty() {
            return None;
        }
        let base_url =
            env::var("ASSESS_AI_BASE_URL").unwrap_or_else(|_| "https://api.openai.com/v1".into());
        let model = env::var("ASSESS_AI_MODEL").unwrap_or_else(|_| "gpt-4o-mini".into());
        let timeout = env::var("ASSESS_AI_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .map_or(Duration::from_secs(30), Duration::from_secs);
        let max_attempts = env::var("ASSESS_AI_MAX_ATTEMPTS")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(3)
            .max(1);
        Some(Self {
            base_url,
            api_key,
            model,
            timeout,
            max_attempts,
        })
    }
}

/// `QuestionGenerator` backed by an OpenAI-compatible chat completions API.
#[derive(Clone)]
pub struct ChatGenerator {
    client: Client,
    config: Option<GeneratorConfig>,
}

impl ChatGenerator {
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(GeneratorConfig::from_env())
    }

    #[must_use]
    pub fn new(config: Option<GeneratorConfig>) -> Self {
        let client = match &config {
            Some(c) => Client::builder().timeout(c.timeout).build().unwrap_or_else(|err| {
                warn!(
                    "question generator client ignores the {:?} timeout: {err}",
                    c.timeout
                );
                Client::new()
            }),
            None => Client::new(),
        };
        Self { client, config }
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.config.is_some()
    }

    async fn request_once(
        &self,
        config: &GeneratorConfig,
        prompt: &str,
    ) -> Result<String, GeneratorError> {
        let url = format!(
            "{}/chat/completions",
            config.base_url.trim_end_matches('/')
        );
        let payload = ChatRequest {
            model: config.model.clone(),
            messages: vec![ChatMessage {
                role: "user",
                content: prompt.to_string(),
            }],
            temperature: 0.7,
        };

        let response = self
            .client
            .post(url)
            .bearer_auth(&config.api_key)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(GeneratorError::HttpStatus(response.status()));
        }

        let body: ChatResponse = response.json().await?;
        let content = body
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(GeneratorError::EmptyResponse)?;

        Ok(content.trim().to_string())
    }
}

#[async_trait]
impl QuestionGenerator for ChatGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, GeneratorError> {
        let config = self.config.as_ref().ok_or(GeneratorError::Disabled)?;

        let mut attempt = 1;
        loop {
            match self.request_once(config, prompt).await {
                Ok(text) => return Ok(text),
                Err(err) if attempt < config.max_attempts && is_retryable(&err) => {
                    warn!("question generator attempt {attempt} failed: {err}");
                    tokio::time::sleep(Duration::from_millis(250 * u64::from(attempt))).await;
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }
}

fn is_retryable(err: &GeneratorError) -> bool {
    match err {
        GeneratorError::HttpStatus(status) => {
            status.is_server_error() || *status == reqwest::StatusCode::TOO_MANY_REQUESTS
        }
        GeneratorError::Http(_) | GeneratorError::EmptyResponse => true,
        GeneratorError::Disabled => false,
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
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
