//! OpenAI-compatible extraction gateway.
//!
//! This module provides [`OpenAiExtractor`], an [`EventExtractor`] backed by
//! any chat-completions endpoint speaking the OpenAI wire format (OpenRouter
//! by default). The model is prompted to answer with ONLY the event record
//! JSON; everything it returns goes through [`EventRecord`] validation before
//! an [`Event`] is produced.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use slotbook_core::Event;

use crate::error::{ExtractError, ExtractResult};
use crate::gateway::{BoxFuture, EventExtractor};
use crate::record::EventRecord;

/// Default chat-completions base URL.
const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";

/// Default extraction model.
const DEFAULT_MODEL: &str = "openai/gpt-4o-mini";

/// Environment variable consulted when no API key is configured.
const API_KEY_ENV: &str = "OPENROUTER_API_KEY";

/// The extraction instruction sent as the system message.
const SYSTEM_PROMPT: &str = "Extract event info and return ONLY valid JSON. \
     Format must be: {\"name\":..., \"start_time\": \"YYYY-MM-DD HH:MM\", \"participants\": [...]}";

/// Configuration for the OpenAI-compatible extractor.
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    /// Base URL of the chat-completions API.
    pub base_url: String,
    /// API key, either plain or an `env::VAR_NAME` reference.
    /// When unset, the `OPENROUTER_API_KEY` environment variable is used.
    pub api_key: Option<String>,
    /// Model identifier to request.
    pub model: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl OpenAiConfig {
    /// Builder method to set the base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Builder method to set the API key (plain or `env::VAR` reference).
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Builder method to set the model.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Builder method to set the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Resolves a credential value that may be an `env::VAR_NAME` reference.
///
/// Plain values are returned as-is.
///
/// # Errors
///
/// Returns a configuration error if the referenced variable is not set.
pub fn resolve_secret(value: &str) -> ExtractResult<String> {
    if let Some(var) = value.strip_prefix("env::") {
        std::env::var(var).map_err(|_| {
            ExtractError::configuration(format!("environment variable {} is not set", var))
        })
    } else {
        Ok(value.to_string())
    }
}

// -- wire types -------------------------------------------------------------

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

/// Extraction gateway speaking the OpenAI chat-completions wire format.
#[derive(Debug)]
pub struct OpenAiExtractor {
    http_client: reqwest::Client,
    config: OpenAiConfig,
    api_key: String,
}

impl OpenAiExtractor {
    /// Creates a new extractor from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when no API key can be resolved or the
    /// HTTP client cannot be constructed.
    pub fn new(config: OpenAiConfig) -> ExtractResult<Self> {
        let api_key = match &config.api_key {
            Some(value) => resolve_secret(value)?,
            None => std::env::var(API_KEY_ENV).map_err(|_| {
                ExtractError::configuration(format!(
                    "no api key configured and {} is not set",
                    API_KEY_ENV
                ))
            })?,
        };

        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                ExtractError::configuration("failed to create HTTP client").with_source(e)
            })?;

        Ok(Self {
            http_client,
            config,
            api_key,
        })
    }

    /// Sends the extraction prompt and returns the raw completion text.
    async fn complete(&self, text: &str) -> ExtractResult<String> {
        let url = format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        );
        let request = ChatRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: text,
                },
            ],
        };

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ExtractError::network("request timeout")
                } else if e.is_connect() {
                    ExtractError::network(format!("connection failed: {}", e))
                } else {
                    ExtractError::network(format!("request failed: {}", e))
                }
            })?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(ExtractError::authentication(format!(
                "model endpoint rejected credentials ({})",
                status
            )));
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok());
            return Err(ExtractError::rate_limited(format!(
                "rate limit exceeded{}",
                retry_after
                    .map(|s| format!(", retry after {} seconds", s))
                    .unwrap_or_default()
            )));
        }

        if status.is_server_error() {
            return Err(ExtractError::server(format!(
                "model endpoint error ({})",
                status
            )));
        }

        if !status.is_success() {
            return Err(ExtractError::server(format!("unexpected status {}", status)));
        }

        let completion: ChatCompletionResponse = response.json().await.map_err(|e| {
            ExtractError::malformed_response("completion body is not valid JSON").with_source(e)
        })?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or_else(|| ExtractError::malformed_response("model returned no completion"))
    }
}

impl EventExtractor for OpenAiExtractor {
    fn name(&self) -> &str {
        "openai"
    }

    fn extract_event(&self, text: &str) -> BoxFuture<'_, ExtractResult<Event>> {
        let text = text.to_string();
        Box::pin(async move {
            debug!(model = %self.config.model, "requesting event extraction");
            let content = self.complete(&text).await?;
            let record = EventRecord::from_json(strip_code_fences(&content))?;
            let event = record.into_event()?;
            debug!(name = %event.name(), start = %event.start_time(), "extracted event");
            Ok(event)
        })
    }
}

/// Unwraps a completion fenced as a markdown code block.
///
/// Models asked for ONLY JSON still occasionally wrap it in ```json fences.
fn strip_code_fences(content: &str) -> &str {
    let trimmed = content.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    let rest = rest.strip_suffix("```").unwrap_or(rest);
    rest.trim()
}
