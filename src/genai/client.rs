//! Gemini content-generation client.
//!
//! One HTTPS call per request: no streaming, no retry, no conversation
//! state. The full failure detail lands in the log; callers show users
//! only `GenerateError::user_message()`.

use std::fmt;

use async_trait::async_trait;
use log::{debug, info, warn};

use crate::Platform;
use crate::genai::types::{GenerateContentRequest, GenerateContentResponse, build_prompt};

/// Errors that can occur while generating content.
#[derive(Debug)]
pub enum GenerateError {
    /// API key missing. Detected before any network attempt.
    NotConfigured,
    /// Network-level failure (DNS, connection refused, body read).
    Network(String),
    /// The API returned a non-success status (quota, auth, server error).
    Api { status: u16, message: String },
    /// The response body did not match the expected shape.
    Parse(String),
}

impl GenerateError {
    /// Message surfaced to the user. Everything except a missing key
    /// collapses to one generic line; the detail stays in the log.
    pub fn user_message(&self) -> &'static str {
        match self {
            GenerateError::NotConfigured => "Gemini API key is not configured",
            _ => "Failed to generate content. Please try again later.",
        }
    }
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::NotConfigured => write!(f, "Gemini API key is not configured"),
            GenerateError::Network(msg) => write!(f, "network error: {msg}"),
            GenerateError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            GenerateError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for GenerateError {}

#[async_trait]
pub trait ContentGenerator: Send + Sync {
    /// Generates post text for the given prompt and platform.
    /// Single attempt; the returned text is passed through unmodified.
    async fn generate(&self, prompt: &str, platform: Platform) -> Result<String, GenerateError>;
}

/// Gemini REST API client.
pub struct GeminiClient {
    api_key: Option<String>,
    base_url: String,
    model: String,
    client: reqwest::Client,
}

impl GeminiClient {
    /// Creates a new Gemini client.
    ///
    /// # Arguments
    /// * `api_key` - resolved credential; `None` makes every call fail
    ///   fast with `GenerateError::NotConfigured`
    /// * `base_url` - API root (swapped for a mock server in tests)
    /// * `model` - model identifier, e.g. `gemini-pro`
    pub fn new(api_key: Option<String>, base_url: String, model: String) -> Self {
        Self {
            api_key,
            base_url,
            model,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl ContentGenerator for GeminiClient {
    async fn generate(&self, prompt: &str, platform: Platform) -> Result<String, GenerateError> {
        let api_key = self.api_key.as_deref().ok_or(GenerateError::NotConfigured)?;

        let body = GenerateContentRequest::from_prompt(&build_prompt(prompt, platform));
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);
        info!(
            "Gemini request: model={}, platform={}, prompt_len={}",
            self.model,
            platform,
            prompt.len()
        );

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| GenerateError::Network(e.to_string()))?;

        debug!("Gemini response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Gemini API error: {} - {}", status, message);
            return Err(GenerateError::Api { status, message });
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GenerateError::Parse(e.to_string()))?;

        let text = parsed
            .text()
            .ok_or_else(|| GenerateError::Parse("response contained no candidates".to_string()))?;
        info!("Gemini response: {} chars", text.len());
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_for_missing_key() {
        assert_eq!(
            GenerateError::NotConfigured.user_message(),
            "Gemini API key is not configured"
        );
    }

    #[test]
    fn test_user_message_is_generic_for_remote_failures() {
        let generic = "Failed to generate content. Please try again later.";
        assert_eq!(
            GenerateError::Network("dns".to_string()).user_message(),
            generic
        );
        assert_eq!(
            GenerateError::Api {
                status: 429,
                message: "quota".to_string()
            }
            .user_message(),
            generic
        );
        assert_eq!(
            GenerateError::Parse("bad json".to_string()).user_message(),
            generic
        );
    }

    #[test]
    fn test_display_carries_detail() {
        let err = GenerateError::Api {
            status: 500,
            message: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "API error (HTTP 500): boom");
    }

    #[tokio::test]
    async fn test_missing_key_fails_before_any_network_call() {
        // An unroutable base URL: reaching the network would error as
        // Network, not NotConfigured.
        let client = GeminiClient::new(
            None,
            "http://127.0.0.1:1".to_string(),
            "gemini-pro".to_string(),
        );
        let result = client.generate("hello", Platform::General).await;
        assert!(matches!(result, Err(GenerateError::NotConfigured)));
    }
}
