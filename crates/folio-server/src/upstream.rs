//! Client for the upstream text-generation service.
//!
//! One synchronous messages-API call per style-check request; no retries.
//! Upstream failure detail is logged here and never surfaces to the caller.

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

/// The production messages endpoint. Overridable for tests.
pub const DEFAULT_API_URL: &str = "https://api.anthropic.com/v1/messages";

const MODEL: &str = "claude-sonnet-4-6";
const API_VERSION: &str = "2023-06-01";
const MAX_TOKENS: u32 = 2048;

/// Ways the upstream call can fail.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("request to the style service failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("style service replied with status {0}")]
    Status(StatusCode),

    #[error("style service replied with an empty payload")]
    Empty,
}

/// HTTP client for the style service.
pub struct StyleClient {
    client: Client,
    api_url: String,
}

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'static str,
    max_tokens: u32,
    messages: [Message; 1],
    system: &'a str,
}

#[derive(Serialize)]
struct Message {
    role: &'static str,
    content: String,
}

#[derive(Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: Option<String>,
}

impl StyleClient {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_url: api_url.into(),
        }
    }

    /// Forward the user's copy with the constructed system prompt and return
    /// the reply text.
    pub async fn request_revision(
        &self,
        api_key: &str,
        system: &str,
        content_type: &str,
        text: &str,
    ) -> Result<String, UpstreamError> {
        let body = MessagesRequest {
            model: MODEL,
            max_tokens: MAX_TOKENS,
            messages: [Message {
                role: "user",
                content: format!("Content type: {content_type}\n\nCopy to review:\n{text}"),
            }],
            system,
        };

        let response = self
            .client
            .post(&self.api_url)
            .header("x-api-key", api_key)
            .header("anthropic-version", API_VERSION)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            tracing::error!(%status, %detail, "style service call failed");
            return Err(UpstreamError::Status(status));
        }

        let payload: MessagesResponse = response.json().await?;
        payload
            .content
            .into_iter()
            .next()
            .and_then(|block| block.text)
            .filter(|text| !text.is_empty())
            .ok_or(UpstreamError::Empty)
    }
}
