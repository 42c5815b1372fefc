//! OpenAI-compatible chat-completion client.
//!
//! `POST {base_url}/chat/completions` with bearer auth. Only the first
//! choice's message content is consumed.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use sola_core::{
    application::{ApplicationError, ports::CompletionClient},
    domain::{CompletionRequest, Credential},
    error::SolaResult,
};

/// Public OpenAI endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Async HTTP client for any OpenAI-compatible server.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    http: reqwest::Client,
    base_url: String,
}

impl OpenAiClient {
    /// Client against `base_url` (e.g. `https://api.openai.com/v1`).
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

impl Default for OpenAiClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

fn remote_failure(reason: impl Into<String>, status: Option<u16>) -> ApplicationError {
    ApplicationError::RemoteCallFailure {
        reason: reason.into(),
        status,
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    #[instrument(skip_all, fields(model = %request.model))]
    async fn complete(
        &self,
        credential: &Credential,
        request: &CompletionRequest,
    ) -> SolaResult<String> {
        let url = self.endpoint();
        debug!(%url, "Sending completion request");

        let response = self
            .http
            .post(&url)
            .bearer_auth(credential.expose())
            .json(request)
            .send()
            .await
            .map_err(|e| remote_failure(e.to_string(), None))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let reason = match serde_json::from_str::<ErrorBody>(&body) {
                Ok(parsed) => format!("HTTP {}: {}", status.as_u16(), parsed.error.message),
                Err(_) => format!("HTTP {status}"),
            };
            warn!(status = status.as_u16(), "Completion endpoint rejected the request");
            return Err(remote_failure(reason, Some(status.as_u16())).into());
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| remote_failure(format!("malformed response: {e}"), None))?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| remote_failure("malformed response: no message content", None).into())
    }
}
