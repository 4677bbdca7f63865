//! HTTP client for the OpenAI chat-completions endpoint.

use reqwest::{Client, StatusCode};
use tracing::debug;

use crate::error::LlmError;
use crate::llm::{ChatRequest, ChatResponse};

/// Default base URL of the completions API.
const DEFAULT_BASE_URL: &str = "https://api.openai.com";

/// Client issuing a single synchronous completion call. No retry, no
/// streaming; every failure is terminal for the run.
pub struct OpenAiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl OpenAiClient {
    /// Create a client against the production endpoint.
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    /// Point the client at a different base URL. Tests use this with a mock
    /// server.
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url,
        }
    }

    /// Build the full API URL.
    fn endpoint(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        format!("{base}/v1/chat/completions")
    }

    /// Send the request and extract the first candidate's message text.
    pub async fn complete(&self, request: &ChatRequest) -> Result<String, LlmError> {
        let url = self.endpoint();
        debug!(
            model = %request.model,
            messages = request.messages.len(),
            %url,
            "sending completion request"
        );

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(request)
            .send()
            .await
            .map_err(LlmError::Transport)?;

        let status = response.status();
        let body = response.text().await.map_err(LlmError::Transport)?;

        match status {
            StatusCode::OK => extract_message(&body),
            StatusCode::UNAUTHORIZED => Err(LlmError::Unauthorized { body }),
            StatusCode::BAD_REQUEST => Err(LlmError::BadRequest { body }),
            StatusCode::TOO_MANY_REQUESTS => Err(LlmError::RateLimited { body }),
            s if s.is_server_error() => Err(LlmError::Upstream {
                status: s.as_u16(),
                body,
            }),
            s => Err(LlmError::UnexpectedStatus {
                status: s.as_u16(),
                body,
            }),
        }
    }
}

/// Parse a 200 body and pull out the first candidate's content.
///
/// A body that parses but carries zero choices is [`LlmError::EmptyCompletion`],
/// not a success with empty text.
fn extract_message(body: &str) -> Result<String, LlmError> {
    let parsed: ChatResponse =
        serde_json::from_str(body).map_err(|e| LlmError::MalformedResponse {
            reason: e.to_string(),
            body: body.to_string(),
        })?;

    let content = parsed
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content)
        .ok_or(LlmError::EmptyCompletion)?;

    debug!(response_len = content.len(), "extracted completion text");
    Ok(content)
}
