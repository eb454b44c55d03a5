//! Chat-completion transport
//!
//! OpenAI-style `POST {base_url}/chat/completions` over a blocking HTTP
//! client with bounded retries. The transport sits behind a trait so the
//! review rounds can be driven by a scripted fake in tests.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::HarvestError;

/// One chat message in a completion request
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    /// Create a system-role message
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    /// Create a user-role message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Review endpoint configuration
#[derive(Debug, Clone)]
pub struct ReviewEndpoint {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
    pub timeout_secs: u64,
    pub retry_limit: u32,
    pub retry_delay_secs: u64,
}

impl ReviewEndpoint {
    /// Create an endpoint config with default timeout (180 s) and retry
    /// policy (3 attempts, 3 s apart)
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            model: model.into(),
            timeout_secs: 180,
            retry_limit: 3,
            retry_delay_secs: 3,
        }
    }
}

/// A batch chat-completion collaborator.
///
/// `complete` returns the answer text, or `None` when no answer could be
/// obtained; callers map `None` to the round's default tag and continue.
pub trait ChatTransport {
    fn complete(&self, messages: &[ChatMessage]) -> Option<String>;
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Default, Deserialize)]
struct ChatChoice {
    message: Option<ChatChoiceMessage>,
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

impl ChatResponse {
    /// Extract the answer text, tolerating both `choices[0].message.content`
    /// and `choices[0].text` shapes. Empty on any miss.
    fn message_content(&self) -> String {
        let Some(choice) = self.choices.first() else {
            return String::new();
        };
        if let Some(content) = choice.message.as_ref().and_then(|m| m.content.as_deref()) {
            if !content.is_empty() {
                return content.trim().to_string();
            }
        }
        choice
            .text
            .as_deref()
            .map(|t| t.trim().to_string())
            .unwrap_or_default()
    }
}

/// Blocking HTTP transport for an OpenAI-style endpoint
#[derive(Debug)]
pub struct HttpChatTransport {
    client: reqwest::blocking::Client,
    endpoint: ReviewEndpoint,
}

impl HttpChatTransport {
    /// Build the transport, constructing the underlying HTTP client
    pub fn new(endpoint: ReviewEndpoint) -> Result<Self, HarvestError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(endpoint.timeout_secs))
            .build()?;
        Ok(Self { client, endpoint })
    }
}

impl ChatTransport for HttpChatTransport {
    fn complete(&self, messages: &[ChatMessage]) -> Option<String> {
        let url = format!("{}/chat/completions", self.endpoint.base_url);
        let body = ChatRequest {
            model: &self.endpoint.model,
            messages,
        };
        let delay = Duration::from_secs(self.endpoint.retry_delay_secs);

        for attempt in 1..=self.endpoint.retry_limit {
            let response = self
                .client
                .post(&url)
                .bearer_auth(&self.endpoint.api_key)
                .json(&body)
                .send();

            match response {
                Ok(resp) if resp.status().is_success() => match resp.json::<ChatResponse>() {
                    Ok(parsed) => return Some(parsed.message_content()),
                    Err(err) => {
                        warn!(attempt, %err, "undecodable completion body");
                    }
                },
                Ok(resp) => {
                    warn!(attempt, status = %resp.status(), "completion request rejected");
                }
                Err(err) => {
                    warn!(attempt, %err, "completion request failed");
                }
            }
            if attempt < self.endpoint.retry_limit {
                std::thread::sleep(delay);
            }
        }
        warn!("all completion attempts failed");
        None
    }
}
