//! Chat-completion client for the mandatory answer call.

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

pub const SYSTEM_PROMPT: &str = "You are SpaceQ, a concise and accurate assistant who answers questions about space, astronomy, astrophysics, and related topics for a general audience.";
pub const NO_ANSWER: &str = "No answer returned by the model.";
pub const TEMPERATURE: f64 = 0.2;
pub const MAX_TOKENS: u32 = 800;

pub struct OpenAiClient<'a> {
    pub http: &'a reqwest::Client,
    /// API root such as `https://api.openai.com/v1`.
    pub base_url: &'a str,
    pub model: &'a str,
    pub api_key: &'a str,
}

#[derive(Debug, Error)]
pub enum OpenAiError {
    #[error("OpenAI returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("failed to reach OpenAI: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("failed to decode OpenAI response: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("completion content is not text: {0}")]
    NonTextContent(Value),
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f64,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

pub fn chat_completions_url(base_url: &str) -> String {
    format!("{}/chat/completions", base_url.trim_end_matches('/'))
}

impl OpenAiClient<'_> {
    /// Sends `question` with the fixed persona and returns the trimmed answer,
    /// substituting [`NO_ANSWER`] when the completion carries no text.
    pub async fn ask(&self, question: &str) -> Result<String, OpenAiError> {
        let payload = ChatRequest {
            model: self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: question,
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let response = self
            .http
            .post(chat_completions_url(self.base_url))
            .bearer_auth(self.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(OpenAiError::Transport)?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unable to read response body>".to_string());
            return Err(OpenAiError::Status { status, body });
        }

        let data: Value = response.json().await.map_err(OpenAiError::Decode)?;
        first_answer(&data)
    }
}

/// Any missing or null link on the way to the first completion yields
/// [`NO_ANSWER`]; content that is present but not a string is an error.
fn first_answer(data: &Value) -> Result<String, OpenAiError> {
    let content = match data.pointer("/choices/0/message/content") {
        None | Some(Value::Null) => return Ok(NO_ANSWER.to_string()),
        Some(Value::String(content)) => content.trim(),
        Some(other) => return Err(OpenAiError::NonTextContent(other.clone())),
    };

    if content.is_empty() {
        Ok(NO_ANSWER.to_string())
    } else {
        Ok(content.to_string())
    }
}
