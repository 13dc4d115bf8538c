//! AI-backed tools and the completion provider they delegate to.
//!
//! The scoring and rewriting itself happens in an external chat-completion
//! service. This module only builds the prompts, bounds the call and
//! reshapes the structured reply. The HTTP client needs the `ai` feature:
//! ```toml
//! anti-slop = { version = "1.0", features = ["ai"] }
//! ```

mod openai;
mod tools;

pub use openai::OpenAiClient;
pub use tools::{
    analyze_content_for_slop, improve_content_from_slop, ContentImprover, Improvement,
    ImproveOptions, SlopAnalysis, SlopScorer,
};

use serde_json::{Map, Value};
use thiserror::Error;

/// Reply format asked of the provider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseFormat {
    /// The reply must be a single JSON object
    JsonObject,
}

impl ResponseFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseFormat::JsonObject => "json_object",
        }
    }
}

/// One chat completion: a system prompt plus one user message
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub system_prompt: String,
    pub user_content: String,
    pub temperature: f64,
    pub response_format: ResponseFormat,
}

impl CompletionRequest {
    pub fn json(system_prompt: impl Into<String>, user_content: impl Into<String>, temperature: f64) -> Self {
        Self {
            system_prompt: system_prompt.into(),
            user_content: user_content.into(),
            temperature,
            response_format: ResponseFormat::JsonObject,
        }
    }
}

/// Failure talking to the completion provider
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompletionError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("request timed out after {0}s")]
    Timeout(u64),

    #[error("API error {status}: {body}")]
    Status { status: u16, body: String },

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("AI support is disabled: {0}")]
    Disabled(String),
}

/// External chat-completion service.
///
/// Implementations must be safe to call from several threads at once. A
/// call either yields the parsed JSON object the model replied with or a
/// [`CompletionError`]; it never retries on its own.
pub trait CompletionProvider: Send + Sync {
    fn complete(&self, request: &CompletionRequest) -> Result<Map<String, Value>, CompletionError>;
}

/// Parse the model's message text as a JSON object
pub(crate) fn parse_object_reply(text: &str) -> Result<Map<String, Value>, CompletionError> {
    match serde_json::from_str::<Value>(text.trim()) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(CompletionError::InvalidResponse(format!(
            "expected a JSON object, got {}",
            json_kind(&other)
        ))),
        Err(e) => Err(CompletionError::InvalidResponse(e.to_string())),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_reply_is_parsed() {
        let map = parse_object_reply(" {\"score\": 4} \n").unwrap();
        assert_eq!(map["score"], 4);
    }

    #[test]
    fn non_object_reply_is_invalid() {
        let err = parse_object_reply("[1, 2]").unwrap_err();
        assert_eq!(
            err,
            CompletionError::InvalidResponse("expected a JSON object, got an array".into())
        );
        assert!(matches!(
            parse_object_reply("not json"),
            Err(CompletionError::InvalidResponse(_))
        ));
    }

    #[test]
    fn status_error_mentions_code() {
        let err = CompletionError::Status {
            status: 429,
            body: "rate limited".into(),
        };
        assert_eq!(err.to_string(), "API error 429: rate limited");
    }
}
