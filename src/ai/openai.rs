//! OpenAI-compatible chat completions client

use super::{CompletionError, CompletionProvider, CompletionRequest};
use crate::config::AiConfig;
use serde_json::{Map, Value};
use std::time::Duration;

/// Client for `POST {base_url}/chat/completions`
pub struct OpenAiClient {
    #[cfg_attr(not(feature = "ai"), allow(dead_code))]
    api_key: String,
    model: String,
    base_url: String,
    timeout: Duration,
}

impl std::fmt::Debug for OpenAiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiClient")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl OpenAiClient {
    /// Build a client if the configured key variable is set.
    ///
    /// Returns `None` when no key is available; the AI tools then report a
    /// configuration error on every call.
    pub fn from_config(config: &AiConfig) -> Option<Self> {
        let api_key = config.api_key()?;
        Some(Self::with_key(api_key, config))
    }

    /// Create a client with a specific API key
    pub fn with_key(api_key: String, config: &AiConfig) -> Self {
        Self {
            api_key,
            model: config.model.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout: config.timeout(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    fn request_body(&self, request: &CompletionRequest) -> Value {
        serde_json::json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": request.system_prompt },
                { "role": "user", "content": request.user_content },
            ],
            "temperature": request.temperature,
            "response_format": { "type": request.response_format.as_str() },
        })
    }
}

/// Message text of the first choice
fn first_choice_text(reply: &Value) -> Result<&str, CompletionError> {
    reply["choices"]
        .as_array()
        .and_then(|choices| choices.first())
        .and_then(|choice| choice["message"]["content"].as_str())
        .ok_or_else(|| CompletionError::InvalidResponse("No content in response".to_string()))
}

#[cfg(feature = "ai")]
impl CompletionProvider for OpenAiClient {
    fn complete(&self, request: &CompletionRequest) -> Result<Map<String, Value>, CompletionError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| CompletionError::Request(e.to_string()))?;

        tracing::debug!(model = %self.model, endpoint = %self.endpoint(), "sending completion request");

        let response = client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&self.request_body(request))
            .send()
            .map_err(|e| {
                if e.is_timeout() {
                    CompletionError::Timeout(self.timeout.as_secs())
                } else {
                    CompletionError::Request(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(CompletionError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let reply: Value = response
            .json()
            .map_err(|e| CompletionError::InvalidResponse(e.to_string()))?;
        super::parse_object_reply(first_choice_text(&reply)?)
    }
}

/// Stub implementation when ai feature is disabled
#[cfg(not(feature = "ai"))]
impl CompletionProvider for OpenAiClient {
    fn complete(&self, _request: &CompletionRequest) -> Result<Map<String, Value>, CompletionError> {
        Err(CompletionError::Disabled(
            "rebuild with `--features ai` to call the completion API".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn config() -> AiConfig {
        AiConfig {
            base_url: "https://llm.example.test/v1/".to_string(),
            ..AiConfig::default()
        }
    }

    #[test]
    fn endpoint_drops_trailing_slash() {
        let client = OpenAiClient::with_key("sk-test".into(), &config());
        assert_eq!(client.endpoint(), "https://llm.example.test/v1/chat/completions");
    }

    #[test]
    fn body_carries_prompt_and_format() {
        let client = OpenAiClient::with_key("sk-test".into(), &config());
        let body = client.request_body(&CompletionRequest::json("system", "user", 0.5));
        assert_eq!(body["model"], "gpt-4");
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][1]["content"], "user");
        assert_eq!(body["temperature"], 0.5);
        assert_eq!(body["response_format"]["type"], "json_object");
    }

    #[test]
    fn first_choice_text_is_extracted() {
        let reply = json!({ "choices": [ { "message": { "content": "{\"score\": 2}" } } ] });
        assert_eq!(first_choice_text(&reply).unwrap(), "{\"score\": 2}");
        assert!(first_choice_text(&json!({ "choices": [] })).is_err());
    }

    #[test]
    fn debug_hides_api_key() {
        let client = OpenAiClient::with_key("sk-secret".into(), &config());
        assert!(!format!("{:?}", client).contains("sk-secret"));
    }

    #[test]
    fn missing_key_variable_gives_no_client() {
        let config = AiConfig {
            api_key_env: "ANTI_SLOP_TEST_KEY_THAT_IS_NEVER_SET".to_string(),
            ..AiConfig::default()
        };
        assert!(OpenAiClient::from_config(&config).is_none());
    }
}
