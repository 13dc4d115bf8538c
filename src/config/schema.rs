//! Config schema and deserialization

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Settings for the external completion provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AiConfig {
    /// Model name sent with every request
    pub model: String,

    /// Base URL of an OpenAI-compatible API (without `/chat/completions`)
    pub base_url: String,

    /// Environment variable holding the API key. The key itself never lives
    /// in the config file.
    pub api_key_env: String,

    /// Upper bound for one completion request, in seconds
    pub timeout_secs: u64,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            model: "gpt-4".to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
            api_key_env: "OPENAI_API_KEY".to_string(),
            timeout_secs: 60,
        }
    }
}

impl AiConfig {
    /// API key from the configured environment variable, if set and non-empty
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|k| !k.trim().is_empty())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Defaults for tool options the caller leaves out
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ToolDefaults {
    /// `detect_repetition` shortest window
    pub min_length: usize,
    /// `detect_run_on_sentences` threshold
    pub max_words: usize,
    /// `improve_content_from_slop` tone
    pub target_tone: String,
}

impl Default for ToolDefaults {
    fn default() -> Self {
        Self {
            min_length: crate::analyzer::repetition::DEFAULT_MIN_LENGTH,
            max_words: crate::analyzer::run_on::DEFAULT_MAX_WORDS,
            target_tone: "professional".to_string(),
        }
    }
}

/// Root config structure for .antislop.json
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub ai: AiConfig,
    pub defaults: ToolDefaults,
    /// File extensions picked up when a directory is given to the CLI
    pub extensions: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ai: AiConfig::default(),
            defaults: ToolDefaults::default(),
            extensions: vec!["md".to_string(), "markdown".to_string(), "txt".to_string()],
        }
    }
}

impl Config {
    /// Reject values no tool could run with
    pub fn validate(&self) -> Result<(), String> {
        if self.defaults.min_length < 1 {
            return Err("defaults.minLength must be >= 1".to_string());
        }
        if self.defaults.max_words < 1 {
            return Err("defaults.maxWords must be >= 1".to_string());
        }
        if self.ai.timeout_secs == 0 {
            return Err("ai.timeoutSecs must be >= 1".to_string());
        }
        if self.ai.api_key_env.trim().is_empty() {
            return Err("ai.apiKeyEnv must name an environment variable".to_string());
        }
        Ok(())
    }

    /// Merge CLI overrides (CLI wins)
    pub fn merge_with_cli(mut self, min_length: Option<usize>, max_words: Option<usize>) -> Self {
        if let Some(min_length) = min_length {
            self.defaults.min_length = min_length;
        }
        if let Some(max_words) = max_words {
            self.defaults.max_words = max_words;
        }
        self
    }

    /// Whether a path has one of the configured extensions
    pub fn accepts_extension(&self, path: &std::path::Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|e| self.extensions.iter().any(|x| x.eq_ignore_ascii_case(e)))
            .unwrap_or(false)
    }
}
