//! Anti-Slop: detectors and cleaners for low-quality, generic writing
//!
//! This library exposes a fixed catalog of text-quality tools (phrase
//! detectors, style cleaners, readability metrics and two AI-backed tools)
//! behind one calling convention: a tool name plus a JSON argument map in,
//! a [`ToolResult`] envelope out. Every tool is also available as a plain
//! typed function in [`analyzer`], [`cleaner`] and [`ai`].

pub mod ai;
pub mod analyzer;
pub mod cleaner;
pub mod config;
pub mod error;
pub mod mcp;
pub mod patterns;
pub mod registry;
pub mod reporter;
pub mod text;
pub mod tools;

pub use error::ToolError;
pub use registry::ToolRegistry;
pub use tools::{Tool, ToolDescriptor, ToolName};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Uniform outcome of a tool invocation.
///
/// Either `success` is true and `data` carries the tool's payload, or
/// `success` is false and `error` holds a non-empty message. The fields are
/// private so that no other combination can be built, and deserializing
/// rejects envelopes that break the rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawToolResult")]
pub struct ToolResult {
    success: bool,
    data: Map<String, Value>,
    error: Option<String>,
}

#[derive(Deserialize)]
struct RawToolResult {
    success: bool,
    #[serde(default)]
    data: Map<String, Value>,
    #[serde(default)]
    error: Option<String>,
}

impl TryFrom<RawToolResult> for ToolResult {
    type Error = String;

    fn try_from(raw: RawToolResult) -> Result<Self, Self::Error> {
        match (raw.success, raw.error) {
            (true, None) => Ok(Self::success(raw.data)),
            (true, Some(error)) => Err(format!("successful result carries an error: {}", error)),
            (false, Some(error)) if !error.trim().is_empty() && raw.data.is_empty() => {
                Ok(Self::failure(error))
            }
            (false, Some(_)) => Err("failed result must carry only a non-empty error".to_string()),
            (false, None) => Err("failed result is missing its error".to_string()),
        }
    }
}

impl ToolResult {
    /// Successful result carrying `data`
    pub fn success(data: Map<String, Value>) -> Self {
        Self {
            success: true,
            data,
            error: None,
        }
    }

    /// Failed result carrying `error`
    pub fn failure(error: impl std::fmt::Display) -> Self {
        let mut message = error.to_string();
        if message.trim().is_empty() {
            message = "tool failed without a message".to_string();
        }
        Self {
            success: false,
            data: Map::new(),
            error: Some(message),
        }
    }

    /// Serialize a typed report into a successful result.
    ///
    /// Reports must serialize to a JSON object; anything else is a failure.
    pub fn from_report<T: Serialize>(report: &T) -> Self {
        match serde_json::to_value(report) {
            Ok(Value::Object(data)) => Self::success(data),
            Ok(other) => Self::failure(format!("tool report is not an object: {}", other)),
            Err(e) => Self::failure(format!("failed to encode tool report: {}", e)),
        }
    }

    /// Convert a tool's internal outcome into the envelope
    pub fn from_outcome<T: Serialize>(outcome: Result<T, ToolError>) -> Self {
        match outcome {
            Ok(report) => Self::from_report(&report),
            Err(e) => Self::failure(e),
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn data(&self) -> &Map<String, Value> {
        &self.data
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Consume the envelope, yielding the payload or the error message
    pub fn into_result(self) -> Result<Map<String, Value>, String> {
        match self.error {
            Some(error) if !self.success => Err(error),
            _ => Ok(self.data),
        }
    }
}

/// Arguments for one tool invocation.
///
/// A thin wrapper over a JSON object. `content` is mandatory for every tool;
/// the remaining keys are tool-specific and ignored by tools that do not use
/// them. A `null` value is treated the same as an absent key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToolArgs(Map<String, Value>);

impl ToolArgs {
    /// Arguments holding only `content`
    pub fn new(content: impl Into<String>) -> Self {
        let mut map = Map::new();
        map.insert("content".to_string(), Value::String(content.into()));
        Self(map)
    }

    /// Wrap an argument object received from a transport
    pub fn from_map(map: Map<String, Value>) -> Self {
        Self(map)
    }

    /// Builder-style setter
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.0.insert(key.to_string(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key).filter(|v| !v.is_null())
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// The mandatory `content` argument
    pub fn content(&self) -> Result<&str, ToolError> {
        match self.get("content") {
            Some(Value::String(s)) => Ok(s),
            Some(_) => Err(ToolError::MalformedArguments(
                "'content' must be a string".to_string(),
            )),
            None => Err(ToolError::MalformedArguments(
                "missing required argument 'content'".to_string(),
            )),
        }
    }

    /// Optional integer option that must be >= 1 when present
    pub fn positive_int(&self, key: &str, default: usize) -> Result<usize, ToolError> {
        let Some(value) = self.get(key) else {
            return Ok(default);
        };
        match value.as_i64() {
            Some(n) if n >= 1 => Ok(n as usize),
            Some(n) => Err(ToolError::MalformedArguments(format!(
                "'{}' must be an integer >= 1, got {}",
                key, n
            ))),
            None => Err(ToolError::MalformedArguments(format!(
                "'{}' must be an integer, got {}",
                key, value
            ))),
        }
    }

    /// Optional boolean option
    pub fn bool_or(&self, key: &str, default: bool) -> Result<bool, ToolError> {
        match self.get(key) {
            None => Ok(default),
            Some(Value::Bool(b)) => Ok(*b),
            Some(other) => Err(ToolError::MalformedArguments(format!(
                "'{}' must be a boolean, got {}",
                key, other
            ))),
        }
    }

    /// Optional string option
    pub fn str_or<'a>(&'a self, key: &str, default: &'a str) -> Result<&'a str, ToolError> {
        match self.get(key) {
            None => Ok(default),
            Some(Value::String(s)) => Ok(s),
            Some(other) => Err(ToolError::MalformedArguments(format!(
                "'{}' must be a string, got {}",
                key, other
            ))),
        }
    }
}

/// One pattern entry that matched, with how often
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    #[serde(rename = "phrase")]
    pub matched_text: String,
    #[serde(rename = "count")]
    pub occurrence_count: usize,
}

impl Finding {
    pub fn new(matched_text: impl Into<String>, occurrence_count: usize) -> Self {
        Self {
            matched_text: matched_text.into(),
            occurrence_count,
        }
    }
}
