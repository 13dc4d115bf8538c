//! Slop scoring and content improvement via the completion provider

use super::{CompletionProvider, CompletionRequest};
use crate::text::word_count;
use crate::tools::{Tool, ToolName};
use crate::{ToolArgs, ToolError, ToolResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::Arc;

const ANALYZE_TEMPERATURE: f64 = 0.3;
const IMPROVE_TEMPERATURE: f64 = 0.5;

const ANALYZE_SYSTEM_PROMPT: &str = r#"You are a content quality analyzer. Analyze the given text for "slop" - low-quality, repetitive, generic, or unnecessarily verbose AI-generated content.

Rate the content on a scale of 0-10 where:
- 0-3: High quality, concise, specific content
- 4-6: Moderate quality with some generic phrases
- 7-10: Low quality "slop" with excessive fluff, repetition, or generic statements

Provide a JSON response with:
- score (0-10)
- issues (array of specific problems found)
- suggestions (array of improvement recommendations)"#;

fn improve_system_prompt(options: &ImproveOptions) -> String {
    let goal = if options.preserve_meaning {
        "preserving the original meaning"
    } else {
        "focusing on clarity"
    };
    format!(
        r#"You are a content improvement specialist. Rewrite the given text to remove "slop" while {goal}.

Remove:
- Unnecessary qualifiers and hedging language
- Generic phrases and clichés
- Repetitive statements
- Excessive verbosity
- Overused AI phrases like "delve into", "it's worth noting", "in today's world"

Make the content:
- Concise and direct
- Specific and concrete
- {tone} in tone
- More impactful

Return a JSON response with:
- improved_content (the rewritten text)
- changes_made (array describing what was improved)
- original_word_count
- new_word_count"#,
        goal = goal,
        tone = options.target_tone,
    )
}

pub(crate) fn missing_key_error(api_key_env: &str) -> ToolError {
    ToolError::Configuration(format!(
        "OpenAI API key not configured. Set {} environment variable.",
        api_key_env
    ))
}

/// Provider's verdict. Values are passed through as the model sent them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlopAnalysis {
    pub score: Value,
    pub issues: Value,
    pub suggestions: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Improvement {
    pub improved_content: Value,
    pub changes_made: Value,
    pub original_word_count: Value,
    pub new_word_count: Value,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImproveOptions {
    pub preserve_meaning: bool,
    pub target_tone: String,
}

impl Default for ImproveOptions {
    fn default() -> Self {
        Self {
            preserve_meaning: true,
            target_tone: "professional".to_string(),
        }
    }
}

fn field_or(reply: &mut Map<String, Value>, key: &str, default: impl FnOnce() -> Value) -> Value {
    reply.remove(key).unwrap_or_else(default)
}

/// Ask the provider to score `content` for slop (0-10)
pub fn analyze_content_for_slop(
    provider: &dyn CompletionProvider,
    content: &str,
) -> Result<SlopAnalysis, ToolError> {
    let request = CompletionRequest::json(
        ANALYZE_SYSTEM_PROMPT,
        format!("Analyze this content:\n\n{}", content),
        ANALYZE_TEMPERATURE,
    );
    let mut reply = provider.complete(&request).map_err(|e| {
        tracing::warn!(error = %e, "slop analysis failed");
        ToolError::Collaborator(format!("Failed to analyze content: {}", e))
    })?;

    Ok(SlopAnalysis {
        score: field_or(&mut reply, "score", || Value::from(0)),
        issues: field_or(&mut reply, "issues", || Value::Array(Vec::new())),
        suggestions: field_or(&mut reply, "suggestions", || Value::Array(Vec::new())),
    })
}

/// Ask the provider to rewrite `content` without the slop
pub fn improve_content_from_slop(
    provider: &dyn CompletionProvider,
    content: &str,
    options: &ImproveOptions,
) -> Result<Improvement, ToolError> {
    let request = CompletionRequest::json(
        improve_system_prompt(options),
        format!("Improve this content:\n\n{}", content),
        IMPROVE_TEMPERATURE,
    );
    let mut reply = provider.complete(&request).map_err(|e| {
        tracing::warn!(error = %e, "content improvement failed");
        ToolError::Collaborator(format!("Failed to improve content: {}", e))
    })?;

    let improved_content = field_or(&mut reply, "improved_content", || Value::from(content));
    let improved_words = improved_content
        .as_str()
        .map(word_count)
        .unwrap_or_else(|| word_count(content));

    Ok(Improvement {
        changes_made: field_or(&mut reply, "changes_made", || Value::Array(Vec::new())),
        original_word_count: field_or(&mut reply, "original_word_count", || {
            Value::from(word_count(content))
        }),
        new_word_count: field_or(&mut reply, "new_word_count", || Value::from(improved_words)),
        improved_content,
    })
}

/// `analyze_content_for_slop` tool
pub struct SlopScorer {
    provider: Option<Arc<dyn CompletionProvider>>,
    api_key_env: String,
}

impl SlopScorer {
    pub fn new(provider: Option<Arc<dyn CompletionProvider>>, api_key_env: impl Into<String>) -> Self {
        Self {
            provider,
            api_key_env: api_key_env.into(),
        }
    }

    pub fn is_available(&self) -> bool {
        self.provider.is_some()
    }
}

impl Tool for SlopScorer {
    fn name(&self) -> ToolName {
        ToolName::AnalyzeContentForSlop
    }

    fn execute(&self, args: &ToolArgs) -> ToolResult {
        let outcome = args.content().and_then(|content| {
            let provider = self
                .provider
                .as_deref()
                .ok_or_else(|| missing_key_error(&self.api_key_env))?;
            analyze_content_for_slop(provider, content)
        });
        ToolResult::from_outcome(outcome)
    }
}

/// `improve_content_from_slop` tool
pub struct ContentImprover {
    provider: Option<Arc<dyn CompletionProvider>>,
    api_key_env: String,
    default_tone: String,
}

impl ContentImprover {
    pub fn new(provider: Option<Arc<dyn CompletionProvider>>, api_key_env: impl Into<String>) -> Self {
        Self {
            provider,
            api_key_env: api_key_env.into(),
            default_tone: ImproveOptions::default().target_tone,
        }
    }

    /// Tone used when the caller does not pass `target_tone`
    pub fn with_default_tone(mut self, tone: impl Into<String>) -> Self {
        self.default_tone = tone.into();
        self
    }

    pub fn is_available(&self) -> bool {
        self.provider.is_some()
    }
}

impl Tool for ContentImprover {
    fn name(&self) -> ToolName {
        ToolName::ImproveContentFromSlop
    }

    fn execute(&self, args: &ToolArgs) -> ToolResult {
        let outcome = args.content().and_then(|content| {
            let options = ImproveOptions {
                preserve_meaning: args.bool_or("preserve_meaning", true)?,
                target_tone: args.str_or("target_tone", &self.default_tone)?.to_string(),
            };
            let provider = self
                .provider
                .as_deref()
                .ok_or_else(|| missing_key_error(&self.api_key_env))?;
            improve_content_from_slop(provider, content, &options)
        });
        ToolResult::from_outcome(outcome)
    }
}
