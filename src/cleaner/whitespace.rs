use crate::text::repair_whitespace;
use crate::tools::{Tool, ToolName};
use crate::{ToolArgs, ToolResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhitespaceReport {
    pub original_content: String,
    pub cleaned_content: String,
    /// Characters (not bytes) removed
    pub characters_removed: usize,
}

pub fn normalize_whitespace(content: &str) -> WhitespaceReport {
    let cleaned_content = repair_whitespace(content);
    let characters_removed = content
        .chars()
        .count()
        .saturating_sub(cleaned_content.chars().count());
    WhitespaceReport {
        original_content: content.to_string(),
        cleaned_content,
        characters_removed,
    }
}

pub struct WhitespaceNormalizer;

impl Tool for WhitespaceNormalizer {
    fn name(&self) -> ToolName {
        ToolName::NormalizeWhitespace
    }

    fn execute(&self, args: &ToolArgs) -> ToolResult {
        ToolResult::from_outcome(args.content().map(normalize_whitespace))
    }
}
