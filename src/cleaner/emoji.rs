//! Emoji removal over fixed pictograph, symbol and flag blocks

use crate::patterns::EMOJI_RANGES;
use crate::tools::{Tool, ToolName};
use crate::{ToolArgs, ToolResult};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static EMOJI_RE: Lazy<Regex> = Lazy::new(|| {
    let class: String = EMOJI_RANGES
        .iter()
        .map(|(lo, hi)| format!(r"\x{{{:X}}}-\x{{{:X}}}", *lo as u32, *hi as u32))
        .collect();
    Regex::new(&format!("[{}]+", class)).unwrap()
});

static ANY_WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmojiReport {
    pub original_content: String,
    pub cleaned_content: String,
    /// Number of emoji runs removed
    pub emojis_removed: usize,
    /// The removed runs, in document order
    pub emojis_found: Vec<String>,
}

pub fn remove_emojis(content: &str) -> EmojiReport {
    let emojis_found: Vec<String> = EMOJI_RE
        .find_iter(content)
        .map(|m| m.as_str().to_string())
        .collect();
    let stripped = EMOJI_RE.replace_all(content, "");
    let cleaned_content = ANY_WHITESPACE_RE
        .replace_all(&stripped, " ")
        .trim()
        .to_string();

    EmojiReport {
        original_content: content.to_string(),
        cleaned_content,
        emojis_removed: emojis_found.len(),
        emojis_found,
    }
}

pub struct EmojiCleaner;

impl Tool for EmojiCleaner {
    fn name(&self) -> ToolName {
        ToolName::RemoveEmojis
    }

    fn execute(&self, args: &ToolArgs) -> ToolResult {
        ToolResult::from_outcome(args.content().map(remove_emojis))
    }
}
