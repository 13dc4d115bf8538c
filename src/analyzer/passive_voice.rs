//! Passive voice heuristic: a form of "to be" followed by a word ending in
//! `-ed` or `-en`. Past-participle adjectives ("is tired") are counted too.

use crate::text::{percentage, split_sentences};
use crate::tools::{Tool, ToolName};
use crate::{ToolArgs, ToolResult};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static PASSIVE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)\b(is|are|was|were|be|been|being)\s+\w+ed\b",
        r"(?i)\b(is|are|was|were|be|been|being)\s+\w+en\b",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassiveVoiceReport {
    pub total_sentences: usize,
    pub passive_sentences: usize,
    pub passive_percentage: u32,
    /// Raw match count over both patterns; can exceed `passive_sentences`
    pub passive_phrases_found: usize,
}

pub fn detect_passive_voice(content: &str) -> PassiveVoiceReport {
    let passive_phrases_found = PASSIVE_PATTERNS
        .iter()
        .map(|re| re.find_iter(content).count())
        .sum();

    let sentences = split_sentences(content);
    let passive_sentences = sentences
        .iter()
        .filter(|s| PASSIVE_PATTERNS.iter().any(|re| re.is_match(s)))
        .count();

    PassiveVoiceReport {
        total_sentences: sentences.len(),
        passive_sentences,
        passive_percentage: percentage(passive_sentences, sentences.len()),
        passive_phrases_found,
    }
}

pub struct PassiveVoiceDetector;

impl Tool for PassiveVoiceDetector {
    fn name(&self) -> ToolName {
        ToolName::DetectPassiveVoice
    }

    fn execute(&self, args: &ToolArgs) -> ToolResult {
        ToolResult::from_outcome(args.content().map(detect_passive_voice))
    }
}
