//! Run-on sentence finder

use crate::text::{percentage, split_sentences, word_count};
use crate::tools::{Tool, ToolName};
use crate::{ToolArgs, ToolError, ToolResult};
use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_WORDS: usize = 30;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunOnSentence {
    /// Full sentence text; previews are cut by the reporter, not here
    pub sentence: String,
    pub word_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunOnReport {
    pub total_sentences: usize,
    pub run_on_sentences: usize,
    pub percentage: u32,
    pub sentences: Vec<RunOnSentence>,
}

/// Flag sentences with more than `max_words` words
pub fn detect_run_on_sentences(content: &str, max_words: usize) -> Result<RunOnReport, ToolError> {
    if max_words < 1 {
        return Err(ToolError::MalformedArguments(
            "'max_words' must be an integer >= 1".to_string(),
        ));
    }

    let sentences = split_sentences(content);
    let flagged: Vec<RunOnSentence> = sentences
        .iter()
        .map(|s| (s, word_count(s)))
        .filter(|(_, words)| *words > max_words)
        .map(|(s, words)| RunOnSentence {
            sentence: s.to_string(),
            word_count: words,
        })
        .collect();

    Ok(RunOnReport {
        total_sentences: sentences.len(),
        run_on_sentences: flagged.len(),
        percentage: percentage(flagged.len(), sentences.len()),
        sentences: flagged,
    })
}

pub struct RunOnFinder {
    default_max_words: usize,
}

impl RunOnFinder {
    pub fn new() -> Self {
        Self::with_default_max_words(DEFAULT_MAX_WORDS)
    }

    pub fn with_default_max_words(default_max_words: usize) -> Self {
        Self { default_max_words }
    }
}

impl Default for RunOnFinder {
    fn default() -> Self {
        Self::new()
    }
}

impl Tool for RunOnFinder {
    fn name(&self) -> ToolName {
        ToolName::DetectRunOnSentences
    }

    fn execute(&self, args: &ToolArgs) -> ToolResult {
        let outcome = args.content().and_then(|content| {
            let max_words = args.positive_int("max_words", self.default_max_words)?;
            detect_run_on_sentences(content, max_words)
        });
        ToolResult::from_outcome(outcome)
    }
}
