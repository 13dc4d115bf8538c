//! Repeated phrase finder: counts every word window of `min_length..=5`
//! words and reports the windows seen more than once.

use crate::text::tokenize;
use crate::tools::{Tool, ToolName};
use crate::{Finding, ToolArgs, ToolError, ToolResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const DEFAULT_MIN_LENGTH: usize = 3;
const MAX_WINDOW: usize = 5;
const MAX_REPORTED: usize = 20;
const MAX_REPETITION_SCORE: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepetitionReport {
    pub repeated_phrases: usize,
    /// Most repeated first, ties in first-seen order; at most 20
    pub phrases: Vec<Finding>,
    /// `min(10, repeated_phrases / 2)`
    pub repetition_score: usize,
}

/// Find repeated word windows. `min_length` must be at least 1.
pub fn detect_repetition(content: &str, min_length: usize) -> Result<RepetitionReport, ToolError> {
    if min_length < 1 {
        return Err(ToolError::MalformedArguments(
            "'min_length' must be an integer >= 1".to_string(),
        ));
    }

    let words: Vec<String> = tokenize(content).iter().map(|w| w.to_lowercase()).collect();

    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut first_seen: Vec<String> = Vec::new();
    for length in min_length..=MAX_WINDOW {
        for window in words.windows(length) {
            let phrase = window.join(" ");
            match counts.get_mut(&phrase) {
                Some(count) => *count += 1,
                None => {
                    counts.insert(phrase.clone(), 1);
                    first_seen.push(phrase);
                }
            }
        }
    }

    let mut phrases: Vec<Finding> = first_seen
        .into_iter()
        .filter_map(|phrase| {
            let count = counts.get(&phrase).copied().unwrap_or(0);
            (count > 1).then(|| Finding::new(phrase, count))
        })
        .collect();
    // stable: equal counts keep first-seen order
    phrases.sort_by(|a, b| b.occurrence_count.cmp(&a.occurrence_count));
    phrases.truncate(MAX_REPORTED);

    Ok(RepetitionReport {
        repeated_phrases: phrases.len(),
        repetition_score: (phrases.len() / 2).min(MAX_REPETITION_SCORE),
        phrases,
    })
}

pub struct RepetitionFinder {
    default_min_length: usize,
}

impl RepetitionFinder {
    pub fn new() -> Self {
        Self::with_default_min_length(DEFAULT_MIN_LENGTH)
    }

    pub fn with_default_min_length(default_min_length: usize) -> Self {
        Self { default_min_length }
    }
}

impl Default for RepetitionFinder {
    fn default() -> Self {
        Self::new()
    }
}

impl Tool for RepetitionFinder {
    fn name(&self) -> ToolName {
        ToolName::DetectRepetition
    }

    fn execute(&self, args: &ToolArgs) -> ToolResult {
        let outcome = args.content().and_then(|content| {
            let min_length = args.positive_int("min_length", self.default_min_length)?;
            detect_repetition(content, min_length)
        });
        ToolResult::from_outcome(outcome)
    }
}
