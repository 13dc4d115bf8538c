//! Filler-word and hedging removal.
//!
//! Matches are deleted, whitespace is repaired, and the whole pass repeats
//! until no entry of the table matches any more. Deleting a phrase can
//! bring two words together that form another entry ("it it seems seems"),
//! so a single pass is not enough for the output to be clean.

use crate::patterns::{FILLER_WORDS, HEDGE_PHRASES};
use crate::text::{compile_table, repair_whitespace, PhraseMatcher};
use crate::tools::{Tool, ToolName};
use crate::{ToolArgs, ToolResult};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

static FILLER_MATCHERS: Lazy<Vec<PhraseMatcher>> = Lazy::new(|| compile_table(FILLER_WORDS));
static HEDGE_MATCHERS: Lazy<Vec<PhraseMatcher>> = Lazy::new(|| compile_table(HEDGE_PHRASES));

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FillerReport {
    pub original_content: String,
    pub cleaned_content: String,
    pub filler_words_removed: usize,
    /// Removals per table entry
    pub breakdown: BTreeMap<String, usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HedgingReport {
    pub original_content: String,
    pub cleaned_content: String,
    pub hedging_removed: usize,
    pub breakdown: BTreeMap<String, usize>,
}

/// Delete every match of `matchers` until none is left
fn strip_until_clean(content: &str, matchers: &[PhraseMatcher]) -> (String, BTreeMap<String, usize>) {
    let mut breakdown = BTreeMap::new();
    let mut current = content.to_string();
    loop {
        let mut removed_this_pass = 0;
        for matcher in matchers {
            let (next, count) = matcher.delete(&current);
            if count > 0 {
                *breakdown
                    .entry(matcher.surface_form().to_string())
                    .or_insert(0) += count;
                removed_this_pass += count;
                current = next;
            }
        }
        current = repair_whitespace(&current);
        if removed_this_pass == 0 {
            return (current, breakdown);
        }
    }
}

pub fn remove_filler_words(content: &str) -> FillerReport {
    let (cleaned_content, breakdown) = strip_until_clean(content, &FILLER_MATCHERS);
    FillerReport {
        original_content: content.to_string(),
        cleaned_content,
        filler_words_removed: breakdown.values().sum(),
        breakdown,
    }
}

pub fn remove_hedging(content: &str) -> HedgingReport {
    let (cleaned_content, breakdown) = strip_until_clean(content, &HEDGE_MATCHERS);
    HedgingReport {
        original_content: content.to_string(),
        cleaned_content,
        hedging_removed: breakdown.values().sum(),
        breakdown,
    }
}

pub struct FillerWordsCleaner;

impl Tool for FillerWordsCleaner {
    fn name(&self) -> ToolName {
        ToolName::RemoveFillerWords
    }

    fn execute(&self, args: &ToolArgs) -> ToolResult {
        ToolResult::from_outcome(args.content().map(remove_filler_words))
    }
}

pub struct HedgingCleaner;

impl Tool for HedgingCleaner {
    fn name(&self) -> ToolName {
        ToolName::RemoveHedging
    }

    fn execute(&self, args: &ToolArgs) -> ToolResult {
        ToolResult::from_outcome(args.content().map(remove_hedging))
    }
}
