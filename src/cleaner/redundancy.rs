//! Redundant-pair rewriting ("past history" -> "history").
//!
//! Single pass in table order; no whitespace repair since replacements are
//! whole words. A replacement can complete a new pair with the word before
//! it ("past past history" -> "past history"), which a second run would
//! rewrite again.

use crate::patterns::REDUNDANCIES;
use crate::text::{compile_table, PhraseMatcher};
use crate::tools::{Tool, ToolName};
use crate::{ToolArgs, ToolResult};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

static REDUNDANCY_MATCHERS: Lazy<Vec<PhraseMatcher>> = Lazy::new(|| compile_table(REDUNDANCIES));

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedundancyChange {
    pub phrase: String,
    pub replacement: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedundancyReport {
    pub original_content: String,
    pub cleaned_content: String,
    /// Distinct entries that fired
    pub redundancies_removed: usize,
    pub changes: Vec<RedundancyChange>,
}

pub fn remove_redundancies(content: &str) -> RedundancyReport {
    let mut cleaned = content.to_string();
    let mut changes = Vec::new();

    for matcher in REDUNDANCY_MATCHERS.iter() {
        let (rewritten, count) = matcher.rewrite(&cleaned);
        if count == 0 {
            continue;
        }
        let rewritten = rewritten.into_owned();
        changes.push(RedundancyChange {
            phrase: matcher.surface_form().to_string(),
            replacement: matcher.entry().replacement.unwrap_or_default().to_string(),
            count,
        });
        cleaned = rewritten;
    }

    RedundancyReport {
        original_content: content.to_string(),
        cleaned_content: cleaned,
        redundancies_removed: changes.len(),
        changes,
    }
}

pub struct RedundancyCleaner;

impl Tool for RedundancyCleaner {
    fn name(&self) -> ToolName {
        ToolName::RemoveRedundancies
    }

    fn execute(&self, args: &ToolArgs) -> ToolResult {
        ToolResult::from_outcome(args.content().map(remove_redundancies))
    }
}
