//! Phrase detectors: AI-typical phrases and business cliches.
//!
//! Each table entry is matched independently, so overlapping entries such as
//! "game changer" and "game-changer" may both count.

use crate::patterns::{AI_PHRASES, CLICHES};
use crate::text::{compile_table, PhraseMatcher};
use crate::tools::{Tool, ToolName};
use crate::{Finding, ToolArgs, ToolResult};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

static AI_PHRASE_MATCHERS: Lazy<Vec<PhraseMatcher>> = Lazy::new(|| compile_table(AI_PHRASES));
static CLICHE_MATCHERS: Lazy<Vec<PhraseMatcher>> = Lazy::new(|| compile_table(CLICHES));

const SLOP_POINTS_PER_PHRASE: usize = 2;
const MAX_SLOP_SCORE: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiPhraseReport {
    /// Distinct table entries found
    pub phrases_detected: usize,
    /// Sum of all occurrence counts
    pub total_instances: usize,
    /// `min(10, 2 * phrases_detected)`
    pub slop_score: usize,
    pub phrases: Vec<Finding>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClicheFinding {
    pub cliche: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClicheReport {
    pub cliches_detected: usize,
    pub total_instances: usize,
    pub cliches: Vec<ClicheFinding>,
}

/// Count every matcher against `content`, keeping table order and dropping misses
fn scan(matchers: &[PhraseMatcher], content: &str) -> Vec<Finding> {
    matchers
        .iter()
        .filter_map(|m| match m.count(content) {
            0 => None,
            n => Some(Finding::new(m.surface_form(), n)),
        })
        .collect()
}

pub fn detect_ai_phrases(content: &str) -> AiPhraseReport {
    let phrases = scan(&AI_PHRASE_MATCHERS, content);
    let total_instances = phrases.iter().map(|f| f.occurrence_count).sum();
    AiPhraseReport {
        phrases_detected: phrases.len(),
        total_instances,
        slop_score: (phrases.len() * SLOP_POINTS_PER_PHRASE).min(MAX_SLOP_SCORE),
        phrases,
    }
}

pub fn detect_cliches(content: &str) -> ClicheReport {
    let cliches: Vec<ClicheFinding> = scan(&CLICHE_MATCHERS, content)
        .into_iter()
        .map(|f| ClicheFinding {
            cliche: f.matched_text,
            count: f.occurrence_count,
        })
        .collect();
    ClicheReport {
        cliches_detected: cliches.len(),
        total_instances: cliches.iter().map(|c| c.count).sum(),
        cliches,
    }
}

pub struct AiPhraseDetector;

impl Tool for AiPhraseDetector {
    fn name(&self) -> ToolName {
        ToolName::DetectAiPhrases
    }

    fn execute(&self, args: &ToolArgs) -> ToolResult {
        ToolResult::from_outcome(args.content().map(detect_ai_phrases))
    }
}

pub struct ClicheDetector;

impl Tool for ClicheDetector {
    fn name(&self) -> ToolName {
        ToolName::DetectCliches
    }

    fn execute(&self, args: &ToolArgs) -> ToolResult {
        ToolResult::from_outcome(args.content().map(detect_cliches))
    }
}
