//! Tool catalog: the closed set of tool identifiers and the contract every
//! tool implements.

use crate::{ToolArgs, ToolError, ToolResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stable identifier of a catalog tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolName {
    // Analyzers
    DetectAiPhrases,
    DetectCliches,
    DetectPassiveVoice,
    CalculateReadability,
    DetectRepetition,
    DetectRunOnSentences,
    // Cleaners
    RemoveFillerWords,
    RemoveHedging,
    RemoveRedundancies,
    RemoveEmojis,
    NormalizeWhitespace,
    // AI-backed
    AnalyzeContentForSlop,
    ImproveContentFromSlop,
}

impl ToolName {
    /// Every tool, in catalog order
    pub const ALL: [ToolName; 13] = [
        ToolName::DetectAiPhrases,
        ToolName::DetectCliches,
        ToolName::DetectPassiveVoice,
        ToolName::CalculateReadability,
        ToolName::DetectRepetition,
        ToolName::DetectRunOnSentences,
        ToolName::RemoveFillerWords,
        ToolName::RemoveHedging,
        ToolName::RemoveRedundancies,
        ToolName::RemoveEmojis,
        ToolName::NormalizeWhitespace,
        ToolName::AnalyzeContentForSlop,
        ToolName::ImproveContentFromSlop,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ToolName::DetectAiPhrases => "detect_ai_phrases",
            ToolName::DetectCliches => "detect_cliches",
            ToolName::DetectPassiveVoice => "detect_passive_voice",
            ToolName::CalculateReadability => "calculate_readability",
            ToolName::DetectRepetition => "detect_repetition",
            ToolName::DetectRunOnSentences => "detect_run_on_sentences",
            ToolName::RemoveFillerWords => "remove_filler_words",
            ToolName::RemoveHedging => "remove_hedging",
            ToolName::RemoveRedundancies => "remove_redundancies",
            ToolName::RemoveEmojis => "remove_emojis",
            ToolName::NormalizeWhitespace => "normalize_whitespace",
            ToolName::AnalyzeContentForSlop => "analyze_content_for_slop",
            ToolName::ImproveContentFromSlop => "improve_content_from_slop",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ToolName::DetectAiPhrases => "Detect common AI-generated phrases like 'delve into', 'it's worth noting', 'in today's world', etc.",
            ToolName::DetectCliches => "Detect business clichés and buzzwords like 'game changer', 'synergy', 'low-hanging fruit', etc.",
            ToolName::DetectPassiveVoice => "Detect passive voice usage in text and calculate percentage of passive sentences.",
            ToolName::CalculateReadability => "Calculate Flesch reading ease score, grade level, and other readability metrics.",
            ToolName::DetectRepetition => "Find repeated phrases in text (helps identify redundant content).",
            ToolName::DetectRunOnSentences => "Detect overly long run-on sentences that should be split.",
            ToolName::RemoveFillerWords => "Remove filler words like 'actually', 'basically', 'literally', 'just', 'very', 'really', etc.",
            ToolName::RemoveHedging => "Remove hedging language like 'perhaps', 'maybe', 'might', 'it seems', etc. to make text more direct.",
            ToolName::RemoveRedundancies => "Remove redundant phrases like 'past history', 'future plans', 'absolutely essential', etc.",
            ToolName::RemoveEmojis => "Remove all emojis from text.",
            ToolName::NormalizeWhitespace => "Normalize whitespace, removing extra spaces, tabs, and blank lines.",
            ToolName::AnalyzeContentForSlop => "Analyze text for low-quality AI-generated content. Returns a score (0-10) where higher means more slop, plus specific issues and suggestions.",
            ToolName::ImproveContentFromSlop => "Use AI to rewrite text, removing slop and improving clarity while preserving meaning.",
        }
    }

    /// Options the tool accepts besides `content`
    pub fn parameters(self) -> &'static [ParamSpec] {
        match self {
            ToolName::DetectRepetition => &[ParamSpec {
                name: "min_length",
                kind: ParamKind::Integer,
                description: "Minimum phrase length in words (default 3)",
            }],
            ToolName::DetectRunOnSentences => &[ParamSpec {
                name: "max_words",
                kind: ParamKind::Integer,
                description: "Maximum words per sentence before it counts as run-on (default 30)",
            }],
            ToolName::ImproveContentFromSlop => &[
                ParamSpec {
                    name: "preserve_meaning",
                    kind: ParamKind::Boolean,
                    description: "Preserve the original meaning when rewriting (default true)",
                },
                ParamSpec {
                    name: "target_tone",
                    kind: ParamKind::String,
                    description: "Tone of the rewritten text (default \"professional\")",
                },
            ],
            _ => &[],
        }
    }

    /// Whether the tool needs the external completion provider
    pub fn is_ai(self) -> bool {
        matches!(
            self,
            ToolName::AnalyzeContentForSlop | ToolName::ImproveContentFromSlop
        )
    }

    pub fn list_all() -> Vec<&'static str> {
        Self::ALL.iter().map(|t| t.as_str()).collect()
    }
}

impl fmt::Display for ToolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToolName {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ToolError::UnknownTool {
                name: s.to_string(),
                valid: Self::list_all(),
            })
    }
}

/// JSON type of a tool option
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    String,
    Integer,
    Boolean,
}

impl ParamKind {
    pub fn json_type(self) -> &'static str {
        match self {
            ParamKind::String => "string",
            ParamKind::Integer => "integer",
            ParamKind::Boolean => "boolean",
        }
    }
}

/// One optional tool parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSpec {
    pub name: &'static str,
    pub kind: ParamKind,
    pub description: &'static str,
}

/// Catalog entry used for discovery
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolDescriptor {
    #[serde(rename = "name")]
    pub identifier: ToolName,
    pub description: &'static str,
}

impl From<ToolName> for ToolDescriptor {
    fn from(identifier: ToolName) -> Self {
        Self {
            identifier,
            description: identifier.description(),
        }
    }
}

/// Contract every tool implements
pub trait Tool: Send + Sync {
    /// Identifier of the tool
    fn name(&self) -> ToolName;

    /// Run the tool. Never panics on bad input; failures come back as an
    /// unsuccessful [`ToolResult`].
    fn execute(&self, args: &ToolArgs) -> ToolResult;

    fn description(&self) -> &'static str {
        self.name().description()
    }

    fn descriptor(&self) -> ToolDescriptor {
        ToolDescriptor::from(self.name())
    }
}
