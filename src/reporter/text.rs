//! Human-readable rendering of tool results

use crate::ai::{Improvement, SlopAnalysis};
use crate::analyzer::{
    AiPhraseReport, ClicheReport, PassiveVoiceReport, ReadabilityReport, RepetitionReport,
    RunOnReport,
};
use crate::cleaner::{EmojiReport, FillerReport, HedgingReport, RedundancyReport, WhitespaceReport};
use crate::tools::ToolName;
use crate::ToolResult;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Passive share (percent) above which a rewrite is recommended
const PASSIVE_WARNING_PERCENT: u32 = 20;
/// Run-on sentences listed in full output
const RUN_ON_PREVIEW_COUNT: usize = 5;
/// Characters shown per run-on sentence
const RUN_ON_PREVIEW_CHARS: usize = 100;

/// Reporter for terminal and MCP text output
#[derive(Debug, Clone, Copy, Default)]
pub struct TextReporter;

impl TextReporter {
    pub fn new() -> Self {
        Self
    }

    /// Render the result of `tool`. Failures render as `Error: <message>`.
    pub fn format(&self, tool: ToolName, result: &ToolResult) -> String {
        if let Some(error) = result.error() {
            return format!("Error: {}", error);
        }

        let rendered = match tool {
            ToolName::DetectAiPhrases => typed(result, format_ai_phrases),
            ToolName::DetectCliches => typed(result, format_cliches),
            ToolName::DetectPassiveVoice => typed(result, format_passive_voice),
            ToolName::CalculateReadability => typed(result, format_readability),
            ToolName::DetectRepetition => typed(result, format_repetition),
            ToolName::DetectRunOnSentences => typed(result, format_run_on),
            ToolName::RemoveFillerWords => typed(result, format_filler),
            ToolName::RemoveHedging => typed(result, format_hedging),
            ToolName::RemoveRedundancies => typed(result, format_redundancies),
            ToolName::RemoveEmojis => typed(result, format_emojis),
            ToolName::NormalizeWhitespace => typed(result, format_whitespace),
            ToolName::AnalyzeContentForSlop => typed(result, format_analysis),
            ToolName::ImproveContentFromSlop => typed(result, format_improvement),
        };

        rendered.unwrap_or_else(|| {
            serde_json::to_string_pretty(result.data()).unwrap_or_else(|_| "{}".to_string())
        })
    }
}

/// Decode the payload back into its report type and render it
fn typed<T: DeserializeOwned>(result: &ToolResult, render: fn(&T) -> Vec<String>) -> Option<String> {
    let report: T = serde_json::from_value(Value::Object(result.data().clone())).ok()?;
    Some(render(&report).join("\n"))
}

fn format_ai_phrases(report: &AiPhraseReport) -> Vec<String> {
    let mut parts = vec![
        format!("AI Phrases Detected: {}", report.phrases_detected),
        format!("Slop Score: {}/10\n", report.slop_score),
    ];
    if report.phrases.is_empty() {
        parts.push("No AI phrases detected. Content looks clean!".to_string());
    } else {
        parts.extend(
            report
                .phrases
                .iter()
                .map(|p| format!("'{}' - found {} time(s)", p.matched_text, p.occurrence_count)),
        );
    }
    parts
}

fn format_cliches(report: &ClicheReport) -> Vec<String> {
    let mut parts = vec![format!("Clichés Detected: {}\n", report.cliches_detected)];
    if report.cliches.is_empty() {
        parts.push("No clichés detected!".to_string());
    } else {
        parts.extend(
            report
                .cliches
                .iter()
                .map(|c| format!("'{}' - {} time(s)", c.cliche, c.count)),
        );
    }
    parts
}

fn format_passive_voice(report: &PassiveVoiceReport) -> Vec<String> {
    let recommendation = if report.passive_percentage > PASSIVE_WARNING_PERCENT {
        "Consider rewriting in active voice"
    } else {
        "Passive voice usage is acceptable"
    };
    vec![
        "Passive Voice Analysis:".to_string(),
        format!("Total Sentences: {}", report.total_sentences),
        format!(
            "Passive Sentences: {} ({}%)",
            report.passive_sentences, report.passive_percentage
        ),
        format!("Passive Phrases Found: {}\n", report.passive_phrases_found),
        format!("Recommendation: {}", recommendation),
    ]
}

fn format_readability(report: &ReadabilityReport) -> Vec<String> {
    let stats = &report.stats;
    let scores = &report.readability;
    vec![
        "Readability Analysis:".to_string(),
        format!("Flesch Reading Ease: {}/100", scores.flesch_reading_ease),
        format!("Difficulty: {}", scores.difficulty),
        format!("Grade Level: {:.1}\n", scores.grade_level),
        "Statistics:".to_string(),
        format!("- Sentences: {}", stats.sentences),
        format!("- Words: {}", stats.words),
        format!("- Syllables: {}", stats.syllables),
        format!("- Avg Sentence Length: {:.1} words", stats.avg_sentence_length),
        format!("- Avg Syllables per Word: {:.1}", stats.avg_syllables_per_word),
    ]
}

fn format_repetition(report: &RepetitionReport) -> Vec<String> {
    let mut parts = vec![format!("Repeated Phrases Found: {}\n", report.repeated_phrases)];
    if report.phrases.is_empty() {
        parts.push("No significant repetition detected.".to_string());
    } else {
        parts.extend(
            report
                .phrases
                .iter()
                .map(|p| format!("'{}' - {} times", p.matched_text, p.occurrence_count)),
        );
    }
    parts
}

fn format_run_on(report: &RunOnReport) -> Vec<String> {
    let mut parts = vec![
        "Run-on Sentence Analysis:".to_string(),
        format!("Total Sentences: {}", report.total_sentences),
        format!(
            "Run-on Sentences: {} ({}%)\n",
            report.run_on_sentences, report.percentage
        ),
    ];
    if report.sentences.is_empty() {
        parts.push("No run-on sentences detected!".to_string());
    } else {
        parts.push("Run-on sentences found:".to_string());
        parts.extend(
            report
                .sentences
                .iter()
                .take(RUN_ON_PREVIEW_COUNT)
                .map(|s| format!("- {} words: {}", s.word_count, preview(&s.sentence))),
        );
    }
    parts
}

fn preview(sentence: &str) -> String {
    match sentence.char_indices().nth(RUN_ON_PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}...", &sentence[..cut]),
        None => sentence.to_string(),
    }
}

fn cleaned(content: &str) -> String {
    format!("Cleaned Content:\n{}\n", content)
}

fn format_filler(report: &FillerReport) -> Vec<String> {
    let mut parts = vec![cleaned(&report.cleaned_content)];
    if report.breakdown.is_empty() {
        parts.push(format!("Removed {} filler words", report.filler_words_removed));
    } else {
        parts.push(format!("Removed {} filler words:", report.filler_words_removed));
        parts.extend(
            report
                .breakdown
                .iter()
                .map(|(word, count)| format!("- {}: {}", word, count)),
        );
    }
    parts
}

fn format_hedging(report: &HedgingReport) -> Vec<String> {
    let mut parts = vec![cleaned(&report.cleaned_content)];
    if report.breakdown.is_empty() {
        parts.push(format!("Removed {} hedging phrases", report.hedging_removed));
    } else {
        parts.push(format!("Removed {} hedging phrases:", report.hedging_removed));
        parts.extend(
            report
                .breakdown
                .iter()
                .map(|(phrase, count)| format!("- '{}': {}", phrase, count)),
        );
    }
    parts
}

fn format_redundancies(report: &RedundancyReport) -> Vec<String> {
    let mut parts = vec![cleaned(&report.cleaned_content)];
    if report.changes.is_empty() {
        parts.push(format!("Removed {} redundancies", report.redundancies_removed));
    } else {
        parts.push(format!("Removed {} redundancies:", report.redundancies_removed));
        parts.extend(report.changes.iter().map(|c| {
            format!("- '{}' → '{}' ({} times)", c.phrase, c.replacement, c.count)
        }));
    }
    parts
}

fn format_emojis(report: &EmojiReport) -> Vec<String> {
    vec![
        cleaned(&report.cleaned_content),
        format!("Removed {} emoji(s)", report.emojis_removed),
    ]
}

fn format_whitespace(report: &WhitespaceReport) -> Vec<String> {
    vec![
        format!("Normalized Content:\n{}\n", report.cleaned_content),
        format!(
            "Removed {} extra whitespace character(s)",
            report.characters_removed
        ),
    ]
}

/// Plain text for a provider-supplied value (strings unquoted)
fn plain(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn bullets(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items.iter().map(|i| format!("- {}", plain(i))).collect(),
        Value::Null => Vec::new(),
        other => vec![format!("- {}", plain(other))],
    }
}

fn format_analysis(analysis: &SlopAnalysis) -> Vec<String> {
    let mut parts = vec![
        "Analysis Results:".to_string(),
        format!("Score: {}/10\n", plain(&analysis.score)),
        "Issues Found:".to_string(),
    ];
    parts.extend(bullets(&analysis.issues));
    parts.push("\nSuggestions:".to_string());
    parts.extend(bullets(&analysis.suggestions));
    parts
}

fn format_improvement(improvement: &Improvement) -> Vec<String> {
    let mut parts = vec![
        format!("Improved Content:\n{}\n", plain(&improvement.improved_content)),
        "Changes Made:".to_string(),
    ];
    parts.extend(bullets(&improvement.changes_made));
    parts.push(format!(
        "\nWord Count: {} → {}",
        plain(&improvement.original_word_count),
        plain(&improvement.new_word_count)
    ));
    parts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::{calculate_readability, detect_passive_voice, detect_run_on_sentences};
    use crate::cleaner::{remove_filler_words, remove_redundancies};
    use serde_json::json;

    fn render<T: serde::Serialize>(tool: ToolName, report: &T) -> String {
        TextReporter::new().format(tool, &ToolResult::from_report(report))
    }

    #[test]
    fn failure_renders_error_line() {
        let out = TextReporter::new().format(
            ToolName::DetectCliches,
            &ToolResult::failure("Invalid arguments: missing required argument 'content'"),
        );
        assert_eq!(out, "Error: Invalid arguments: missing required argument 'content'");
    }

    #[test]
    fn passive_voice_recommends_rewrite_above_threshold() {
        let out = render(
            ToolName::DetectPassiveVoice,
            &detect_passive_voice("The report was written by the team."),
        );
        assert!(out.contains("Passive Sentences: 1 (100%)"));
        assert!(out.ends_with("Recommendation: Consider rewriting in active voice"));

        let out = render(ToolName::DetectPassiveVoice, &detect_passive_voice("We wrote it."));
        assert!(out.ends_with("Recommendation: Passive voice usage is acceptable"));
    }

    #[test]
    fn readability_lists_statistics() {
        let out = render(
            ToolName::CalculateReadability,
            &calculate_readability("The cat sat on the mat."),
        );
        assert!(out.starts_with("Readability Analysis:\nFlesch Reading Ease: "));
        assert!(out.contains("- Words: 6"));
        assert!(out.contains("- Avg Sentence Length: 6.0 words"));
    }

    #[test]
    fn run_on_previews_are_truncated_and_capped() {
        let long: String = (0..40).map(|i| format!("word{} ", i)).collect();
        let text = format!("{}. ", long.trim()).repeat(7);
        let report = detect_run_on_sentences(&text, 30).unwrap();
        let out = render(ToolName::DetectRunOnSentences, &report);

        let listed: Vec<&str> = out.lines().filter(|l| l.starts_with("- 40 words: ")).collect();
        assert_eq!(listed.len(), 5);
        assert!(listed[0].ends_with("..."));
        assert_eq!(listed[0].trim_start_matches("- 40 words: ").chars().count(), 103);
    }

    #[test]
    fn filler_breakdown_is_listed() {
        let out = render(
            ToolName::RemoveFillerWords,
            &remove_filler_words("Basically this is actually very good."),
        );
        assert!(out.starts_with("Cleaned Content:\nThis is good.\n"));
        assert!(out.contains("Removed 3 filler words:\n- actually: 1\n- basically: 1\n- very: 1"));
    }

    #[test]
    fn redundancy_changes_show_replacement() {
        let out = render(
            ToolName::RemoveRedundancies,
            &remove_redundancies("Our past history matters."),
        );
        assert!(out.contains("- 'past history' → 'history' (1 times)"));
    }

    #[test]
    fn ai_analysis_renders_bullets() {
        let mut data = serde_json::Map::new();
        data.insert("score".into(), json!(6));
        data.insert("issues".into(), json!(["vague claims"]));
        data.insert("suggestions".into(), json!(["add numbers"]));
        let out = TextReporter::new().format(ToolName::AnalyzeContentForSlop, &ToolResult::success(data));
        assert_eq!(
            out,
            "Analysis Results:\nScore: 6/10\n\nIssues Found:\n- vague claims\n\nSuggestions:\n- add numbers"
        );
    }

    #[test]
    fn unexpected_payload_falls_back_to_json() {
        let mut data = serde_json::Map::new();
        data.insert("something".into(), json!("else"));
        let out = TextReporter::new().format(ToolName::DetectCliches, &ToolResult::success(data));
        assert!(out.contains("\"something\": \"else\""));
    }
}
