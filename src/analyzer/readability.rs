//! Flesch reading ease and Flesch-Kincaid grade level

use crate::text::{count_syllables, round1, split_sentences, tokenize};
use crate::tools::{Tool, ToolName};
use crate::{ToolArgs, ToolResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadabilityStats {
    pub sentences: usize,
    pub words: usize,
    pub syllables: usize,
    pub avg_sentence_length: f64,
    pub avg_syllables_per_word: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadabilityScores {
    /// Clamped to 0..=100, 0 when there is nothing to score
    pub flesch_reading_ease: i64,
    /// Floored at 0
    pub grade_level: f64,
    pub difficulty: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadabilityReport {
    pub stats: ReadabilityStats,
    pub readability: ReadabilityScores,
}

/// Label for a Flesch reading ease score
pub fn difficulty_label(flesch_score: f64) -> &'static str {
    match flesch_score {
        s if s >= 90.0 => "Very Easy",
        s if s >= 80.0 => "Easy",
        s if s >= 70.0 => "Fairly Easy",
        s if s >= 60.0 => "Standard",
        s if s >= 50.0 => "Fairly Difficult",
        s if s >= 30.0 => "Difficult",
        _ => "Very Difficult",
    }
}

pub fn calculate_readability(content: &str) -> ReadabilityReport {
    let sentences = split_sentences(content).len();
    let words_list = tokenize(content);
    let words = words_list.len();
    let syllables: usize = words_list.iter().map(|w| count_syllables(w)).sum();

    let avg_sentence_length = if sentences > 0 {
        words as f64 / sentences as f64
    } else {
        0.0
    };
    let avg_syllables_per_word = if words > 0 {
        syllables as f64 / words as f64
    } else {
        0.0
    };

    // Nothing to score: report the sentinel instead of the formula's intercept
    let (flesch, grade) = if sentences == 0 || words == 0 {
        (0.0, 0.0)
    } else {
        let flesch = 206.835 - 1.015 * avg_sentence_length - 84.6 * avg_syllables_per_word;
        let grade = 0.39 * avg_sentence_length + 11.8 * avg_syllables_per_word - 15.59;
        (flesch.clamp(0.0, 100.0), grade.max(0.0))
    };

    ReadabilityReport {
        stats: ReadabilityStats {
            sentences,
            words,
            syllables,
            avg_sentence_length: round1(avg_sentence_length),
            avg_syllables_per_word: round1(avg_syllables_per_word),
        },
        readability: ReadabilityScores {
            flesch_reading_ease: flesch.round_ties_even() as i64,
            grade_level: round1(grade),
            difficulty: difficulty_label(flesch).to_string(),
        },
    }
}

pub struct ReadabilityCalculator;

impl Tool for ReadabilityCalculator {
    fn name(&self) -> ToolName {
        ToolName::CalculateReadability
    }

    fn execute(&self, args: &ToolArgs) -> ToolResult {
        ToolResult::from_outcome(args.content().map(calculate_readability))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_content_reports_sentinels() {
        let report = calculate_readability("");
        assert_eq!(report.stats.sentences, 0);
        assert_eq!(report.stats.words, 0);
        assert_eq!(report.stats.syllables, 0);
        assert_eq!(report.readability.flesch_reading_ease, 0);
        assert_eq!(report.readability.grade_level, 0.0);
    }

    #[test]
    fn simple_text_is_easy() {
        let report = calculate_readability("The cat sat. The dog ran.");
        assert_eq!(report.stats.sentences, 2);
        assert_eq!(report.stats.words, 6);
        assert_eq!(report.stats.syllables, 6);
        assert_eq!(report.stats.avg_sentence_length, 3.0);
        assert_eq!(report.stats.avg_syllables_per_word, 1.0);
        // 206.835 - 3.045 - 84.6 = 119.19, clamped
        assert_eq!(report.readability.flesch_reading_ease, 100);
        assert_eq!(report.readability.grade_level, 0.0);
        assert_eq!(report.readability.difficulty, "Very Easy");
    }

    #[test]
    fn dense_text_scores_low() {
        let text = "Organizational institutionalization necessitates comprehensive \
                    interdepartmental communication methodologies.";
        let report = calculate_readability(text);
        assert!(report.readability.flesch_reading_ease <= 30);
        assert!(report.readability.grade_level > 12.0);
        assert_eq!(report.readability.difficulty, "Very Difficult");
    }

    #[test]
    fn difficulty_thresholds() {
        assert_eq!(difficulty_label(95.0), "Very Easy");
        assert_eq!(difficulty_label(90.0), "Very Easy");
        assert_eq!(difficulty_label(85.0), "Easy");
        assert_eq!(difficulty_label(72.0), "Fairly Easy");
        assert_eq!(difficulty_label(60.0), "Standard");
        assert_eq!(difficulty_label(55.0), "Fairly Difficult");
        assert_eq!(difficulty_label(30.0), "Difficult");
        assert_eq!(difficulty_label(29.9), "Very Difficult");
        assert_eq!(difficulty_label(-12.0), "Very Difficult");
    }

    #[test]
    fn tool_nests_stats_and_scores() {
        let result = ReadabilityCalculator.execute(&ToolArgs::new("Short words win."));
        assert!(result.is_success());
        assert_eq!(result.data()["stats"]["words"], 3);
        assert!(result.data()["readability"]["difficulty"].is_string());
    }
}
