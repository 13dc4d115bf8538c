//! Property tests: idempotence, bounds and dispatch invariants.

use anti_slop::analyzer::{calculate_readability, detect_repetition};
use anti_slop::cleaner::{normalize_whitespace, remove_emojis, remove_filler_words, remove_hedging};
use anti_slop::config::Config;
use anti_slop::patterns::{FILLER_WORDS, HEDGE_PHRASES};
use anti_slop::text::{compile_table, repair_whitespace};
use anti_slop::{ToolArgs, ToolName, ToolRegistry};
use proptest::prelude::*;

/// Prose-like text that hits the filler and hedge tables often
fn sloppy_text() -> impl Strategy<Value = String> {
    let word = prop::sample::select(vec![
        "Basically", "basically", "actually", "very", "really", "just", "it", "seems", "Perhaps",
        "maybe", "might", "kind", "of", "sort", "I", "think", "the", "plan", "works", "we",
        "ship", "Friday", "good", "is", "this",
    ]);
    let sep = prop::sample::select(vec![" ", "  ", ". ", ", ", "\n", "\n\n\n", "\t", "! "]);
    prop::collection::vec((word, sep), 0..40).prop_map(|parts| {
        parts
            .into_iter()
            .map(|(w, s)| format!("{}{}", w, s))
            .collect::<String>()
    })
}

proptest! {
    #[test]
    fn whitespace_repair_is_idempotent(text in "[a-zA-Z .,!?;:\t\r\n]{0,120}") {
        let once = repair_whitespace(&text);
        prop_assert_eq!(repair_whitespace(&once), once.clone());
        prop_assert_eq!(normalize_whitespace(&once).characters_removed, 0);
    }

    #[test]
    fn filler_cleaner_reaches_a_fixed_point(text in sloppy_text()) {
        let cleaned = remove_filler_words(&text).cleaned_content;
        for matcher in compile_table(FILLER_WORDS) {
            prop_assert!(!matcher.is_match(&cleaned), "{:?} left in {:?}", matcher.surface_form(), cleaned);
        }
        let again = remove_filler_words(&cleaned);
        prop_assert_eq!(again.cleaned_content, cleaned);
        prop_assert_eq!(again.filler_words_removed, 0);
    }

    #[test]
    fn hedging_cleaner_reaches_a_fixed_point(text in sloppy_text()) {
        let cleaned = remove_hedging(&text).cleaned_content;
        for matcher in compile_table(HEDGE_PHRASES) {
            prop_assert!(!matcher.is_match(&cleaned), "{:?} left in {:?}", matcher.surface_form(), cleaned);
        }
        prop_assert_eq!(remove_hedging(&cleaned).cleaned_content, cleaned);
    }

    #[test]
    fn emoji_cleaner_output_is_emoji_free(text in "[a-z \u{1F600}-\u{1F64F}\u{2600}-\u{26FF}]{0,60}") {
        let cleaned = remove_emojis(&text).cleaned_content;
        prop_assert_eq!(remove_emojis(&cleaned).emojis_removed, 0);
    }

    #[test]
    fn readability_scores_stay_in_bounds(text in "\\PC{0,200}") {
        let report = calculate_readability(&text);
        let flesch = report.readability.flesch_reading_ease;
        prop_assert!((0..=100).contains(&flesch));
        prop_assert!(report.readability.grade_level >= 0.0);
    }

    #[test]
    fn repetition_report_is_capped_and_real(
        words in prop::collection::vec(prop::sample::select(vec!["a", "b", "c", "d"]), 0..120),
        min_length in 1usize..6,
    ) {
        let report = detect_repetition(&words.join(" "), min_length).unwrap();
        prop_assert!(report.phrases.len() <= 20);
        prop_assert_eq!(report.repeated_phrases, report.phrases.len());
        prop_assert!(report.repetition_score <= 10);
        for finding in &report.phrases {
            prop_assert!(finding.occurrence_count >= 2);
        }
    }

    #[test]
    fn unknown_identifiers_always_fail(name in "[a-z_]{1,30}") {
        prop_assume!(name.parse::<ToolName>().is_err());
        let registry = ToolRegistry::with_provider(&Config::default(), None);
        let result = registry.invoke(&name, &ToolArgs::new("text"));
        prop_assert!(!result.is_success());
        let error = result.error().unwrap();
        prop_assert!(error.contains(&name));
    }
}

#[test]
fn empty_content_readability_is_all_zero() {
    let report = calculate_readability("");
    assert_eq!(report.stats.sentences, 0);
    assert_eq!(report.stats.words, 0);
    assert_eq!(report.stats.syllables, 0);
    assert_eq!(report.readability.flesch_reading_ease, 0);
    assert_eq!(report.readability.grade_level, 0.0);
}
