//! Analyzer tools: read-only scans that report findings and scores

pub mod passive_voice;
pub mod phrases;
pub mod readability;
pub mod repetition;
pub mod run_on;

pub use passive_voice::{detect_passive_voice, PassiveVoiceDetector, PassiveVoiceReport};
pub use phrases::{
    detect_ai_phrases, detect_cliches, AiPhraseDetector, AiPhraseReport, ClicheDetector,
    ClicheFinding, ClicheReport,
};
pub use readability::{
    calculate_readability, difficulty_label, ReadabilityCalculator, ReadabilityReport,
};
pub use repetition::{detect_repetition, RepetitionFinder, RepetitionReport};
pub use run_on::{detect_run_on_sentences, RunOnFinder, RunOnReport, RunOnSentence};
