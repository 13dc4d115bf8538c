//! Cleaner tools: rewrite content and report what changed.
//!
//! Every cleaner returns the untouched `original_content` next to the
//! `cleaned_content`; a cleaner either produces its full output or fails.

pub mod emoji;
pub mod phrases;
pub mod redundancy;
pub mod whitespace;

pub use emoji::{remove_emojis, EmojiCleaner, EmojiReport};
pub use phrases::{
    remove_filler_words, remove_hedging, FillerReport, FillerWordsCleaner, HedgingCleaner,
    HedgingReport,
};
pub use redundancy::{remove_redundancies, RedundancyChange, RedundancyCleaner, RedundancyReport};
pub use whitespace::{normalize_whitespace, WhitespaceNormalizer, WhitespaceReport};
