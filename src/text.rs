//! Text primitives shared by every tool: sentence splitting, tokenizing,
//! syllable estimation, whitespace repair and whole-phrase matching.

use crate::patterns::PatternEntry;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::borrow::Cow;

static SENTENCE_BREAK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").unwrap());

static NON_LETTER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z]").unwrap());
static SILENT_SUFFIX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:[^laeiouy]es|ed|[^laeiouy]e)$").unwrap());
static VOWEL_RUN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[aeiouy]+").unwrap());

static LINE_ENDING_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\r\n?").unwrap());
static HORIZONTAL_SPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t]+").unwrap());
static TRAILING_SPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r" +\n").unwrap());
static BLANK_LINES_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());
static SPACE_BEFORE_PUNCT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r" +([.,!?;:])").unwrap());

/// Split on runs of `.`, `!` and `?`, dropping empty fragments.
/// Fragments are trimmed and returned in document order.
pub fn split_sentences(text: &str) -> Vec<&str> {
    SENTENCE_BREAK_RE
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Whitespace-separated tokens
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Heuristic syllable count for one word.
///
/// Not phonetic: short words count as one, a silent trailing `e`/`es`/`ed`
/// and a leading `y` are dropped, then each run of vowels is a syllable.
pub fn count_syllables(word: &str) -> usize {
    let lower = word.to_lowercase();
    let letters = NON_LETTER_RE.replace_all(&lower, "");
    if letters.len() <= 3 {
        return 1;
    }
    let stripped = SILENT_SUFFIX_RE.replace(&letters, "");
    let stripped = stripped.strip_prefix('y').unwrap_or(&stripped);
    match VOWEL_RUN_RE.find_iter(stripped).count() {
        0 => 1,
        n => n,
    }
}

/// Normalize whitespace: unify line endings, collapse spaces and tabs,
/// drop trailing spaces on lines, keep at most one blank line in a row,
/// remove spaces before `.,!?;:` and trim the ends.
///
/// Idempotent: `repair_whitespace(&repair_whitespace(x)) == repair_whitespace(x)`.
pub fn repair_whitespace(text: &str) -> String {
    let text = LINE_ENDING_RE.replace_all(text, "\n");
    let text = HORIZONTAL_SPACE_RE.replace_all(&text, " ");
    let text = TRAILING_SPACE_RE.replace_all(&text, "\n");
    let text = BLANK_LINES_RE.replace_all(&text, "\n\n");
    let text = SPACE_BEFORE_PUNCT_RE.replace_all(&text, "$1");
    text.trim().to_string()
}

/// `round(100 * part / whole)`, 0 when `whole` is 0. Ties go to even.
pub fn percentage(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    (part as f64 / whole as f64 * 100.0).round_ties_even() as u32
}

/// Round to one decimal place. Ties go to even, like [`percentage`].
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}

/// Case-insensitive, word-boundary anchored matcher for one table entry.
/// Spaces inside the phrase match any run of whitespace.
#[derive(Debug, Clone)]
pub struct PhraseMatcher {
    entry: PatternEntry,
    regex: Regex,
}

impl PhraseMatcher {
    pub fn new(entry: PatternEntry) -> Self {
        let body = regex::escape(entry.surface_form).replace(' ', r"\s+");
        let regex = Regex::new(&format!(r"(?i)\b{}\b", body)).unwrap();
        Self { entry, regex }
    }

    pub fn entry(&self) -> &PatternEntry {
        &self.entry
    }

    pub fn surface_form(&self) -> &'static str {
        self.entry.surface_form
    }

    pub fn count(&self, text: &str) -> usize {
        self.regex.find_iter(text).count()
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// Replace every match with the entry's replacement, keeping an initial
    /// capital. Returns the new text and the number of replacements.
    pub fn rewrite<'t>(&self, text: &'t str) -> (Cow<'t, str>, usize) {
        let replacement = self.entry.replacement.unwrap_or("");
        let mut count = 0;
        let rewritten = self.regex.replace_all(text, |caps: &Captures| {
            count += 1;
            let matched = &caps[0];
            if matched.chars().next().is_some_and(char::is_uppercase) {
                capitalize_first(replacement)
            } else {
                replacement.to_string()
            }
        });
        (rewritten, count)
    }

    /// Delete every match. When a deleted match opened a sentence with a
    /// capital letter, the word that now opens the sentence is capitalized.
    pub fn delete(&self, text: &str) -> (String, usize) {
        let mut out = String::with_capacity(text.len());
        let mut last = 0;
        let mut count = 0;
        let mut capitalize_next = false;

        for m in self.regex.find_iter(text) {
            push_segment(&mut out, &text[last..m.start()], &mut capitalize_next);
            let opens_sentence = is_sentence_start(&out);
            if opens_sentence && m.as_str().chars().next().is_some_and(char::is_uppercase) {
                capitalize_next = true;
            }
            last = m.end();
            count += 1;
        }
        if count == 0 {
            return (text.to_string(), 0);
        }
        push_segment(&mut out, &text[last..], &mut capitalize_next);
        (out, count)
    }
}

/// Compile a whole table, keeping table order
pub fn compile_table(table: &[PatternEntry]) -> Vec<PhraseMatcher> {
    table.iter().copied().map(PhraseMatcher::new).collect()
}

fn is_sentence_start(preceding: &str) -> bool {
    let trimmed = preceding.trim_end();
    if trimmed.is_empty() {
        return true;
    }
    let gap = &preceding[trimmed.len()..];
    gap.contains('\n') || trimmed.ends_with(['.', '!', '?'])
}

fn push_segment(out: &mut String, segment: &str, capitalize_next: &mut bool) {
    if !*capitalize_next {
        out.push_str(segment);
        return;
    }
    let Some((idx, ch)) = segment.char_indices().find(|(_, c)| !c.is_whitespace()) else {
        out.push_str(segment);
        return;
    };
    *capitalize_next = false;
    out.push_str(&segment[..idx]);
    let word = segment[idx..].split(char::is_whitespace).next().unwrap_or_default();
    let mut upper = ch.to_uppercase();
    match (upper.next(), upper.next()) {
        // mixed-case words ("iOS", "eBay") keep their spelling
        (Some(single), None) if !word.chars().any(char::is_uppercase) && ch.is_lowercase() => {
            out.push(single)
        }
        _ => out.push(ch),
    }
    out.push_str(&segment[idx + ch.len_utf8()..]);
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
