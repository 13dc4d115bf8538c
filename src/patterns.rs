//! Pattern tables: the phrases and words each tool matches against.
//!
//! Tables are plain static arrays. Order matters: detectors report findings
//! in table order and cleaners apply entries in table order.

/// A phrase to match, optionally with the text that replaces it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternEntry {
    pub surface_form: &'static str,
    pub replacement: Option<&'static str>,
}

impl PatternEntry {
    /// Entry that is only detected or deleted
    pub const fn phrase(surface_form: &'static str) -> Self {
        Self {
            surface_form,
            replacement: None,
        }
    }

    /// Entry that is rewritten to `replacement`
    pub const fn rewrite(surface_form: &'static str, replacement: &'static str) -> Self {
        Self {
            surface_form,
            replacement: Some(replacement),
        }
    }
}

const fn p(surface_form: &'static str) -> PatternEntry {
    PatternEntry::phrase(surface_form)
}

/// Phrases typical of machine-generated prose
pub static AI_PHRASES: &[PatternEntry] = &[
    p("delve into"),
    p("delve deeper"),
    p("delving into"),
    p("it's worth noting"),
    p("worth noting that"),
    p("in today's world"),
    p("in today's landscape"),
    p("in today's digital age"),
    p("navigate the complexities"),
    p("navigating the complexities"),
    p("at the end of the day"),
    p("it's important to note"),
    p("plays a crucial role"),
    p("robust solution"),
    p("robust framework"),
    p("holistic approach"),
    p("holistic view"),
    p("leverage"),
    p("leveraging"),
    p("synergy"),
    p("synergistic"),
    p("paradigm shift"),
    p("game changer"),
    p("game-changer"),
    p("disrupt"),
    p("disruptive"),
    p("cutting-edge"),
    p("cutting edge"),
    p("state-of-the-art"),
    p("state of the art"),
    p("best practices"),
    p("deep dive"),
    p("deep-dive"),
    p("unpack"),
    p("let's unpack"),
    p("double down"),
    p("circle back"),
    p("move the needle"),
    p("low-hanging fruit"),
    p("on the same page"),
    p("think outside the box"),
    p("push the envelope"),
    p("touch base"),
];

/// Business cliches and buzzwords
pub static CLICHES: &[PatternEntry] = &[
    p("at the end of the day"),
    p("think outside the box"),
    p("game changer"),
    p("low-hanging fruit"),
    p("move the needle"),
    p("paradigm shift"),
    p("synergy"),
    p("win-win"),
    p("touch base"),
    p("circle back"),
    p("take it to the next level"),
    p("best of breed"),
    p("industry leading"),
    p("world class"),
    p("bleeding edge"),
    p("mission critical"),
    p("seamless integration"),
    p("turnkey solution"),
    p("value add"),
    p("best in class"),
    p("drill down"),
    p("bandwidth"),
    p("actionable insights"),
    p("core competency"),
];

/// Words that add nothing to a sentence
pub static FILLER_WORDS: &[PatternEntry] = &[
    p("actually"),
    p("basically"),
    p("literally"),
    p("just"),
    p("very"),
    p("really"),
    p("quite"),
    p("rather"),
    p("somewhat"),
    p("perhaps"),
    p("maybe"),
];

/// Hedging language. Longer phrases precede the single words they contain.
pub static HEDGE_PHRASES: &[PatternEntry] = &[
    p("it seems"),
    p("it appears"),
    p("it might be"),
    p("it could be"),
    p("might possibly"),
    p("could potentially"),
    p("perhaps"),
    p("maybe"),
    p("possibly"),
    p("probably"),
    p("might"),
    p("could"),
    p("may"),
    p("would seem"),
    p("in some ways"),
    p("to some extent"),
    p("sort of"),
    p("kind of"),
    p("I think"),
    p("I believe"),
    p("I feel"),
    p("somewhat"),
    p("fairly"),
    p("relatively"),
];

/// Redundant pairs and their concise replacement
pub static REDUNDANCIES: &[PatternEntry] = &[
    PatternEntry::rewrite("absolutely essential", "essential"),
    PatternEntry::rewrite("absolutely necessary", "necessary"),
    PatternEntry::rewrite("added bonus", "bonus"),
    PatternEntry::rewrite("advance planning", "planning"),
    PatternEntry::rewrite("already existing", "existing"),
    PatternEntry::rewrite("basic fundamentals", "fundamentals"),
    PatternEntry::rewrite("close proximity", "proximity"),
    PatternEntry::rewrite("completely eliminate", "eliminate"),
    PatternEntry::rewrite("end result", "result"),
    PatternEntry::rewrite("final outcome", "outcome"),
    PatternEntry::rewrite("free gift", "gift"),
    PatternEntry::rewrite("future plans", "plans"),
    PatternEntry::rewrite("past history", "history"),
    PatternEntry::rewrite("personal opinion", "opinion"),
    PatternEntry::rewrite("true fact", "fact"),
    PatternEntry::rewrite("unexpected surprise", "surprise"),
];

/// Code point ranges stripped by the emoji cleaner (inclusive)
pub static EMOJI_RANGES: &[(char, char)] = &[
    ('\u{1F600}', '\u{1F64F}'), // emoticons
    ('\u{1F300}', '\u{1F5FF}'), // symbols & pictographs
    ('\u{1F680}', '\u{1F6FF}'), // transport & map
    ('\u{1F700}', '\u{1F77F}'), // alchemical
    ('\u{1F780}', '\u{1F7FF}'), // geometric shapes extended
    ('\u{1F800}', '\u{1F8FF}'), // supplemental arrows-c
    ('\u{1F900}', '\u{1F9FF}'), // supplemental symbols & pictographs
    ('\u{1FA00}', '\u{1FA6F}'), // chess symbols
    ('\u{1FA70}', '\u{1FAFF}'), // symbols & pictographs extended-a
    ('\u{2600}', '\u{26FF}'),   // misc symbols
    ('\u{2700}', '\u{27BF}'),   // dingbats
    ('\u{1F1E0}', '\u{1F1FF}'), // flags
];
