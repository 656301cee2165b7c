//! Text normalizer: turns a raw locality segment into a table lookup key.
//!
//! Three rules, applied in order:
//!   1. drop parenthetical annotations (`"Bristol (UK/England)"` → `"Bristol"`)
//!   2. drop a trailing qualifier phrase (`"Leeds approx 5 miles"` → `"Leeds"`)
//!   3. trim surrounding whitespace and stray commas
//!
//! The annotation removed by rule 1 is available separately via [`paren_hint`].

use once_cell::sync::Lazy;
use regex::Regex;

static PAREN_CONTENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(([^)]+)\)").expect("paren content regex"));

static PARENTHETICAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*\([^)]*\)\s*").expect("parenthetical regex"));

static QUALIFIER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)\s*\b(?:approx|near|north|south|east|west|outside|between)\b\.?\s+.*$").expect("qualifier regex")
});

/// Content of the first parenthetical group, if any (`"UK/Scotland"`).
pub fn paren_hint(raw: &str) -> Option<&str> {
    PAREN_CONTENT
        .captures(raw)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

pub fn strip_parentheticals(s: &str) -> String {
    PARENTHETICAL.replace_all(s, " ").trim().to_string()
}

pub fn strip_qualifiers(s: &str) -> String {
    QUALIFIER.replace(s, "").trim().to_string()
}

pub fn trim_punctuation(s: &str) -> &str {
    s.trim_matches(|c: char| c == ',' || c.is_whitespace())
}

/// Apply the full cleanup pipeline. Idempotent.
pub fn normalize(raw: &str) -> String {
    let s = strip_parentheticals(raw);
    let s = strip_qualifiers(&s);
    trim_punctuation(&s).to_string()
}
