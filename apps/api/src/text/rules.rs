//! Named extraction rules composed by a "first successful rule wins" combinator.
//!
//! Priority lives in the order of the rule slice, so each rule stays a small
//! pure function that can be tested on its own.

use regex::Regex;
use tracing::debug;

/// A single named heuristic over raw text.
pub struct ExtractionRule<T> {
    pub name: &'static str,
    pub extract: fn(&str) -> Option<T>,
}

impl<T> ExtractionRule<T> {
    pub const fn new(name: &'static str, extract: fn(&str) -> Option<T>) -> Self {
        Self { name, extract }
    }
}

/// Runs `rules` in order and returns the first value produced.
pub fn first_match<T>(rules: &[ExtractionRule<T>], text: &str) -> Option<T> {
    rules.iter().find_map(|rule| {
        let value = (rule.extract)(text)?;
        debug!(rule = rule.name, "extraction rule matched");
        Some(value)
    })
}

/// Trimmed, non-empty text of capture `group` from the first match of `re`.
pub fn capture(re: &Regex, text: &str, group: usize) -> Option<String> {
    re.captures(text)
        .and_then(|caps| caps.get(group))
        .map(|m| m.as_str().trim().to_string())
        .filter(|s| !s.is_empty())
}
