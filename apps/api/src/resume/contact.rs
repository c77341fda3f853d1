//! Contact block extraction.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::resume::ContactInfo;
use crate::resume::SECTION_STOP;
use crate::text::non_empty_lines;
use crate::text::rules::{capture, first_match, ExtractionRule};
use crate::text::sections::heading_key;

static EMAIL: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\w.+-]+@[\w-]+(?:\.[\w-]+)*\.\w+").unwrap());

pub(crate) static PHONE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:\+\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}").unwrap());

static LINKEDIN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:linkedin\.com/in/|linkedin:\s*)([a-zA-Z0-9-]+)").unwrap());

static GITHUB: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:github\.com/|github:\s*)([a-zA-Z0-9-]+)").unwrap());

static PORTFOLIO: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:portfolio|website|web):\s*(https?://\S+)").unwrap());

/// `City, ST` (optionally with a ZIP) at the start of a line.
pub(crate) static LOCATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^([A-Z][a-zA-Z.]*(?: [A-Z][a-zA-Z.]*){0,2},\s*[A-Z]{2}(?:\s+\d{5})?)\s*(?:[|•·]|$)")
        .unwrap()
});

static HEADER_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(?:resume|résumé|cv|curriculum|objective|summary|profile|contact)").unwrap());

static SECTION_HEADING: Lazy<Regex> = Lazy::new(|| Regex::new(SECTION_STOP).unwrap());

fn is_section_heading(line: &str) -> bool {
    heading_key(line).is_some_and(|k| k.inline.is_none() && SECTION_HEADING.is_match(&k.key))
}

/// Lines considered when looking for the candidate's name.
const NAME_WINDOW: usize = 5;

fn name_from_header(text: &str) -> Option<String> {
    non_empty_lines(text)
        .into_iter()
        .take(NAME_WINDOW)
        .find(|line| {
            let len = line.chars().count();
            len > 2
                && len < 60
                && !line.contains('@')
                && !line.contains("http")
                && !line.starts_with(|c: char| c.is_ascii_digit())
                && !HEADER_WORD.is_match(line)
                && !is_section_heading(line)
                && !PHONE.is_match(line)
        })
        .map(str::to_string)
}

static NAME_RULES: &[ExtractionRule<String>] = &[ExtractionRule::new("header_line", name_from_header)];

/// Extracts contact details from anywhere in the text. First match wins per field.
pub fn extract_contact(text: &str) -> ContactInfo {
    let found = |re: &Regex| re.find(text).map(|m| m.as_str().to_string()).unwrap_or_default();

    ContactInfo {
        name: first_match(NAME_RULES, text).unwrap_or_default(),
        email: found(&EMAIL),
        phone: found(&PHONE),
        location: capture(&LOCATION, text, 1),
        linkedin: capture(&LINKEDIN, text, 1).map(|h| format!("linkedin.com/in/{h}")),
        github: capture(&GITHUB, text, 1).map(|h| format!("github.com/{h}")),
        portfolio: capture(&PORTFOLIO, text, 1),
    }
}
