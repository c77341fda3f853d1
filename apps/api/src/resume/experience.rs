//! Work-experience section: entry segmentation and per-entry field extraction.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::new_id;
use crate::models::resume::WorkExperience;
use crate::resume::SECTION_STOP;
use crate::text::sections::SectionRule;
use crate::text::{is_bullet, strip_bullet};

static EXPERIENCE_SECTION: Lazy<SectionRule> = Lazy::new(|| {
    SectionRule::new(
        "experience",
        &[
            "(?:work |professional |relevant )?experience",
            "employment(?: history)?",
            "(?:work |career )?history|professional background",
        ],
        SECTION_STOP,
    )
});

/// Month names and abbreviations, followed by the whitespace before a year.
const MONTH: &str = r"(?:\b(?:jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|june?|july?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)\.?\s+)";

/// `Jan 2020 - Present`, `03/2018 – 2021`, `2017 to 2019`.
pub(crate) static DATE_RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?i)({MONTH}?(?:\d{{1,2}}/)?\d{{4}})\s*(?:-|–|—|\bto\b)\s*({MONTH}?(?:\d{{1,2}}/)?\d{{4}}|present|current|now)\b"
    ))
    .unwrap()
});

/// A lone date such as `(May 2019)` or `2019`.
pub(crate) static SINGLE_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"(?i)\(?{MONTH}?\b(?:19|20)\d{{2}}\b\)?")).unwrap());

static YEAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(?:19|20)\d{2}\b").unwrap());

static TITLE_KEYWORDS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:engineer|developer|manager|analyst|designer|architect|lead|director|consultant|specialist|coordinator|administrator|scientist|intern|programmer)s?\b").unwrap()
});

/// A header part that is nothing but `City, ST`.
static LOCATION_PART: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[A-Z][a-zA-Z.]*(?: [A-Z][a-zA-Z.]*){0,2},\s*[A-Z]{2}|(?i:remote))$").unwrap()
});

/// `Company, City, ST` with the location trailing.
static TRAILING_LOCATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(.+?),\s*([A-Z][a-zA-Z.]*(?: [A-Z][a-zA-Z.]*){0,2},\s*[A-Z]{2})$").unwrap()
});

/// Separators between position, company and location on a header line.
static HEADER_SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+(?:\||at|@|-|–|—)\s+|\t+").unwrap());

/// How far back a header may extend above its date line.
const MAX_HEADER_LOOKBACK: usize = 2;
const MAX_HEADER_LINES: usize = 3;
const MIN_BULLET_LEN: usize = 10;

/// Date span of an entry as written.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DateSpan {
    pub start: String,
    pub end: String,
    pub current: bool,
}

/// First date range in `text`. `current` when the end says present/current/now.
pub fn parse_date_span(text: &str) -> Option<DateSpan> {
    let caps = DATE_RANGE.captures(text)?;
    let start = caps.get(1)?.as_str().trim().to_string();
    let end = caps.get(2)?.as_str().trim().to_string();
    let lowered = end.to_lowercase();
    let current = ["present", "current", "now"].iter().any(|w| lowered.contains(w));
    Some(DateSpan { start, end, current })
}

fn strip_date_range(line: &str) -> String {
    DATE_RANGE.replace_all(line, "").trim().to_string()
}

/// Removes date ranges and lone dates, then separator debris at the edges.
pub(crate) fn strip_dates(line: &str) -> String {
    let without_range = DATE_RANGE.replace_all(line, "");
    let without_dates = SINGLE_DATE.replace_all(&without_range, "");
    trim_debris(&without_dates).to_string()
}

fn trim_debris(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || matches!(c, '|' | ',' | '-' | '–' | '—' | '(' | ')' | ':'))
}

fn is_date_anchor(line: &str) -> bool {
    if is_bullet(line) {
        return false;
    }
    DATE_RANGE.is_match(line)
        || (YEAR.is_match(line) && line.chars().count() < 60 && !line.ends_with('.'))
}

fn is_header_candidate(line: &str) -> bool {
    !is_bullet(line) && line.chars().count() < 80 && !line.ends_with('.')
}

fn is_all_caps(line: &str) -> bool {
    line.chars().filter(|c| c.is_alphabetic()).count() >= 3
        && !line.chars().any(|c| c.is_lowercase())
}

/// Start index of every entry.
///
/// Each non-bullet line carrying a date opens an entry whose header may reach
/// up to two short lines above it. Without any dates, an entry starts where a
/// non-bullet line follows a bullet or at an all-caps line.
fn entry_starts(lines: &[&str]) -> Vec<usize> {
    let anchors: Vec<usize> = (0..lines.len()).filter(|&i| is_date_anchor(lines[i])).collect();

    if anchors.is_empty() {
        let mut starts = vec![0];
        for i in 1..lines.len() {
            let opens = !is_bullet(lines[i]) && (is_bullet(lines[i - 1]) || is_all_caps(lines[i]));
            if opens {
                starts.push(i);
            }
        }
        return starts;
    }

    let mut starts: Vec<usize> = Vec::new();
    let mut previous_anchor: Option<usize> = None;
    for anchor in anchors {
        if let Some(&current) = starts.last() {
            // a second date inside the same header block belongs to the same job
            let within_header = anchor - current < MAX_HEADER_LINES
                && lines[current..anchor].iter().all(|l| !is_bullet(l));
            if within_header {
                previous_anchor = Some(anchor);
                continue;
            }
        }

        let floor = previous_anchor.map_or(0, |p| p + 1);
        let mut start = anchor;
        while start > floor && anchor - (start - 1) <= MAX_HEADER_LOOKBACK && is_header_candidate(lines[start - 1]) {
            start -= 1;
        }
        starts.push(start);
        previous_anchor = Some(anchor);
    }

    if let Some(first) = starts.first_mut() {
        *first = 0;
    }
    starts.dedup();
    starts
}

/// Splits one header line into its position/company/location parts.
fn header_parts(line: &str) -> Vec<String> {
    let cleaned = strip_dates(line);
    let mut parts = Vec::new();
    for strong in HEADER_SEPARATOR.split(&cleaned) {
        let strong = trim_debris(strong);
        if strong.is_empty() {
            continue;
        }
        if LOCATION_PART.is_match(strong) {
            parts.push(strong.to_string());
            continue;
        }
        let (rest, location) = match TRAILING_LOCATION.captures(strong) {
            Some(caps) => (caps.get(1).map_or("", |m| m.as_str()), caps.get(2).map(|m| m.as_str())),
            None => (strong, None),
        };
        parts.extend(
            rest.split(", ")
                .map(trim_debris)
                .filter(|p| !p.is_empty())
                .map(str::to_string),
        );
        parts.extend(location.map(str::to_string));
    }
    parts
}

fn parse_entry(lines: &[&str]) -> Option<WorkExperience> {
    let span = lines
        .iter()
        .find_map(|line| parse_date_span(line))
        .unwrap_or_default();

    let header_len = lines
        .iter()
        .take(MAX_HEADER_LINES)
        .take_while(|l| !is_bullet(l) && l.chars().count() < 100 && !l.ends_with('.'))
        .count();
    let header = &lines[..header_len];

    let mut position = String::new();
    let mut company = String::new();
    let mut location = None;
    for part in header.iter().flat_map(|line| header_parts(line)) {
        if LOCATION_PART.is_match(&part) {
            location.get_or_insert(part);
        } else if TITLE_KEYWORDS.is_match(&part) {
            if position.is_empty() {
                position = part;
            }
        } else if company.is_empty() && part.chars().count() > 2 {
            company = part;
        }
    }

    if position.is_empty() && header.len() >= 2 {
        let second = strip_dates(header[1]);
        if second != company && !second.is_empty() {
            position = second;
        }
    }

    if company.is_empty() && position.is_empty() {
        return None;
    }

    let mut description: Vec<String> = Vec::new();
    for line in &lines[header_len..] {
        let cleaned = strip_date_range(strip_bullet(line));
        let continues = !is_bullet(line) && cleaned.starts_with(|c: char| c.is_lowercase());
        match description.last_mut() {
            Some(last) if continues => {
                last.push(' ');
                last.push_str(&cleaned);
            }
            _ => description.push(cleaned),
        }
    }
    description.retain(|d| d.chars().count() >= MIN_BULLET_LEN);

    Some(WorkExperience {
        id: new_id(),
        company,
        position,
        location,
        start_date: span.start,
        end_date: span.end,
        current: span.current,
        description,
    })
}

/// Parses every entry of the experience section, in source order.
pub fn extract_experience(text: &str) -> Vec<WorkExperience> {
    let Some(section) = EXPERIENCE_SECTION.find(text) else {
        return Vec::new();
    };
    let lines = section.content_lines();
    if lines.is_empty() {
        return Vec::new();
    }

    let starts = entry_starts(&lines);
    let mut entries = Vec::new();
    for (i, &start) in starts.iter().enumerate() {
        let end = starts.get(i + 1).copied().unwrap_or(lines.len());
        entries.extend(parse_entry(&lines[start..end]));
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_span_variants() {
        let span = parse_date_span("Jan 2020 - Present").unwrap();
        assert_eq!(span.start, "Jan 2020");
        assert_eq!(span.end, "Present");
        assert!(span.current);

        let span = parse_date_span("03/2018 – 11/2021").unwrap();
        assert_eq!(span.start, "03/2018");
        assert_eq!(span.end, "11/2021");
        assert!(!span.current);

        let span = parse_date_span("September 2015 to June 2017").unwrap();
        assert_eq!(span.start, "September 2015");
        assert_eq!(span.end, "June 2017");

        assert!(parse_date_span("since 2019").is_none());
    }

    #[test]
    fn test_current_from_now_keyword() {
        assert!(parse_date_span("2019 - now").unwrap().current);
    }

    #[test]
    fn test_strip_dates() {
        assert_eq!(strip_dates("Acme Corp | Jan 2019 - Dec 2020"), "Acme Corp");
        assert_eq!(strip_dates("Globex (2018)"), "Globex");
        assert_eq!(strip_dates("Marketing Lead"), "Marketing Lead");
    }

    #[test]
    fn test_bullets_keep_single_years() {
        let text = "Experience\nEngineer at Acme 2018 - 2020\n• Migrated the monolith to Python 3 in 2019";
        let entries = extract_experience(text);
        assert_eq!(entries[0].description, vec!["Migrated the monolith to Python 3 in 2019"]);
    }

    #[test]
    fn test_header_parts_one_line() {
        assert_eq!(header_parts("Data Engineer at Acme"), vec!["Data Engineer", "Acme"]);
        assert_eq!(header_parts("Backend Developer | Initech | Austin, TX"), vec!["Backend Developer", "Initech", "Austin, TX"]);
        assert_eq!(header_parts("Globex, New York, NY"), vec!["Globex", "New York, NY"]);
    }

    #[test]
    fn test_extract_experience_multiple_entries() {
        let text = "\
Experience
Senior Developer
Initech, Austin, TX
2019 - Present
• Shipped the billing service to production
• Cut infrastructure spend by 20%
Hooli
Product Analyst
2016 - 2019
- Built weekly revenue dashboards for leadership
Education
State University";
        let entries = extract_experience(text);
        assert_eq!(entries.len(), 2);

        assert_eq!(entries[0].position, "Senior Developer");
        assert_eq!(entries[0].company, "Initech");
        assert_eq!(entries[0].location.as_deref(), Some("Austin, TX"));
        assert!(entries[0].current);
        assert_eq!(entries[0].description.len(), 2);

        assert_eq!(entries[1].company, "Hooli");
        assert_eq!(entries[1].position, "Product Analyst");
        assert_eq!(entries[1].start_date, "2016");
        assert_eq!(entries[1].end_date, "2019");
        assert!(!entries[1].current);
    }

    #[test]
    fn test_wrapped_bullets_are_joined() {
        let text = "Experience\nEngineer at Acme 2018 - 2020\n• Designed the ingestion layer for\nstreaming sensor data";
        let entries = extract_experience(text);
        assert_eq!(entries[0].description, vec!["Designed the ingestion layer for streaming sensor data"]);
    }

    #[test]
    fn test_entries_without_dates_split_after_bullets() {
        let text = "Experience\nSoftware Engineer\nAcme\n• Wrote the scheduler service\nQA Lead\nGlobex\n• Owned regression testing suites";
        let entries = extract_experience(text);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].position, "QA Lead");
        assert_eq!(entries[1].company, "Globex");
        assert_eq!(entries[1].start_date, "");
    }

    #[test]
    fn test_second_line_is_position_fallback() {
        let text = "Experience\nAcme Corp\nHead of Growth\n2015 - 2018\n• Tripled paid signups in a year";
        let entries = extract_experience(text);
        assert_eq!(entries[0].company, "Acme Corp");
        assert_eq!(entries[0].position, "Head of Growth");
    }

    #[test]
    fn test_entry_without_company_or_position_is_discarded() {
        assert!(parse_entry(&["2019 - 2020", "• Maintained legacy reporting scripts"]).is_none());
        assert!(parse_entry(&["• Maintained legacy reporting scripts"]).is_none());
    }

    #[test]
    fn test_no_experience_section() {
        assert!(extract_experience("Education\nMIT").is_empty());
    }
}
