//! Posting header fields: title, company, location and employment type.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::job::EmploymentType;
use crate::resume::contact::LOCATION as CITY_STATE;
use crate::text::non_empty_lines;
use crate::text::rules::{capture, first_match, ExtractionRule};

/// Returned when no rule produces a title.
pub const TITLE_PLACEHOLDER: &str = "Position";

// ────────────────────────────────────────────────────────────────────────────
// Title
// ────────────────────────────────────────────────────────────────────────────

static LABELLED_TITLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?im)^\s*(?:job\s+)?title\s*:\s*(.+)$").unwrap());

static LABELLED_ROLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?im)^\s*(?:position|role)\s*:\s*(.+)$").unwrap());

static HIRING_PHRASE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:hiring|looking\s+for|seeking|join\s+(?:us\s+)?as)\s+(?:an?\s+)?([^\n.!;]+)").unwrap()
});

/// Clause that follows the role in a hiring sentence ("… to join our team").
static HIRING_TAIL: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\s+(?:to|who|that)\s+.*$").unwrap());

static COMPANY_SUFFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+[-–—|]\s+.*$").unwrap());

static TITLE_KEYWORD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:(?:senior|junior|lead|staff|principal)\s+)?(?:(?:software|web|frontend|front-end|backend|back-end|full[\s-]?stack|mobile|ios|android|devops|cloud|data|ml|ai)\s+)?(?:engineer|developer|architect|manager|analyst|designer|specialist|consultant|coordinator|director|lead|administrator|scientist)\b",
    )
    .unwrap()
});

const HEADER_WINDOW: usize = 5;
const MAX_PHRASE_TITLE: usize = 80;
const MAX_WHOLE_LINE_TITLE: usize = 60;

fn strip_company_suffix(title: String) -> Option<String> {
    let trimmed = COMPANY_SUFFIX.replace(&title, "").trim().to_string();
    (!trimmed.is_empty()).then_some(trimmed)
}

fn labelled_title(text: &str) -> Option<String> {
    capture(&LABELLED_TITLE, text, 1).and_then(strip_company_suffix)
}

fn labelled_role(text: &str) -> Option<String> {
    capture(&LABELLED_ROLE, text, 1).and_then(strip_company_suffix)
}

fn hiring_phrase(text: &str) -> Option<String> {
    let phrase = capture(&HIRING_PHRASE, text, 1)?;
    let phrase = HIRING_TAIL.replace(&phrase, "").to_string();
    strip_company_suffix(phrase).filter(|t| t.chars().count() <= MAX_PHRASE_TITLE)
}

fn header_title_keyword(text: &str) -> Option<String> {
    non_empty_lines(text)
        .into_iter()
        .take(HEADER_WINDOW)
        .filter(|line| line.chars().count() < 100 && !line.to_lowercase().contains("about"))
        .find_map(|line| {
            let m = TITLE_KEYWORD.find(line)?;
            if line.chars().count() < MAX_WHOLE_LINE_TITLE {
                // "Senior Engineer - Acme": the suffix is the company, not the role
                let role = COMPANY_SUFFIX
                    .find(line)
                    .filter(|suffix| suffix.start() >= m.end())
                    .map_or(line, |suffix| &line[..suffix.start()]);
                Some(role.trim().to_string())
            } else {
                Some(m.as_str().to_string())
            }
        })
}

fn short_first_line(text: &str) -> Option<String> {
    let first = *non_empty_lines(text).first()?;
    let len = first.chars().count();
    (len > 5 && len < MAX_PHRASE_TITLE).then(|| first.to_string())
}

static TITLE_RULES: &[ExtractionRule<String>] = &[
    ExtractionRule::new("labelled_title", labelled_title),
    ExtractionRule::new("labelled_role", labelled_role),
    ExtractionRule::new("hiring_phrase", hiring_phrase),
    ExtractionRule::new("header_title_keyword", header_title_keyword),
    ExtractionRule::new("short_first_line", short_first_line),
];

/// Job title, or [`TITLE_PLACEHOLDER`].
pub fn extract_title(text: &str) -> String {
    first_match(TITLE_RULES, text).unwrap_or_else(|| TITLE_PLACEHOLDER.to_string())
}

// ────────────────────────────────────────────────────────────────────────────
// Company
// ────────────────────────────────────────────────────────────────────────────

static TITLE_WITH_COMPANY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?im)^\s*(?:job\s+)?(?:title|position|role)\s*:\s*.+?\s+[-–—|]\s+(.+)$").unwrap()
});

static LABELLED_COMPANY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?im)^\s*(?:company|employer|organi[sz]ation)\s*:\s*(.+)$").unwrap());

static ABOUT_COMPANY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:About|ABOUT)[ \t]+([A-Z][\w&.']*(?:[ \t]+[A-Z][\w&.']*){0,4})[ \t]+(?:is|are)\b").unwrap()
});

static JOIN_TEAM: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[Jj]oin[ \t]+(?:the[ \t]+)?([A-Z][\w&.']*(?:[ \t]+[A-Z][\w&.']*){0,3})[ \t]+team\b").unwrap()
});

/// Words that open an "About …" heading without naming the employer.
const NOT_A_COMPANY: &[&str] = &["us", "you", "the", "this", "our", "we"];

fn is_company_name(name: &str) -> bool {
    name.split_whitespace()
        .next()
        .is_some_and(|first| !NOT_A_COMPANY.contains(&first.to_lowercase().as_str()))
}

fn title_suffix(text: &str) -> Option<String> {
    capture(&TITLE_WITH_COMPANY, text, 1)
}

fn labelled_company(text: &str) -> Option<String> {
    capture(&LABELLED_COMPANY, text, 1)
}

fn about_company(text: &str) -> Option<String> {
    ABOUT_COMPANY
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .find(|name| is_company_name(name))
}

fn join_team(text: &str) -> Option<String> {
    capture(&JOIN_TEAM, text, 1).filter(|name| is_company_name(name))
}

static COMPANY_RULES: &[ExtractionRule<String>] = &[
    ExtractionRule::new("title_suffix", title_suffix),
    ExtractionRule::new("labelled_company", labelled_company),
    ExtractionRule::new("about_company", about_company),
    ExtractionRule::new("join_team", join_team),
];

pub fn extract_company(text: &str) -> Option<String> {
    first_match(COMPANY_RULES, text)
}

// ────────────────────────────────────────────────────────────────────────────
// Location
// ────────────────────────────────────────────────────────────────────────────

static LABELLED_LOCATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?im)^\s*(?:job\s+)?(?:location|office)\s*:\s*(.+)$").unwrap());

static BASED_IN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[Bb]ased\s+in\s+([A-Z][A-Za-z.]*(?:\s+[A-Z][A-Za-z.]*){0,2}(?:,\s*[A-Z]{2})?)").unwrap()
});

static WORK_MODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\b(remote|hybrid|on-?site)\b").unwrap());

fn labelled_location(text: &str) -> Option<String> {
    capture(&LABELLED_LOCATION, text, 1)
}

fn based_in(text: &str) -> Option<String> {
    capture(&BASED_IN, text, 1)
}

fn city_state_line(text: &str) -> Option<String> {
    capture(&CITY_STATE, text, 1)
}

fn work_mode(text: &str) -> Option<String> {
    capture(&WORK_MODE, text, 1)
}

static LOCATION_RULES: &[ExtractionRule<String>] = &[
    ExtractionRule::new("labelled_location", labelled_location),
    ExtractionRule::new("based_in", based_in),
    ExtractionRule::new("city_state_line", city_state_line),
    ExtractionRule::new("work_mode", work_mode),
];

pub fn extract_location(text: &str) -> Option<String> {
    first_match(LOCATION_RULES, text)
}

// ────────────────────────────────────────────────────────────────────────────
// Employment type
// ────────────────────────────────────────────────────────────────────────────

/// First type whose phrases appear, checked in this order.
const EMPLOYMENT_PHRASES: &[(EmploymentType, &[&str])] = &[
    (EmploymentType::FullTime, &["full-time", "full time"]),
    (EmploymentType::PartTime, &["part-time", "part time"]),
    (EmploymentType::Contract, &["contract", "freelance"]),
    (EmploymentType::Remote, &["remote only", "fully remote"]),
];

pub fn extract_employment_type(text: &str) -> Option<EmploymentType> {
    let lowered = text.to_lowercase();
    EMPLOYMENT_PHRASES
        .iter()
        .find(|(_, phrases)| phrases.iter().any(|p| lowered.contains(p)))
        .map(|(kind, _)| *kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labelled_title_wins_and_drops_company_suffix() {
        let text = "We are hiring a Designer\nTitle: Platform Engineer - Acme Corp";
        assert_eq!(extract_title(text), "Platform Engineer");
    }

    #[test]
    fn test_title_keeps_hyphenated_words() {
        assert_eq!(extract_title("Position: Front-End Developer"), "Front-End Developer");
    }

    #[test]
    fn test_hiring_phrase_title() {
        let text = "Acme Labs\nWe are looking for a Staff Data Scientist to join our research group.";
        assert_eq!(extract_title(text), "Staff Data Scientist");
    }

    #[test]
    fn test_header_keyword_long_line_returns_phrase() {
        let text = "Exciting opportunity for a Senior Software Engineer in our Payments group";
        assert_eq!(extract_title(text), "Senior Software Engineer");
    }

    #[test]
    fn test_header_title_drops_company_suffix() {
        assert_eq!(extract_title("Senior Backend Engineer - Acme
Austin, TX"), "Senior Backend Engineer");
        assert_eq!(extract_title("Data Analyst | Globex
Remote"), "Data Analyst");
        assert_eq!(extract_title("Acme - Senior Backend Engineer
Austin, TX"), "Acme - Senior Backend Engineer");
    }

    #[test]
    fn test_title_falls_back_to_first_line_then_placeholder() {
        assert_eq!(extract_title("Growth Hacker\nWe grow things."), "Growth Hacker");
        assert_eq!(extract_title("Hi\n"), TITLE_PLACEHOLDER);
        assert_eq!(extract_title(""), TITLE_PLACEHOLDER);
    }

    #[test]
    fn test_company_rules_in_priority_order() {
        assert_eq!(
            extract_company("Title: Data Engineer - Globex\nCompany: Initech").as_deref(),
            Some("Globex")
        );
        assert_eq!(extract_company("Company: Initech\nAbout Globex is great").as_deref(), Some("Initech"));
        assert_eq!(extract_company("About Us\nAbout Globex Corp is a leader.").as_deref(), Some("Globex Corp"));
        assert_eq!(extract_company("Come join the Hooli team today").as_deref(), Some("Hooli"));
        assert_eq!(extract_company("No employer named here."), None);
    }

    #[test]
    fn test_location_rules() {
        assert_eq!(extract_location("Location: Berlin (hybrid)").as_deref(), Some("Berlin (hybrid)"));
        assert_eq!(extract_location("The team is based in Denver, CO and ships weekly").as_deref(), Some("Denver, CO"));
        assert_eq!(extract_location("Engineer\nSeattle, WA\nGreat role").as_deref(), Some("Seattle, WA"));
        assert_eq!(extract_location("This role is fully Remote.").as_deref(), Some("Remote"));
        assert_eq!(extract_location("Nothing here"), None);
    }

    #[test]
    fn test_employment_type_priority() {
        assert_eq!(extract_employment_type("Full time, remote"), Some(EmploymentType::FullTime));
        assert_eq!(extract_employment_type("Part-time contract"), Some(EmploymentType::PartTime));
        assert_eq!(extract_employment_type("6-month freelance gig"), Some(EmploymentType::Contract));
        assert_eq!(extract_employment_type("We are fully remote"), Some(EmploymentType::Remote));
        assert_eq!(extract_employment_type("An office job"), None);
    }
}
