//! Experience-years requirement, salary range and the bullet lists
//! (responsibilities, qualifications).

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::job::{QUALIFICATIONS_SECTION, RESPONSIBILITIES_SECTION};
use crate::models::job::{ExperienceRequirement, SalaryRange};
use crate::text::sections::SectionRule;
use crate::text::strip_bullet;

// ────────────────────────────────────────────────────────────────────────────
// Experience years
// ────────────────────────────────────────────────────────────────────────────

static YEARS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)(?:(?:at\s+least|minimum(?:\s+of)?)\s+(\d+)|(\d+)\s*(?:-|–|—|to)\s*(\d+)|(\d+)\+?)\s*(?:years?|yrs?)\b",
    )
    .unwrap()
});

/// Larger numbers are company ages or dates, not experience asks.
const MAX_PLAUSIBLE_YEARS: u32 = 40;

fn group(caps: &Captures<'_>, idx: usize) -> Option<u32> {
    caps.get(idx)?.as_str().parse().ok()
}

/// First plausible "N+ years", "N-M years" or "at least N years" in the
/// posting; `{min: 0}` when none is stated.
pub fn extract_experience_requirement(text: &str) -> ExperienceRequirement {
    YEARS
        .captures_iter(text)
        .find_map(|caps| {
            let (min, max) = match (group(&caps, 1), group(&caps, 2), group(&caps, 4)) {
                (Some(min), _, _) => (min, None),
                (_, Some(min), _) => (min, group(&caps, 3)),
                (_, _, Some(min)) => (min, None),
                _ => return None,
            };
            let plausible = min <= MAX_PLAUSIBLE_YEARS && max.map_or(true, |m| m >= min && m <= MAX_PLAUSIBLE_YEARS);
            plausible.then_some(ExperienceRequirement { min, max })
        })
        .unwrap_or_default()
}

// ────────────────────────────────────────────────────────────────────────────
// Salary
// ────────────────────────────────────────────────────────────────────────────

const AMOUNT: &str = r"(\d{1,3}(?:,\d{3})+|\d+(?:\.\d+)?)";

static DOLLAR_RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"\$\s?{AMOUNT}\s*([kK])?\s*(?:-|–|—|to)\s*\$?\s?{AMOUNT}\s*([kK])?")).unwrap()
});

static LABELLED_RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?i)\b(?:salary|compensation|pay)(?:\s+range)?\s*:?\s*\$?\s?{AMOUNT}\s*(k)?\s*(?:-|–|—|to)\s*\$?\s?{AMOUNT}\s*(k)?"
    ))
    .unwrap()
});

const SALARY_CURRENCY: &str = "USD";

/// Whole currency units. Values written with a `k` suffix, or under 1000,
/// are thousands.
fn amount(raw: &str, thousands: bool) -> Option<u64> {
    let value: f64 = raw.replace(',', "").parse().ok()?;
    let value = if thousands || value < 1000.0 { value * 1000.0 } else { value };
    Some(value.round() as u64)
}

fn salary_from(re: &Regex, text: &str) -> Option<SalaryRange> {
    let caps = re.captures(text)?;
    let min = amount(caps.get(1)?.as_str(), caps.get(2).is_some())?;
    let max = amount(caps.get(3)?.as_str(), caps.get(4).is_some())?;
    Some(SalaryRange {
        min: Some(min),
        max: Some(max),
        currency: Some(SALARY_CURRENCY.to_string()),
    })
}

/// `$120K - $180K`, `$120,000 - $180,000` or `Salary: 120-180k`.
pub fn extract_salary(text: &str) -> Option<SalaryRange> {
    salary_from(&DOLLAR_RANGE, text).or_else(|| salary_from(&LABELLED_RANGE, text))
}

// ────────────────────────────────────────────────────────────────────────────
// Bullet lists
// ────────────────────────────────────────────────────────────────────────────

/// Shorter lines are sub-headings or fragments; longer ones are paragraphs.
const ITEM_LEN: std::ops::Range<usize> = 16..500;

fn section_items(rule: &SectionRule, text: &str) -> Vec<String> {
    let Some(section) = rule.find(text) else {
        return Vec::new();
    };
    section
        .lines
        .iter()
        .map(|line| strip_bullet(line))
        .filter(|line| ITEM_LEN.contains(&line.chars().count()))
        .map(str::to_string)
        .collect()
}

pub fn extract_responsibilities(text: &str) -> Vec<String> {
    section_items(&RESPONSIBILITIES_SECTION, text)
}

pub fn extract_qualifications(text: &str) -> Vec<String> {
    section_items(&QUALIFICATIONS_SECTION, text)
}
