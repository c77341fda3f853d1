//! Résumé skills: the skills section unioned with a whole-document scan for
//! curated technology names.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::resume::SECTION_STOP;
use crate::text::sections::SectionRule;
use crate::text::skills::{dedupe_skills, RESUME_KNOWN_SKILLS};
use crate::text::strip_bullet;

static SKILLS_SECTION: Lazy<SectionRule> = Lazy::new(|| {
    SectionRule::new(
        "skills",
        &[
            r"(?:technical |core |key )?skills(?: (?:&|and) \w+)?",
            "technologies",
            "(?:core )?competencies",
            "(?:areas of )?expertise",
        ],
        SECTION_STOP,
    )
});

/// `Label: a, b, c` lines inside a skills block; the label itself is not a skill.
static LABEL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^:,]{1,40}:\s*").unwrap());

static FILLER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^(?:and|or|etc|including)$").unwrap());

const SEPARATOR_GLYPHS: &[char] = &['•', '▪', '►', '○', '●', '‣', '*', '|', '·'];

/// Splits a skills block into individual skill names.
pub fn split_skill_list(block: &str) -> Vec<String> {
    let mut skills = Vec::new();
    for line in block.lines() {
        let line = strip_bullet(line);
        let line = LABEL.replace(line, "");
        let line = line.replace(SEPARATOR_GLYPHS, ",");

        for part in line.split(',') {
            let cleaned = part
                .trim()
                .trim_matches(|c: char| matches!(c, '-' | '–' | '—' | ':') || c.is_whitespace());
            let len = cleaned.chars().count();
            if (2..=50).contains(&len) && !FILLER.is_match(cleaned) {
                skills.push(cleaned.to_string());
            }
        }
    }
    skills
}

/// Curated technologies mentioned anywhere in the text, in list order.
pub fn scan_known_skills(text: &str) -> Vec<String> {
    RESUME_KNOWN_SKILLS
        .iter()
        .filter(|known| known.pattern.is_match(text))
        .map(|known| known.name.to_string())
        .collect()
}

/// Section skills first, then curated matches; de-duplicated under the
/// skill normalizer.
pub fn extract_skills(text: &str) -> Vec<String> {
    let from_section = SKILLS_SECTION
        .find(text)
        .map(|section| split_skill_list(&section.text()))
        .unwrap_or_default();
    dedupe_skills(from_section.into_iter().chain(scan_known_skills(text)))
}
