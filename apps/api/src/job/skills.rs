//! Required and preferred skills of a posting.
//!
//! Curated technologies are scanned across the whole posting and classified
//! by the section they sit in (falling back to cue words around them);
//! free-form candidates come only from the located skill sections.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

use crate::job::{PREFERRED_SECTION, REQUIRED_SECTION};
use crate::models::job::{JobRequirement, RequirementLevel};
use crate::text::skills::{normalize_skill, KnownSkill, JOB_KNOWN_SKILLS};
use crate::text::{ceil_boundary, floor_boundary, strip_bullet};

/// Bytes of context on either side of a skill mention.
const CUE_WINDOW: usize = 100;

const REQUIRED_CUES: &[&str] = &["required", "must have", "essential", "mandatory"];
const PREFERRED_CUES: &[&str] = &["preferred", "nice to have", "bonus"];

static EXPERIENCE_WITH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:proficiency|experience|knowledge|familiarity)\s+(?:in|with)\s+(.+)$").unwrap()
});

/// Free-form skill names written in a requirements block: the object of
/// "experience with …" lines and short comma-separated items.
pub fn skill_candidates(block: &str) -> Vec<String> {
    let mut skills = Vec::new();
    for line in block.lines() {
        let line = strip_bullet(line);

        if let Some(caps) = EXPERIENCE_WITH.captures(line) {
            let skill = caps[1].trim().trim_end_matches(['.', ';']);
            let len = skill.chars().count();
            if len > 1 && len < 50 && !skill.contains(',') {
                skills.push(skill.to_string());
            }
        }

        if line.contains(',') && line.chars().count() < 200 {
            let line = EXPERIENCE_WITH.replace(line, "$1");
            for part in line.split(',') {
                let part = part
                    .trim()
                    .trim_start_matches("and ")
                    .trim_start_matches("or ")
                    .trim_end_matches(['.', ';'])
                    .trim();
                let len = part.chars().count();
                if len > 1
                    && len < 40
                    && part.split_whitespace().count() <= 4
                    && !part.starts_with(|c: char| c.is_ascii_digit())
                {
                    skills.push(part.to_string());
                }
            }
        }
    }
    skills
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

/// Required unless only preferred cues surround the first mention.
fn level_from_cues(text: &str, start: usize, end: usize) -> RequirementLevel {
    let from = floor_boundary(text, start.saturating_sub(CUE_WINDOW));
    let to = ceil_boundary(text, end + CUE_WINDOW);
    let context = text[from..to].to_lowercase();

    if contains_any(&context, REQUIRED_CUES) || !contains_any(&context, PREFERRED_CUES) {
        RequirementLevel::Required
    } else {
        RequirementLevel::Preferred
    }
}

fn classify(known: &KnownSkill, text: &str, required: &str, preferred: &str) -> Option<RequirementLevel> {
    let (start, end) = known.pattern.find(text)?;
    let level = if known.pattern.is_match(required) {
        RequirementLevel::Required
    } else if known.pattern.is_match(preferred) {
        RequirementLevel::Preferred
    } else {
        level_from_cues(text, start, end)
    };
    Some(level)
}

/// Minimum years stated for `skill` ("5+ years of experience with Rust").
pub fn years_for_skill(text: &str, skill: &str) -> Option<u32> {
    let pattern = format!(
        r"(\d+)\+?\s*(?:years?|yrs?)\s*(?:of\s+)?(?:experience\s+)?(?:(?:with|in)\s+)?{}(?:[^\w]|$)",
        regex::escape(skill)
    );
    let re = RegexBuilder::new(&pattern).case_insensitive(true).build().ok()?;
    re.captures(text)?.get(1)?.as_str().parse().ok()
}

/// Adds requirements whose normalized name has not been seen yet.
fn push_unique(
    out: &mut Vec<JobRequirement>,
    seen: &mut HashSet<String>,
    skill: String,
    level: RequirementLevel,
    years: Option<u32>,
) {
    if seen.insert(normalize_skill(&skill)) {
        out.push(JobRequirement {
            years,
            ..JobRequirement::new(skill, level)
        });
    }
}

/// Required and preferred skill lists. A skill appears in at most one of them.
pub fn extract_skills(text: &str) -> (Vec<JobRequirement>, Vec<JobRequirement>) {
    let required_block = REQUIRED_SECTION.find(text).map(|s| s.text()).unwrap_or_default();
    let preferred_block = PREFERRED_SECTION.find(text).map(|s| s.text()).unwrap_or_default();

    let mut seen = HashSet::new();
    let mut required = Vec::new();
    let mut known_preferred = Vec::new();

    for known in JOB_KNOWN_SKILLS.iter() {
        match classify(known, text, &required_block, &preferred_block) {
            Some(RequirementLevel::Required) => push_unique(
                &mut required,
                &mut seen,
                known.name.to_string(),
                RequirementLevel::Required,
                years_for_skill(text, known.name),
            ),
            Some(_) => known_preferred.push(known.name),
            None => {}
        }
    }

    for skill in skill_candidates(&required_block) {
        let years = years_for_skill(text, &skill);
        push_unique(&mut required, &mut seen, skill, RequirementLevel::Required, years);
    }

    let mut preferred = Vec::new();
    for name in known_preferred {
        push_unique(
            &mut preferred,
            &mut seen,
            name.to_string(),
            RequirementLevel::Preferred,
            years_for_skill(text, name),
        );
    }
    for skill in skill_candidates(&preferred_block) {
        push_unique(&mut preferred, &mut seen, skill, RequirementLevel::Preferred, None);
    }

    (required, preferred)
}
