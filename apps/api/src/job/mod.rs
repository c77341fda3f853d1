//! JD Structurer — turns job-posting text into a [`ParsedJobDescription`].
//!
//! Same contract as the résumé structurer: never fails, and anything that
//! cannot be located stays empty (or takes the documented default).

pub mod fields;
pub mod handlers;
pub mod requirements;
pub mod skills;

use once_cell::sync::Lazy;
use tracing::debug;

use crate::models::job::ParsedJobDescription;
use crate::models::new_id;
use crate::text::keywords::rank_keywords;
use crate::text::sections::SectionRule;

/// Number of ranked keywords kept on the record.
pub const KEYWORD_LIMIT: usize = 50;

// ────────────────────────────────────────────────────────────────────────────
// Posting sections
// ────────────────────────────────────────────────────────────────────────────

pub(crate) static REQUIRED_SECTION: Lazy<SectionRule> = Lazy::new(|| {
    SectionRule::new(
        "required",
        &[
            "required(?: skills| qualifications)?",
            "requirements",
            "must[- ]haves?",
            "(?:minimum |basic |key )?qualifications",
            "what you(?:'ll| will)? (?:need|bring)",
            "who you are",
            "you should have",
        ],
        r"^(?:preferred|nice|bonus|responsibilities|about|benefits|what we|perks|compensation|salary|how to apply|plus|ideal)\b",
    )
});

pub(crate) static PREFERRED_SECTION: Lazy<SectionRule> = Lazy::new(|| {
    SectionRule::new(
        "preferred",
        &[
            "preferred(?: qualifications| skills)?",
            "nice[- ]to[- ]haves?(?: skills)?",
            "bonus(?: points| skills)?",
            "(?:it's |would be )?a plus",
            "plus",
            "ideal(?:ly)?(?: candidate| qualifications)?",
        ],
        r"^(?:responsibilities|about|benefits|what we|required|requirements|(?:minimum |basic )?qualifications|perks|compensation|salary|how to apply)\b",
    )
});

pub(crate) static RESPONSIBILITIES_SECTION: Lazy<SectionRule> = Lazy::new(|| {
    SectionRule::new(
        "responsibilities",
        &[
            "(?:key |core |your |job )?responsibilities",
            "what you(?:'ll| will) do",
            "duties",
            "your role",
            "the role",
            "in this role(?:,? you(?:'ll| will))?",
        ],
        r"^(?:requirements?|(?:minimum |basic |key )?qualifications?|skills?|about|benefits|what you(?:'ll| will)? (?:need|bring)|preferred|nice|bonus|must|required|perks|compensation|salary|how to apply)\b",
    )
});

pub(crate) static QUALIFICATIONS_SECTION: Lazy<SectionRule> = Lazy::new(|| {
    SectionRule::new(
        "qualifications",
        &[
            "(?:minimum |basic |key )?qualifications?",
            "requirements?",
            "must[- ]haves?",
            "what you(?:'ll| will)? need",
            "you should have",
        ],
        r"^(?:preferred|responsibilities|about|benefits|nice|bonus|what we|perks|compensation|salary|how to apply)\b",
    )
});

/// Parses raw job-posting text. Never fails.
pub fn parse_job_description(raw_text: &str) -> ParsedJobDescription {
    let (required_skills, preferred_skills) = skills::extract_skills(raw_text);

    let jd = ParsedJobDescription {
        id: new_id(),
        title: fields::extract_title(raw_text),
        company: fields::extract_company(raw_text),
        location: fields::extract_location(raw_text),
        employment_type: fields::extract_employment_type(raw_text),
        required_skills,
        preferred_skills,
        responsibilities: requirements::extract_responsibilities(raw_text),
        qualifications: requirements::extract_qualifications(raw_text),
        keywords: rank_keywords(raw_text, KEYWORD_LIMIT),
        experience: requirements::extract_experience_requirement(raw_text),
        salary: requirements::extract_salary(raw_text),
        raw_text: raw_text.to_string(),
    };

    debug!(
        title = %jd.title,
        required = jd.required_skills.len(),
        preferred = jd.preferred_skills.len(),
        min_years = jd.experience.min,
        "job description structured"
    );
    jd
}
