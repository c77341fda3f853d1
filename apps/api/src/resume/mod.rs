//! Résumé Structurer — turns extracted résumé text into a [`ParsedResume`].
//!
//! Every field is best-effort. A section that cannot be located leaves its
//! field empty; callers treat an all-empty record as "extraction failed".

pub mod contact;
pub mod experience;
pub mod handlers;
pub mod sections;
pub mod skills;

use tracing::debug;

use crate::models::new_id;
use crate::models::resume::{FileType, ParsedResume};

/// Heading keys that end any résumé section. Matched against the normalised
/// heading key of a line (see [`crate::text::sections::heading_key`]).
pub(crate) const SECTION_STOP: &str = r"^(?:(?:work |professional |relevant )?experience|employment(?: history)?|(?:work |career |professional )?history|professional background|education|(?:technical |core |key )?skills|technologies|(?:core )?competencies|(?:areas of )?expertise|(?:personal |selected |key |academic |side )?projects?|certifications?|licenses?(?: (?:&|and) certifications?)?|(?:spoken |foreign )?languages?|(?:professional |executive |career )?summary|(?:career |professional )?objective|(?:professional )?profile|about me|awards|honors|publications|volunteer(?:ing| experience| work)?|interests|hobbies|references|achievements|activities|training|courses|(?:relevant )?coursework)(?: (?:&|and) \w+)?$";

/// Parses raw résumé text. Never fails; missing sections yield empty fields.
pub fn parse_resume(raw_text: &str, file_name: &str, file_type: FileType) -> ParsedResume {
    let resume = ParsedResume {
        id: new_id(),
        contact: contact::extract_contact(raw_text),
        summary: sections::extract_summary(raw_text),
        skills: skills::extract_skills(raw_text),
        experience: experience::extract_experience(raw_text),
        education: sections::extract_education(raw_text),
        projects: sections::extract_projects(raw_text),
        certifications: sections::extract_certifications(raw_text),
        languages: sections::extract_languages(raw_text),
        raw_text: raw_text.to_string(),
        file_name: file_name.to_string(),
        file_type,
    };

    debug!(
        skills = resume.skills.len(),
        experience = resume.experience.len(),
        education = resume.education.len(),
        projects = resume.projects.len(),
        "resume structured"
    );
    resume
}
