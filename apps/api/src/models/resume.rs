//! Structured résumé record produced by the résumé structurer.
//!
//! Records are built once per upload and never mutated afterwards; merging or
//! improving a résumé always produces a new record.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    #[default]
    Pdf,
    Docx,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub portfolio: Option<String>,
}

/// One job. Dates are kept as written; `current` implies the end date is
/// semantically "present" whatever its literal text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkExperience {
    pub id: String,
    pub company: String,
    pub position: String,
    pub location: Option<String>,
    pub start_date: String,
    pub end_date: String,
    pub current: bool,
    pub description: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    pub id: String,
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub start_date: String,
    pub end_date: String,
    pub gpa: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub url: Option<String>,
    pub github: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Certification {
    pub id: String,
    pub name: String,
    pub issuer: String,
    pub date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParsedResume {
    pub id: String,
    pub contact: ContactInfo,
    pub summary: Option<String>,
    /// Unique under `normalize_skill`; order carries no meaning.
    pub skills: Vec<String>,
    /// Reverse-chronological as encountered in the source.
    pub experience: Vec<WorkExperience>,
    pub education: Vec<Education>,
    pub projects: Vec<Project>,
    pub certifications: Vec<Certification>,
    pub languages: Option<Vec<String>>,
    /// Verbatim source text, re-scanned by the scorer.
    pub raw_text: String,
    pub file_name: String,
    pub file_type: FileType,
}

impl ParsedResume {
    /// True when the structurer found nothing at all; callers treat this as
    /// "extraction failed".
    pub fn is_empty(&self) -> bool {
        self.contact.name.is_empty()
            && self.contact.email.is_empty()
            && self.contact.phone.is_empty()
            && self.summary.is_none()
            && self.skills.is_empty()
            && self.experience.is_empty()
            && self.education.is_empty()
            && self.projects.is_empty()
            && self.certifications.is_empty()
            && self.languages.is_none()
    }
}
