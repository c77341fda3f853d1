//! Local ATS-compatibility check. Looks at the résumé alone.
//!
//! Each sub-score starts from a fixed baseline and loses a fixed penalty per
//! finding; every finding is also reported as an [`AtsIssue`].

use crate::models::analysis::{AtsAnalysis, AtsIssue, IssueType, Severity};
use crate::models::resume::ParsedResume;

const FORMAT_BASE: i32 = 90;
const STRUCTURE_BASE: i32 = 90;
const READABILITY_BASE: i32 = 85;
const KEYWORD_BASE: i32 = 70;

/// Skill count below which the list is considered thin.
const MIN_SKILLS: usize = 5;
/// Shorter raw text usually means extraction lost content.
const MIN_DOCUMENT_CHARS: usize = 500;

fn issue(kind: IssueType, severity: Severity, message: String, location: &str, fix: &str) -> AtsIssue {
    AtsIssue {
        kind,
        severity,
        message,
        location: Some(location.to_string()),
        fix: Some(fix.to_string()),
    }
}

fn clamp(score: i32) -> u8 {
    score.clamp(0, 100) as u8
}

pub fn analyze_ats(resume: &ParsedResume) -> AtsAnalysis {
    let mut issues = Vec::new();
    let mut format = FORMAT_BASE;
    let mut structure = STRUCTURE_BASE;
    let mut readability = READABILITY_BASE;
    let mut keyword = KEYWORD_BASE;

    // ── contact ─────────────────────────────────────────────────────────────
    if resume.contact.email.trim().is_empty() {
        issues.push(issue(
            IssueType::Content,
            Severity::Critical,
            "Missing email address".to_string(),
            "Contact section",
            "Add your professional email address",
        ));
        format -= 15;
    }
    if resume.contact.phone.trim().is_empty() {
        issues.push(issue(
            IssueType::Content,
            Severity::Warning,
            "Missing phone number".to_string(),
            "Contact section",
            "Add a phone number for recruiters to contact you",
        ));
        format -= 5;
    }
    if resume.contact.name.trim().is_empty() {
        issues.push(issue(
            IssueType::Content,
            Severity::Critical,
            "Name not detected".to_string(),
            "Header",
            "Ensure your full name is clearly visible at the top",
        ));
        format -= 10;
    }

    // ── experience ──────────────────────────────────────────────────────────
    if resume.experience.is_empty() {
        issues.push(issue(
            IssueType::Structure,
            Severity::Critical,
            "No work experience detected".to_string(),
            "Experience section",
            "Add work experience with clear job titles, company names, and dates",
        ));
        structure -= 25;
    } else if let Some(bare) = resume.experience.iter().find(|e| e.description.is_empty()) {
        issues.push(issue(
            IssueType::Content,
            Severity::Warning,
            format!("Missing description for {} at {}", bare.position, bare.company),
            "Experience section",
            "Add bullet points describing your responsibilities and achievements",
        ));
        structure -= 5;
    }

    if resume.education.is_empty() {
        issues.push(issue(
            IssueType::Structure,
            Severity::Suggestion,
            "No education information detected".to_string(),
            "Education section",
            "Add your educational background if relevant",
        ));
    }

    // ── skills ──────────────────────────────────────────────────────────────
    match resume.skills.len() {
        0 => {
            issues.push(issue(
                IssueType::Content,
                Severity::Warning,
                "No skills section detected".to_string(),
                "Skills section",
                "Add a dedicated skills section with relevant technical and soft skills",
            ));
            keyword -= 20;
        }
        n if n < MIN_SKILLS => {
            issues.push(issue(
                IssueType::Content,
                Severity::Suggestion,
                "Limited skills listed".to_string(),
                "Skills section",
                "Consider adding more relevant skills to improve keyword matching",
            ));
            keyword -= 10;
        }
        n => keyword = (60 + 3 * n as i32).min(90),
    }

    if resume.summary.as_deref().map_or(true, |s| s.trim().is_empty()) {
        issues.push(issue(
            IssueType::Structure,
            Severity::Suggestion,
            "No professional summary detected".to_string(),
            "Summary section",
            "Add a brief professional summary highlighting your key qualifications",
        ));
    }

    if resume.raw_text.chars().count() < MIN_DOCUMENT_CHARS {
        issues.push(issue(
            IssueType::Format,
            Severity::Suggestion,
            "Resume appears to be very short".to_string(),
            "Overall document",
            "Ensure all content was properly extracted. If using images or complex formatting, consider a simpler layout.",
        ));
        readability -= 15;
    }

    let score = ((format + structure + readability + keyword) as f64 / 4.0).round() as i32;

    AtsAnalysis {
        score: clamp(score),
        format_score: clamp(format),
        structure_score: clamp(structure),
        readability_score: clamp(readability),
        keyword_score: clamp(keyword),
        issues,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{ContactInfo, Education, WorkExperience};

    fn complete_resume() -> ParsedResume {
        ParsedResume {
            contact: ContactInfo {
                name: "Jane Smith".into(),
                email: "jane@example.com".into(),
                phone: "555-123-4567".into(),
                ..Default::default()
            },
            summary: Some("Backend engineer".into()),
            skills: ["Rust", "Go", "SQL", "AWS", "Docker", "Kafka", "Redis"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            experience: vec![WorkExperience {
                position: "Engineer".into(),
                company: "Acme".into(),
                description: vec!["Shipped things".into()],
                ..Default::default()
            }],
            education: vec![Education {
                institution: "MIT".into(),
                ..Default::default()
            }],
            raw_text: "x".repeat(600),
            ..Default::default()
        }
    }

    #[test]
    fn test_complete_resume_has_no_issues() {
        let ats = analyze_ats(&complete_resume());
        assert!(ats.issues.is_empty(), "{:?}", ats.issues);
        assert_eq!(ats.format_score, 90);
        assert_eq!(ats.structure_score, 90);
        assert_eq!(ats.readability_score, 85);
        assert_eq!(ats.keyword_score, 81);
        // (90 + 90 + 85 + 81) / 4 = 86.5
        assert_eq!(ats.score, 87);
    }

    #[test]
    fn test_missing_email_and_phone() {
        let mut r = complete_resume();
        r.contact.email.clear();
        r.contact.phone.clear();
        let ats = analyze_ats(&r);

        let critical: Vec<_> = ats.issues.iter().filter(|i| i.severity == Severity::Critical).collect();
        let warnings: Vec<_> = ats.issues.iter().filter(|i| i.severity == Severity::Warning).collect();
        assert_eq!(critical.len(), 1);
        assert_eq!(critical[0].message, "Missing email address");
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].message, "Missing phone number");
        assert!(ats.format_score <= 70);
    }

    #[test]
    fn test_bare_entry_reported_once() {
        let mut r = complete_resume();
        r.experience[0].description.clear();
        let dup = r.experience[0].clone();
        r.experience.push(dup);
        let ats = analyze_ats(&r);
        assert_eq!(ats.issues.len(), 1);
        assert_eq!(ats.issues[0].message, "Missing description for Engineer at Acme");
        assert_eq!(ats.structure_score, 85);
    }

    #[test]
    fn test_empty_resume_penalties() {
        let ats = analyze_ats(&ParsedResume::default());
        assert_eq!(ats.format_score, 60);
        assert_eq!(ats.structure_score, 65);
        assert_eq!(ats.readability_score, 70);
        assert_eq!(ats.keyword_score, 50);
        assert_eq!(ats.score, 61);
        assert_eq!(ats.issues.iter().filter(|i| i.severity == Severity::Critical).count(), 3);
    }

    #[test]
    fn test_thin_skills_list() {
        let mut r = complete_resume();
        r.skills.truncate(3);
        let ats = analyze_ats(&r);
        assert_eq!(ats.keyword_score, 60);
        assert_eq!(ats.issues[0].severity, Severity::Suggestion);
    }

    #[test]
    fn test_keyword_score_caps_at_ninety() {
        let mut r = complete_resume();
        r.skills = (0..20).map(|i| format!("skill{i}")).collect();
        assert_eq!(analyze_ats(&r).keyword_score, 90);
    }
}
