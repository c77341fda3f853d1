//! Generated strengths, weaknesses and suggestions.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::analysis::matching::percent;
use crate::models::analysis::{AtsAnalysis, Severity, SkillMatch};
use crate::models::job::RequirementLevel;
use crate::models::resume::ParsedResume;

const MAX_STRENGTHS: usize = 5;
const MAX_WEAKNESSES: usize = 5;
const MAX_SUGGESTIONS: usize = 6;
const SUGGESTED_SKILLS: usize = 4;
const SUGGESTED_KEYWORDS: usize = 4;

static QUANTIFIED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\d+%|\$\d+|\d+\s*(?:users|customers|projects|years)").unwrap());

const ADVANCED_DEGREES: &[&str] = &["master", "phd", "ph.d", "mba"];

pub fn strengths(resume: &ParsedResume, skill_matches: &[SkillMatch]) -> Vec<String> {
    let mut out = Vec::new();

    let matched = skill_matches.iter().filter(|m| m.status.is_match()).count();
    if matched > 0 {
        let total = skill_matches.len();
        let share = percent(matched, total);
        if share >= 70 {
            out.push(format!(
                "Strong skill alignment - {matched} of {total} required skills matched"
            ));
        } else if share >= 50 {
            out.push(format!("Good skill coverage - {matched} matching skills found"));
        }
    }

    match resume.experience.len() {
        0 => {}
        1 | 2 => out.push("Relevant work experience documented".to_string()),
        _ => out.push("Extensive work history demonstrates career progression".to_string()),
    }

    if !resume.education.is_empty() {
        let advanced = resume.education.iter().any(|e| {
            let degree = e.degree.to_lowercase();
            ADVANCED_DEGREES.iter().any(|d| degree.contains(d))
        });
        if advanced {
            out.push("Advanced degree adds credibility".to_string());
        } else {
            out.push("Educational background supports qualifications".to_string());
        }
    }

    if !resume.projects.is_empty() {
        out.push("Project portfolio demonstrates practical application of skills".to_string());
    }
    if !resume.certifications.is_empty() {
        out.push("Professional certifications validate expertise".to_string());
    }

    let contact = &resume.contact;
    if contact.linkedin.is_some() || contact.github.is_some() || contact.portfolio.is_some() {
        out.push("Online presence allows further evaluation of work".to_string());
    }

    out.truncate(MAX_STRENGTHS);
    out
}

pub fn weaknesses(resume: &ParsedResume, skill_matches: &[SkillMatch]) -> Vec<String> {
    let mut out = Vec::new();

    let required_missing: Vec<&str> = skill_matches
        .iter()
        .filter(|m| !m.status.is_match() && m.importance == RequirementLevel::Required)
        .map(|m| m.skill.as_str())
        .collect();
    match required_missing.len() {
        0 => {}
        n if n > 2 => out.push(format!(
            "Missing {n} required skills: {}",
            required_missing[..3].join(", ")
        )),
        _ => out.push(format!(
            "Some required skills not found: {}",
            required_missing.join(", ")
        )),
    }

    if resume.summary.is_none() {
        out.push(
            "No professional summary - adding one can help recruiters quickly assess your fit".to_string(),
        );
    }
    if resume.skills.len() < 5 {
        out.push("Skills section could be expanded to improve ATS matching".to_string());
    }
    if resume.experience.iter().any(|e| e.description.len() < 2) {
        out.push(
            "Some job descriptions lack detail - add specific achievements and responsibilities".to_string(),
        );
    }
    if QUANTIFIED.find_iter(&resume.raw_text).count() < 2 {
        out.push("Limited quantifiable achievements - add metrics to demonstrate impact".to_string());
    }

    out.truncate(MAX_WEAKNESSES);
    out
}

pub fn suggestions(missing_skills: &[String], ats: &AtsAnalysis, keyword_gaps: &[String]) -> Vec<String> {
    let mut out = Vec::new();

    if !missing_skills.is_empty() {
        let top: Vec<&str> = missing_skills.iter().take(SUGGESTED_SKILLS).map(String::as_str).collect();
        out.push(format!("Add these skills if you have experience: {}", top.join(", ")));
    }

    out.extend(
        ats.issues
            .iter()
            .filter(|i| i.severity == Severity::Critical)
            .filter_map(|i| i.fix.clone()),
    );

    if !keyword_gaps.is_empty() {
        let top: Vec<&str> = keyword_gaps.iter().take(SUGGESTED_KEYWORDS).map(String::as_str).collect();
        out.push(format!("Incorporate these keywords naturally: {}", top.join(", ")));
    }

    if !out.iter().any(|s| s.to_lowercase().contains("quantif")) {
        out.push("Add quantifiable achievements (percentages, dollar amounts, team sizes)".to_string());
    }
    out.push("Use action verbs at the start of bullet points (Led, Developed, Implemented, etc.)".to_string());

    out.truncate(MAX_SUGGESTIONS);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::analysis::{AtsIssue, IssueType, MatchStatus};
    use crate::models::resume::{Certification, ContactInfo, Education, WorkExperience};

    fn skill(name: &str, status: MatchStatus, importance: RequirementLevel) -> SkillMatch {
        SkillMatch {
            skill: name.to_string(),
            status,
            resume_context: None,
            jd_context: None,
            importance,
        }
    }

    fn ats_with(issues: Vec<AtsIssue>) -> AtsAnalysis {
        AtsAnalysis {
            score: 80,
            format_score: 80,
            structure_score: 80,
            readability_score: 80,
            keyword_score: 80,
            issues,
        }
    }

    #[test]
    fn test_strengths_are_capped_and_ordered() {
        let resume = ParsedResume {
            contact: ContactInfo {
                github: Some("github.com/jane".into()),
                ..Default::default()
            },
            experience: vec![WorkExperience::default(); 3],
            education: vec![Education {
                degree: "Master of Science".into(),
                ..Default::default()
            }],
            certifications: vec![Certification::default()],
            projects: vec![Default::default()],
            ..Default::default()
        };
        let matches = vec![
            skill("Python", MatchStatus::Matched, RequirementLevel::Required),
            skill("SQL", MatchStatus::Partial, RequirementLevel::Required),
            skill("AWS", MatchStatus::Matched, RequirementLevel::Required),
        ];
        let out = strengths(&resume, &matches);
        assert_eq!(out.len(), 5);
        assert_eq!(out[0], "Strong skill alignment - 3 of 3 required skills matched");
        assert_eq!(out[1], "Extensive work history demonstrates career progression");
        assert_eq!(out[2], "Advanced degree adds credibility");
        assert!(!out.iter().any(|s| s.starts_with("Online presence")));
    }

    #[test]
    fn test_moderate_skill_coverage() {
        let matches = vec![
            skill("Python", MatchStatus::Matched, RequirementLevel::Required),
            skill("Rust", MatchStatus::Missing, RequirementLevel::Required),
        ];
        let out = strengths(&ParsedResume::default(), &matches);
        assert_eq!(out, vec!["Good skill coverage - 1 matching skills found"]);
    }

    #[test]
    fn test_weaknesses_name_first_three_missing_required() {
        let matches = vec![
            skill("Rust", MatchStatus::Missing, RequirementLevel::Required),
            skill("Kafka", MatchStatus::Missing, RequirementLevel::Required),
            skill("Go", MatchStatus::Missing, RequirementLevel::Required),
            skill("Scala", MatchStatus::Missing, RequirementLevel::Required),
            skill("Airflow", MatchStatus::Missing, RequirementLevel::Preferred),
        ];
        let out = weaknesses(&ParsedResume::default(), &matches);
        assert_eq!(out[0], "Missing 4 required skills: Rust, Kafka, Go");
        assert!(out.contains(&"Limited quantifiable achievements - add metrics to demonstrate impact".to_string()));
    }

    #[test]
    fn test_quantified_resume_is_not_flagged() {
        let resume = ParsedResume {
            summary: Some("Engineer".into()),
            skills: (0..6).map(|i| i.to_string()).collect(),
            raw_text: "Cut costs 30% for 2000 users".into(),
            ..Default::default()
        };
        assert!(weaknesses(&resume, &[]).is_empty());
    }

    #[test]
    fn test_suggestions_include_critical_fixes_and_cap() {
        let ats = ats_with(vec![AtsIssue {
            kind: IssueType::Content,
            severity: Severity::Critical,
            message: "Missing email address".into(),
            location: None,
            fix: Some("Add your professional email address".into()),
        }]);
        let missing: Vec<String> = ["Rust", "Go", "Kafka", "Scala", "Spark"].iter().map(|s| s.to_string()).collect();
        let gaps = vec!["pipelines".to_string()];

        let out = suggestions(&missing, &ats, &gaps);
        assert_eq!(out.len(), 5);
        assert_eq!(out[0], "Add these skills if you have experience: Rust, Go, Kafka, Scala");
        assert_eq!(out[1], "Add your professional email address");
        assert_eq!(out[2], "Incorporate these keywords naturally: pipelines");
        assert!(out[4].starts_with("Use action verbs"));
    }
}
