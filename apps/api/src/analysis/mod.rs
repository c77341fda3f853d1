//! Match Scorer — compares a structured résumé with a structured posting.
//!
//! Fully local and deterministic: the same pair always produces the same
//! scores, lists and issues. Only `id` and `created_at` differ between runs.

pub mod ats;
pub mod experience;
pub mod handlers;
pub mod impact;
pub mod insights;
pub mod matching;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::models::analysis::{AnalysisResult, MatchStatus};
use crate::models::job::ParsedJobDescription;
use crate::models::new_id;
use crate::models::resume::ParsedResume;

const SKILL_WEIGHT: f64 = 0.4;
const KEYWORD_WEIGHT: f64 = 0.3;
const EXPERIENCE_WEIGHT: f64 = 0.3;

/// Weighted overall score, rounded to the nearest integer.
pub fn overall_score(skill: u8, keyword: u8, experience: u8) -> u8 {
    let weighted = SKILL_WEIGHT * f64::from(skill)
        + KEYWORD_WEIGHT * f64::from(keyword)
        + EXPERIENCE_WEIGHT * f64::from(experience);
    weighted.round().clamp(0.0, 100.0) as u8
}

pub fn analyze(resume: &ParsedResume, jd: &ParsedJobDescription) -> AnalysisResult {
    analyze_at(resume, jd, Utc::now())
}

/// [`analyze`] with an explicit clock; "Present" in experience dates resolves
/// to `now`.
pub fn analyze_at(resume: &ParsedResume, jd: &ParsedJobDescription, now: DateTime<Utc>) -> AnalysisResult {
    let skill_matches = matching::match_skills(resume, jd);
    let skill_match_score = matching::skill_match_score(&skill_matches);

    let resume_keywords = matching::resume_keyword_set(resume);
    let jd_keywords = matching::jd_keyword_list(jd);
    let keyword_score = matching::keyword_score(&resume_keywords, &jd_keywords);
    let keyword_gaps = matching::keyword_gaps(&resume_keywords, &jd_keywords);

    let experience_score = experience::experience_score(resume, jd, now);
    let ats_analysis = ats::analyze_ats(resume);

    let missing_skills: Vec<String> = skill_matches
        .iter()
        .filter(|m| m.status == MatchStatus::Missing)
        .map(|m| m.skill.clone())
        .collect();

    debug!(
        skills = skill_matches.len(),
        missing = missing_skills.len(),
        jd_keywords = jd_keywords.len(),
        "scored components"
    );

    AnalysisResult {
        id: new_id(),
        resume_id: resume.id.clone(),
        jd_id: jd.id.clone(),
        overall_score: overall_score(skill_match_score, keyword_score, experience_score),
        skill_match_score,
        experience_score,
        keyword_score,
        ats_score: ats_analysis.score,
        experience_analysis: experience::experience_analysis(resume, &jd_keywords),
        keyword_analysis: matching::keyword_analysis(resume, jd, &jd_keywords),
        strengths: insights::strengths(resume, &skill_matches),
        weaknesses: insights::weaknesses(resume, &skill_matches),
        suggestions: insights::suggestions(&missing_skills, &ats_analysis, &keyword_gaps),
        skill_matches,
        ats_analysis,
        missing_skills,
        created_at: now,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::job::parse_job_description;
    use crate::models::analysis::Severity;
    use crate::models::resume::FileType;
    use crate::resume::parse_resume;
    use chrono::TimeZone;

    const SCENARIO_RESUME: &str = "John Doe\njohn@x.com\n555-123-4567\n\nSKILLS\nPython, SQL, AWS\n\nEXPERIENCE\nData Engineer\nAcme Corp\n2020 - Present\n• Built ETL pipelines";
    const SCENARIO_JD: &str = "Title: Data Engineer\nRequirements:\n- 3+ years Python\n- SQL\n- AWS";

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap()
    }

    fn scenario() -> (ParsedResume, ParsedJobDescription) {
        (
            parse_resume(SCENARIO_RESUME, "john.pdf", FileType::Pdf),
            parse_job_description(SCENARIO_JD),
        )
    }

    #[test]
    fn test_scenario_data_engineer() {
        let (resume, jd) = scenario();
        let result = analyze_at(&resume, &jd, now());

        assert_eq!(result.skill_match_score, 100);
        assert_eq!(result.experience_score, 95);
        assert!(result.overall_score >= 85, "overall {}", result.overall_score);
        assert!(result.missing_skills.is_empty());
        assert_eq!(result.resume_id, resume.id);
        assert_eq!(result.jd_id, jd.id);
        assert_eq!(result.ats_score, result.ats_analysis.score);
        assert_eq!(result.created_at, now());
    }

    #[test]
    fn test_overall_matches_weighted_components() {
        let (resume, jd) = scenario();
        let r = analyze_at(&resume, &jd, now());
        let expected = (0.4 * f64::from(r.skill_match_score)
            + 0.3 * f64::from(r.keyword_score)
            + 0.3 * f64::from(r.experience_score))
        .round() as u8;
        assert_eq!(r.overall_score, expected);
    }

    #[test]
    fn test_overall_score_rounding() {
        assert_eq!(overall_score(100, 100, 100), 100);
        assert_eq!(overall_score(0, 0, 0), 0);
        // 30 + 20.1 + 28.5 = 78.6
        assert_eq!(overall_score(75, 67, 95), 79);
    }

    #[test]
    fn test_no_contact_details() {
        let text = "SKILLS\nPython, SQL, AWS\n\nEXPERIENCE\nData Engineer\nAcme Corp\n2020 - Present\n• Built ETL pipelines";
        let resume = parse_resume(text, "anon.pdf", FileType::Pdf);
        let jd = parse_job_description(SCENARIO_JD);
        let result = analyze_at(&resume, &jd, now());

        let issues = &result.ats_analysis.issues;
        let email: Vec<_> = issues.iter().filter(|i| i.message == "Missing email address").collect();
        let phone: Vec<_> = issues.iter().filter(|i| i.message == "Missing phone number").collect();
        assert_eq!(email.len(), 1);
        assert_eq!(email[0].severity, Severity::Critical);
        assert_eq!(phone.len(), 1);
        assert_eq!(phone[0].severity, Severity::Warning);
        assert!(result.ats_analysis.format_score <= 70);
    }

    #[test]
    fn test_posting_without_skills_uses_neutral_score() {
        let (resume, _) = scenario();
        let jd = ParsedJobDescription {
            raw_text: "We are growing quickly.".into(),
            ..Default::default()
        };
        let result = analyze_at(&resume, &jd, now());
        assert!(result.skill_matches.is_empty());
        assert_eq!(result.skill_match_score, 75);
        assert_eq!(result.experience_score, 85);
    }

    #[test]
    fn test_missing_skills_feed_suggestions() {
        let (resume, _) = scenario();
        let jd = parse_job_description("Title: Platform Engineer\nRequirements:\n- Kubernetes\n- Terraform\n- Python");
        let result = analyze_at(&resume, &jd, now());

        assert!(result.missing_skills.iter().any(|s| s.eq_ignore_ascii_case("kubernetes")));
        assert!(result.suggestions[0].starts_with("Add these skills if you have experience:"));
        assert!(result.skill_match_score < 100);
    }

    #[test]
    fn test_deterministic_apart_from_identity() {
        let (resume, jd) = scenario();
        let first = analyze_at(&resume, &jd, now());
        let mut second = analyze_at(&resume, &jd, now());
        assert_ne!(first.id, second.id);
        second.id = first.id.clone();
        assert_eq!(first, second);
    }
}
