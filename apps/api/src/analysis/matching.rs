//! Skill matching and keyword overlap between a résumé and a posting.

use std::collections::HashSet;

use regex::RegexBuilder;

use crate::models::analysis::{Importance, KeywordAnalysis, KeywordFrequency, MatchStatus, SkillMatch};
use crate::models::job::{ParsedJobDescription, RequirementLevel};
use crate::models::resume::ParsedResume;
use crate::text::keywords::{count_keyword, extract_keywords, extract_phrases, is_tech_keyword};
use crate::text::skills::{normalize_skill, same_skill, variation_group};

/// Skill score when the posting lists no skills at all.
pub const NO_SKILLS_SCORE: u8 = 75;
/// Keyword score when the posting yields no keywords.
pub const NO_KEYWORDS_SCORE: u8 = 70;

pub const KEYWORD_ANALYSIS_LIMIT: usize = 25;
pub const KEYWORD_GAP_LIMIT: usize = 10;

/// Characters of the surrounding résumé line quoted as match context.
const CONTEXT_CHARS: usize = 120;

pub(crate) fn percent(part: usize, whole: usize) -> u8 {
    ((part as f64 / whole as f64) * 100.0).round().min(100.0) as u8
}

// ────────────────────────────────────────────────────────────────────────────
// Skills
// ────────────────────────────────────────────────────────────────────────────

/// The posting's skills, unique under the normalizer, required ones first.
pub fn jd_skills(jd: &ParsedJobDescription) -> Vec<(String, RequirementLevel)> {
    let mut seen = HashSet::new();
    jd.required_skills
        .iter()
        .chain(&jd.preferred_skills)
        .filter(|req| !req.skill.trim().is_empty())
        .filter(|req| seen.insert(normalize_skill(&req.skill)))
        .map(|req| (req.skill.trim().to_string(), req.level))
        .collect()
}

fn context_line(text: &str, start: usize) -> String {
    let line_start = text[..start].rfind('\n').map_or(0, |i| i + 1);
    let line_end = text[start..].find('\n').map_or(text.len(), |i| start + i);
    text[line_start..line_end].trim().chars().take(CONTEXT_CHARS).collect()
}

/// Case-insensitive substring search; returns the byte offset in `text`.
fn find_ignore_case(text: &str, needle: &str) -> Option<usize> {
    let needle = needle.trim();
    if needle.is_empty() {
        return None;
    }
    RegexBuilder::new(&regex::escape(needle))
        .case_insensitive(true)
        .build()
        .ok()?
        .find(text)
        .map(|m| m.start())
}

/// Where the résumé supports `skill`, if anywhere.
///
/// Tried in order: the skill (or its normalized name) anywhere in the raw
/// text, a listed skill that normalizes to the same name, a listed skill
/// containing or contained in it (partial), and finally the spelling
/// variation table. All checks are substring containment.
pub fn skill_status(skill: &str, resume: &ParsedResume) -> (MatchStatus, Option<String>) {
    let text = &resume.raw_text;
    let normalized = normalize_skill(skill);

    if let Some(start) = find_ignore_case(text, skill).or_else(|| find_ignore_case(text, &normalized)) {
        return (MatchStatus::Matched, Some(context_line(text, start)));
    }

    if let Some(listed) = resume.skills.iter().find(|s| same_skill(s, skill)) {
        return (MatchStatus::Matched, Some(format!("Listed skill: {listed}")));
    }

    if let Some(listed) = resume.skills.iter().find(|s| {
        let listed = normalize_skill(s);
        !listed.is_empty() && (listed.contains(&normalized) || normalized.contains(&listed))
    }) {
        return (MatchStatus::Partial, Some(format!("Related skill: {listed}")));
    }

    if let Some((key, alternates)) = variation_group(skill) {
        if let Some(found) = std::iter::once(key)
            .chain(alternates.iter().copied())
            .find(|variant| find_ignore_case(text, variant).is_some())
        {
            return (MatchStatus::Matched, Some(format!("Found as \"{found}\"")));
        }
    }

    (MatchStatus::Missing, None)
}

pub fn match_skills(resume: &ParsedResume, jd: &ParsedJobDescription) -> Vec<SkillMatch> {
    jd_skills(jd)
        .into_iter()
        .map(|(skill, level)| {
            let (status, resume_context) = skill_status(&skill, resume);
            let jd_context = match level {
                RequirementLevel::Required => "Required skill",
                RequirementLevel::Preferred => "Preferred skill",
                RequirementLevel::NiceToHave => "Nice-to-have skill",
            };
            SkillMatch {
                skill,
                status,
                resume_context,
                jd_context: Some(jd_context.to_string()),
                importance: level,
            }
        })
        .collect()
}

/// Share of posting skills the résumé covers; partial matches count.
pub fn skill_match_score(matches: &[SkillMatch]) -> u8 {
    if matches.is_empty() {
        return NO_SKILLS_SCORE;
    }
    let matched = matches.iter().filter(|m| m.status.is_match()).count();
    percent(matched, matches.len())
}

// ────────────────────────────────────────────────────────────────────────────
// Keywords
// ────────────────────────────────────────────────────────────────────────────

/// Keywords, dictionary phrases and listed skills of the résumé.
pub fn resume_keyword_set(resume: &ParsedResume) -> HashSet<String> {
    let mut set: HashSet<String> = extract_keywords(&resume.raw_text).into_iter().collect();
    set.extend(extract_phrases(&resume.raw_text));
    for skill in &resume.skills {
        set.insert(skill.trim().to_lowercase());
        set.insert(normalize_skill(skill));
    }
    set
}

/// Keywords then dictionary phrases of the posting, in first-seen order.
pub fn jd_keyword_list(jd: &ParsedJobDescription) -> Vec<String> {
    let mut seen = HashSet::new();
    extract_keywords(&jd.raw_text)
        .into_iter()
        .chain(extract_phrases(&jd.raw_text))
        .filter(|kw| seen.insert(kw.clone()))
        .collect()
}

pub fn keyword_score(resume_set: &HashSet<String>, jd_keywords: &[String]) -> u8 {
    if jd_keywords.is_empty() {
        return NO_KEYWORDS_SCORE;
    }
    let matched = jd_keywords.iter().filter(|kw| resume_set.contains(*kw)).count();
    percent(matched, jd_keywords.len())
}

/// Posting keywords absent from the résumé's keyword set.
pub fn keyword_gaps(resume_set: &HashSet<String>, jd_keywords: &[String]) -> Vec<String> {
    jd_keywords
        .iter()
        .filter(|kw| !resume_set.contains(*kw))
        .take(KEYWORD_GAP_LIMIT)
        .cloned()
        .collect()
}

fn keyword_importance(keyword: &str, jd: &ParsedJobDescription, jd_count: usize) -> Importance {
    let normalized = normalize_skill(keyword);
    let listed = |level: RequirementLevel| {
        jd.required_skills
            .iter()
            .chain(&jd.preferred_skills)
            .any(|req| req.level == level && normalize_skill(&req.skill) == normalized)
    };

    if listed(RequirementLevel::Required) {
        Importance::High
    } else if listed(RequirementLevel::Preferred) || is_tech_keyword(keyword) || jd_count >= 2 {
        Importance::Medium
    } else {
        Importance::Low
    }
}

/// Occurrence table for the leading posting keywords.
pub fn keyword_analysis(
    resume: &ParsedResume,
    jd: &ParsedJobDescription,
    jd_keywords: &[String],
) -> Vec<KeywordAnalysis> {
    jd_keywords
        .iter()
        .take(KEYWORD_ANALYSIS_LIMIT)
        .map(|keyword| {
            let frequency = KeywordFrequency {
                resume: count_keyword(&resume.raw_text, keyword),
                jd: count_keyword(&jd.raw_text, keyword),
            };
            let suggestions = if frequency.resume == 0 {
                vec![format!("Consider adding \"{keyword}\" to your résumé if applicable")]
            } else {
                Vec::new()
            };
            KeywordAnalysis {
                keyword: keyword.clone(),
                importance: keyword_importance(keyword, jd, frequency.jd),
                frequency,
                suggestions,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::job::JobRequirement;

    fn resume(raw_text: &str, skills: &[&str]) -> ParsedResume {
        ParsedResume {
            raw_text: raw_text.to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    fn jd(raw_text: &str, required: &[&str], preferred: &[&str]) -> ParsedJobDescription {
        ParsedJobDescription {
            raw_text: raw_text.to_string(),
            required_skills: required
                .iter()
                .map(|s| JobRequirement::new(*s, RequirementLevel::Required))
                .collect(),
            preferred_skills: preferred
                .iter()
                .map(|s| JobRequirement::new(*s, RequirementLevel::Preferred))
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_raw_text_mention_is_matched_with_context() {
        let r = resume("Jane\n• Built ETL pipelines in Python\n", &[]);
        let (status, context) = skill_status("python", &r);
        assert_eq!(status, MatchStatus::Matched);
        assert_eq!(context.as_deref(), Some("• Built ETL pipelines in Python"));
    }

    #[test]
    fn test_mentions_match_as_substrings() {
        let r = resume("Built PostgreSQL schemas and JavaScript frontends", &[]);
        let j = jd("", &["SQL", "Java"], &[]);
        let matches = match_skills(&r, &j);
        assert!(matches.iter().all(|m| m.status == MatchStatus::Matched), "{matches:?}");
        assert_eq!(skill_match_score(&matches), 100);
    }

    #[test]
    fn test_mentions_ignore_case() {
        let r = resume("Services written in GO and c++", &[]);
        assert_eq!(skill_status("Go", &r).0, MatchStatus::Matched);
        assert_eq!(skill_status("C++", &r).0, MatchStatus::Matched);
        assert_eq!(skill_status("Rust", &r).0, MatchStatus::Missing);
    }

    #[test]
    fn test_listed_skill_synonym_matches() {
        let r = resume("Skills listed elsewhere", &["K8s"]);
        assert_eq!(skill_status("Kubernetes", &r).0, MatchStatus::Matched);
    }

    #[test]
    fn test_related_listed_skill_is_partial() {
        let r = resume("Mobile apps", &["React"]);
        let (status, context) = skill_status("React Native", &r);
        assert_eq!(status, MatchStatus::Partial);
        assert_eq!(context.as_deref(), Some("Related skill: React"));
    }

    #[test]
    fn test_variation_table_is_last_resort() {
        let r = resume("Deployed services on k8s clusters", &[]);
        assert_eq!(skill_status("Kubernetes", &r).0, MatchStatus::Matched);
        let r = resume("Wrote postgres migrations", &[]);
        assert_eq!(skill_status("PostgreSQL", &r).0, MatchStatus::Matched);
    }

    #[test]
    fn test_jd_skills_unique_required_first() {
        let j = jd("", &["Python", "SQL"], &["python", "Airflow"]);
        let skills = jd_skills(&j);
        assert_eq!(
            skills,
            vec![
                ("Python".to_string(), RequirementLevel::Required),
                ("SQL".to_string(), RequirementLevel::Required),
                ("Airflow".to_string(), RequirementLevel::Preferred),
            ]
        );
    }

    #[test]
    fn test_skill_match_score_defaults_and_counts_partial() {
        assert_eq!(skill_match_score(&[]), NO_SKILLS_SCORE);

        let r = resume("Python and React", &["React"]);
        let j = jd("", &["Python", "React Native", "Rust"], &[]);
        let matches = match_skills(&r, &j);
        assert_eq!(matches[2].status, MatchStatus::Missing);
        assert_eq!(skill_match_score(&matches), 67);
    }

    #[test]
    fn test_keyword_score_and_gaps() {
        let r = resume("Python developer building data pipelines", &["SQL"]);
        let j = jd("Python, SQL, Kafka pipelines", &[], &[]);
        let set = resume_keyword_set(&r);
        let keywords = jd_keyword_list(&j);
        assert_eq!(keywords, vec!["python", "sql", "kafka", "pipelines"]);
        assert_eq!(keyword_score(&set, &keywords), 75);
        assert_eq!(keyword_gaps(&set, &keywords), vec!["kafka"]);
        assert_eq!(keyword_score(&set, &[]), NO_KEYWORDS_SCORE);
    }

    #[test]
    fn test_keyword_analysis_importance_and_suggestions() {
        let r = resume("Python only", &[]);
        let j = jd("Python Airflow Airflow kubernetes onboarding", &["Python"], &[]);
        let keywords = jd_keyword_list(&j);
        let table = keyword_analysis(&r, &j, &keywords);

        let python = &table[0];
        assert_eq!(python.keyword, "python");
        assert_eq!(python.importance, Importance::High);
        assert_eq!(python.frequency, KeywordFrequency { resume: 1, jd: 1 });
        assert!(python.suggestions.is_empty());

        let airflow = table.iter().find(|k| k.keyword == "airflow").unwrap();
        assert_eq!(airflow.importance, Importance::Medium);
        assert_eq!(airflow.suggestions.len(), 1);

        let kube = table.iter().find(|k| k.keyword == "kubernetes").unwrap();
        assert_eq!(kube.importance, Importance::Medium);

        let onboarding = table.iter().find(|k| k.keyword == "onboarding").unwrap();
        assert_eq!(onboarding.importance, Importance::Low);
    }
}
