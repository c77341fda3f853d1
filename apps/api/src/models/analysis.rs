//! Analysis output. Every value here is derived and recomputed on each
//! analysis; nothing is updated in place.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::job::RequirementLevel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    Matched,
    Partial,
    Missing,
}

impl MatchStatus {
    /// Partial matches count towards the skill score.
    pub fn is_match(self) -> bool {
        !matches!(self, MatchStatus::Missing)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillMatch {
    pub skill: String,
    pub status: MatchStatus,
    pub resume_context: Option<String>,
    pub jd_context: Option<String>,
    pub importance: RequirementLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceAnalysis {
    pub position: String,
    pub company: String,
    pub relevance_score: u8,
    pub matched_keywords: Vec<String>,
    pub suggestions: Vec<String>,
    pub weak_points: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Importance {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordFrequency {
    pub resume: usize,
    pub jd: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordAnalysis {
    pub keyword: String,
    pub frequency: KeywordFrequency,
    pub importance: Importance,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueType {
    Format,
    Content,
    Structure,
    Keyword,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Warning,
    Suggestion,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtsIssue {
    #[serde(rename = "type")]
    pub kind: IssueType,
    pub severity: Severity,
    pub message: String,
    pub location: Option<String>,
    pub fix: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtsAnalysis {
    pub score: u8,
    pub format_score: u8,
    pub structure_score: u8,
    pub readability_score: u8,
    pub keyword_score: u8,
    pub issues: Vec<AtsIssue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub id: String,
    pub resume_id: String,
    pub jd_id: String,
    pub overall_score: u8,
    pub skill_match_score: u8,
    pub experience_score: u8,
    pub keyword_score: u8,
    pub ats_score: u8,
    pub skill_matches: Vec<SkillMatch>,
    pub experience_analysis: Vec<ExperienceAnalysis>,
    pub keyword_analysis: Vec<KeywordAnalysis>,
    pub ats_analysis: AtsAnalysis,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub missing_skills: Vec<String>,
    pub suggestions: Vec<String>,
    pub created_at: DateTime<Utc>,
}
