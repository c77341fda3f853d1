//! Structured job-description record produced by the JD structurer.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RequirementLevel {
    #[default]
    Required,
    Preferred,
    NiceToHave,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmploymentType {
    FullTime,
    PartTime,
    Contract,
    Remote,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobRequirement {
    pub skill: String,
    pub level: RequirementLevel,
    /// Minimum years asked for this skill specifically, when stated.
    pub years: Option<u32>,
}

impl JobRequirement {
    pub fn new(skill: impl Into<String>, level: RequirementLevel) -> Self {
        Self {
            skill: skill.into(),
            level,
            years: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceRequirement {
    pub min: u32,
    pub max: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SalaryRange {
    pub min: Option<u64>,
    pub max: Option<u64>,
    pub currency: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParsedJobDescription {
    pub id: String,
    pub title: String,
    pub company: Option<String>,
    pub location: Option<String>,
    pub employment_type: Option<EmploymentType>,
    pub required_skills: Vec<JobRequirement>,
    pub preferred_skills: Vec<JobRequirement>,
    pub responsibilities: Vec<String>,
    pub qualifications: Vec<String>,
    pub keywords: Vec<String>,
    pub experience: ExperienceRequirement,
    pub salary: Option<SalaryRange>,
    pub raw_text: String,
}
