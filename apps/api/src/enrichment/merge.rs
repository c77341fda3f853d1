//! Explicit overlay merge for structured records.
//!
//! Per-field rule: the overlay value wins only when it carries information.
//! Blank strings, `None` and empty lists never replace a base value. Identity
//! and provenance (`raw_text`, file name/type) always come from the base, and
//! the merged record gets a fresh id.

use crate::models::job::{ExperienceRequirement, JobRequirement, ParsedJobDescription, SalaryRange};
use crate::models::new_id;
use crate::models::resume::{
    Certification, ContactInfo, Education, ParsedResume, Project, WorkExperience,
};
use crate::text::skills::{dedupe_skills, normalize_skill};

/// Produces a new record from `self` with `overlay` applied on top.
pub trait Merge {
    fn merge(&self, overlay: &Self) -> Self;
}

fn pick_string(base: &str, overlay: &str) -> String {
    if overlay.trim().is_empty() {
        base.to_string()
    } else {
        overlay.trim().to_string()
    }
}

fn pick_opt_string(base: &Option<String>, overlay: &Option<String>) -> Option<String> {
    match overlay {
        Some(value) if !value.trim().is_empty() => Some(value.trim().to_string()),
        _ => base.clone(),
    }
}

fn pick_vec<T: Clone>(base: &[T], overlay: &[T]) -> Vec<T> {
    if overlay.is_empty() {
        base.to_vec()
    } else {
        overlay.to_vec()
    }
}

/// Overlay entries usually arrive without ids.
trait HasId {
    fn id_mut(&mut self) -> &mut String;
}

macro_rules! has_id {
    ($($ty:ty),*) => {
        $(impl HasId for $ty {
            fn id_mut(&mut self) -> &mut String {
                &mut self.id
            }
        })*
    };
}

has_id!(WorkExperience, Education, Project, Certification);

fn pick_entries<T: Clone + HasId>(base: &[T], overlay: &[T]) -> Vec<T> {
    let mut entries = pick_vec(base, overlay);
    for entry in &mut entries {
        if entry.id_mut().is_empty() {
            *entry.id_mut() = new_id();
        }
    }
    entries
}

impl Merge for ContactInfo {
    fn merge(&self, overlay: &Self) -> Self {
        Self {
            name: pick_string(&self.name, &overlay.name),
            email: pick_string(&self.email, &overlay.email),
            phone: pick_string(&self.phone, &overlay.phone),
            location: pick_opt_string(&self.location, &overlay.location),
            linkedin: pick_opt_string(&self.linkedin, &overlay.linkedin),
            github: pick_opt_string(&self.github, &overlay.github),
            portfolio: pick_opt_string(&self.portfolio, &overlay.portfolio),
        }
    }
}

impl Merge for ParsedResume {
    fn merge(&self, overlay: &Self) -> Self {
        let languages = match &overlay.languages {
            Some(list) if !list.is_empty() => Some(list.clone()),
            _ => self.languages.clone(),
        };
        Self {
            id: new_id(),
            contact: self.contact.merge(&overlay.contact),
            summary: pick_opt_string(&self.summary, &overlay.summary),
            skills: dedupe_skills(pick_vec(&self.skills, &overlay.skills)),
            experience: pick_entries(&self.experience, &overlay.experience),
            education: pick_entries(&self.education, &overlay.education),
            projects: pick_entries(&self.projects, &overlay.projects),
            certifications: pick_entries(&self.certifications, &overlay.certifications),
            languages,
            raw_text: self.raw_text.clone(),
            file_name: self.file_name.clone(),
            file_type: self.file_type,
        }
    }
}

impl Merge for ExperienceRequirement {
    fn merge(&self, overlay: &Self) -> Self {
        if overlay.min > 0 || overlay.max.is_some() {
            overlay.clone()
        } else {
            self.clone()
        }
    }
}

/// Requirement lists are de-duplicated by normalized skill name, keeping the
/// first entry seen.
fn dedupe_requirements(list: Vec<JobRequirement>) -> Vec<JobRequirement> {
    let mut seen = std::collections::HashSet::new();
    list.into_iter()
        .filter(|r| !r.skill.trim().is_empty() && seen.insert(normalize_skill(&r.skill)))
        .collect()
}

impl Merge for ParsedJobDescription {
    fn merge(&self, overlay: &Self) -> Self {
        let salary = match &overlay.salary {
            Some(SalaryRange { min, max, .. }) if min.is_some() || max.is_some() => overlay.salary.clone(),
            _ => self.salary.clone(),
        };
        Self {
            id: new_id(),
            title: pick_string(&self.title, &overlay.title),
            company: pick_opt_string(&self.company, &overlay.company),
            location: pick_opt_string(&self.location, &overlay.location),
            employment_type: overlay.employment_type.or(self.employment_type),
            required_skills: dedupe_requirements(pick_vec(&self.required_skills, &overlay.required_skills)),
            preferred_skills: dedupe_requirements(pick_vec(&self.preferred_skills, &overlay.preferred_skills)),
            responsibilities: pick_vec(&self.responsibilities, &overlay.responsibilities),
            qualifications: pick_vec(&self.qualifications, &overlay.qualifications),
            keywords: pick_vec(&self.keywords, &overlay.keywords),
            experience: self.experience.merge(&overlay.experience),
            salary,
            raw_text: self.raw_text.clone(),
        }
    }
}
