//! Skill-name normalization and the curated technology lists.
//!
//! Every skill-equality comparison in the crate goes through [`normalize_skill`].

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;

use crate::text::keywords::WordPattern;

static SKILL_SYNONYMS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    [
        ("reactjs", "react"),
        ("react.js", "react"),
        ("vuejs", "vue"),
        ("vue.js", "vue"),
        ("angularjs", "angular"),
        ("angular.js", "angular"),
        ("nodejs", "node.js"),
        ("node", "node.js"),
        ("expressjs", "express"),
        ("express.js", "express"),
        ("nextjs", "next.js"),
        ("nuxtjs", "nuxt.js"),
        ("nuxt", "nuxt.js"),
        ("postgresql", "postgres"),
        ("psql", "postgres"),
        ("mongodb", "mongo"),
        ("javascript", "js"),
        ("ecmascript", "js"),
        ("typescript", "ts"),
        ("python3", "python"),
        ("golang", "go"),
        ("k8s", "kubernetes"),
        ("gcp", "google cloud"),
        ("google cloud platform", "google cloud"),
        ("aws", "amazon web services"),
        ("ci/cd", "cicd"),
        ("ci cd", "cicd"),
        ("ml", "machine learning"),
        ("ai", "artificial intelligence"),
        ("dl", "deep learning"),
        ("scikit-learn", "sklearn"),
        ("tailwind css", "tailwind"),
        ("powerbi", "power bi"),
    ]
    .into_iter()
    .collect()
});

/// Canonical lowercase form of a skill name (synonyms folded).
pub fn normalize_skill(name: &str) -> String {
    let lowered = name
        .trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    match SKILL_SYNONYMS.get(lowered.as_str()) {
        Some(canonical) => canonical.to_string(),
        None => lowered,
    }
}

/// True when two names denote the same skill.
pub fn same_skill(a: &str, b: &str) -> bool {
    normalize_skill(a) == normalize_skill(b)
}

/// De-duplicates under [`normalize_skill`] equivalence, keeping the first
/// spelling seen and dropping blanks.
pub fn dedupe_skills<I, S>(skills: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for skill in skills {
        let skill = skill.as_ref().trim();
        if skill.is_empty() {
            continue;
        }
        if seen.insert(normalize_skill(skill)) {
            out.push(skill.to_string());
        }
    }
    out
}

/// Technology names scanned across the whole résumé. The flag marks names
/// that are also ordinary English words and therefore only match with their
/// conventional capitalisation.
const RESUME_TECHNOLOGIES: &[(&str, bool)] = &[
    ("JavaScript", false),
    ("TypeScript", false),
    ("Python", false),
    ("Java", false),
    ("C++", false),
    ("C#", false),
    ("Ruby", false),
    ("Go", true),
    ("Rust", true),
    ("PHP", false),
    ("Swift", true),
    ("Kotlin", false),
    ("Scala", false),
    ("R", true),
    ("MATLAB", false),
    ("React", false),
    ("Vue", false),
    ("Angular", false),
    ("Next.js", false),
    ("Nuxt", false),
    ("Svelte", false),
    ("Node.js", false),
    ("Express", true),
    ("Django", false),
    ("Flask", false),
    ("FastAPI", false),
    ("Spring", true),
    ("Rails", true),
    ("Laravel", false),
    ("AWS", false),
    ("Azure", false),
    ("GCP", false),
    ("Google Cloud", false),
    ("Docker", false),
    ("Kubernetes", false),
    ("K8s", false),
    ("PostgreSQL", false),
    ("MySQL", false),
    ("MongoDB", false),
    ("Redis", false),
    ("Elasticsearch", false),
    ("GraphQL", false),
    ("REST", true),
    ("API", false),
    ("Microservices", false),
    ("CI/CD", false),
    ("Jenkins", false),
    ("GitHub Actions", false),
    ("Git", false),
    ("Linux", false),
    ("Terraform", false),
    ("Ansible", false),
    ("Prometheus", false),
    ("Grafana", false),
    ("TensorFlow", false),
    ("PyTorch", false),
    ("Keras", false),
    ("Scikit-learn", false),
    ("Pandas", false),
    ("NumPy", false),
    ("SQL", false),
    ("NoSQL", false),
    ("HTML", false),
    ("CSS", false),
    ("SASS", false),
    ("SCSS", false),
    ("Tailwind", false),
    ("Figma", false),
    ("Sketch", true),
    ("Adobe XD", false),
    ("Photoshop", false),
    ("Illustrator", false),
    ("Agile", false),
    ("Scrum", false),
    ("Kanban", false),
    ("JIRA", false),
    ("Confluence", false),
    ("Machine Learning", false),
    ("Deep Learning", false),
    ("NLP", false),
    ("Computer Vision", false),
    ("Data Analysis", false),
    ("Data Science", false),
    ("Business Intelligence", false),
    ("Tableau", false),
    ("Power BI", false),
];

/// Technical skills cross-checked against the whole job posting.
const JOB_TECHNOLOGIES: &[(&str, bool)] = &[
    ("JavaScript", false),
    ("TypeScript", false),
    ("Python", false),
    ("Java", false),
    ("C++", false),
    ("C#", false),
    ("Ruby", false),
    ("Go", true),
    ("Rust", true),
    ("PHP", false),
    ("Swift", true),
    ("Kotlin", false),
    ("React", false),
    ("Vue", false),
    ("Angular", false),
    ("Next.js", false),
    ("Node.js", false),
    ("Express", true),
    ("Django", false),
    ("Flask", false),
    ("Spring", true),
    ("Rails", true),
    ("AWS", false),
    ("Azure", false),
    ("GCP", false),
    ("Docker", false),
    ("Kubernetes", false),
    ("PostgreSQL", false),
    ("MySQL", false),
    ("MongoDB", false),
    ("Redis", false),
    ("GraphQL", false),
    ("REST", true),
    ("API", false),
    ("Microservices", false),
    ("CI/CD", false),
    ("Git", false),
    ("Linux", false),
    ("Terraform", false),
    ("TensorFlow", false),
    ("PyTorch", false),
    ("Machine Learning", false),
    ("Data Science", false),
    ("SQL", false),
    ("NoSQL", false),
    ("HTML", false),
    ("CSS", false),
    ("SASS", false),
    ("Tailwind", false),
    ("Figma", false),
    ("Agile", false),
    ("Scrum", false),
];

/// A curated technology name with its compiled whole-word matcher.
pub struct KnownSkill {
    pub name: &'static str,
    pub pattern: WordPattern,
}

fn compile(list: &[(&'static str, bool)]) -> Vec<KnownSkill> {
    list.iter()
        .filter_map(|&(name, case_sensitive)| {
            WordPattern::new(name, case_sensitive).map(|pattern| KnownSkill { name, pattern })
        })
        .collect()
}

pub static RESUME_KNOWN_SKILLS: Lazy<Vec<KnownSkill>> = Lazy::new(|| compile(RESUME_TECHNOLOGIES));

pub static JOB_KNOWN_SKILLS: Lazy<Vec<KnownSkill>> = Lazy::new(|| compile(JOB_TECHNOLOGIES));

/// Spelling variants checked as a last resort when matching a JD skill
/// against résumé text.
pub const SKILL_VARIATIONS: &[(&str, &[&str])] = &[
    ("javascript", &["js", "ecmascript"]),
    ("typescript", &["ts"]),
    ("python", &["py"]),
    ("kubernetes", &["k8s"]),
    ("postgresql", &["postgres", "psql"]),
    ("mongodb", &["mongo"]),
    ("nodejs", &["node.js", "node"]),
    ("reactjs", &["react.js", "react"]),
    ("vuejs", &["vue.js", "vue"]),
    ("angularjs", &["angular.js", "angular"]),
    ("ci/cd", &["cicd", "ci cd", "continuous integration"]),
    ("golang", &["go"]),
    ("gcp", &["google cloud"]),
    ("aws", &["amazon web services"]),
];

/// The variation group (canonical key plus alternates) a skill belongs to.
pub fn variation_group(skill: &str) -> Option<(&'static str, &'static [&'static str])> {
    let lowered = skill.trim().to_lowercase();
    SKILL_VARIATIONS
        .iter()
        .find(|(key, alts)| *key == lowered || alts.contains(&lowered.as_str()))
        .copied()
}
