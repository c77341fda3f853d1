//! Summary, education, projects, certifications and languages.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::new_id;
use crate::models::resume::{Certification, Education, Project};
use crate::resume::experience::{parse_date_span, strip_dates, SINGLE_DATE};
use crate::resume::SECTION_STOP;
use crate::text::rules::{capture, first_match, ExtractionRule};
use crate::text::sections::SectionRule;
use crate::text::{is_bullet, strip_bullet};

fn section(name: &'static str, headings: &[&str]) -> SectionRule {
    SectionRule::new(name, headings, SECTION_STOP)
}

static SUMMARY: Lazy<SectionRule> =
    Lazy::new(|| section("summary", &["(?:professional |executive |career )?summary"]));
static OBJECTIVE: Lazy<SectionRule> =
    Lazy::new(|| section("objective", &["(?:career |professional )?objective"]));
static PROFILE: Lazy<SectionRule> = Lazy::new(|| section("profile", &["(?:professional )?profile"]));
static ABOUT_ME: Lazy<SectionRule> = Lazy::new(|| section("about_me", &["about me"]));

static EDUCATION: Lazy<SectionRule> = Lazy::new(|| {
    section(
        "education",
        &[r"education(?: (?:&|and) \w+)?", "academic background|academics"],
    )
});
static PROJECTS: Lazy<SectionRule> = Lazy::new(|| {
    section("projects", &["(?:personal |selected |key |academic |side )?projects?"])
});
static CERTIFICATIONS: Lazy<SectionRule> = Lazy::new(|| {
    section(
        "certifications",
        &[r"(?:licenses? (?:&|and) )?certifications?(?: (?:&|and) licenses?)?", "licenses?"],
    )
});
static LANGUAGES: Lazy<SectionRule> =
    Lazy::new(|| section("languages", &["(?:spoken |foreign )?languages?"]));

// ────────────────────────────────────────────────────────────────────────────
// Summary
// ────────────────────────────────────────────────────────────────────────────

/// Shorter or longer spans are mis-detected boundaries.
const SUMMARY_LEN: std::ops::RangeInclusive<usize> = 50..=2000;

fn summary_from(rule: &SectionRule, text: &str) -> Option<String> {
    let body = rule.find(text)?.text();
    SUMMARY_LEN.contains(&body.chars().count()).then_some(body)
}

fn summary_section(text: &str) -> Option<String> {
    summary_from(&SUMMARY, text)
}

fn objective_section(text: &str) -> Option<String> {
    summary_from(&OBJECTIVE, text)
}

fn profile_section(text: &str) -> Option<String> {
    summary_from(&PROFILE, text)
}

fn about_me_section(text: &str) -> Option<String> {
    summary_from(&ABOUT_ME, text)
}

static SUMMARY_RULES: &[ExtractionRule<String>] = &[
    ExtractionRule::new("summary", summary_section),
    ExtractionRule::new("objective", objective_section),
    ExtractionRule::new("profile", profile_section),
    ExtractionRule::new("about_me", about_me_section),
];

pub fn extract_summary(text: &str) -> Option<String> {
    first_match(SUMMARY_RULES, text)
}

// ────────────────────────────────────────────────────────────────────────────
// Education
// ────────────────────────────────────────────────────────────────────────────

static INSTITUTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:university|college|institute|school|academy|polytechnic)\b").unwrap()
});

static DEGREE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:(?:bachelor|master|associate)(?:'s)?(?: of (?:arts|science|engineering|business administration|fine arts|technology|laws|education|applied science))?|doctor(?:ate)?(?: of philosophy)?|ph\.?\s?d\.?|mba|bsc|msc|b\.?tech|m\.?tech|[bm]\.\s?[sae]\.)",
    )
    .unwrap()
});

static GPA: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)GPA[:\s]*([0-9.]+)").unwrap());

/// Degree plus field of study from a line such as `B.S. in Computer Science, 2017`.
fn split_degree(line: &str) -> Option<(String, String)> {
    let m = DEGREE.find(line)?;
    let degree = m.as_str().trim().to_string();

    let rest = strip_dates(&GPA.replace_all(&line[m.end()..], ""));
    let rest = rest.trim_start_matches(|c: char| c.is_whitespace() || matches!(c, ',' | '-' | '–' | ':'));
    let rest = rest
        .strip_prefix("in ")
        .or_else(|| rest.strip_prefix("In "))
        .unwrap_or(rest);
    let field = rest
        .split(|c: char| matches!(c, ',' | '|' | '(' | ';'))
        .next()
        .unwrap_or_default()
        .trim()
        .trim_end_matches(['.', '-'])
        .trim()
        .to_string();
    Some((degree, field))
}

/// The part of a line naming the institution, without dates, GPA or degree.
fn institution_name(line: &str) -> Option<String> {
    let without_gpa = GPA.replace_all(line, "");
    let cleaned = strip_dates(&without_gpa);
    let name = match DEGREE.find(&cleaned) {
        None => cleaned,
        Some(m) if m.start() > 0 => cleaned[..m.start()]
            .trim_end_matches(|c: char| c.is_whitespace() || matches!(c, ',' | '-' | '–' | '|'))
            .to_string(),
        Some(_) => cleaned
            .split([',', '|'])
            .map(str::trim)
            .find(|part| INSTITUTION.is_match(part))?
            .to_string(),
    };
    name.chars().any(char::is_alphabetic).then_some(name)
}

pub fn extract_education(text: &str) -> Vec<Education> {
    let Some(section) = EDUCATION.find(text) else {
        return Vec::new();
    };

    let mut entries: Vec<Education> = Vec::new();
    let mut current = Education::default();
    let mut lines_in_entry = 0usize;

    for raw in section.content_lines() {
        let line = strip_bullet(raw);
        let is_institution = INSTITUTION.is_match(line);
        let degree = split_degree(line);

        let opens_new = (is_institution && !current.institution.is_empty())
            || (degree.is_some() && !current.degree.is_empty());
        if opens_new {
            entries.push(std::mem::take(&mut current));
            lines_in_entry = 0;
        }

        // an unlabelled first line names the school
        if current.institution.is_empty() && (is_institution || lines_in_entry == 0) {
            if let Some(name) = institution_name(line) {
                current.institution = name;
            }
        }
        if let Some((degree, field)) = degree {
            if current.degree.is_empty() {
                current.degree = degree;
                current.field = field;
            }
        }
        if current.gpa.is_none() {
            current.gpa = capture(&GPA, line, 1).map(|g| g.trim_end_matches('.').to_string());
        }
        if current.end_date.is_empty() {
            if let Some(span) = parse_date_span(line) {
                current.start_date = span.start;
                current.end_date = span.end;
            } else if let Some(m) = SINGLE_DATE.find(line) {
                current.end_date = m.as_str().trim_matches(['(', ')']).to_string();
            }
        }

        lines_in_entry += 1;
    }
    entries.push(current);

    entries.retain(|e| !e.institution.is_empty() || !e.degree.is_empty());
    for entry in &mut entries {
        entry.id = new_id();
    }
    entries
}

// ────────────────────────────────────────────────────────────────────────────
// Projects
// ────────────────────────────────────────────────────────────────────────────

static TECH_LIST: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:technologies|tech stack|built with|using|stack)\b\s*:?\s*([^\n;()]+)").unwrap()
});

static GITHUB_REPO: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)github\.com/[\w-]+/[\w.-]*[\w-]").unwrap());

static URL: Lazy<Regex> = Lazy::new(|| Regex::new(r"https?://[^\s)]+").unwrap());

static NAME_SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+[-–—|]\s+|:\s+").unwrap());

fn split_technologies(list: &str) -> Vec<String> {
    list.split([',', '/', '|'])
        .flat_map(|part| part.split(" and "))
        .map(|t| t.trim().trim_end_matches('.').trim())
        .filter(|t| !t.is_empty() && t.len() <= 40 && t.split_whitespace().count() <= 3)
        .map(str::to_string)
        .collect()
}

fn parse_project(group: &[&str]) -> Option<Project> {
    let first = strip_bullet(group.first()?);
    let (name, tagline) = match NAME_SEPARATOR.find(first) {
        Some(m) => (first[..m.start()].trim(), Some(first[m.end()..].trim())),
        None => (first, None),
    };
    if name.chars().count() < 2 {
        return None;
    }

    let body = group.join("\n");
    let technologies = TECH_LIST
        .captures(&body)
        .and_then(|caps| caps.get(1))
        .map(|m| split_technologies(m.as_str()))
        .unwrap_or_default();
    let github = GITHUB_REPO.find(&body).map(|m| m.as_str().to_string());
    let url = URL
        .find_iter(&body)
        .map(|m| m.as_str().trim_end_matches(['.', ',']))
        .find(|u| !u.contains("github.com"))
        .map(str::to_string);

    let description = tagline
        .into_iter()
        .chain(group[1..].iter().map(|l| strip_bullet(l)))
        .filter(|l| l.chars().count() > 10)
        .collect::<Vec<_>>()
        .join(" ");

    Some(Project {
        id: new_id(),
        name: name.to_string(),
        description,
        technologies,
        url,
        github,
    })
}

/// A project opens at each non-bullet line; a section made only of bullets
/// is one project per bullet.
pub fn extract_projects(text: &str) -> Vec<Project> {
    let Some(section) = PROJECTS.find(text) else {
        return Vec::new();
    };
    let lines = section.content_lines();

    let groups: Vec<Vec<&str>> = if lines.iter().all(|l| is_bullet(l)) {
        lines.iter().map(|l| vec![*l]).collect()
    } else {
        let mut groups: Vec<Vec<&str>> = Vec::new();
        for line in lines {
            match groups.last_mut() {
                Some(group) if is_bullet(line) => group.push(line),
                _ => groups.push(vec![line]),
            }
        }
        groups
    };

    groups.iter().filter_map(|g| parse_project(g)).collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Certifications
// ────────────────────────────────────────────────────────────────────────────

static PAREN_ISSUER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(([^)]+)\)").unwrap());
static DASH_ISSUER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s[-–—|]\s*([^,\n]+)$").unwrap());
static BY_ISSUER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bby\s+([^,\n]+)$").unwrap());
static EMPTY_PARENS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(\s*\)").unwrap());

fn parse_certification(line: &str) -> Option<Certification> {
    let line = strip_bullet(line);
    if line.chars().count() < 5 {
        return None;
    }

    let date = SINGLE_DATE
        .find(line)
        .map(|m| m.as_str().trim_matches(['(', ')']).to_string())
        .unwrap_or_default();
    let without_date = SINGLE_DATE.replace_all(line, "");
    let mut rest = EMPTY_PARENS
        .replace_all(&without_date, "")
        .trim_end_matches(|c: char| c.is_whitespace() || matches!(c, ',' | ';' | '-' | '–' | '—' | '|'))
        .trim()
        .to_string();

    let mut issuer = String::new();
    for re in [&*PAREN_ISSUER, &*DASH_ISSUER, &*BY_ISSUER] {
        if let Some(caps) = re.captures(&rest) {
            issuer = caps.get(1).map_or("", |m| m.as_str()).trim().to_string();
            let whole = caps.get(0).map_or(0..0, |m| m.range());
            rest.replace_range(whole, "");
            break;
        }
    }

    let name = rest
        .trim_matches(|c: char| c.is_whitespace() || matches!(c, '-' | '–' | '—' | ':' | ',' | '|'))
        .to_string();
    if name.is_empty() {
        return None;
    }
    Some(Certification {
        id: new_id(),
        name,
        issuer,
        date,
    })
}

pub fn extract_certifications(text: &str) -> Vec<Certification> {
    CERTIFICATIONS
        .find(text)
        .map(|section| {
            section
                .content_lines()
                .into_iter()
                .filter_map(parse_certification)
                .collect()
        })
        .unwrap_or_default()
}

// ────────────────────────────────────────────────────────────────────────────
// Languages
// ────────────────────────────────────────────────────────────────────────────

/// Spoken languages; `None` when the section is absent or yields nothing.
pub fn extract_languages(text: &str) -> Option<Vec<String>> {
    let section = LANGUAGES.find(text)?;
    let languages: Vec<String> = section
        .text()
        .replace(['•', '▪', '►', '○', '●', '‣', '*', '|', ';'], ",")
        .split([',', '\n'])
        .map(|l| strip_bullet(l).trim().to_string())
        .filter(|l| (2..30).contains(&l.chars().count()))
        .collect();
    (!languages.is_empty()).then_some(languages)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_accepts_reasonable_length() {
        let text = "Summary\nData engineer focused on streaming systems, data quality and platform reliability.\nExperience\nAcme";
        let summary = extract_summary(text).unwrap();
        assert!(summary.starts_with("Data engineer"));
        assert!(!summary.contains("Acme"));
    }

    #[test]
    fn test_summary_rejects_short_span_and_falls_through() {
        let text = "Summary\nToo short.\nObjective\nSeeking a backend role where I can apply eight years of distributed systems work.";
        let summary = extract_summary(text).unwrap();
        assert!(summary.starts_with("Seeking"));
    }

    #[test]
    fn test_summary_rejects_overlong_span() {
        let text = format!("Summary\n{}\nExperience\nAcme", "Builds reliable data systems. ".repeat(80));
        assert_eq!(extract_summary(&text), None);
    }

    #[test]
    fn test_summary_absent() {
        assert_eq!(extract_summary("Skills\nRust"), None);
    }

    #[test]
    fn test_split_degree_variants() {
        assert_eq!(
            split_degree("Bachelor of Science in Mechanical Engineering, 2012"),
            Some(("Bachelor of Science".into(), "Mechanical Engineering".into()))
        );
        assert_eq!(
            split_degree("M.S. Computer Science (2019)"),
            Some(("M.S.".into(), "Computer Science".into()))
        );
        assert_eq!(split_degree("MBA"), Some(("MBA".into(), String::new())));
        assert_eq!(split_degree("Harvard University"), None);
    }

    #[test]
    fn test_extract_education_multiple_schools() {
        let text = "\
Education
Stanford University
M.S. in Statistics, 2018 - 2020
Ohio State University
B.A. in Economics | GPA: 3.6 | 2016
Skills
Python";
        let entries = extract_education(text);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].institution, "Stanford University");
        assert_eq!(entries[0].degree, "M.S.");
        assert_eq!(entries[0].field, "Statistics");
        assert_eq!(entries[0].start_date, "2018");
        assert_eq!(entries[0].end_date, "2020");
        assert_eq!(entries[1].institution, "Ohio State University");
        assert_eq!(entries[1].field, "Economics");
        assert_eq!(entries[1].gpa.as_deref(), Some("3.6"));
        assert_eq!(entries[1].start_date, "");
        assert_eq!(entries[1].end_date, "2016");
    }

    #[test]
    fn test_education_degree_and_school_on_one_line() {
        let entries = extract_education("Education\nMIT - Bachelor of Science in Physics 2014");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].institution, "MIT");
        assert_eq!(entries[0].degree, "Bachelor of Science");
        assert_eq!(entries[0].field, "Physics");
    }

    #[test]
    fn test_extract_projects_groups_and_links() {
        let text = "\
Projects
Tracker: habit tracking app
• Tech stack: Flutter, Firebase
• Live at https://tracker.app
Parsely
• Recipe scraper hosted on github.com/ann/parsely";
        let projects = extract_projects(text);
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].name, "Tracker");
        assert_eq!(projects[0].technologies, vec!["Flutter", "Firebase"]);
        assert_eq!(projects[0].url.as_deref(), Some("https://tracker.app"));
        assert!(projects[0].description.contains("habit tracking app"));
        assert_eq!(projects[1].github.as_deref(), Some("github.com/ann/parsely"));
        assert_eq!(projects[1].url, None);
    }

    #[test]
    fn test_bullet_only_projects() {
        let projects = extract_projects("Projects\n• Chess engine in Rust\n• Static site generator");
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[1].name, "Static site generator");
    }

    #[test]
    fn test_certification_issuer_forms() {
        let c = parse_certification("• CKA (CNCF) 2021").unwrap();
        assert_eq!((c.name.as_str(), c.issuer.as_str(), c.date.as_str()), ("CKA", "CNCF", "2021"));

        let c = parse_certification("Professional Scrum Master - Scrum.org, Mar 2020").unwrap();
        assert_eq!(c.name, "Professional Scrum Master");
        assert_eq!(c.issuer, "Scrum.org");
        assert_eq!(c.date, "Mar 2020");

        let c = parse_certification("Google Data Analytics Certificate by Coursera").unwrap();
        assert_eq!(c.name, "Google Data Analytics Certificate");
        assert_eq!(c.issuer, "Coursera");
    }

    #[test]
    fn test_certification_without_issuer() {
        let certs = extract_certifications("Certifications\nCISSP\nPMP 2018\nCPA");
        assert_eq!(certs.len(), 2);
        assert_eq!(certs[0].name, "CISSP");
        assert_eq!(certs[0].issuer, "");
        assert_eq!(certs[1].name, "PMP");
        assert_eq!(certs[1].date, "2018");
    }

    #[test]
    fn test_extract_languages() {
        let langs = extract_languages("Languages\nEnglish (Native) • French\nGerman").unwrap();
        assert_eq!(langs, vec!["English (Native)", "French", "German"]);
        assert_eq!(extract_languages("Skills\nRust"), None);
    }
}
