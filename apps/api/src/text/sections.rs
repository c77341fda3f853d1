//! Heading-synonym scan: locate a section by any of its conventional titles
//! and capture its body up to the next recognised heading.
//!
//! Synonyms are tried in priority order; for each, only the first heading line
//! in the document is considered (a bare heading line is preferred over a
//! labelled one such as `Languages: English`). A repeated heading is never
//! merged with the first occurrence.

use regex::Regex;
use tracing::debug;

use crate::text::is_bullet;

/// Lines with more words than this before a colon are prose, not headings.
const MAX_HEADING_WORDS: usize = 6;

/// A heading line reduced to a comparable key, plus any content written on
/// the same line after a colon (`Skills: Rust, Go`).
#[derive(Debug, Clone, PartialEq)]
pub struct HeadingKey<'a> {
    pub key: String,
    pub inline: Option<&'a str>,
}

/// Reduces a line to its heading key, or `None` when it cannot be a heading.
pub fn heading_key(line: &str) -> Option<HeadingKey<'_>> {
    let trimmed = line.trim();
    if trimmed.is_empty() || is_bullet(trimmed) {
        return None;
    }
    let stripped = trimmed
        .trim_matches(|c: char| matches!(c, '#' | '*' | '_' | '='))
        .trim();

    let (head, inline) = match stripped.find(':') {
        Some(idx) => {
            let rest = stripped[idx + 1..].trim();
            (&stripped[..idx], (!rest.is_empty()).then_some(rest))
        }
        None => (stripped, None),
    };

    let key = head
        .to_lowercase()
        .replace('’', "'")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let key = key.trim_end_matches(['.', '?', '!']).to_string();

    if key.is_empty() || key.split(' ').count() > MAX_HEADING_WORDS {
        return None;
    }
    Some(HeadingKey { key, inline })
}

/// The body of a located section.
#[derive(Debug, Clone, PartialEq)]
pub struct Section<'a> {
    pub heading: &'a str,
    pub lines: Vec<&'a str>,
}

impl<'a> Section<'a> {
    /// Trimmed, non-empty body lines.
    pub fn content_lines(&self) -> Vec<&'a str> {
        self.lines
            .iter()
            .map(|l| l.trim())
            .filter(|l| !l.is_empty())
            .collect()
    }

    /// Body joined back with newlines and trimmed.
    pub fn text(&self) -> String {
        self.lines.join("\n").trim().to_string()
    }
}

/// A named section with its heading synonyms and the headings that end it.
pub struct SectionRule {
    name: &'static str,
    headings: Vec<Regex>,
    stop: Regex,
}

impl SectionRule {
    /// `headings` are matched against the whole heading key; `stop` is a
    /// complete pattern matched against the heading key of each body line.
    pub fn new(name: &'static str, headings: &[&str], stop: &str) -> Self {
        let headings = headings
            .iter()
            .map(|h| Regex::new(&format!("^(?:{h})$")).expect("valid section heading pattern"))
            .collect();
        let stop = Regex::new(stop).expect("valid section stop pattern");
        Self { name, headings, stop }
    }

    /// Labelled lines (`Languages: Python, Go`) are content, not boundaries.
    fn is_stop(&self, line: &str) -> bool {
        heading_key(line).is_some_and(|k| k.inline.is_none() && self.stop.is_match(&k.key))
    }

    fn locate<'a>(&self, heading: &Regex, lines: &[&'a str]) -> Option<(usize, Option<&'a str>)> {
        let mut labelled = None;
        for (idx, line) in lines.iter().enumerate() {
            let Some(k) = heading_key(*line).filter(|k| heading.is_match(&k.key)) else {
                continue;
            };
            match k.inline {
                None => return Some((idx, None)),
                Some(inline) if labelled.is_none() => labelled = Some((idx, Some(inline))),
                Some(_) => {}
            }
        }
        labelled
    }

    /// Finds the section in `text`.
    pub fn find<'a>(&self, text: &'a str) -> Option<Section<'a>> {
        let lines: Vec<&'a str> = text.lines().collect();

        for heading in &self.headings {
            let Some((idx, inline)) = self.locate(heading, &lines) else {
                continue;
            };

            let mut body: Vec<&'a str> = inline.into_iter().collect();
            body.extend(
                lines[idx + 1..]
                    .iter()
                    .take_while(|line| !self.is_stop(line))
                    .copied(),
            );

            debug!(
                section = self.name,
                heading = lines[idx].trim(),
                lines = body.len(),
                "section located"
            );
            return Some(Section {
                heading: lines[idx].trim(),
                lines: body,
            });
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills_rule() -> SectionRule {
        SectionRule::new(
            "skills",
            &["(?:technical )?skills", "technologies"],
            r"^(?:experience|education|projects|skills)$",
        )
    }

    #[test]
    fn test_heading_key_normalizes() {
        let k = heading_key("  ## TECHNICAL   SKILLS:  ").unwrap();
        assert_eq!(k.key, "technical skills");
        assert_eq!(k.inline, None);
    }

    #[test]
    fn test_heading_key_captures_inline_content() {
        let k = heading_key("Skills: Rust, Go").unwrap();
        assert_eq!(k.key, "skills");
        assert_eq!(k.inline, Some("Rust, Go"));
    }

    #[test]
    fn test_heading_key_rejects_bullets_and_prose() {
        assert!(heading_key("- Skills").is_none());
        assert!(heading_key("I have used many different skills across my career so far").is_none());
        assert!(heading_key("   ").is_none());
    }

    #[test]
    fn test_heading_key_normalizes_curly_apostrophe() {
        let k = heading_key("What You’ll Need:").unwrap();
        assert_eq!(k.key, "what you'll need");
    }

    #[test]
    fn test_find_captures_until_next_heading() {
        let text = "Jane\nSKILLS\nRust, Go\nSQL\n\nEXPERIENCE\nAcme";
        let section = skills_rule().find(text).unwrap();
        assert_eq!(section.heading, "SKILLS");
        assert_eq!(section.content_lines(), vec!["Rust, Go", "SQL"]);
    }

    #[test]
    fn test_find_includes_inline_content() {
        let text = "Technical Skills: Rust, Go\nKafka\nEducation\nMIT";
        let section = skills_rule().find(text).unwrap();
        assert_eq!(section.content_lines(), vec!["Rust, Go", "Kafka"]);
    }

    #[test]
    fn test_labelled_lines_do_not_end_section() {
        let text = "Skills\nLanguages: Rust, Go\nCloud: AWS\nExperience\nAcme";
        let rule = SectionRule::new("skills", &["skills"], r"^(?:experience|languages)$");
        let section = rule.find(text).unwrap();
        assert_eq!(section.content_lines(), vec!["Languages: Rust, Go", "Cloud: AWS"]);
    }

    #[test]
    fn test_bare_heading_preferred_over_labelled_line() {
        let text = "Skills\nLanguages: Rust\nLanguages\nEnglish, Spanish";
        let rule = SectionRule::new("languages", &["languages"], r"^(?:skills)$");
        let section = rule.find(text).unwrap();
        assert_eq!(section.content_lines(), vec!["English, Spanish"]);
    }

    #[test]
    fn test_find_runs_to_end_of_document() {
        let section = skills_rule().find("Skills\nRust\nGo").unwrap();
        assert_eq!(section.text(), "Rust\nGo");
    }

    #[test]
    fn test_repeated_heading_is_not_merged() {
        let text = "Skills\nRust\nSkills\nGo";
        let section = skills_rule().find(text).unwrap();
        assert_eq!(section.content_lines(), vec!["Rust"]);
    }

    #[test]
    fn test_synonym_priority_beats_document_order() {
        let text = "Technologies\nKafka\nExperience\nX\nSkills\nRust";
        let section = skills_rule().find(text).unwrap();
        assert_eq!(section.heading, "Skills");
    }

    #[test]
    fn test_find_missing_section_is_none() {
        assert!(skills_rule().find("Nothing to see").is_none());
    }
}
