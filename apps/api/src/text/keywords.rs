//! Keyword extraction, phrase lookup and whole-word counting.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

/// English function words plus the filler words job posts and résumés
/// repeat without carrying signal.
static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
        "from", "as", "is", "was", "are", "were", "been", "be", "have", "has", "had", "do",
        "does", "did", "will", "would", "could", "should", "may", "might", "must", "shall",
        "can", "need", "our", "you", "your", "we", "they", "their", "this", "that", "these",
        "those", "it", "its", "also", "such", "so", "than", "too", "very", "just", "about",
        "into", "over", "after", "before", "between", "under", "again", "then", "here",
        "there", "when", "where", "why", "how", "all", "each", "every", "both", "few", "more",
        "most", "other", "some", "any", "no", "not", "only", "own", "same", "which", "who",
        "whom", "what", "while", "work", "working", "experience", "including", "using", "etc",
        "ability", "able", "i", "me", "my", "he", "she", "his", "her", "if", "because",
        "during", "until", "unless", "though", "although", "now", "nor", "us", "am",
    ]
    .into_iter()
    .collect()
});

/// Short technical terms that survive the `len > 3` cut.
static TECH_KEYWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "javascript", "typescript", "python", "java", "c++", "c#", "ruby", "go", "rust", "php",
        "swift", "kotlin", "scala", "r", "react", "angular", "vue", "node", "nodejs", "node.js",
        "express", "django", "flask", "spring", "rails", "aws", "azure", "gcp", "docker",
        "kubernetes", "k8s", "terraform", "jenkins", "git", "github", "gitlab", "ci/cd",
        "devops", "agile", "scrum", "sql", "mysql", "postgresql", "mongodb", "redis",
        "elasticsearch", "graphql", "rest", "api", "microservices", "serverless", "cloud",
        "ml", "ai", "nlp", "etl", "analytics", "html", "css", "sass", "tailwind", "bootstrap",
        "figma", "ui/ux", "ux", "ui", "qa", "testing", "jest", "cypress", "selenium", "junit",
        "pytest", "linux", "unix", "bash", "powershell", "networking", "security", "bi",
    ]
    .into_iter()
    .collect()
});

/// Multi-word terms recognised verbatim. A fixed dictionary instead of
/// n-gram generation keeps false positives out.
pub const MULTI_WORD_TERMS: &[&str] = &[
    "machine learning",
    "deep learning",
    "data science",
    "data analysis",
    "project management",
    "product management",
    "software development",
    "web development",
    "mobile development",
    "full stack",
    "front end",
    "back end",
    "cloud computing",
    "devops engineer",
    "data engineer",
    "quality assurance",
    "user experience",
    "user interface",
    "ci cd",
    "version control",
    "agile methodology",
    "scrum master",
    "team lead",
    "technical lead",
    "software engineer",
    "senior developer",
    "junior developer",
    "computer vision",
    "natural language processing",
    "distributed systems",
];

/// True for terms on the technical allow-list.
pub fn is_tech_keyword(term: &str) -> bool {
    TECH_KEYWORDS.contains(term)
}

/// Lowercases, replaces everything except ASCII alphanumerics and `+ # . - /`
/// with whitespace, and yields the resulting tokens (trailing sentence dots
/// removed, punctuation-only tokens dropped).
fn tokens(text: &str) -> Vec<String> {
    let normalized: String = text
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '+' | '#' | '.' | '-' | '/') {
                c
            } else {
                ' '
            }
        })
        .collect();

    normalized
        .split_whitespace()
        .map(|t| t.trim_end_matches('.'))
        .filter(|t| t.chars().any(|c| c.is_ascii_alphanumeric()))
        .map(str::to_string)
        .collect()
}

fn is_candidate(token: &str) -> bool {
    if token.len() < 2 || STOP_WORDS.contains(token) {
        return false;
    }
    is_tech_keyword(token) || token.len() > 3
}

/// Ordered, de-duplicated keyword set of a document.
///
/// Tokens shorter than 2 characters and stop words are discarded; of the rest a
/// token is kept if it is a known technical term or longer than 3 characters.
pub fn extract_keywords(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut keywords = Vec::new();
    for token in tokens(text) {
        if is_candidate(&token) && seen.insert(token.clone()) {
            keywords.push(token);
        }
    }
    keywords
}

/// Dictionary multi-word terms present in `text`, in dictionary order.
pub fn extract_phrases(text: &str) -> Vec<String> {
    let normalized = text
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    MULTI_WORD_TERMS
        .iter()
        .filter(|term| normalized.contains(*term))
        .map(|term| term.to_string())
        .collect()
}

/// Keywords ranked by frequency (ties keep first-seen order), truncated to `limit`.
pub fn rank_keywords(text: &str, limit: usize) -> Vec<String> {
    let mut counts: HashMap<String, (usize, usize)> = HashMap::new();
    for (position, token) in tokens(text).into_iter().enumerate() {
        if !is_candidate(&token) {
            continue;
        }
        counts.entry(token).or_insert((0, position)).0 += 1;
    }

    let mut ranked: Vec<(String, usize, usize)> = counts
        .into_iter()
        .map(|(token, (count, first))| (token, count, first))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
    ranked.into_iter().take(limit).map(|(t, _, _)| t).collect()
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// A compiled whole-word matcher for a literal term.
///
/// The term is regex-escaped (terms contain `+`, `.`, `#`), and word boundaries
/// are checked against the neighbouring characters rather than with `\b`, so
/// terms that start or end in punctuation (`c++`, `.net`) still match.
#[derive(Debug, Clone)]
pub struct WordPattern {
    regex: Regex,
}

impl WordPattern {
    pub fn new(term: &str, case_sensitive: bool) -> Option<Self> {
        let term = term.trim();
        if term.is_empty() {
            return None;
        }
        RegexBuilder::new(&regex::escape(term))
            .case_insensitive(!case_sensitive)
            .build()
            .ok()
            .map(|regex| Self { regex })
    }

    fn matches<'t>(&'t self, text: &'t str) -> impl Iterator<Item = (usize, usize)> + 't {
        self.regex.find_iter(text).filter_map(move |m| {
            let before_ok = text[..m.start()]
                .chars()
                .next_back()
                .map_or(true, |c| !is_word_char(c));
            let after_ok = text[m.end()..]
                .chars()
                .next()
                .map_or(true, |c| !is_word_char(c));
            (before_ok && after_ok).then_some((m.start(), m.end()))
        })
    }

    pub fn count(&self, text: &str) -> usize {
        self.matches(text).count()
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.matches(text).next().is_some()
    }

    /// Byte range of the first whole-word occurrence.
    pub fn find(&self, text: &str) -> Option<(usize, usize)> {
        self.matches(text).next()
    }
}

/// Whole-word, case-insensitive occurrence count of `keyword` in `text`.
pub fn count_keyword(text: &str, keyword: &str) -> usize {
    WordPattern::new(keyword, false)
        .map(|p| p.count(text))
        .unwrap_or(0)
}

/// Whole-word, case-insensitive containment.
pub fn contains_word(text: &str, term: &str) -> bool {
    WordPattern::new(term, false)
        .map(|p| p.is_match(text))
        .unwrap_or(false)
}
