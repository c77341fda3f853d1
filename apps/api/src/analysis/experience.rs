//! Tenure estimate, experience-fit score and per-entry relevance.

use chrono::{DateTime, Datelike, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::analysis::impact::impact_gap;
use crate::models::analysis::ExperienceAnalysis;
use crate::models::job::ParsedJobDescription;
use crate::models::resume::{ParsedResume, WorkExperience};
use crate::text::keywords::contains_word;

static YEAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(?:19|20)\d{2}\b").unwrap());

/// Months credited to an entry whose dates cannot be read.
pub const ASSUMED_ENTRY_MONTHS: i64 = 24;
/// Upper bound is `min + this` when the posting states none.
const DEFAULT_RANGE_WIDTH: u32 = 5;

/// Entries analysed individually, in résumé order.
const ANALYSED_ENTRIES: usize = 5;
const MATCHED_KEYWORDS_SHOWN: usize = 5;
/// Failing bullets quoted per entry.
const IMPACT_POINTS_SHOWN: usize = 3;

fn year_of(date: &str, now_year: i32) -> Option<i32> {
    let lowered = date.to_lowercase();
    if lowered.contains("present") || lowered.contains("current") {
        return Some(now_year);
    }
    YEAR.find(date)?.as_str().parse().ok()
}

fn entry_months(entry: &WorkExperience, now_year: i32) -> i64 {
    let start = year_of(&entry.start_date, now_year);
    let end = if entry.current {
        Some(now_year)
    } else {
        year_of(&entry.end_date, now_year)
    };
    match (start, end) {
        (Some(start), Some(end)) => (i64::from(end - start) * 12).max(0),
        _ => ASSUMED_ENTRY_MONTHS,
    }
}

/// Whole years of experience across all entries, year granularity.
pub fn total_years(resume: &ParsedResume, now: DateTime<Utc>) -> u32 {
    let months: i64 = resume
        .experience
        .iter()
        .map(|entry| entry_months(entry, now.year()))
        .sum();
    (months as f64 / 12.0).round() as u32
}

/// Fixed bands comparing tenure with the posting's `{min, max}` years.
pub fn experience_score(resume: &ParsedResume, jd: &ParsedJobDescription, now: DateTime<Utc>) -> u8 {
    let min = jd.experience.min;
    if min == 0 {
        return 85;
    }
    let max = jd.experience.max.unwrap_or(min + DEFAULT_RANGE_WIDTH);
    let years = total_years(resume, now);

    if years >= min && years <= max + 2 {
        95
    } else if f64::from(years) >= 0.8 * f64::from(min) {
        80
    } else if f64::from(years) >= 0.5 * f64::from(min) {
        60
    } else {
        40
    }
}

fn relevance(matched: usize) -> u8 {
    match matched {
        n if n > 3 => 85,
        n if n > 1 => 70,
        _ => 50,
    }
}

fn analyse_entry(entry: &WorkExperience, jd_keywords: &[String]) -> ExperienceAnalysis {
    let entry_text = format!("{} {} {}", entry.position, entry.company, entry.description.join(" "));
    let matched: Vec<String> = jd_keywords
        .iter()
        .filter(|kw| contains_word(&entry_text, kw))
        .cloned()
        .collect();

    let suggestions = if matched.len() < 2 {
        vec!["Add more specific details and achievements".to_string()]
    } else {
        Vec::new()
    };

    let mut weak_points = Vec::new();
    if entry.description.len() < 3 {
        weak_points.push("Could use more bullet points describing responsibilities".to_string());
    }
    weak_points.extend(
        entry
            .description
            .iter()
            .filter_map(|bullet| impact_gap(bullet).map(|gap| gap.describe(bullet)))
            .take(IMPACT_POINTS_SHOWN),
    );

    ExperienceAnalysis {
        position: entry.position.clone(),
        company: entry.company.clone(),
        relevance_score: relevance(matched.len()),
        matched_keywords: matched.into_iter().take(MATCHED_KEYWORDS_SHOWN).collect(),
        suggestions,
        weak_points,
    }
}

/// Relevance of the leading experience entries to the posting's keywords.
pub fn experience_analysis(resume: &ParsedResume, jd_keywords: &[String]) -> Vec<ExperienceAnalysis> {
    resume
        .experience
        .iter()
        .take(ANALYSED_ENTRIES)
        .map(|entry| analyse_entry(entry, jd_keywords))
        .collect()
}
