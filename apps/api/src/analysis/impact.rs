//! Bullet impact checks: does an experience bullet state a measurable result?

use crate::text::keywords::contains_word;

const VAGUE_VERBS: &[&str] = &[
    "improved",
    "enhanced",
    "helped",
    "worked on",
    "assisted",
    "supported",
    "participated",
    "involved",
    "responsible for",
];

const VAGUE_SCALE_WORDS: &[&str] = &[
    "significant",
    "significantly",
    "major",
    "large",
    "huge",
    "massive",
    "substantial",
    "considerable",
    "great",
    "many",
    "numerous",
    "various",
    "several",
];

/// Why a bullet fails the impact check.
#[derive(Debug, Clone, PartialEq)]
pub enum ImpactGap {
    VagueVerb(&'static str),
    VagueScale(&'static str),
    Unquantified,
}

impl ImpactGap {
    /// Weak-point line for the bullet this gap was found in.
    pub fn describe(&self, bullet: &str) -> String {
        let bullet = preview(bullet);
        match self {
            ImpactGap::VagueVerb(verb) => {
                format!("\"{bullet}\" uses '{verb}' without a quantified result")
            }
            ImpactGap::VagueScale(word) => {
                format!("\"{bullet}\" says '{word}' where a number would be stronger")
            }
            ImpactGap::Unquantified => format!("\"{bullet}\" has no measurable outcome"),
        }
    }
}

/// Bullets quoted in weak points are cut to this many characters.
const PREVIEW_CHARS: usize = 60;

fn preview(bullet: &str) -> String {
    let bullet = bullet.trim();
    if bullet.chars().count() <= PREVIEW_CHARS {
        return bullet.to_string();
    }
    let cut: String = bullet.chars().take(PREVIEW_CHARS).collect();
    format!("{}…", cut.trim_end())
}

/// A bullet is quantified when it carries a number, a percentage, a currency
/// amount or a `~N` estimate.
pub fn is_quantified(bullet: &str) -> bool {
    bullet.chars().any(|c| c.is_ascii_digit() || matches!(c, '%' | '$' | '€' | '£'))
}

/// `None` when the bullet passes.
pub fn impact_gap(bullet: &str) -> Option<ImpactGap> {
    if is_quantified(bullet) {
        return None;
    }
    if let Some(verb) = VAGUE_VERBS.iter().find(|v| contains_word(bullet, v)) {
        return Some(ImpactGap::VagueVerb(*verb));
    }
    if let Some(word) = VAGUE_SCALE_WORDS.iter().find(|w| contains_word(bullet, w)) {
        return Some(ImpactGap::VagueScale(*word));
    }
    Some(ImpactGap::Unquantified)
}
