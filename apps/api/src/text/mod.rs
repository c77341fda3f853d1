//! Text Normalizer — pure helpers shared by both structurers and the scorer.
//!
//! Nothing in here allocates global state at call time; every table is an
//! immutable static built once on first use.

pub mod keywords;
pub mod rules;
pub mod sections;
pub mod skills;

/// Glyphs that open a bullet line in extracted résumé / job-posting text.
pub const BULLET_GLYPHS: &[char] = &['•', '▪', '►', '○', '●', '‣', '◦', '·', '-', '*', '–', '—'];

/// True when the (trimmed) line starts with a bullet glyph.
pub fn is_bullet(line: &str) -> bool {
    line.trim_start().starts_with(BULLET_GLYPHS)
}

/// Strips a single leading bullet glyph and the whitespace after it.
pub fn strip_bullet(line: &str) -> &str {
    let trimmed = line.trim();
    match trimmed.strip_prefix(BULLET_GLYPHS) {
        Some(rest) => rest.trim_start(),
        None => trimmed,
    }
}

/// Non-empty trimmed lines, in source order.
pub fn non_empty_lines(text: &str) -> Vec<&str> {
    text.lines().map(str::trim).filter(|l| !l.is_empty()).collect()
}

/// Largest char boundary `<= index`.
pub fn floor_boundary(text: &str, mut index: usize) -> usize {
    index = index.min(text.len());
    while !text.is_char_boundary(index) {
        index -= 1;
    }
    index
}

/// Smallest char boundary `>= index`.
pub fn ceil_boundary(text: &str, mut index: usize) -> usize {
    index = index.min(text.len());
    while !text.is_char_boundary(index) {
        index += 1;
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_bullet_variants() {
        assert_eq!(strip_bullet("• Built ETL pipelines"), "Built ETL pipelines");
        assert_eq!(strip_bullet("  - SQL"), "SQL");
        assert_eq!(strip_bullet("▪Kafka"), "Kafka");
        assert_eq!(strip_bullet("Plain line"), "Plain line");
    }

    #[test]
    fn test_is_bullet() {
        assert!(is_bullet("● Led a team"));
        assert!(is_bullet("* item"));
        assert!(!is_bullet("Acme Corp"));
    }

    #[test]
    fn test_non_empty_lines_trims_and_skips_blanks() {
        let lines = non_empty_lines("  a \n\n   \n b\n");
        assert_eq!(lines, vec!["a", "b"]);
    }

    #[test]
    fn test_boundaries_respect_multibyte_chars() {
        let text = "résumé";
        // 'é' is two bytes starting at index 1
        assert_eq!(floor_boundary(text, 2), 1);
        assert_eq!(ceil_boundary(text, 2), 3);
        assert_eq!(floor_boundary(text, 100), text.len());
    }
}
