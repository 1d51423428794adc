//! Text helpers used by the frequency analyzer

use std::collections::BTreeMap;

/// Lowercase the text and keep only the letters `a..=z`
pub fn normalize_text(text: &str) -> String {
    text.chars()
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_ascii_lowercase())
        .collect()
}

/// Count occurrences of every character in the text
pub fn count_characters(text: &str) -> BTreeMap<char, usize> {
    let mut counts = BTreeMap::new();
    for c in text.chars() {
        *counts.entry(c).or_insert(0) += 1;
    }
    counts
}

/// `part` as a percentage of `whole`, or 0.0 when `whole` is zero
pub fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    (part as f64 / whole as f64) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_text() {
        assert_eq!(normalize_text("Hello, World! 123"), "helloworld");
        assert_eq!(normalize_text("~~~"), "");
        // Non-ASCII letters are dropped after lowercasing
        assert_eq!(normalize_text("Straße"), "strae");
        // KELVIN SIGN lowercases to an ASCII 'k'
        assert_eq!(normalize_text("\u{212A}"), "k");
    }

    #[test]
    fn test_count_characters() {
        let counts = count_characters("abca");
        assert_eq!(counts.get(&'a'), Some(&2));
        assert_eq!(counts.get(&'b'), Some(&1));
        assert_eq!(counts.get(&'z'), None);
        assert!(count_characters("").is_empty());
    }

    #[test]
    fn test_percentage() {
        assert_eq!(percentage(1, 4), 25.0);
        assert_eq!(percentage(0, 10), 0.0);
        assert_eq!(percentage(3, 0), 0.0);
    }
}
