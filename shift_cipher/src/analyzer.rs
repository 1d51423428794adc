//! Letter-frequency analysis against standard English
//!
//! [`score`] is the L1 (Manhattan) distance between a text's letter
//! percentages and [`ENGLISH_FREQUENCIES`]. Lower means more English-like.

use std::collections::BTreeMap;

use crate::utils;

/// Score returned for texts that contain no letters at all
pub const NO_SIGNAL_PENALTY: f64 = 1000.0;

/// English letter frequencies in percent
pub const ENGLISH_FREQUENCIES: [(char, f64); 26] = [
    ('a', 8.2), ('b', 1.5), ('c', 2.8), ('d', 4.3), ('e', 12.7), ('f', 2.2),
    ('g', 2.0), ('h', 6.1), ('i', 7.0), ('j', 0.15), ('k', 0.77), ('l', 4.0),
    ('m', 2.4), ('n', 6.7), ('o', 7.5), ('p', 1.9), ('q', 0.095), ('r', 6.0),
    ('s', 6.3), ('t', 9.1), ('u', 2.8), ('v', 0.98), ('w', 2.4), ('x', 0.15),
    ('y', 2.0), ('z', 0.074),
];

/// Percentage of each letter `a..=z` among the letters of a text
///
/// Letters that do not occur are absent rather than zero. The distribution is
/// empty when the text had no letters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrequencyDistribution {
    percentages: BTreeMap<char, f64>,
}

impl FrequencyDistribution {
    pub fn get(&self, letter: char) -> Option<f64> {
        self.percentages.get(&letter).copied()
    }

    pub fn len(&self) -> usize {
        self.percentages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.percentages.is_empty()
    }

    /// Letters in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = (char, f64)> + '_ {
        self.percentages.iter().map(|(&c, &p)| (c, p))
    }

    /// Letters ordered by descending percentage, ties alphabetically
    pub fn sorted_desc(&self) -> Vec<(char, f64)> {
        let mut letters: Vec<(char, f64)> = self.iter().collect();
        letters.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
        letters
    }

    /// L1 distance to the English reference table
    pub fn deviation(&self) -> f64 {
        if self.is_empty() {
            return NO_SIGNAL_PENALTY;
        }

        ENGLISH_FREQUENCIES
            .iter()
            .map(|&(letter, expected)| (self.get(letter).unwrap_or(0.0) - expected).abs())
            .sum()
    }
}

/// Computes the percentage frequency of each letter in the text.
///
/// # Arguments
///
/// * `text` - The input text; case and non-letters are ignored.
///
/// # Returns
///
/// The distribution over the letters present, or an empty one.
pub fn frequencies(text: &str) -> FrequencyDistribution {
    let letters = utils::normalize_text(text);
    let counts = utils::count_characters(&letters);
    let total: usize = counts.values().sum();

    if total == 0 {
        return FrequencyDistribution::default();
    }

    let percentages = counts
        .into_iter()
        .map(|(letter, count)| (letter, utils::percentage(count, total)))
        .collect();

    FrequencyDistribution { percentages }
}

/// Scores a text by its deviation from English letter frequencies.
///
/// Returns [`NO_SIGNAL_PENALTY`] when the text contains no letters.
pub fn score(text: &str) -> f64 {
    frequencies(text).deviation()
}
