//! Human-readable reports shared by the subcommands and the menu

use shift_cipher::{analyzer, BreakResult};

/// Longest plaintext preview shown for runner-up candidates
const PREVIEW_CHARS: usize = 40;

/// Report for a break attempt; `ranked` is best-first
pub fn break_report(ranked: &[BreakResult]) -> String {
    let Some(best) = ranked.first() else {
        return String::from("No candidates were evaluated.\n");
    };

    let mut out = format!(
        "--- Cipher Broken ---\n\
         Best Key Found: {}\n\
         Recovered Plaintext: {}\n\
         Confidence Score: {:.2} (lower is better)\n",
        best.key, best.plaintext, best.score
    );

    if ranked.len() > 1 {
        out.push_str("\nRunner-up candidates:\n");
        for candidate in &ranked[1..] {
            let preview: String = candidate.plaintext.chars().take(PREVIEW_CHARS).collect();
            out.push_str(&format!(
                "  key {:>2}  score {:>7.2}  {}\n",
                candidate.key, candidate.score, preview
            ));
        }
    }

    out
}

/// Letter table sorted by descending percentage, then the similarity score
pub fn analysis_report(text: &str) -> String {
    let distribution = analyzer::frequencies(text);
    let mut out = String::from("--- Frequency Analysis ---\nLetter % frequencies (sorted):\n");

    if distribution.is_empty() {
        out.push_str("  No alphabetic characters found.\n");
    }
    for (letter, percent) in distribution.sorted_desc() {
        out.push_str(&format!("  {}: {:.2}\n", letter, percent));
    }

    out.push_str(&format!(
        "\nEnglish similarity score: {:.2} (lower = more like English)\n",
        distribution.deviation()
    ));
    out
}
