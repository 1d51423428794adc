//! Brute-force key recovery
//!
//! Every key in the cipher's key space is tried, each candidate plaintext is
//! scored with [`analyzer::score`], and the lowest score wins. Equal scores
//! resolve to the smaller key.

use std::cmp::Ordering;

use crate::analyzer;
use crate::cipher::TextCipher;
use crate::key::Key;
use crate::shift::ShiftCipher;

/// Best candidate found by a [`Breaker`]
#[derive(Debug, Clone, PartialEq)]
pub struct BreakResult {
    /// Canonical key in `0..key_space`
    pub key: u64,
    pub plaintext: String,
    pub score: f64,
}

impl BreakResult {
    /// Placeholder that loses against any real candidate
    fn unset() -> Self {
        Self {
            key: u64::MAX,
            plaintext: String::new(),
            score: f64::INFINITY,
        }
    }

    /// Ordering by (score, key); `Less` means `self` is the better candidate
    fn rank_cmp(&self, other: &Self) -> Ordering {
        self.score
            .total_cmp(&other.score)
            .then(self.key.cmp(&other.key))
    }
}

/// Exhaustive key search over any [`TextCipher`]
#[derive(Debug, Clone, Default)]
pub struct Breaker<C = ShiftCipher> {
    cipher: C,
}

impl<C: TextCipher> Breaker<C> {
    pub fn new(cipher: C) -> Self {
        Self { cipher }
    }

    /// Decrypt and score the ciphertext under one canonical key
    fn candidate(&self, ciphertext: &str, key: u64) -> BreakResult {
        let plaintext = self.cipher.decrypt_with(ciphertext, Key::new(key));
        let score = analyzer::score(&plaintext);
        log::trace!("key {:>3} scored {:.2}", key, score);
        BreakResult {
            key,
            plaintext,
            score,
        }
    }

    /// Try every key and return the lowest-scoring decryption
    ///
    /// Only strictly lower scores replace the current best, so the first
    /// (smallest) key wins a tie.
    pub fn run(&self, ciphertext: &str) -> BreakResult {
        let mut best = BreakResult::unset();

        for key in 0..u64::from(self.cipher.key_space()) {
            let candidate = self.candidate(ciphertext, key);
            if candidate.score < best.score {
                best = candidate;
            }
        }

        debug_assert!(best.score.is_finite(), "key space must not be empty");
        log::debug!("best key {} with score {:.2}", best.key, best.score);
        best
    }

    /// The `n` best candidates, ordered by score then key
    ///
    /// `rank(text, 1)` holds exactly the result of [`Breaker::run`].
    pub fn rank(&self, ciphertext: &str, n: usize) -> Vec<BreakResult> {
        let mut candidates: Vec<BreakResult> = (0..u64::from(self.cipher.key_space()))
            .map(|key| self.candidate(ciphertext, key))
            .collect();

        candidates.sort_by(BreakResult::rank_cmp);
        candidates.truncate(n);
        candidates
    }
}

#[cfg(feature = "parallel")]
impl<C: TextCipher + Sync> Breaker<C> {
    /// Same result as [`Breaker::run`], with candidates scored on the rayon pool
    pub fn run_parallel(&self, ciphertext: &str) -> BreakResult {
        use rayon::prelude::*;

        let best = (0..u64::from(self.cipher.key_space()))
            .into_par_iter()
            .map(|key| self.candidate(ciphertext, key))
            .reduce(BreakResult::unset, |a, b| match a.rank_cmp(&b) {
                Ordering::Greater => b,
                _ => a,
            });

        log::debug!("best key {} with score {:.2}", best.key, best.score);
        best
    }
}

/// Break printable-ASCII shift ciphertext without knowing the key
pub fn break_cipher(ciphertext: &str) -> BreakResult {
    Breaker::new(ShiftCipher::default()).run(ciphertext)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::NO_SIGNAL_PENALTY;
    use pretty_assertions::assert_eq;

    const SENTENCE: &str = "the quick brown fox jumps over the lazy dog while the sun sets \
                            behind the distant mountains and the river flows quietly to the sea";

    fn encrypt(text: &str, key: u64) -> String {
        ShiftCipher::default().encrypt_with(text, Key::new(key))
    }

    #[test]
    fn test_recovers_known_keys() {
        for key in [0, 3, 7, 42, 62] {
            let result = break_cipher(&encrypt(SENTENCE, key));
            assert_eq!(result.key, key);
            assert_eq!(result.plaintext, SENTENCE);
            assert!(result.score < 30.0, "score {} too high", result.score);
        }
    }

    #[test]
    fn test_reduces_large_keys() {
        let result = break_cipher(&encrypt(SENTENCE, 95 * 4 + 11));
        assert_eq!(result.key, 11);
        assert_eq!(result.plaintext, SENTENCE);
    }

    #[test]
    fn test_case_flip_tie_prefers_smaller_key() {
        // Decrypting with key - 63 (mod 95) turns every lowercase letter into
        // its uppercase twin and every space into '_', which scores the same.
        let ciphertext = encrypt(SENTENCE, 70);
        let ranked = Breaker::new(ShiftCipher::default()).rank(&ciphertext, 2);
        assert_eq!(ranked[0].score, ranked[1].score);
        assert_eq!(ranked[0].key, 7);
        assert_eq!(ranked[1].key, 70);
        assert_eq!(break_cipher(&ciphertext).key, 7);
        assert_eq!(ranked[0].plaintext, SENTENCE.to_uppercase().replace(' ', "_"));
    }

    #[test]
    fn test_no_letters_anywhere_ties_to_key_zero() {
        let result = break_cipher("");
        assert_eq!(result.key, 0);
        assert_eq!(result.plaintext, "");
        assert_eq!(result.score, NO_SIGNAL_PENALTY);

        let result = break_cipher("\t\n");
        assert_eq!(result.key, 0);
        assert_eq!(result.plaintext, "\t\n");
    }

    #[test]
    fn test_rank_head_matches_run() {
        let breaker = Breaker::new(ShiftCipher::default());
        let ciphertext = encrypt(SENTENCE, 19);
        let ranked = breaker.rank(&ciphertext, 5);
        assert_eq!(ranked.len(), 5);
        assert_eq!(ranked[0], breaker.run(&ciphertext));
        assert!(ranked.windows(2).all(|w| w[0].score <= w[1].score));
        assert_eq!(breaker.rank(&ciphertext, 1000).len(), 95);
        assert!(breaker.rank(&ciphertext, 0).is_empty());
    }

    #[test]
    fn test_custom_alphabet() {
        let lowercase = ShiftCipher::new('a', 'z').unwrap();
        let ciphertext = lowercase.encrypt_with(SENTENCE, Key::new(13));
        let result = Breaker::new(lowercase).run(&ciphertext);
        assert_eq!(result.key, 13);
        assert_eq!(result.plaintext, SENTENCE);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_sequential() {
        let breaker = Breaker::new(ShiftCipher::default());
        let inputs = [
            encrypt(SENTENCE, 7),
            encrypt(SENTENCE, 70),
            String::new(),
            "12345".to_string(),
        ];
        for ciphertext in inputs {
            assert_eq!(breaker.run_parallel(&ciphertext), breaker.run(&ciphertext));
        }
    }
}
