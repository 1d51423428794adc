//! Generic text cipher trait

use crate::key::Key;

/// Trait for a keyed cipher that maps text to text over a finite key space
pub trait TextCipher {
    /// Encrypts the text with an already validated key
    fn encrypt_with(&self, text: &str, key: Key) -> String;

    /// Decrypts the text with an already validated key
    fn decrypt_with(&self, text: &str, key: Key) -> String;

    /// Returns the number of distinct keys (every key is congruent to one in `0..key_space`)
    fn key_space(&self) -> u32;
}
