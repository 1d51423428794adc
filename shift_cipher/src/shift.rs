//! Shift cipher over a contiguous range of code points
//!
//! Every character inside `[low, high]` is rotated by the key within that
//! range; everything else passes through untouched. The default range is the
//! printable ASCII band `' '..='~'`, giving 95 symbols and 95 distinct keys.

use crate::cipher::TextCipher;
use crate::error::{CipherError, Result};
use crate::key::Key;

/// First symbol of the printable ASCII band (space)
pub const PRINTABLE_LOW: char = ' ';

/// Last symbol of the printable ASCII band (tilde)
pub const PRINTABLE_HIGH: char = '~';

/// Number of symbols in the printable ASCII band
pub const PRINTABLE_SIZE: u32 = PRINTABLE_HIGH as u32 - PRINTABLE_LOW as u32 + 1;

const SURROGATES: std::ops::RangeInclusive<u32> = 0xD800..=0xDFFF;

/// Shift (Caesar) cipher over the alphabet `[low, high]`
///
/// # Example
///
/// ```rust
/// use shift_cipher::ShiftCipher;
///
/// let cipher = ShiftCipher::default();
/// assert_eq!(cipher.size(), 95);
/// assert_eq!(cipher.encrypt("Hello", 5)?, "Mjqqt");
/// # Ok::<(), shift_cipher::CipherError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftCipher {
    low: char,
    high: char,
}

impl ShiftCipher {
    /// The printable ASCII cipher (`' '..='~'`)
    pub const fn printable_ascii() -> Self {
        Self {
            low: PRINTABLE_LOW,
            high: PRINTABLE_HIGH,
        }
    }

    /// Create a cipher over a custom contiguous alphabet
    ///
    /// The range must be non-empty and must not touch the surrogate block,
    /// otherwise rotation could land on a code point that is not a `char`.
    pub fn new(low: char, high: char) -> Result<Self> {
        let (lo, hi) = (low as u32, high as u32);
        let crosses_surrogates = lo <= *SURROGATES.end() && hi >= *SURROGATES.start();
        if low > high || crosses_surrogates {
            return Err(CipherError::InvalidAlphabet { low, high });
        }
        Ok(Self { low, high })
    }

    /// Number of symbols in the alphabet
    pub fn size(&self) -> u32 {
        self.high as u32 - self.low as u32 + 1
    }

    /// Whether `c` is transformed by this cipher
    pub fn contains(&self, c: char) -> bool {
        (self.low..=self.high).contains(&c)
    }

    /// Encrypt `text`, validating the key first
    pub fn encrypt<K>(&self, text: &str, key: K) -> Result<String>
    where
        K: TryInto<Key, Error = CipherError>,
    {
        Ok(self.encrypt_with(text, key.try_into()?))
    }

    /// Decrypt `text`, validating the key first
    pub fn decrypt<K>(&self, text: &str, key: K) -> Result<String>
    where
        K: TryInto<Key, Error = CipherError>,
    {
        Ok(self.decrypt_with(text, key.try_into()?))
    }

    /// Rotate every in-range character by `offset` positions
    fn rotate(&self, text: &str, offset: i64) -> String {
        let low = self.low as i64;
        let size = self.size() as i64;

        text.chars()
            .map(|c| {
                if !self.contains(c) {
                    return c;
                }
                // rem_euclid keeps the result in 0..size for negative offsets
                let shifted = (c as i64 - low + offset).rem_euclid(size) + low;
                char::from_u32(shifted as u32).unwrap_or(c)
            })
            .collect()
    }
}

impl Default for ShiftCipher {
    fn default() -> Self {
        Self::printable_ascii()
    }
}

impl TextCipher for ShiftCipher {
    fn encrypt_with(&self, text: &str, key: Key) -> String {
        self.rotate(text, key.canonical(self.size()) as i64)
    }

    fn decrypt_with(&self, text: &str, key: Key) -> String {
        self.rotate(text, -(key.canonical(self.size()) as i64))
    }

    fn key_space(&self) -> u32 {
        self.size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn test_known_vectors() {
        let cipher = ShiftCipher::default();
        assert_eq!(cipher.encrypt("abc", 1).unwrap(), "bcd");
        assert_eq!(cipher.encrypt("Hello", 5).unwrap(), "Mjqqt");
        assert_eq!(cipher.decrypt("Mjqqt", 5).unwrap(), "Hello");
    }

    #[test]
    fn test_wraparound_at_range_edges() {
        let cipher = ShiftCipher::default();
        assert_eq!(cipher.encrypt("~", 1).unwrap(), " ");
        assert_eq!(cipher.decrypt(" ", 1).unwrap(), "~");
        assert_eq!(cipher.encrypt("}~", 2).unwrap(), " !");
    }

    #[test]
    fn test_full_ascii_range() {
        let cipher = ShiftCipher::default();
        let sample: String = (32u8..=126).map(char::from).collect();
        let encrypted = cipher.encrypt(&sample, 20).unwrap();
        assert_ne!(encrypted, sample);
        assert_eq!(cipher.decrypt(&encrypted, 20).unwrap(), sample);
    }

    #[test]
    fn test_key_wrapping() {
        let cipher = ShiftCipher::default();
        assert_eq!(cipher.encrypt("A", PRINTABLE_SIZE).unwrap(), "A");
        assert_eq!(cipher.decrypt("A", PRINTABLE_SIZE).unwrap(), "A");
        assert_eq!(
            cipher.encrypt("test", PRINTABLE_SIZE + 5).unwrap(),
            cipher.encrypt("test", 5).unwrap()
        );
    }

    #[test]
    fn test_invalid_keys() {
        let cipher = ShiftCipher::default();
        assert!(matches!(
            cipher.encrypt("test", -1),
            Err(CipherError::InvalidKeyValue(_))
        ));
        assert!(matches!(
            cipher.decrypt("test", -1),
            Err(CipherError::InvalidKeyValue(_))
        ));
        assert!(matches!(
            cipher.encrypt("test", "five"),
            Err(CipherError::InvalidKeyType(_))
        ));
        assert!(matches!(
            cipher.encrypt("test", "5"),
            Err(CipherError::InvalidKeyType(_))
        ));
        assert!(matches!(
            cipher.decrypt("test", "5"),
            Err(CipherError::InvalidKeyType(_))
        ));
    }

    #[test]
    fn test_pass_through_outside_range() {
        let cipher = ShiftCipher::default();
        let text = "a\tb\nc\u{7f}é€";
        let encrypted = cipher.encrypt(text, 1).unwrap();
        assert_eq!(encrypted, "b\tc\nd\u{7f}é€");
        assert_eq!(encrypted.chars().count(), text.chars().count());
    }

    #[test]
    fn test_custom_alphabet() {
        let lowercase = ShiftCipher::new('a', 'z').unwrap();
        assert_eq!(lowercase.size(), 26);
        assert_eq!(lowercase.encrypt("xyz ABC", 3).unwrap(), "abc ABC");
        assert_eq!(lowercase.decrypt("abc", 3).unwrap(), "xyz");

        let wide = ShiftCipher::new(' ', '\u{17F}').unwrap();
        let text = "Grüße, Łódź!";
        let encrypted = wide.encrypt(text, 300).unwrap();
        assert_eq!(wide.decrypt(&encrypted, 300).unwrap(), text);
    }

    #[test]
    fn test_invalid_alphabet() {
        assert_eq!(
            ShiftCipher::new('z', 'a'),
            Err(CipherError::InvalidAlphabet { low: 'z', high: 'a' })
        );
        assert!(ShiftCipher::new(' ', '\u{E000}').is_err());
        assert!(ShiftCipher::new('\u{E000}', '\u{10FFFF}').is_ok());
        assert_eq!(ShiftCipher::new('x', 'x').unwrap().size(), 1);
    }

    #[test]
    fn test_trait_matches_inherent() {
        let cipher = ShiftCipher::default();
        assert_eq!(cipher.key_space(), 95);
        assert_eq!(
            cipher.encrypt_with("Swapnil", Key::new(10)),
            cipher.encrypt("Swapnil", 10).unwrap()
        );
    }

    proptest! {
        #[test]
        fn round_trip(text in "[ -~]{0,64}", key in 0u64..=10_000) {
            let cipher = ShiftCipher::default();
            let encrypted = cipher.encrypt(&text, key).unwrap();
            prop_assert_eq!(encrypted.len(), text.len());
            prop_assert_eq!(cipher.decrypt(&encrypted, key).unwrap(), text);
        }

        #[test]
        fn identity_keys(text in "[ -~]{0,64}") {
            let cipher = ShiftCipher::default();
            prop_assert_eq!(cipher.encrypt(&text, 0).unwrap(), text.clone());
            prop_assert_eq!(cipher.encrypt(&text, PRINTABLE_SIZE).unwrap(), text);
        }

        #[test]
        fn congruent_keys_agree(text in "[ -~]{0,32}", key in 0u64..95, laps in 0u64..100) {
            let cipher = ShiftCipher::default();
            prop_assert_eq!(
                cipher.encrypt(&text, key).unwrap(),
                cipher.encrypt(&text, key + laps * 95).unwrap()
            );
        }

        #[test]
        fn outside_range_untouched(text in "[\t\n\r\u{80}-\u{2FF}]{0,32}", key in 0u64..=10_000) {
            let cipher = ShiftCipher::default();
            prop_assert_eq!(cipher.encrypt(&text, key).unwrap(), text.clone());
            prop_assert_eq!(cipher.decrypt(&text, key).unwrap(), text);
        }
    }
}
