//! # Shift Cipher Library
//!
//! A printable-ASCII shift (Caesar) cipher together with the tools to break it.
//!
//! ## Components
//!
//! - **Transform** - [`ShiftCipher`] rotates every character in `' '..='~'`
//!   by the key, wrapping around the 95-symbol band
//! - **Frequency analysis** - [`analyzer::frequencies`] and [`analyzer::score`]
//!   measure how far a text's letter distribution is from English
//! - **Breaker** - [`break_cipher`] tries all 95 keys and keeps the most
//!   English-looking decryption
//!
//! ## Usage
//!
//! ```rust
//! use shift_cipher::{break_cipher, decrypt, encrypt};
//!
//! let secret = encrypt("attack at dawn and hold the bridge until the relief column arrives", 42)?;
//! assert_eq!(decrypt(&secret, 42)?, "attack at dawn and hold the bridge until the relief column arrives");
//!
//! let result = break_cipher(&secret);
//! assert_eq!(result.key, 42);
//! # Ok::<(), shift_cipher::CipherError>(())
//! ```
//!
//! Keys are any non-negative integer; keys of 95 and above wrap around.
//! This is a teaching cipher with a tiny key space and offers no security.

pub mod analyzer;
pub mod breaker;
pub mod cipher;
pub mod error;
pub mod key;
pub mod shift;
pub mod utils;

pub use analyzer::{frequencies, score, FrequencyDistribution};
pub use breaker::{break_cipher, BreakResult, Breaker};
pub use cipher::TextCipher;
pub use error::{CipherError, Result};
pub use key::Key;
pub use shift::{ShiftCipher, PRINTABLE_HIGH, PRINTABLE_LOW, PRINTABLE_SIZE};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Encrypt with the printable-ASCII cipher
///
/// # Errors
///
/// [`CipherError::InvalidKeyType`] when the key is text rather than an
/// integer, [`CipherError::InvalidKeyValue`] when the key is negative.
pub fn encrypt<K>(text: &str, key: K) -> Result<String>
where
    K: TryInto<Key, Error = CipherError>,
{
    ShiftCipher::printable_ascii().encrypt(text, key)
}

/// Decrypt with the printable-ASCII cipher
///
/// Fails on the same keys as [`encrypt`].
pub fn decrypt<K>(text: &str, key: K) -> Result<String>
where
    K: TryInto<Key, Error = CipherError>,
{
    ShiftCipher::printable_ascii().decrypt(text, key)
}
