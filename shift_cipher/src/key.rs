//! Shift keys and their validation
//!
//! A [`Key`] is any non-negative integer. Keys larger than the alphabet are
//! valid and wrap around, so only the sign and the integer-ness of the input
//! are ever checked.

use std::num::IntErrorKind;

use crate::error::{CipherError, Result};

/// A validated, non-negative shift key
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Key(u64);

impl Key {
    /// Create a key from an unsigned value (always valid)
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// The key as supplied, before reduction
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Reduce the key modulo the alphabet size into `0..size`
    pub const fn canonical(self, size: u32) -> u32 {
        (self.0 % size as u64) as u32
    }

    /// Parse a key typed by an operator
    ///
    /// Anything that is not an integer literal is an [`CipherError::InvalidKeyType`];
    /// negative integers, and integers too large to represent, are an
    /// [`CipherError::InvalidKeyValue`].
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        match trimmed.parse::<i128>() {
            Ok(value) => Self::try_from(value),
            Err(e) => match e.kind() {
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                    Err(CipherError::InvalidKeyValue(trimmed.to_string()))
                }
                _ => {
                    log::debug!("rejected non-integer key {:?}", trimmed);
                    Err(CipherError::InvalidKeyType(trimmed.to_string()))
                }
            },
        }
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Key {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

macro_rules! key_from_int {
    ($($t:ty),*) => {
        $(
            impl TryFrom<$t> for Key {
                type Error = CipherError;

                #[allow(unused_comparisons)]
                fn try_from(value: $t) -> Result<Self> {
                    if value < 0 {
                        log::debug!("rejected negative key {}", value);
                    }
                    u64::try_from(value)
                        .map(Key)
                        .map_err(|_| CipherError::InvalidKeyValue(value.to_string()))
                }
            }
        )*
    };
}

key_from_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

// A key passed as text is not an integer value, whatever it spells.
// Operator input goes through `Key::parse` first.
macro_rules! key_from_text {
    ($($t:ty),*) => {
        $(
            impl TryFrom<$t> for Key {
                type Error = CipherError;

                fn try_from(value: $t) -> Result<Self> {
                    log::debug!("rejected textual key {:?}", value);
                    Err(CipherError::InvalidKeyType(value.to_string()))
                }
            }
        )*
    };
}

key_from_text!(&str, &String, String);
