//! Error types for shift cipher operations

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    #[error("Key must be an integer, got {0:?}")]
    InvalidKeyType(String),

    #[error("Key must be a non-negative integer, got {0}")]
    InvalidKeyValue(String),

    #[error("Invalid alphabet range {low:?}..={high:?}")]
    InvalidAlphabet { low: char, high: char },
}

pub type Result<T> = std::result::Result<T, CipherError>;
