//! Error types for `Sakla` operations.

use std::fmt;

/// Main error type for `Sakla` encrypt/decrypt operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Key configuration failed at startup
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Malformed call argument (bad hex, truncated envelope, invalid UTF-8)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Out-of-range padding byte (corrupted ciphertext or wrong key)
    #[error("invalid padding byte: {0:#04x}")]
    InvalidPadding(u8),
}

/// Errors specific to key configuration and key providers.
///
/// These are fatal at startup: a process with a missing or malformed key
/// must not begin serving records.
#[derive(Debug)]
pub enum ConfigError {
    /// Key material not provided (e.g. environment variable unset)
    MissingKey(String),

    /// Key material is not valid hexadecimal
    InvalidHex(String),

    /// Decoded key has the wrong length
    InvalidKeyLength {
        /// Required key length in bytes
        expected: usize,
        /// Length actually decoded
        actual: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingKey(source) => write!(f, "key material missing: {source}"),
            Self::InvalidHex(msg) => write!(f, "key material is not valid hex: {msg}"),
            Self::InvalidKeyLength { expected, actual } => {
                write!(f, "key length is invalid: expected {expected} bytes, got {actual}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
