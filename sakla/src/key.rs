//! The 256-bit field encryption key.

use crate::error::ConfigError;
use secrecy::{ExposeSecret, Secret};
use zeroize::Zeroizing;

/// AES-256 key size in bytes.
pub const KEY_SIZE: usize = 32;

/// An immutable 256-bit key for field encryption.
///
/// Constructed once at process start (typically via [`FieldKey::from_hex`]
/// with material from a key provider) and held for the lifetime of the
/// process. The raw bytes live inside a [`Secret`] and are never logged.
pub struct FieldKey {
    bytes: Secret<[u8; KEY_SIZE]>,
}

impl FieldKey {
    /// Creates a key from raw bytes.
    #[must_use]
    pub fn new(bytes: [u8; KEY_SIZE]) -> Self {
        Self { bytes: Secret::new(bytes) }
    }

    /// Parses a key from its hex encoding.
    ///
    /// The input must decode to exactly [`KEY_SIZE`] bytes.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidHex` if the string is not valid
    /// hexadecimal, or `ConfigError::InvalidKeyLength` if the decoded
    /// length is not exactly 32 bytes.
    pub fn from_hex(material: &str) -> Result<Self, ConfigError> {
        let decoded = Zeroizing::new(
            hex::decode(material.trim()).map_err(|e| ConfigError::InvalidHex(e.to_string()))?,
        );

        if decoded.len() != KEY_SIZE {
            return Err(ConfigError::InvalidKeyLength {
                expected: KEY_SIZE,
                actual: decoded.len(),
            });
        }

        let mut bytes = [0u8; KEY_SIZE];
        bytes.copy_from_slice(&decoded);
        Ok(Self::new(bytes))
    }

    /// Returns the raw key bytes.
    pub(crate) fn expose(&self) -> &[u8; KEY_SIZE] {
        self.bytes.expose_secret()
    }
}

impl Clone for FieldKey {
    fn clone(&self) -> Self {
        Self::new(*self.bytes.expose_secret())
    }
}

impl std::fmt::Debug for FieldKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("FieldKey([REDACTED])")
    }
}
