//! Storage envelope for ciphertext.
//!
//! The envelope is the on-disk format of an encrypted field:
//!
//! ```text
//! hex( IV (16 bytes) || encrypted_padded_plaintext )
//! ```
//!
//! The IV is not secret; it only has to be fresh per encryption call and
//! travel with the ciphertext so decryption can reproduce the chain.

use crate::error::Error;

/// IV size for AES-CBC (one cipher block).
pub const IV_SIZE: usize = 16;

/// A parsed ciphertext envelope: IV plus the encrypted body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    iv: [u8; IV_SIZE],
    body: Vec<u8>,
}

impl Envelope {
    /// Creates an envelope from an IV and an encrypted body.
    #[must_use]
    pub fn new(iv: [u8; IV_SIZE], body: Vec<u8>) -> Self {
        Self { iv, body }
    }

    /// Returns the initialization vector.
    #[must_use]
    pub const fn iv(&self) -> &[u8; IV_SIZE] {
        &self.iv
    }

    /// Returns the encrypted body.
    #[must_use]
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Encodes the envelope as a hex string for storage in a text column.
    ///
    /// The output length is always `2 * (16 + body_len)` characters.
    #[must_use]
    pub fn encode(&self) -> String {
        let mut raw = Vec::with_capacity(IV_SIZE + self.body.len());
        raw.extend_from_slice(&self.iv);
        raw.extend_from_slice(&self.body);
        hex::encode(raw)
    }

    /// Decodes a stored hex string back into an envelope.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidInput` if the string is not valid hexadecimal
    /// or decodes to fewer than [`IV_SIZE`] bytes (too short to contain an
    /// IV).
    pub fn decode(stored: &str) -> Result<Self, Error> {
        let raw = hex::decode(stored)
            .map_err(|e| Error::InvalidInput(format!("ciphertext is not valid hex: {e}")))?;

        if raw.len() < IV_SIZE {
            return Err(Error::InvalidInput(format!(
                "ciphertext too short: {} bytes (min: {IV_SIZE})",
                raw.len()
            )));
        }

        let mut iv = [0u8; IV_SIZE];
        iv.copy_from_slice(&raw[..IV_SIZE]);

        Ok(Self { iv, body: raw[IV_SIZE..].to_vec() })
    }
}
