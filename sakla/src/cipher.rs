//! The field cipher: AES-256-CBC encrypt/decrypt for column values.
//!
//! Each call is independent and stateless apart from the fixed key, so a
//! single [`FieldCipher`] can be shared across threads and used once per
//! sensitive field on every record write and read.

use aes::Aes256;
use cbc::cipher::block_padding::NoPadding;
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use rand::rngs::OsRng;
use rand::RngCore;
use zeroize::Zeroizing;

use crate::envelope::{Envelope, IV_SIZE};
use crate::error::{ConfigError, Error};
use crate::key::FieldKey;
use crate::key_provider::KeyProvider;
use crate::pkcs7::{self, BLOCK_SIZE};

type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;

/// Encrypts and decrypts short text values under a fixed 256-bit key.
///
/// The cipher is constructed once at startup and passed by reference to
/// every caller; there is no global key state and no rotation mechanism.
/// Because the mode is CBC without an authentication tag, decryption of
/// corrupted data may yield garbage text without an error unless the
/// padding byte or UTF-8 decoding catches it.
///
/// # Example
///
/// ```
/// use sakla::cipher::FieldCipher;
/// use sakla::key::FieldKey;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let key = FieldKey::from_hex(&"00".repeat(32))?;
/// let cipher = FieldCipher::new(key);
///
/// let stored = cipher.encrypt("https://facebook.com/pages/example")?;
/// let page_url = cipher.decrypt(&stored)?;
///
/// assert_eq!(page_url, "https://facebook.com/pages/example");
/// # Ok(())
/// # }
/// ```
pub struct FieldCipher {
    key: FieldKey,
}

impl FieldCipher {
    /// Creates a cipher with the given key.
    #[must_use]
    pub const fn new(key: FieldKey) -> Self {
        Self { key }
    }

    /// Creates a cipher with key material from a provider.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the provider has no key material, or if the
    /// material is not hex / does not decode to exactly 32 bytes.
    pub fn from_provider<P: KeyProvider>(provider: &P) -> Result<Self, ConfigError> {
        use secrecy::ExposeSecret;

        let material = provider.key_material()?;
        let key = FieldKey::from_hex(material.expose_secret())?;
        Ok(Self::new(key))
    }

    /// Encrypts a text value for storage.
    ///
    /// The plaintext is UTF-8 encoded, PKCS#7 padded (always at least one
    /// byte, a full block when already aligned), encrypted under a fresh
    /// random IV, and returned as `hex(IV || ciphertext)` — always
    /// `2 * (16 + padded_len)` characters. Repeated calls on the same
    /// plaintext produce different output.
    ///
    /// # Errors
    ///
    /// Infallible in practice; the `Result` return keeps the signature
    /// symmetric with [`decrypt`](Self::decrypt) for callers that treat the
    /// pair uniformly per field.
    pub fn encrypt(&self, plaintext: &str) -> Result<String, Error> {
        let padded = Zeroizing::new(pkcs7::pad(plaintext.as_bytes()));

        let mut iv = [0u8; IV_SIZE];
        OsRng.fill_bytes(&mut iv);

        let mut body = vec![0u8; padded.len()];
        Aes256CbcEnc::new(self.key.expose().into(), (&iv).into())
            .encrypt_padded_b2b_mut::<NoPadding>(&padded, &mut body)
            .expect("output buffer is block-aligned and same size as padded input");

        Ok(Envelope::new(iv, body).encode())
    }

    /// Decrypts a stored hex envelope back to the original text.
    ///
    /// # Errors
    ///
    /// - `Error::InvalidInput` if the input is not hex, shorter than an IV,
    ///   has an empty or non-block-aligned body, or decrypts to invalid
    ///   UTF-8 (typical symptom of the wrong key).
    /// - `Error::InvalidPadding` if the final decrypted byte is outside
    ///   `1..=16` (corrupted ciphertext or wrong key).
    pub fn decrypt(&self, stored: &str) -> Result<String, Error> {
        let envelope = Envelope::decode(stored)?;

        if envelope.body().is_empty() || envelope.body().len() % BLOCK_SIZE != 0 {
            return Err(Error::InvalidInput(format!(
                "ciphertext body must be a non-empty multiple of {BLOCK_SIZE} bytes, got {}",
                envelope.body().len()
            )));
        }

        let mut buf = Zeroizing::new(envelope.body().to_vec());
        let decrypted = Aes256CbcDec::new(self.key.expose().into(), envelope.iv().into())
            .decrypt_padded_mut::<NoPadding>(&mut buf)
            .map_err(|_| {
                Error::InvalidInput("ciphertext body is not block-aligned".to_string())
            })?;

        let stripped = pkcs7::unpad(decrypted)?;

        String::from_utf8(stripped.to_vec())
            .map_err(|_| Error::InvalidInput("decrypted data is not valid UTF-8".to_string()))
    }
}

impl Clone for FieldCipher {
    fn clone(&self) -> Self {
        Self { key: self.key.clone() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_cipher() -> FieldCipher {
        FieldCipher::new(FieldKey::new([0u8; 32]))
    }

    #[test]
    fn test_round_trip() {
        let cipher = create_test_cipher();
        let stored = cipher.encrypt("Hello, World!").expect("encryption failed");
        let decrypted = cipher.decrypt(&stored).expect("decryption failed");

        assert_eq!(decrypted, "Hello, World!");
    }

    #[test]
    fn test_hello_world_envelope_length() {
        // 13 bytes pad to one block: 2 * (16 IV + 16 body) hex chars
        let cipher = create_test_cipher();
        let stored = cipher.encrypt("Hello, World!").unwrap();

        assert_eq!(stored.len(), 64);
        assert!(stored.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_empty_string_round_trip() {
        let cipher = create_test_cipher();
        let stored = cipher.encrypt("").unwrap();

        // Empty input still gets a full block of padding
        assert_eq!(stored.len(), 2 * (16 + 16));
        assert_eq!(cipher.decrypt(&stored).unwrap(), "");
    }

    #[test]
    fn test_block_aligned_plaintext_round_trip() {
        let cipher = create_test_cipher();
        let plaintext = "0123456789abcdef"; // exactly 16 bytes

        let stored = cipher.encrypt(plaintext).unwrap();

        // Aligned input gains a full extra padding block
        assert_eq!(stored.len(), 2 * (16 + 32));
        assert_eq!(cipher.decrypt(&stored).unwrap(), plaintext);
    }

    #[test]
    fn test_multi_byte_utf8_round_trip() {
        let cipher = create_test_cipher();
        for plaintext in ["şifreli veri", "こんにちは世界", "café ☕", "🏨🏨🏨"] {
            let stored = cipher.encrypt(plaintext).unwrap();
            assert_eq!(cipher.decrypt(&stored).unwrap(), plaintext, "value {plaintext}");
        }
    }

    #[test]
    fn test_encrypt_is_not_deterministic() {
        let cipher = create_test_cipher();
        let stored1 = cipher.encrypt("same input").unwrap();
        let stored2 = cipher.encrypt("same input").unwrap();

        // Fresh IV per call
        assert_ne!(stored1, stored2);
        assert_eq!(cipher.decrypt(&stored1).unwrap(), "same input");
        assert_eq!(cipher.decrypt(&stored2).unwrap(), "same input");
    }

    #[test]
    fn test_envelope_length_invariant() {
        let cipher = create_test_cipher();
        for size in [0, 1, 13, 15, 16, 17, 31, 32, 33, 100] {
            let plaintext = "x".repeat(size);
            let stored = cipher.encrypt(&plaintext).unwrap();

            let padded_len = (size / 16 + 1) * 16;
            assert_eq!(stored.len(), 2 * (16 + padded_len), "size {size}");
        }
    }

    #[test]
    fn test_wrong_key_does_not_recover_plaintext() {
        let cipher1 = FieldCipher::new(FieldKey::new([1u8; 32]));
        let cipher2 = FieldCipher::new(FieldKey::new([2u8; 32]));

        let stored = cipher1.encrypt("registration record").unwrap();

        // Usually fails on padding or UTF-8; by-chance-valid padding can
        // slip through, but never back to the original text
        match cipher2.decrypt(&stored) {
            Err(Error::InvalidPadding(_) | Error::InvalidInput(_)) => {}
            Err(other) => panic!("unexpected error kind: {other}"),
            Ok(garbage) => assert_ne!(garbage, "registration record"),
        }
    }

    #[test]
    fn test_decrypt_rejects_non_hex() {
        let cipher = create_test_cipher();
        let result = cipher.decrypt("not-hex!!");
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_decrypt_rejects_short_input() {
        let cipher = create_test_cipher();
        let result = cipher.decrypt("00");
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_decrypt_rejects_iv_only_input() {
        let cipher = create_test_cipher();
        let result = cipher.decrypt(&"00".repeat(16));
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_decrypt_rejects_misaligned_body() {
        // 16-byte IV plus a 8-byte body
        let cipher = create_test_cipher();
        let result = cipher.decrypt(&"00".repeat(24));
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_corrupted_ciphertext_never_round_trips() {
        let cipher = create_test_cipher();
        let mut stored = cipher.encrypt("page-id-120941").unwrap().into_bytes();

        // Flip a hex digit in the first ciphertext block (after the IV)
        stored[34] = if stored[34] == b'0' { b'1' } else { b'0' };
        let corrupted = String::from_utf8(stored).unwrap();

        match cipher.decrypt(&corrupted) {
            Err(_) => {}
            Ok(garbage) => assert_ne!(garbage, "page-id-120941"),
        }
    }

    #[test]
    fn test_from_provider() {
        use crate::error::ConfigError;
        use crate::key_provider::KeyProvider;
        use secrecy::SecretString;

        struct FixedKeyProvider(String);

        impl KeyProvider for FixedKeyProvider {
            fn key_material(&self) -> Result<SecretString, ConfigError> {
                Ok(SecretString::new(self.0.clone()))
            }
        }

        let provider = FixedKeyProvider("ff".repeat(32));
        let cipher = FieldCipher::from_provider(&provider).expect("provider key is valid");

        let stored = cipher.encrypt("alice@example.com").unwrap();
        assert_eq!(cipher.decrypt(&stored).unwrap(), "alice@example.com");

        let bad_provider = FixedKeyProvider("ff".repeat(8));
        let result = FieldCipher::from_provider(&bad_provider);
        assert!(matches!(result, Err(ConfigError::InvalidKeyLength { .. })));
    }

    #[test]
    fn test_cipher_clone_shares_key() {
        let cipher1 = create_test_cipher();
        let cipher2 = cipher1.clone();

        let stored = cipher1.encrypt("cloned").unwrap();
        assert_eq!(cipher2.decrypt(&stored).unwrap(), "cloned");
    }

    #[test]
    fn test_concurrent_use() {
        use std::sync::Arc;

        let cipher = Arc::new(create_test_cipher());
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let cipher = Arc::clone(&cipher);
                std::thread::spawn(move || {
                    let plaintext = format!("record-{i}");
                    let stored = cipher.encrypt(&plaintext).unwrap();
                    assert_eq!(cipher.decrypt(&stored).unwrap(), plaintext);
                })
            })
            .collect();

        for handle in handles {
            handle.join().expect("worker panicked");
        }
    }
}
