//! Key provider abstraction.

use crate::error::ConfigError;
use secrecy::SecretString;

/// Supplies the hex-encoded field encryption key at process start.
///
/// Implementations must be thread-safe (`Send + Sync`). The provider hands
/// out the key material exactly as provisioned by the deployment (a hex
/// string); parsing and length validation happen in
/// [`FieldKey::from_hex`](crate::key::FieldKey::from_hex), so every
/// misconfiguration surfaces as a distinct [`ConfigError`].
///
/// # Example
///
/// ```rust,ignore
/// use sakla::key_provider::KeyProvider;
///
/// struct FixedKeyProvider;
///
/// impl KeyProvider for FixedKeyProvider {
///     fn key_material(&self) -> Result<SecretString, ConfigError> {
///         Ok(SecretString::new("00".repeat(32)))
///     }
/// }
/// ```
pub trait KeyProvider: Send + Sync {
    /// Returns the hex-encoded key material.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingKey` if no key material is provisioned.
    fn key_material(&self) -> Result<SecretString, ConfigError>;
}
