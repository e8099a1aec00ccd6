//! Environment-based key provider for `Sakla`.
//!
//! Reads the hex-encoded field key from a process environment variable,
//! the way the surrounding deployment provisions it. Suitable for any
//! environment where secrets arrive through the process environment
//! (containers, CI, systemd drop-ins).

#![warn(clippy::pedantic, clippy::nursery)]

use sakla::error::ConfigError;
use sakla::key_provider::KeyProvider;
use secrecy::SecretString;

/// Environment variable consulted by [`EnvKeyProvider::from_default_var`].
pub const DEFAULT_KEY_VAR: &str = "SAKLA_KEY";

/// Key provider backed by a process environment variable.
///
/// The variable must hold the hex encoding of a 32-byte key; parsing and
/// length validation happen in the core crate when the cipher is built.
///
/// # Example
///
/// ```rust,ignore
/// use sakla::prelude::*;
/// use sakla_key_env::EnvKeyProvider;
///
/// let provider = EnvKeyProvider::from_default_var();
/// let cipher = FieldCipher::from_provider(&provider)?;
/// ```
pub struct EnvKeyProvider {
    var: String,
}

impl EnvKeyProvider {
    /// Creates a provider reading the given environment variable.
    #[must_use]
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }

    /// Creates a provider reading [`DEFAULT_KEY_VAR`].
    #[must_use]
    pub fn from_default_var() -> Self {
        Self::new(DEFAULT_KEY_VAR)
    }

    /// Returns the environment variable name this provider reads.
    #[must_use]
    pub fn var(&self) -> &str {
        &self.var
    }
}

impl KeyProvider for EnvKeyProvider {
    fn key_material(&self) -> Result<SecretString, ConfigError> {
        match std::env::var(&self.var) {
            Ok(value) => Ok(SecretString::new(value)),
            Err(std::env::VarError::NotPresent) => {
                Err(ConfigError::MissingKey(format!("environment variable {}", self.var)))
            }
            Err(std::env::VarError::NotUnicode(_)) => Err(ConfigError::InvalidHex(format!(
                "environment variable {} is not valid unicode",
                self.var
            ))),
        }
    }
}
