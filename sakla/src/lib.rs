//! # `Sakla`
//!
//! Field-level encryption for database text columns using AES-256-CBC
//! with a per-call random IV and a hex-encoded storage envelope.
//!
//! ## Features
//!
//! - AES-256-CBC with PKCS#7-style padding
//! - Fresh random IV per call, prepended to the ciphertext
//! - Hex-encoded output suitable for a text column
//! - Pluggable key providers (environment variable via `sakla-key-env`)
//!
//! ## Example
//!
//! ```rust,ignore
//! use sakla::prelude::*;
//! use sakla_key_env::EnvKeyProvider;
//!
//! let provider = EnvKeyProvider::from_default_var();
//! let cipher = FieldCipher::from_provider(&provider)?;
//!
//! let stored = cipher.encrypt("https://facebook.com/pages/example")?;
//! let page_url = cipher.decrypt(&stored)?;
//! ```

#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cipher;
pub mod envelope;
pub mod error;
pub mod key;
pub mod key_provider;
pub mod pkcs7;

pub mod prelude {
    //! Convenience re-exports for common use.
    pub use crate::cipher::FieldCipher;
    pub use crate::error::{ConfigError, Error};
    pub use crate::key::FieldKey;
    pub use crate::key_provider::KeyProvider;
}
