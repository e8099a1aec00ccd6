//! `Sakla` CLI for key provisioning and one-off field operations.

#![warn(clippy::pedantic, clippy::nursery)]

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::rngs::OsRng;
use rand::RngCore;
use sakla::prelude::*;
use sakla_key_env::{EnvKeyProvider, DEFAULT_KEY_VAR};

#[derive(Parser)]
#[command(name = "sakla")]
#[command(about = "Sakla field encryption CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a fresh 256-bit key, printed as hex
    Keygen,
    /// Encrypt a field value with the key from the environment
    Encrypt {
        /// Plaintext value to encrypt
        value: String,
        /// Environment variable holding the hex key
        #[arg(long, default_value = DEFAULT_KEY_VAR)]
        key_var: String,
    },
    /// Decrypt a stored hex envelope with the key from the environment
    Decrypt {
        /// Hex ciphertext envelope to decrypt
        value: String,
        /// Environment variable holding the hex key
        #[arg(long, default_value = DEFAULT_KEY_VAR)]
        key_var: String,
    },
}

fn cipher_from_env(key_var: &str) -> Result<FieldCipher> {
    let provider = EnvKeyProvider::new(key_var);
    FieldCipher::from_provider(&provider)
        .with_context(|| format!("failed to load key from ${key_var}"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Keygen => {
            let mut key = [0u8; 32];
            OsRng.fill_bytes(&mut key);
            println!("{}", hex::encode(key));
        }
        Commands::Encrypt { value, key_var } => {
            let cipher = cipher_from_env(&key_var)?;
            let stored = cipher.encrypt(&value).context("encryption failed")?;
            println!("{stored}");
        }
        Commands::Decrypt { value, key_var } => {
            let cipher = cipher_from_env(&key_var)?;
            let plaintext = cipher.decrypt(&value).context("decryption failed")?;
            println!("{plaintext}");
        }
    }

    Ok(())
}
