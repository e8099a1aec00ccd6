//! Basic usage example for `Sakla`.

use sakla::prelude::*;
use sakla_key_env::{EnvKeyProvider, DEFAULT_KEY_VAR};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Sakla Basic Usage Example");
    println!("=========================\n");

    // Setup: provision a throwaway key if none is configured
    if std::env::var(DEFAULT_KEY_VAR).is_err() {
        println!("{DEFAULT_KEY_VAR} not set, using an example key...");
        std::env::set_var(DEFAULT_KEY_VAR, "00".repeat(32));
    }

    // Build the cipher once at startup from the environment
    let provider = EnvKeyProvider::from_default_var();
    let cipher = FieldCipher::from_provider(&provider)?;
    println!("✓ FieldCipher created from ${DEFAULT_KEY_VAR}\n");

    // Example data: the two sensitive fields of a registration record
    let page_url = "https://facebook.com/pages/grand-hotel";
    let page_id = "120941866610169";
    println!("Page URL: {page_url}");
    println!("Page ID:  {page_id}\n");

    // Encrypt each field for storage in a text column
    let stored_url = cipher.encrypt(page_url)?;
    let stored_id = cipher.encrypt(page_id)?;
    println!("✓ Encrypted URL ({} hex chars)", stored_url.len());
    println!("✓ Encrypted ID  ({} hex chars)\n", stored_id.len());

    // Decrypt on read
    let decrypted_url = cipher.decrypt(&stored_url)?;
    let decrypted_id = cipher.decrypt(&stored_id)?;
    println!("✓ Decrypted URL: {decrypted_url}");
    println!("✓ Decrypted ID:  {decrypted_id}\n");

    // Verify round-trips
    assert_eq!(page_url, decrypted_url);
    assert_eq!(page_id, decrypted_id);
    println!("✓ Round-trip verification successful\n");

    // Demonstrate the fresh IV: same plaintext, different envelope
    let stored_again = cipher.encrypt(page_url)?;
    assert_ne!(stored_url, stored_again);
    assert_eq!(cipher.decrypt(&stored_again)?, page_url);
    println!("✓ Repeated encryption produces a different envelope\n");

    println!("=========================");
    println!("All operations successful!");

    Ok(())
}
