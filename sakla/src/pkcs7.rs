//! PKCS#7-style padding for the CBC block transform.
//!
//! Padding is applied manually rather than through the cipher crate's
//! padding support so that unpadding can keep the permissive semantics of
//! the stored-data format: only the final byte is range-checked, and the
//! remaining padding bytes are stripped without being compared against it.
//! Existing column values depend on that behavior, so it is preserved
//! rather than tightened.

use crate::error::Error;

/// Cipher block size in bytes.
pub const BLOCK_SIZE: usize = 16;

/// Appends PKCS#7 padding, returning a buffer whose length is the smallest
/// multiple of [`BLOCK_SIZE`] strictly greater than `data.len()`.
///
/// A full block of padding is appended when the input is already
/// block-aligned, so the pad length is always in `1..=16` and an empty
/// input becomes one block of `0x10` bytes.
#[must_use]
pub fn pad(data: &[u8]) -> Vec<u8> {
    let pad_len = BLOCK_SIZE - (data.len() % BLOCK_SIZE);

    // Safe cast: pad_len is in 1..=16
    #[allow(clippy::cast_possible_truncation)]
    let pad_byte = pad_len as u8;

    let mut padded = Vec::with_capacity(data.len() + pad_len);
    padded.extend_from_slice(data);
    padded.resize(data.len() + pad_len, pad_byte);
    padded
}

/// Strips PKCS#7 padding based on the value of the final byte.
///
/// Only the final byte is validated: it must be in `1..=16` and must not
/// exceed the input length. The other stripped bytes are accepted as-is,
/// so a corrupted final block can pass undetected if its last byte happens
/// to land in range.
///
/// # Errors
///
/// Returns `Error::InvalidPadding` if the input is empty or the final byte
/// is out of range.
pub fn unpad(data: &[u8]) -> Result<&[u8], Error> {
    let pad_len = match data.last() {
        Some(&byte) => byte,
        None => return Err(Error::InvalidPadding(0)),
    };

    if pad_len < 1 || pad_len as usize > BLOCK_SIZE || pad_len as usize > data.len() {
        return Err(Error::InvalidPadding(pad_len));
    }

    Ok(&data[..data.len() - pad_len as usize])
}
