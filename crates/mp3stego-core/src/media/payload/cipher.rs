//! Keyed substitution cipher.
//!
//! Each byte is shifted by the matching key byte, the key repeating
//! cyclically. It hides the payload from a casual look at the extracted bits,
//! it is not meant to withstand cryptanalysis.

use crate::{Result, SteganoError};

/// `c = (p + k) mod 256`
pub fn encrypt(data: &[u8], key: &str) -> Result<Vec<u8>> {
    let key = key_bytes(key)?;

    Ok(data
        .iter()
        .zip(key.iter().cycle())
        .map(|(p, k)| p.wrapping_add(*k))
        .collect())
}

/// `p = (c - k) mod 256`
pub fn decrypt(data: &[u8], key: &str) -> Result<Vec<u8>> {
    let key = key_bytes(key)?;

    Ok(data
        .iter()
        .zip(key.iter().cycle())
        .map(|(c, k)| c.wrapping_sub(*k))
        .collect())
}

fn key_bytes(key: &str) -> Result<&[u8]> {
    match key.as_bytes() {
        [] => Err(SteganoError::CipherKeyInvalid),
        bytes => Ok(bytes),
    }
}
