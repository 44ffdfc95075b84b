// src/core/password.rs
//! Random password generation
//!
//! Used when the caller asks for encryption without supplying a password.

use crate::consts::PASSWORD_ALPHABET;
use crate::core::Result;
use crate::provider::CryptoProvider;

/// Generate a random password of `length` chars from the fixed alphabet.
///
/// Each char is `alphabet[byte % alphabet.len()]`. The modulo bias this
/// introduces is accepted; the password space stays ≥ 70^length.
pub fn generate_password<P: CryptoProvider>(provider: &P, length: usize) -> Result<String> {
    let mut bytes = vec![0u8; length];
    provider.random_bytes(&mut bytes)?;
    Ok(bytes
        .iter()
        .map(|b| PASSWORD_ALPHABET[*b as usize % PASSWORD_ALPHABET.len()] as char)
        .collect())
}
