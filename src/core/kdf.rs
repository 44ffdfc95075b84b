// src/core/kdf.rs
//! Password → key derivation

use crate::aliases::AeadKey32;
use crate::consts::{KDF_ITERATIONS, KEY_LEN, SALT_LEN};
use crate::core::Result;
use crate::provider::CryptoProvider;

/// Derive the 256-bit AES-GCM key from a password and salt.
///
/// PBKDF2-HMAC-SHA-256 at a fixed 100_000 iterations; deterministic for a
/// given `(password, salt)`. The key stays inside its zeroizing wrapper and
/// is recomputed on every encrypt and decrypt — never persisted or cached.
pub fn derive_key<P: CryptoProvider>(
    provider: &P,
    password: &str,
    salt: &[u8; SALT_LEN],
) -> Result<AeadKey32> {
    let mut key = [0u8; KEY_LEN];
    provider.pbkdf2_sha256(password.as_bytes(), salt, KDF_ITERATIONS, &mut key)?;
    Ok(AeadKey32::new(key))
}
