// src/core/cipher.rs
//! AES-256-GCM seal/open over the provider

use crate::aliases::AeadKey32;
use crate::consts::IV_LEN;
use secure_gate::RevealSecret;
use crate::core::Result;
use crate::provider::CryptoProvider;

/// Encrypt plaintext under a fresh IV; the GCM tag is appended to the output.
///
/// IVs are not secret and travel with the ciphertext, but must never repeat
/// for a given key.
pub fn seal<P: CryptoProvider>(
    provider: &P,
    key: &AeadKey32,
    iv: &[u8; IV_LEN],
    plaintext: &[u8],
) -> Result<Vec<u8>> {
    provider.aead_encrypt(key.expose_secret(), iv, plaintext)
}

/// Decrypt and verify the tag.
///
/// Fails with `Authentication` on any tag mismatch — wrong password and
/// corrupted data are indistinguishable here and callers must not try to
/// tell them apart. A failed authentication is final for that call.
pub fn open<P: CryptoProvider>(
    provider: &P,
    key: &AeadKey32,
    iv: &[u8; IV_LEN],
    ciphertext: &[u8],
) -> Result<Vec<u8>> {
    provider.aead_decrypt(key.expose_secret(), iv, ciphertext)
}
