// src/core/hash.rs
//! Plaintext integrity digest
//!
//! Redundant with the GCM tag on purpose; both checks run on decrypt.

use crate::provider::CryptoProvider;

/// Compute the SHA-256 digest and return it as a lowercase hex string
pub fn digest_hex<P: CryptoProvider>(provider: &P, data: &[u8]) -> String {
    hex::encode(provider.sha256(data))
}
