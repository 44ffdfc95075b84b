// src/package.rs
//! The encrypted package entity
//!
//! Field declaration order mirrors the wire record exactly; serde_json emits
//! fields in declaration order, so the serialized record is always
//! `salt, iv, data, hash, password`.

use serde::{Deserialize, Serialize};

use crate::consts::{IV_LEN, SALT_LEN};

/// Self-describing encrypted package produced by `EncryptionService::encrypt`.
///
/// Immutable once created — decrypt never mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptedPackage {
    /// KDF salt, fresh per encryption
    pub salt: [u8; SALT_LEN],
    /// AES-GCM nonce, fresh per encryption; never reused for a derived key
    pub iv: [u8; IV_LEN],
    /// Ciphertext with the 16-byte GCM tag appended
    pub data: Vec<u8>,
    /// Lowercase hex SHA-256 of the plaintext, computed before encryption
    pub hash: String,
    /// Password this package was encrypted under. Present by default, which
    /// makes the package self-decrypting for any holder; omitted when
    /// `embed_password` is configured off.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl EncryptedPackage {
    /// First 8 hex chars of the digest, for display by rendering collaborators
    pub fn hash_preview(&self) -> &str {
        &self.hash[..self.hash.len().min(8)]
    }
}
