// src/provider/mod.rs
//! Cryptographic provider capability
//!
//! Randomness, key derivation, AEAD, and hashing all go through this trait.
//! The rest of the crate never touches a backend directly, so tests can swap
//! in a deterministic RNG.

mod system;

pub use system::SystemProvider;

use crate::consts::{IV_LEN, KEY_LEN};
use crate::error::CoreError;

/// Abstract cryptographic backend.
///
/// All methods are stateless; implementations must be safe to call
/// concurrently from multiple threads.
pub trait CryptoProvider {
    /// Fill `out` with cryptographically secure random bytes
    fn random_bytes(&self, out: &mut [u8]) -> Result<(), CoreError>;

    /// PBKDF2 with HMAC-SHA-256, deriving `out.len()` bytes of key material
    fn pbkdf2_sha256(
        &self,
        password: &[u8],
        salt: &[u8],
        iterations: u32,
        out: &mut [u8],
    ) -> Result<(), CoreError>;

    /// AES-256-GCM encrypt; the 16-byte tag is appended to the ciphertext
    fn aead_encrypt(
        &self,
        key: &[u8; KEY_LEN],
        iv: &[u8; IV_LEN],
        plaintext: &[u8],
    ) -> Result<Vec<u8>, CoreError>;

    /// AES-256-GCM decrypt; `Authentication` when the tag does not verify
    fn aead_decrypt(
        &self,
        key: &[u8; KEY_LEN],
        iv: &[u8; IV_LEN],
        ciphertext: &[u8],
    ) -> Result<Vec<u8>, CoreError>;

    /// SHA-256 digest
    fn sha256(&self, data: &[u8]) -> [u8; 32];
}
