// src/consts.rs
//! Shared constants — security parameters and defaults

/// PBKDF2-HMAC-SHA-256 iteration count
// Fixed by the wire format: changing it orphans every existing package
pub const KDF_ITERATIONS: u32 = 100_000;

/// KDF salt length in bytes, fresh per encryption
pub const SALT_LEN: usize = 16;

/// AES-GCM nonce length in bytes, fresh per encryption
pub const IV_LEN: usize = 12;

/// AES-256 key length in bytes
pub const KEY_LEN: usize = 32;

/// GCM authentication tag appended to the ciphertext
pub const TAG_LEN: usize = 16;

/// Hex length of a SHA-256 digest
pub const DIGEST_HEX_LEN: usize = 64;

/// Alphabet for generated passwords — upper/lower letters, digits, punctuation
// 70 entries, indexed with `byte % 70`; the small modulo bias is accepted
pub const PASSWORD_ALPHABET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*";

/// Default length of a generated password
pub const DEFAULT_PASSWORD_LENGTH: usize = 32;
