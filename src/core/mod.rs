// src/core/mod.rs
//! Pure cryptographic operations — no I/O, no UI
//!
//! All functions work exclusively on in-memory buffers and take the
//! cryptographic provider explicitly. The service module composes them.

pub mod cipher;
pub mod codec;
pub mod hash;
pub mod kdf;
pub mod password;
pub mod service;

pub use cipher::{open, seal};
pub use codec::{deserialize, serialize};
pub use hash::digest_hex;
pub use kdf::derive_key;
pub use password::generate_password;
pub use service::{EncryptOutcome, EncryptionService, ServiceOptions};

pub type Result<T> = std::result::Result<T, crate::error::CoreError>;
