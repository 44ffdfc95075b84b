// src/lib.rs
//! cryptixel-core — password-authenticated encryption for visual-code sharing
//!
//! Features:
//! - AES-256-GCM authenticated encryption
//! - PBKDF2-HMAC-SHA-256 key derivation
//! - SHA-256 plaintext digest as a secondary integrity check
//! - Base64 + JSON transport string consumed by rendering/scanning collaborators

pub mod aliases;
pub mod config;
pub mod consts;
pub mod core;
pub mod error;
pub mod package;
pub mod provider;

// Re-export everything users need at the crate root
pub use self::core::service::{EncryptOutcome, EncryptionService, ServiceOptions};
pub use self::core::{deserialize, serialize, Result as CoreResult};
pub use aliases::AeadKey32;
pub use error::{CoreError, FormatError};
pub use package::EncryptedPackage;
pub use provider::{CryptoProvider, SystemProvider};
