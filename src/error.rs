// src/error.rs
//! Public error type for the entire crate

use thiserror::Error;

/// Decode failures for the transport string, one variant per decoding stage.
#[derive(Error, Debug)]
pub enum FormatError {
    #[error("invalid base64 transport encoding: {0}")]
    Transport(#[from] base64::DecodeError),

    #[error("package record is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("invalid package record: {0}")]
    Record(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("plaintext is empty")]
    EmptyInput,

    #[error("random source unavailable: {0}")]
    Generation(String),

    #[error("key derivation rejected: {0}")]
    KeyDerivation(String),

    #[error("cipher failure: {0}")]
    Cipher(String),

    #[error("encryption failed: {0}")]
    Encryption(#[source] Box<CoreError>),

    #[error("authentication failed: wrong password or corrupted data")]
    Authentication,

    #[error("integrity digest mismatch after decrypt")]
    Integrity,

    #[error("malformed package: {0}")]
    Format(#[from] FormatError),
}
