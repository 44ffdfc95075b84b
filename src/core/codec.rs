// src/core/codec.rs
//! Package ⇄ transport string
//!
//! A package travels as base64 of its JSON record. The JSON layer keeps exact
//! byte arrays for salt/iv/data; the base64 layer keeps the whole thing
//! ASCII-safe for QR payloads and clipboards.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::core::Result;
use crate::error::FormatError;
use crate::package::EncryptedPackage;

/// Serialize a package to its transport string.
pub fn serialize(package: &EncryptedPackage) -> Result<String> {
    let record = serde_json::to_string(package).map_err(FormatError::from)?;
    Ok(STANDARD.encode(record))
}

/// Parse a transport string back into a package.
///
/// `deserialize(serialize(p))` is field-for-field identical to `p`, including
/// exact byte values and ordering of `salt`, `iv`, and `data`. Malformed
/// base64, a non-UTF-8 payload, and an unparseable or incomplete record all
/// surface as `Format` with the stage-specific cause attached.
pub fn deserialize(encoded: &str) -> Result<EncryptedPackage> {
    let record = STANDARD.decode(encoded).map_err(FormatError::from)?;
    let text = String::from_utf8(record).map_err(FormatError::from)?;
    let package = serde_json::from_str(&text).map_err(FormatError::from)?;
    Ok(package)
}
