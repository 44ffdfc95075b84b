// src/aliases.rs
//! Re-exports secure-gate's ergonomic secret types
//!
//! These are the canonical secret wrappers used throughout cryptixel-core.

pub use secure_gate::fixed_alias;

// Fixed-size secrets
fixed_alias!(pub AeadKey32, 32); // 256-bit AES-GCM key derived via PBKDF2
