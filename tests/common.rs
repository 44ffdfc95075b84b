// tests/common.rs
//! Shared test utilities — logging setup and deterministic providers

use std::sync::atomic::{AtomicU8, Ordering};

use cryptixel_core::error::CoreError;
use cryptixel_core::provider::{CryptoProvider, SystemProvider};

#[cfg(feature = "logging")]
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize test-friendly logging
/// Call once at the start of any test that needs logs
#[allow(dead_code)] // not every test binary uses it
pub fn setup() {
    #[cfg(feature = "logging")]
    tracing_subscriber::registry()
        .with(fmt::layer().with_test_writer()) // pretty + works in `cargo test`
        .with(EnvFilter::from_default_env()) // respects RUST_LOG=
        .try_init()
        .ok(); // idempotent — safe to call multiple times

    #[cfg(not(feature = "logging"))]
    { /* no-op */ }
}

/// Deterministic provider: counting-pattern RNG, real crypto for the rest.
///
/// Only the random source is faked, so key derivation, AEAD, and hashing
/// behave exactly as in production.
#[derive(Default)]
#[allow(dead_code)]
pub struct CountingProvider {
    counter: AtomicU8,
    system: SystemProvider,
}

impl CryptoProvider for CountingProvider {
    fn random_bytes(&self, out: &mut [u8]) -> Result<(), CoreError> {
        for b in out.iter_mut() {
            *b = self.counter.fetch_add(1, Ordering::Relaxed);
        }
        Ok(())
    }

    fn pbkdf2_sha256(
        &self,
        password: &[u8],
        salt: &[u8],
        iterations: u32,
        out: &mut [u8],
    ) -> Result<(), CoreError> {
        self.system.pbkdf2_sha256(password, salt, iterations, out)
    }

    fn aead_encrypt(
        &self,
        key: &[u8; 32],
        iv: &[u8; 12],
        plaintext: &[u8],
    ) -> Result<Vec<u8>, CoreError> {
        self.system.aead_encrypt(key, iv, plaintext)
    }

    fn aead_decrypt(
        &self,
        key: &[u8; 32],
        iv: &[u8; 12],
        ciphertext: &[u8],
    ) -> Result<Vec<u8>, CoreError> {
        self.system.aead_decrypt(key, iv, ciphertext)
    }

    fn sha256(&self, data: &[u8]) -> [u8; 32] {
        self.system.sha256(data)
    }
}

/// Provider whose random source always fails — for the GenerationError paths
#[derive(Default)]
#[allow(dead_code)]
pub struct BrokenRngProvider {
    system: SystemProvider,
}

impl CryptoProvider for BrokenRngProvider {
    fn random_bytes(&self, _out: &mut [u8]) -> Result<(), CoreError> {
        Err(CoreError::Generation("entropy source offline".into()))
    }

    fn pbkdf2_sha256(
        &self,
        password: &[u8],
        salt: &[u8],
        iterations: u32,
        out: &mut [u8],
    ) -> Result<(), CoreError> {
        self.system.pbkdf2_sha256(password, salt, iterations, out)
    }

    fn aead_encrypt(
        &self,
        key: &[u8; 32],
        iv: &[u8; 12],
        plaintext: &[u8],
    ) -> Result<Vec<u8>, CoreError> {
        self.system.aead_encrypt(key, iv, plaintext)
    }

    fn aead_decrypt(
        &self,
        key: &[u8; 32],
        iv: &[u8; 12],
        ciphertext: &[u8],
    ) -> Result<Vec<u8>, CoreError> {
        self.system.aead_decrypt(key, iv, ciphertext)
    }

    fn sha256(&self, data: &[u8]) -> [u8; 32] {
        self.system.sha256(data)
    }
}
