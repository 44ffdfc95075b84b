// src/core/service.rs
//! Encrypt/decrypt orchestration — the public contract
//!
//! Stateless: every call derives its own key from data local to that call,
//! so concurrent calls need no locks and there is nothing to clean up on
//! success, failure, or cancellation.

use crate::config;
use crate::consts::{IV_LEN, SALT_LEN};
use crate::core::{cipher, codec, hash, kdf, password, Result};
use crate::error::CoreError;
use crate::package::EncryptedPackage;
use crate::provider::{CryptoProvider, SystemProvider};

/// Per-service options, seeded from the global config by default.
#[derive(Debug, Clone)]
pub struct ServiceOptions {
    /// Carry the password inside the package (observed legacy behavior)
    pub embed_password: bool,
    /// Length of generated passwords
    pub password_length: usize,
}

impl Default for ServiceOptions {
    fn default() -> Self {
        let conf = config::load();
        Self {
            embed_password: conf.security.embed_password,
            password_length: conf.security.password_length,
        }
    }
}

/// A successful encryption: the package plus the password actually used,
/// whether caller-supplied or freshly generated.
#[derive(Debug, Clone)]
pub struct EncryptOutcome {
    pub package: EncryptedPackage,
    pub password: String,
}

pub struct EncryptionService<P: CryptoProvider = SystemProvider> {
    provider: P,
    options: ServiceOptions,
}

impl EncryptionService {
    /// Service backed by the system provider and the global config
    pub fn new() -> Self {
        Self::with_provider(SystemProvider)
    }
}

impl Default for EncryptionService {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: CryptoProvider> EncryptionService<P> {
    pub fn with_provider(provider: P) -> Self {
        Self {
            provider,
            options: ServiceOptions::default(),
        }
    }

    pub fn with_options(provider: P, options: ServiceOptions) -> Self {
        Self { provider, options }
    }

    /// Encrypt plaintext, generating a password when none is supplied.
    ///
    /// Empty plaintext is rejected up front; any later failure is wrapped as
    /// `Encryption` carrying the originating cause.
    pub fn encrypt(&self, plaintext: &str, password: Option<&str>) -> Result<EncryptOutcome> {
        if plaintext.is_empty() {
            return Err(CoreError::EmptyInput);
        }

        self.encrypt_inner(plaintext, password)
            .map_err(|e| CoreError::Encryption(Box::new(e)))
    }

    fn encrypt_inner(&self, plaintext: &str, password: Option<&str>) -> Result<EncryptOutcome> {
        let password = match password {
            Some(p) => p.to_owned(),
            None => password::generate_password(&self.provider, self.options.password_length)?,
        };

        let mut salt = [0u8; SALT_LEN];
        self.provider.random_bytes(&mut salt)?;
        let mut iv = [0u8; IV_LEN];
        self.provider.random_bytes(&mut iv)?;

        let key = kdf::derive_key(&self.provider, &password, &salt)?;
        let data = cipher::seal(&self.provider, &key, &iv, plaintext.as_bytes())?;
        let digest = hash::digest_hex(&self.provider, plaintext.as_bytes());

        let package = EncryptedPackage {
            salt,
            iv,
            data,
            hash: digest,
            password: self.options.embed_password.then(|| password.clone()),
        };

        Ok(EncryptOutcome { package, password })
    }

    /// Decrypt a package with the supplied password.
    ///
    /// A tag mismatch is `Authentication` and stops everything; the digest
    /// re-check runs only after the tag verified and fails independently as
    /// `Integrity`.
    pub fn decrypt(&self, package: &EncryptedPackage, password: &str) -> Result<String> {
        let key = kdf::derive_key(&self.provider, password, &package.salt)?;
        let plaintext = cipher::open(&self.provider, &key, &package.iv, &package.data)?;

        let computed = hash::digest_hex(&self.provider, &plaintext);
        if computed != package.hash {
            return Err(CoreError::Integrity);
        }

        Ok(String::from_utf8_lossy(&plaintext).into_owned())
    }

    /// Encrypt and serialize in one step.
    ///
    /// Returns the transport string handed to sharing collaborators together
    /// with the password actually used.
    pub fn encrypt_to_string(
        &self,
        plaintext: &str,
        password: Option<&str>,
    ) -> Result<(String, String)> {
        let outcome = self.encrypt(plaintext, password)?;
        let encoded = codec::serialize(&outcome.package)?;
        Ok((encoded, outcome.password))
    }

    /// Deserialize a candidate transport string and decrypt it in one step.
    pub fn decrypt_from_string(&self, encoded: &str, password: &str) -> Result<String> {
        let package = codec::deserialize(encoded)?;
        self.decrypt(&package, password)
    }
}
