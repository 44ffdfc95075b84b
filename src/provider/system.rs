// src/provider/system.rs
use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Key, Nonce};
use pbkdf2::pbkdf2_hmac;
use rand::rngs::OsRng;
use rand::TryRngCore;
use sha2::{Digest, Sha256};

use crate::consts::{IV_LEN, KEY_LEN};
use crate::error::CoreError;

use super::CryptoProvider;

/// Default provider: operating-system RNG plus the RustCrypto
/// AES-GCM / PBKDF2 / SHA-2 implementations.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProvider;

impl CryptoProvider for SystemProvider {
    fn random_bytes(&self, out: &mut [u8]) -> Result<(), CoreError> {
        OsRng
            .try_fill_bytes(out)
            .map_err(|e| CoreError::Generation(e.to_string()))
    }

    fn pbkdf2_sha256(
        &self,
        password: &[u8],
        salt: &[u8],
        iterations: u32,
        out: &mut [u8],
    ) -> Result<(), CoreError> {
        if iterations == 0 || salt.is_empty() || out.is_empty() {
            return Err(CoreError::KeyDerivation(
                "iterations, salt, and output length must be non-zero".into(),
            ));
        }
        pbkdf2_hmac::<Sha256>(password, salt, iterations, out);
        Ok(())
    }

    fn aead_encrypt(
        &self,
        key: &[u8; KEY_LEN],
        iv: &[u8; IV_LEN],
        plaintext: &[u8],
    ) -> Result<Vec<u8>, CoreError> {
        let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key));
        cipher
            .encrypt(Nonce::from_slice(iv), plaintext)
            .map_err(|_| CoreError::Cipher("AES-GCM rejected the plaintext".into()))
    }

    fn aead_decrypt(
        &self,
        key: &[u8; KEY_LEN],
        iv: &[u8; IV_LEN],
        ciphertext: &[u8],
    ) -> Result<Vec<u8>, CoreError> {
        let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key));
        // Any failure collapses to Authentication: wrong password and
        // corrupted data are indistinguishable at this layer
        cipher
            .decrypt(Nonce::from_slice(iv), ciphertext)
            .map_err(|_| CoreError::Authentication)
    }

    fn sha256(&self, data: &[u8]) -> [u8; 32] {
        Sha256::digest(data).into()
    }
}
