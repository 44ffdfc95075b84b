// src/config/defaults.rs
use crate::config::app::Security;
use crate::consts::DEFAULT_PASSWORD_LENGTH;

pub fn default_security() -> Security {
    Security {
        embed_password: true,
        password_length: DEFAULT_PASSWORD_LENGTH,
    }
}
