// src/config/app.rs
use super::defaults::*;
use once_cell::sync::OnceCell;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub security: Security,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Security {
    /// Carry the password inside the serialized package. Observed legacy
    /// behavior: anyone holding the package can decrypt it.
    pub embed_password: bool,
    /// Length of generated passwords when the caller supplies none
    pub password_length: usize,
}

static CONFIG: OnceCell<Config> = OnceCell::new();

/// Load config at runtime — falls back to defaults if missing
pub fn load() -> &'static Config {
    CONFIG.get_or_init(|| {
        let config_path =
            std::env::var("CRYPTIXEL_CONFIG").unwrap_or_else(|_| "cryptixel.toml".to_string());

        if std::path::Path::new(&config_path).exists() {
            let content =
                std::fs::read_to_string(&config_path).expect("Failed to read cryptixel.toml");
            toml::from_str(&content).expect("Invalid TOML in cryptixel.toml")
        } else {
            Config {
                security: default_security(),
            }
        }
    })
}
