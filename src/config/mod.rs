// src/config/mod.rs
//! Configuration system for cryptixel-core
//!
//! Central, lazy-loaded global config with TOML + env overrides.

pub use app::{load, Config, Security};

mod app;
mod defaults;
