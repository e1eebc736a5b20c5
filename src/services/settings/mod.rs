//! Dashboard settings persistence (TOML file in the platform config dir).

mod service;

pub use service::{SettingsService, CONFIG_PATH_ENV};
