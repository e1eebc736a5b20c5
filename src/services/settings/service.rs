use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;

use crate::models::settings::DashboardSettings;

/// Environment variable that points at an explicit config file
pub const CONFIG_PATH_ENV: &str = "SCHEDULE_DASHBOARD_CONFIG";

const CONFIG_FILE_NAME: &str = "config.toml";

/// Loads and stores dashboard settings as TOML.
pub struct SettingsService {
    path: Option<PathBuf>,
}

impl SettingsService {
    /// Service bound to the environment override or the platform config dir
    pub fn new() -> Self {
        Self {
            path: Self::default_config_path(),
        }
    }

    /// Service bound to an explicit file
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    pub fn default_config_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_PATH_ENV) {
            return Some(PathBuf::from(path));
        }

        ProjectDirs::from("com", "ScheduleDashboard", "ScheduleDashboard")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Load settings, falling back to defaults when no file exists
    pub fn load(&self) -> Result<DashboardSettings> {
        let Some(path) = self.path.as_deref() else {
            log::warn!("No config directory available, using default settings");
            return Ok(DashboardSettings::default());
        };

        if !path.exists() {
            log::info!("No config file at {:?}, using default settings", path);
            return Ok(DashboardSettings::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        let settings = DashboardSettings::from_toml(&content)
            .with_context(|| format!("Failed to parse config file {:?}", path))?;
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings in {:?}: {}", path, e))?;

        log::info!("Loaded settings from {:?}", path);
        Ok(settings)
    }

    /// Write settings to the bound file, creating parent directories
    pub fn save(&self, settings: &DashboardSettings) -> Result<()> {
        let path = self
            .path
            .as_deref()
            .ok_or_else(|| anyhow!("No config path available"))?;
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }

        let content = settings.to_toml().context("Failed to serialize settings")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file {:?}", path))?;
        Ok(())
    }
}

impl Default for SettingsService {
    fn default() -> Self {
        Self::new()
    }
}
