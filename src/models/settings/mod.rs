// Settings module
// Dashboard preferences loaded from the TOML config file

use serde::{Deserialize, Serialize};

/// How the month grid handles months that spill into a sixth week
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GridPadding {
    /// Grow the grid to 42 cells so every day of the month is shown
    #[default]
    Extend,
    /// Cap the grid at 35 cells, dropping the month's trailing days
    Truncate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardSettings {
    /// Rows per table page when the view mounts
    pub page_size: usize,
    /// Page sizes offered by the size picker
    pub page_size_options: Vec<usize>,
    pub grid_padding: GridPadding,
    /// How long a notification stays visible
    pub notification_seconds: u64,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            page_size: 5,
            page_size_options: vec![5, 10, 15, 20],
            grid_padding: GridPadding::Extend,
            notification_seconds: 3,
        }
    }
}

impl DashboardSettings {
    pub fn validate(&self) -> Result<(), String> {
        if self.page_size == 0 {
            return Err("Page size must be greater than zero".to_string());
        }

        if self.page_size_options.iter().any(|size| *size == 0) {
            return Err("Page size options must be greater than zero".to_string());
        }

        if !self.page_size_options.is_empty() && !self.page_size_options.contains(&self.page_size)
        {
            return Err(format!(
                "Page size {} is not one of the offered sizes {:?}",
                self.page_size, self.page_size_options
            ));
        }

        if self.notification_seconds == 0 {
            return Err("Notification duration must be at least one second".to_string());
        }

        Ok(())
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
