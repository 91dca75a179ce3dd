use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const DEFAULT_PER_PAGE: usize = 12;

/// User preferences for the catalog view.
///
/// Field names in the file are the same raw strings the filter form uses, so
/// `default_sort_field = "views"` behaves like picking "views" in the form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub default_sort_field: Option<String>,
    #[serde(default)]
    pub default_sort_order: Option<String>,
    #[serde(default)]
    pub per_page: Option<usize>,
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/catalog/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("catalog/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("catalog\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    /// Load the user config, falling back to defaults when the file is
    /// missing or unreadable.
    pub fn load() -> Self {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                if let Ok(content) = std::fs::read_to_string(&config_path) {
                    return Self::from_toml_str(&content);
                }
            }
        }
        Self::default()
    }

    pub fn from_toml_str(content: &str) -> Self {
        toml::from_str(content).unwrap_or_default()
    }

    pub fn effective_per_page(&self) -> usize {
        self.per_page.unwrap_or(DEFAULT_PER_PAGE)
    }

    pub fn effective_sort_order(&self) -> &str {
        self.default_sort_order.as_deref().unwrap_or("asc")
    }
}
