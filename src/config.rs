use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub tui: TuiConfig,
    pub catalog: CatalogConfig,
    pub disguise: DisguiseConfig,
}

/// TUI-specific configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Tick interval in milliseconds for the event loop.
    pub tick_rate_ms: u64,
    /// Enable mouse support (click the cover's resume control).
    pub mouse_enabled: bool,
}

/// Where the module catalog comes from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// JSON catalog file. The bundled catalog is used when unset.
    pub path: Option<PathBuf>,
}

/// Disguise trigger configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisguiseConfig {
    /// Key spec that toggles the cover document, e.g. `"esc"`, `"f12"`, `"ctrl+g"`.
    pub trigger: String,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 50,
            mouse_enabled: false,
        }
    }
}

impl Default for DisguiseConfig {
    fn default() -> Self {
        Self {
            trigger: "esc".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from `~/.config/covershelf/config.toml`.
    /// Returns `Default` if the file is missing or unparseable.
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from an explicit path, falling back to defaults.
    pub fn load_from(config_path: &Path) -> Self {
        match std::fs::read_to_string(config_path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => {
                    log::info!("Loaded config from {}", config_path.display());
                    config
                }
                Err(e) => {
                    log::warn!(
                        "Failed to parse config at {}: {e}; using defaults",
                        config_path.display()
                    );
                    Self::default()
                }
            },
            Err(_) => {
                log::debug!(
                    "No config file at {}; using defaults",
                    config_path.display()
                );
                Self::default()
            }
        }
    }

    /// Catalog file override, if any.
    pub fn catalog_path(&self) -> Option<&Path> {
        self.catalog.path.as_deref()
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .map(|d| d.join("covershelf").join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }
}
