use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::RentcarResult;
use crate::services::catalog::Catalog;

/// Log levels accepted in `general.log_level`
const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub catalog: CatalogConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub log_level: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Catalog file (TOML or JSON). The built-in sample is used when unset.
    pub path: Option<String>,
}

impl CatalogConfig {
    /// Catalog path with `~` and environment variables expanded
    pub fn resolved_path(&self) -> Option<PathBuf> {
        self.path.as_deref().map(|path| {
            let expanded = shellexpand::full(path)
                .map(|p| p.into_owned())
                .unwrap_or_else(|_| path.to_string());
            PathBuf::from(expanded)
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub currency_symbol: String,
    pub price_unit: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            price_unit: "/ month".to_string(),
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .map(|h| h.join(".config"))
                    .unwrap_or_else(|| PathBuf::from("/tmp"))
            })
            .join("rentcar")
            .join("config.toml")
    }

    /// Load config from `path`
    pub fn load_from(path: &Path) -> RentcarResult<Self> {
        let content = fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&content)?;
        config.validate();
        Ok(config)
    }

    /// Normalize values that would otherwise be rejected downstream
    fn validate(&mut self) {
        let level = self.general.log_level.trim().to_lowercase();
        if LOG_LEVELS.contains(&level.as_str()) {
            self.general.log_level = level;
        } else {
            tracing::warn!("Unknown log level '{}', using info", self.general.log_level);
            self.general.log_level = "info".to_string();
        }

        if self
            .catalog
            .path
            .as_deref()
            .is_some_and(|p| p.trim().is_empty())
        {
            self.catalog.path = None;
        }
    }

    /// Save config to `path`
    pub fn save_to(&self, path: &Path) -> RentcarResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;

        Ok(())
    }

    /// The configured catalog, or the built-in sample when none is set
    pub fn load_catalog(&self) -> RentcarResult<Catalog> {
        match self.catalog.resolved_path() {
            Some(path) => Catalog::load(&path),
            None => Ok(Catalog::sample().clone()),
        }
    }
}
