use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::css::ExportMode;
use crate::preset::{CatalogError, PresetCatalog};
use crate::state::Store;

/// Environment variable naming a JSON config file
pub const CONFIG_ENV: &str = "STYLE_STUDIO_CONFIG";

/// Selector of the template element in the preview
pub const DEFAULT_SELECTOR: &str = ".preview-card";

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Startup settings for the editor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // missing fields fall back to defaults
pub struct EditorConfig {
    pub selector: String,
    /// Preset to show at startup, the catalog's first preset if unset
    pub initial_preset: Option<String>,
    /// JSON preset catalog to use instead of the built-in one
    pub presets_path: Option<PathBuf>,
    pub export_mode: ExportMode,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            selector: DEFAULT_SELECTOR.to_string(),
            initial_preset: None,
            presets_path: None,
            export_mode: ExportMode::default(),
        }
    }
}

impl EditorConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Loads the file named by `STYLE_STUDIO_CONFIG`, falling back to
    /// defaults when the variable is unset or the file is unusable.
    pub fn from_env() -> Self {
        let Some(path) = std::env::var_os(CONFIG_ENV) else {
            return Self::default();
        };

        match Self::from_file(&path) {
            Ok(config) => {
                log::info!("Loaded config from {}", Path::new(&path).display());
                config
            }
            Err(err) => {
                log::warn!("Ignoring config: {}", err);
                Self::default()
            }
        }
    }

    pub fn load_catalog(&self) -> Result<PresetCatalog, ConfigError> {
        let catalog = match &self.presets_path {
            Some(path) => PresetCatalog::from_file(path)?,
            None => PresetCatalog::builtin()?,
        };
        Ok(catalog)
    }

    pub fn build_store(&self) -> Result<Store, ConfigError> {
        let catalog = self.load_catalog()?;
        Ok(Store::new(catalog, self.selector.clone(), self.initial_preset.as_deref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = EditorConfig::from_json(r#"{ "initial_preset": "hero" }"#).unwrap();
        assert_eq!(config.selector, DEFAULT_SELECTOR);
        assert_eq!(config.initial_preset.as_deref(), Some("hero"));
        assert_eq!(config.export_mode, ExportMode::Global);
    }

    #[test]
    fn test_export_mode_is_lowercase() {
        let config = EditorConfig::from_json(r#"{ "export_mode": "scoped" }"#).unwrap();
        assert_eq!(config.export_mode, ExportMode::Scoped);
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let result = EditorConfig::from_file("/nonexistent/style-studio.json");
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }
}
