use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::property_map::PropertyMap;

/// Tag value reserved for documents that no longer match their preset
pub const CUSTOM_TAG: &str = "custom";

const BUILTIN_PRESETS: &str = include_str!("../assets/presets.json");

/// Errors that can occur while loading a preset catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to parse preset catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to read preset catalog: {0}")]
    Read(#[from] std::io::Error),

    #[error("Preset catalog is empty")]
    Empty,

    #[error("Duplicate preset id: {0}")]
    DuplicateId(String),

    #[error("Preset id \"{0}\" is reserved")]
    ReservedId(String),

    #[error("Preset \"{preset}\" does not declare the same properties as \"{reference}\"")]
    InconsistentKeys { preset: String, reference: String },
}

/// A named template of property values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub description: String,
    pub properties: PropertyMap,
}

/// Ordered, validated, read-only list of presets.
///
/// Every preset declares the same set of property names, which forms the
/// editor's known vocabulary. The catalog is never empty.
#[derive(Debug, Clone)]
pub struct PresetCatalog {
    presets: Vec<Preset>,
}

impl PresetCatalog {
    /// Validates and wraps a list of presets
    pub fn new(presets: Vec<Preset>) -> Result<Self, CatalogError> {
        let reference = presets.first().ok_or(CatalogError::Empty)?;
        let vocabulary: HashSet<&str> = reference.properties.keys().collect();

        let mut seen = HashSet::new();
        for preset in &presets {
            if preset.id == CUSTOM_TAG {
                return Err(CatalogError::ReservedId(preset.id.clone()));
            }
            if !seen.insert(preset.id.as_str()) {
                return Err(CatalogError::DuplicateId(preset.id.clone()));
            }
            let keys: HashSet<&str> = preset.properties.keys().collect();
            if keys != vocabulary {
                return Err(CatalogError::InconsistentKeys {
                    preset: preset.id.clone(),
                    reference: reference.id.clone(),
                });
            }
        }

        Ok(Self { presets })
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let presets: Vec<Preset> = serde_json::from_str(json)?;
        Self::new(presets)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let catalog = Self::from_json(&json)?;
        log::info!("Loaded {} presets from {}", catalog.presets.len(), path.display());
        Ok(catalog)
    }

    /// The catalog shipped with the application
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_PRESETS)
    }

    pub fn list(&self) -> &[Preset] {
        &self.presets
    }

    /// Finds a preset by id. Unknown ids are a normal outcome.
    pub fn lookup(&self, id: &str) -> Option<&Preset> {
        self.presets.iter().find(|preset| preset.id == id)
    }

    pub fn first(&self) -> &Preset {
        &self.presets[0]
    }

    /// Property names declared by every preset, in declaration order
    pub fn vocabulary(&self) -> impl Iterator<Item = &str> {
        self.first().properties.keys()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn preset(id: &str, properties: PropertyMap) -> Preset {
        Preset {
            id: id.to_string(),
            label: id.to_uppercase(),
            description: String::new(),
            properties,
        }
    }

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = PresetCatalog::builtin().unwrap();
        let ids: Vec<_> = catalog.list().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["starter", "hero", "feature-grid"]);
        assert_eq!(catalog.vocabulary().count(), 16);
        assert_eq!(catalog.first().properties.get("gap"), Some("1rem"));
    }

    #[test]
    fn test_lookup_unknown_is_none() {
        let catalog = PresetCatalog::builtin().unwrap();
        assert!(catalog.lookup("hero").is_some());
        assert!(catalog.lookup("nope").is_none());
    }

    #[test]
    fn test_rejects_empty() {
        assert!(matches!(PresetCatalog::new(Vec::new()), Err(CatalogError::Empty)));
    }

    #[test]
    fn test_rejects_duplicate_and_reserved_ids() {
        let props = PropertyMap::from([("gap", "1rem")]);

        let duplicate =
            PresetCatalog::new(vec![preset("a", props.clone()), preset("a", props.clone())]);
        assert!(matches!(duplicate, Err(CatalogError::DuplicateId(id)) if id == "a"));

        let reserved = PresetCatalog::new(vec![preset(CUSTOM_TAG, props)]);
        assert!(matches!(reserved, Err(CatalogError::ReservedId(_))));
    }

    #[test]
    fn test_rejects_inconsistent_vocabulary() {
        let result = PresetCatalog::new(vec![
            preset("a", PropertyMap::from([("gap", "1rem")])),
            preset("b", PropertyMap::from([("padding", "1rem")])),
        ]);
        assert!(matches!(
            result,
            Err(CatalogError::InconsistentKeys { preset, .. }) if preset == "b"
        ));
    }
}
