use crate::diff::diff;
use crate::preset::Preset;
use crate::property_map::PropertyMap;
use crate::state::PresetTag;

/// The live style document: one selector, its properties, and the preset
/// baseline they are compared against.
///
/// The active preset tag is derived on every mutation and cannot be set
/// directly. It names the baseline preset while `properties` matches
/// `baseline`, and is [`PresetTag::Custom`] otherwise.
#[derive(Debug, Clone)]
pub struct EditorDocument {
    selector: String,
    properties: PropertyMap,
    baseline: PropertyMap,
    baseline_preset_id: String,
    active_preset: PresetTag,
}

impl EditorDocument {
    pub fn new(selector: impl Into<String>, preset: &Preset) -> Self {
        Self {
            selector: selector.into(),
            properties: preset.properties.clone(),
            baseline: preset.properties.clone(),
            baseline_preset_id: preset.id.clone(),
            active_preset: PresetTag::Preset(preset.id.clone()),
        }
    }

    pub fn selector(&self) -> &str {
        &self.selector
    }

    pub fn properties(&self) -> &PropertyMap {
        &self.properties
    }

    pub fn baseline(&self) -> &PropertyMap {
        &self.baseline
    }

    pub fn baseline_preset_id(&self) -> &str {
        &self.baseline_preset_id
    }

    pub fn active_preset(&self) -> &PresetTag {
        &self.active_preset
    }

    /// Properties whose value differs from the baseline
    pub fn modified(&self) -> PropertyMap {
        diff(&self.properties, &self.baseline)
    }

    /// Returns `false` if the selector was already `selector`
    pub fn set_selector(&mut self, selector: &str) -> bool {
        if self.selector == selector {
            return false;
        }
        self.selector = selector.to_string();
        true
    }

    /// Sets one property, adding it if unknown.
    /// Returns `false` if the value was already in place.
    pub fn set_property(&mut self, name: &str, value: &str) -> bool {
        if self.properties.get(name) == Some(value) {
            return false;
        }
        self.properties.insert(name, value);
        self.retag();
        true
    }

    /// Replaces all properties, e.g. with a snapshot from history
    pub fn replace_properties(&mut self, properties: PropertyMap) {
        self.properties = properties;
        self.retag();
    }

    /// Makes `preset` the new baseline and resets properties to it
    pub fn rebase(&mut self, preset: &Preset) {
        self.baseline = preset.properties.clone();
        self.properties = preset.properties.clone();
        self.baseline_preset_id = preset.id.clone();
        self.active_preset = PresetTag::Preset(preset.id.clone());
    }

    /// Drops all edits, restoring the baseline
    pub fn revert(&mut self) {
        self.properties = self.baseline.clone();
        self.active_preset = PresetTag::Preset(self.baseline_preset_id.clone());
    }

    fn retag(&mut self) {
        self.active_preset = if self.properties.equivalent(&self.baseline) {
            PresetTag::Preset(self.baseline_preset_id.clone())
        } else {
            PresetTag::Custom
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn starter() -> Preset {
        Preset {
            id: "starter".to_string(),
            label: "Starter".to_string(),
            description: String::new(),
            properties: PropertyMap::from([("gap", "1rem"), ("display", "flex")]),
        }
    }

    #[test]
    fn test_edit_and_restore_retags() {
        let mut document = EditorDocument::new(".card", &starter());
        assert_eq!(document.active_preset(), &PresetTag::Preset("starter".into()));

        assert!(document.set_property("gap", "2rem"));
        assert_eq!(document.active_preset(), &PresetTag::Custom);
        assert!(!document.set_property("gap", "2rem"));

        assert!(document.set_property("gap", "1rem"));
        assert_eq!(document.active_preset(), &PresetTag::Preset("starter".into()));
    }

    #[test]
    fn test_unknown_empty_property_keeps_tag() {
        let mut document = EditorDocument::new(".card", &starter());
        assert!(document.set_property("outline", ""));
        assert!(document.properties().contains_key("outline"));
        assert_eq!(document.active_preset(), &PresetTag::Preset("starter".into()));
        assert!(document.modified().is_empty());
    }

    #[test]
    fn test_revert_restores_baseline() {
        let mut document = EditorDocument::new(".card", &starter());
        document.set_property("display", "grid");
        document.revert();

        assert_eq!(document.properties(), document.baseline());
        assert_eq!(document.active_preset(), &PresetTag::Preset("starter".into()));
    }
}
