use std::fmt;

use serde::Serialize;

use crate::diff::diff;
use crate::preset::CUSTOM_TAG;
use crate::property_map::PropertyMap;

/// Which preset the document currently matches
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub enum PresetTag {
    /// Properties equal the baseline of this preset
    Preset(String),
    /// Properties diverge from the baseline
    Custom,
}

impl PresetTag {
    pub fn as_str(&self) -> &str {
        match self {
            PresetTag::Preset(id) => id,
            PresetTag::Custom => CUSTOM_TAG,
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, PresetTag::Custom)
    }
}

impl fmt::Display for PresetTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<PresetTag> for String {
    fn from(tag: PresetTag) -> Self {
        match tag {
            PresetTag::Preset(id) => id,
            PresetTag::Custom => CUSTOM_TAG.to_string(),
        }
    }
}

/// Owned copy of the editor state handed to readers and subscribers.
///
/// Snapshots share nothing with the store, so a subscriber can keep or
/// modify its copy freely.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StateSnapshot {
    pub selector: String,
    pub properties: PropertyMap,
    pub baseline: PropertyMap,
    pub baseline_preset_id: String,
    pub active_preset: PresetTag,
    pub can_undo: bool,
    pub can_redo: bool,
}

impl StateSnapshot {
    /// Properties whose value differs from the baseline
    pub fn modified(&self) -> PropertyMap {
        diff(&self.properties, &self.baseline)
    }
}
