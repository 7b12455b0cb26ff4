/// Everything a user interface can ask the store to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorAction {
    /// Set one property, creating it if the preset does not declare it
    UpdateProperty { name: String, value: String },
    /// Switch baseline to a preset by id
    ApplyPreset(String),
    Undo,
    Redo,
    /// Discard all edits since the last preset was applied
    ResetToBaseline,
}

impl EditorAction {
    pub fn update(name: impl Into<String>, value: impl Into<String>) -> Self {
        EditorAction::UpdateProperty {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Short name used in log output
    pub fn name(&self) -> &'static str {
        match self {
            EditorAction::UpdateProperty { .. } => "update_property",
            EditorAction::ApplyPreset(_) => "apply_preset",
            EditorAction::Undo => "undo",
            EditorAction::Redo => "redo",
            EditorAction::ResetToBaseline => "reset_to_baseline",
        }
    }
}
