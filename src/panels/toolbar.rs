use crate::action::EditorAction;
use crate::preset::PresetCatalog;
use crate::state::{PresetTag, StateSnapshot};

#[derive(Debug, Clone, PartialEq)]
pub struct ToolbarView {
    pub active_preset: PresetTag,
    pub can_undo: bool,
    pub can_redo: bool,
}

impl ToolbarView {
    pub fn from_snapshot(snapshot: &StateSnapshot) -> Self {
        Self {
            active_preset: snapshot.active_preset.clone(),
            can_undo: snapshot.can_undo,
            can_redo: snapshot.can_redo,
        }
    }
}

pub fn show(ui: &mut egui::Ui, view: &ToolbarView, presets: &PresetCatalog) -> Vec<EditorAction> {
    let mut actions = Vec::new();

    ui.horizontal(|ui| {
        ui.label("Preset");

        let selected_text = match &view.active_preset {
            PresetTag::Preset(id) => presets
                .lookup(id)
                .map(|preset| preset.label.as_str())
                .unwrap_or(id.as_str()),
            PresetTag::Custom => "Custom",
        };

        egui::ComboBox::from_id_salt("preset_select")
            .selected_text(selected_text)
            .show_ui(ui, |ui| {
                for preset in presets.list() {
                    let selected = view.active_preset.as_str() == preset.id;
                    let response = ui
                        .selectable_label(selected, preset.label.as_str())
                        .on_hover_text(preset.description.as_str());
                    if response.clicked() {
                        log::info!("Preset selected from UI: {}", preset.id);
                        actions.push(EditorAction::ApplyPreset(preset.id.clone()));
                    }
                }
                if view.active_preset.is_custom() {
                    ui.add_enabled(false, egui::SelectableLabel::new(true, "Custom"));
                }
            });

        ui.separator();

        if ui.add_enabled(view.can_undo, egui::Button::new("Undo")).clicked() {
            actions.push(EditorAction::Undo);
        }
        if ui.add_enabled(view.can_redo, egui::Button::new("Redo")).clicked() {
            actions.push(EditorAction::Redo);
        }
        if ui.button("Reset").clicked() {
            actions.push(EditorAction::ResetToBaseline);
        }
    });

    actions
}
