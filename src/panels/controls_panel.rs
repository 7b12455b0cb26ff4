use crate::action::EditorAction;
use crate::controls::{
    color_string, color_value, format_range_output, ControlKind, ControlSpec, CONTROLS,
};
use crate::property_map::PropertyMap;

pub fn show(ui: &mut egui::Ui, properties: &PropertyMap) -> Vec<EditorAction> {
    let mut actions = Vec::new();

    ui.heading("Properties");
    ui.separator();

    egui::Grid::new("controls_grid")
        .num_columns(3)
        .spacing([12.0, 6.0])
        .striped(true)
        .show(ui, |ui| {
            for spec in CONTROLS {
                let stored = properties.get_or_empty(spec.property);
                ui.label(spec.label);
                if let Some(value) = control(ui, spec, stored) {
                    actions.push(EditorAction::update(spec.property, value));
                }
                ui.end_row();
            }
        });

    actions
}

/// Draws one control and its output label, returning the new stored value if it changed
fn control(ui: &mut egui::Ui, spec: &ControlSpec, stored: &str) -> Option<String> {
    let mut changed = None;

    match spec.kind {
        ControlKind::Select(options) => {
            egui::ComboBox::from_id_salt(spec.property)
                .selected_text(stored)
                .show_ui(ui, |ui| {
                    for &option in options {
                        if ui.selectable_label(stored == option, option).clicked() {
                            changed = Some(option.to_string());
                        }
                    }
                });
            ui.label("");
        }
        ControlKind::Range { min, max, step, unit } => {
            let mut value = spec.kind.range_value(stored);
            let slider = egui::Slider::new(&mut value, min..=max)
                .step_by(step as f64)
                .show_value(false);
            if ui.add(slider).changed() {
                changed = Some(spec.kind.range_string(value));
            }
            ui.monospace(format_range_output(stored, unit));
        }
        ControlKind::Color => {
            let mut color = color_value(stored);
            if ui.color_edit_button_srgba(&mut color).changed() {
                changed = Some(color_string(color));
            }
            ui.monospace(stored);
        }
        ControlKind::Toggle { .. } => {
            let mut checked = spec.kind.is_toggled(stored);
            if ui.checkbox(&mut checked, "").changed() {
                changed = Some(spec.kind.toggle_string(checked));
            }
            ui.label(if checked { "on" } else { "off" });
        }
        ControlKind::Text => {
            let mut text = stored.to_string();
            if ui.text_edit_singleline(&mut text).changed() {
                changed = Some(text);
            }
            ui.label("");
        }
    }

    changed
}
