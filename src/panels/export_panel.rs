use crate::css::{build_code, ExportMode};
use crate::property_map::PropertyMap;
use crate::state::StateSnapshot;

#[derive(Debug, Clone, PartialEq)]
pub struct ExportView {
    pub selector: String,
    pub modified: PropertyMap,
}

impl ExportView {
    pub fn from_snapshot(snapshot: &StateSnapshot) -> Self {
        Self {
            selector: snapshot.selector.clone(),
            modified: snapshot.modified(),
        }
    }

    pub fn code(&self, mode: ExportMode) -> String {
        build_code(mode, &self.selector, &self.modified)
    }
}

/// Draws the export mode selector and generated code
pub fn show(ui: &mut egui::Ui, view: &ExportView, mode: &mut ExportMode) {
    ui.heading("Export");

    ui.horizontal(|ui| {
        for option in ExportMode::ALL {
            if ui.selectable_value(mode, option, option.label()).changed() {
                log::info!("Export mode selected from UI: {}", option.label());
            }
        }
    });

    let code = view.code(*mode);
    if view.modified.is_empty() {
        ui.weak(&code);
    } else {
        ui.code(&code);
    }

    if ui
        .add_enabled(!view.modified.is_empty(), egui::Button::new("Copy"))
        .clicked()
    {
        ui.ctx().copy_text(code);
    }
}
