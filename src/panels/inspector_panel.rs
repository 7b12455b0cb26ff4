use crate::css::{collect_warnings, rule_markup, specificity, Specificity, Warning};
use crate::state::StateSnapshot;

/// One modified property with its baseline and current value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffRow {
    pub property: String,
    /// `None` when the baseline does not declare the property
    pub before: Option<String>,
    pub after: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InspectorView {
    pub selector: String,
    pub specificity: Specificity,
    /// Rule for the modified properties, `None` when nothing is modified
    pub markup: Option<String>,
    pub rows: Vec<DiffRow>,
    pub warnings: Vec<Warning>,
}

impl InspectorView {
    pub fn from_snapshot(snapshot: &StateSnapshot) -> Self {
        let modified = snapshot.modified();

        let rows = modified
            .iter()
            .map(|(property, value)| DiffRow {
                property: property.to_string(),
                before: snapshot.baseline.get(property).map(str::to_string),
                after: value.to_string(),
            })
            .collect();

        Self {
            selector: snapshot.selector.clone(),
            specificity: specificity(&snapshot.selector),
            markup: (!modified.is_empty()).then(|| rule_markup(&snapshot.selector, &modified)),
            rows,
            warnings: collect_warnings(&snapshot.properties, &modified),
        }
    }
}

pub fn show(ui: &mut egui::Ui, view: &InspectorView) {
    ui.heading("Rule");
    match &view.markup {
        Some(markup) => {
            ui.strong(&view.selector);
            ui.label(format!("Specificity: {}", view.specificity));
            ui.code(markup);
        }
        None => {
            ui.weak("No deviations from the preset.");
        }
    }

    ui.separator();
    ui.heading("Changes");
    if view.rows.is_empty() {
        ui.weak("No changes yet.");
    } else {
        egui::Grid::new("diff_grid")
            .num_columns(3)
            .striped(true)
            .show(ui, |ui| {
                ui.strong("Property");
                ui.strong("Before");
                ui.strong("After");
                ui.end_row();

                for row in &view.rows {
                    ui.monospace(&row.property);
                    ui.monospace(row.before.as_deref().unwrap_or("—"));
                    ui.monospace(&row.after);
                    ui.end_row();
                }
            });
    }

    ui.separator();
    ui.heading("Warnings");
    if view.warnings.is_empty() {
        ui.weak("No problems detected.");
    }
    for warning in &view.warnings {
        ui.colored_label(ui.visuals().warn_fg_color, warning.title);
        ui.label(warning.description);
    }
}
