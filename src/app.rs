use egui::{Key, Modifiers};

use crate::action::EditorAction;
use crate::config::{ConfigError, EditorConfig};
use crate::css::ExportMode;
use crate::panels::controls_panel;
use crate::panels::export_panel::{self, ExportView};
use crate::panels::inspector_panel::{self, InspectorView};
use crate::panels::preview_panel::{self, PreviewStyle};
use crate::panels::toolbar::{self, ToolbarView};
use crate::panels::{mirror, Mirror};
use crate::property_map::PropertyMap;
use crate::state::Store;

pub struct StyleStudioApp {
    store: Store,
    export_mode: ExportMode,
    toolbar: Mirror<ToolbarView>,
    controls: Mirror<PropertyMap>,
    preview: Mirror<PreviewStyle>,
    inspector: Mirror<InspectorView>,
    export: Mirror<ExportView>,
}

impl StyleStudioApp {
    /// Called once before the first frame.
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        config: EditorConfig,
    ) -> Result<Self, ConfigError> {
        let store = config.build_store()?;
        log::info!(
            "Editing {} with preset {}",
            store.get_state().selector,
            store.active_preset()
        );
        Ok(Self::with_store(store, config.export_mode))
    }

    /// Wires every panel to `store`
    pub fn with_store(mut store: Store, export_mode: ExportMode) -> Self {
        let toolbar = mirror(&mut store, ToolbarView::from_snapshot);
        let controls = mirror(&mut store, |snapshot| snapshot.properties.clone());
        let preview = mirror(&mut store, |snapshot| {
            PreviewStyle::from_properties(&snapshot.properties)
        });
        let inspector = mirror(&mut store, InspectorView::from_snapshot);
        let export = mirror(&mut store, ExportView::from_snapshot);

        Self {
            store,
            export_mode,
            toolbar,
            controls,
            preview,
            inspector,
            export,
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Applies actions in order, as if they came from the panels
    pub fn apply(&mut self, actions: impl IntoIterator<Item = EditorAction>) {
        for action in actions {
            self.store.dispatch(action);
        }
    }

    fn shortcut_actions(ctx: &egui::Context) -> Vec<EditorAction> {
        ctx.input_mut(|input| {
            // Redo first, the undo shortcut would also match with shift held
            if input.consume_key(Modifiers::COMMAND | Modifiers::SHIFT, Key::Z)
                || input.consume_key(Modifiers::COMMAND, Key::Y)
            {
                vec![EditorAction::Redo]
            } else if input.consume_key(Modifiers::COMMAND, Key::Z) {
                vec![EditorAction::Undo]
            } else {
                Vec::new()
            }
        })
    }
}

impl eframe::App for StyleStudioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut actions = Self::shortcut_actions(ctx);

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            actions.extend(toolbar::show(ui, &self.toolbar.borrow(), self.store.presets()));
        });

        egui::SidePanel::left("controls_panel")
            .resizable(true)
            .default_width(320.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    actions.extend(controls_panel::show(ui, &self.controls.borrow()));
                });
            });

        egui::SidePanel::right("inspector_panel")
            .resizable(true)
            .default_width(360.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    inspector_panel::show(ui, &self.inspector.borrow());
                    ui.separator();
                    export_panel::show(ui, &self.export.borrow(), &mut self.export_mode);
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            preview_panel::show(ui, &self.preview.borrow());
        });

        // Panels hold snapshot borrows during the UI pass, so mutate afterwards
        self.apply(actions);
    }
}
