//! The editor's state store.
//!
//! `Store` owns the document, its undo history, the preset catalog and the
//! subscriber list. Every mutator runs to completion, including delivery to
//! all subscribers, before it returns. Calls that have nothing to do, such as
//! an unknown preset id or undo at the start of history, are silent no-ops.
//!
//! # Example
//!
//! ```rust
//! use style_studio::preset::PresetCatalog;
//! use style_studio::state::Store;
//!
//! let catalog = PresetCatalog::builtin().unwrap();
//! let mut store = Store::new(catalog, ".preview-card", Some("starter"));
//!
//! store.update_property("gap", "2rem");
//! assert!(store.get_state().active_preset.is_custom());
//!
//! store.undo();
//! assert_eq!(store.get_state().properties.get("gap"), Some("1rem"));
//! ```

use super::{PresetTag, StateSnapshot};
use crate::action::EditorAction;
use crate::document::EditorDocument;
use crate::event::{NotificationBus, StateSubscriber, SubscriptionId};
use crate::history::HistoryLog;
use crate::preset::PresetCatalog;
use crate::property_map::PropertyMap;

#[derive(Debug)]
pub struct Store {
    catalog: PresetCatalog,
    document: EditorDocument,
    history: HistoryLog,
    bus: NotificationBus,
}

impl Store {
    /// Creates a store showing `initial_preset`, or the first preset of the
    /// catalog when the id is absent or unknown.
    pub fn new(
        catalog: PresetCatalog,
        selector: impl Into<String>,
        initial_preset: Option<&str>,
    ) -> Self {
        let preset = match initial_preset {
            Some(id) => catalog.lookup(id).unwrap_or_else(|| {
                log::warn!("Unknown initial preset \"{}\", using \"{}\"", id, catalog.first().id);
                catalog.first()
            }),
            None => catalog.first(),
        };

        let document = EditorDocument::new(selector, preset);
        let history = HistoryLog::new(document.properties().clone());

        Self {
            catalog,
            document,
            history,
            bus: NotificationBus::new(),
        }
    }

    pub fn presets(&self) -> &PresetCatalog {
        &self.catalog
    }

    pub fn get_state(&self) -> StateSnapshot {
        StateSnapshot {
            selector: self.document.selector().to_string(),
            properties: self.document.properties().clone(),
            baseline: self.document.baseline().clone(),
            baseline_preset_id: self.document.baseline_preset_id().to_string(),
            active_preset: self.document.active_preset().clone(),
            can_undo: self.can_undo(),
            can_redo: self.can_redo(),
        }
    }

    pub fn get_modified_properties(&self) -> PropertyMap {
        self.document.modified()
    }

    pub fn active_preset(&self) -> &PresetTag {
        self.document.active_preset()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_move_back()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_move_forward()
    }

    /// Registers a subscriber and delivers the current state to it right away
    pub fn subscribe(&mut self, subscriber: impl StateSubscriber + 'static) -> SubscriptionId {
        let current = self.get_state();
        self.bus.subscribe(Box::new(subscriber), &current)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.bus.unsubscribe(id)
    }

    pub fn update_property(&mut self, name: &str, value: &str) {
        if !self.document.set_property(name, value) {
            log::trace!("{} already set to {:?}", name, value);
            return;
        }

        if self.history.record(self.document.properties()) {
            log::debug!("Set {} to {:?} ({})", name, value, self.document.active_preset());
            self.notify();
        }
    }

    pub fn apply_preset(&mut self, id: &str) {
        let Some(preset) = self.catalog.lookup(id) else {
            log::trace!("Ignoring unknown preset {:?}", id);
            return;
        };

        self.document.rebase(preset);
        self.history.reset(self.document.properties());
        log::debug!("Applied preset {}", id);
        self.notify();
    }

    pub fn reset_to_baseline(&mut self) {
        self.document.revert();
        self.history.reset(self.document.properties());
        log::debug!("Reset to preset {}", self.document.baseline_preset_id());
        self.notify();
    }

    pub fn undo(&mut self) {
        let Some(snapshot) = self.history.move_back() else {
            log::trace!("Nothing to undo");
            return;
        };

        self.document.replace_properties(snapshot.clone());
        log::debug!("Undo to entry {}", self.history.pointer());
        self.notify();
    }

    pub fn redo(&mut self) {
        let Some(snapshot) = self.history.move_forward() else {
            log::trace!("Nothing to redo");
            return;
        };

        self.document.replace_properties(snapshot.clone());
        log::debug!("Redo to entry {}", self.history.pointer());
        self.notify();
    }

    /// Changes the selector the properties apply to. History is unaffected.
    pub fn set_selector(&mut self, selector: &str) {
        if self.document.set_selector(selector) {
            log::debug!("Selector changed to {}", selector);
            self.notify();
        }
    }

    pub fn dispatch(&mut self, action: EditorAction) {
        log::trace!("Dispatching {}", action.name());
        match action {
            EditorAction::UpdateProperty { name, value } => self.update_property(&name, &value),
            EditorAction::ApplyPreset(id) => self.apply_preset(&id),
            EditorAction::Undo => self.undo(),
            EditorAction::Redo => self.redo(),
            EditorAction::ResetToBaseline => self.reset_to_baseline(),
        }
    }

    fn notify(&mut self) {
        debug_assert_eq!(
            self.history.current(),
            self.document.properties(),
            "history entry diverged from live properties"
        );

        let snapshot = self.get_state();
        if log::log_enabled!(log::Level::Trace) {
            if let Ok(json) = serde_json::to_string(&snapshot) {
                log::trace!("Notifying {} subscribers: {}", self.bus.len(), json);
            }
        }
        self.bus.notify(&snapshot);
    }
}
