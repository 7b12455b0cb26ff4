#![warn(clippy::all, rust_2018_idioms)]

pub mod action;
pub mod app;
pub mod config;
pub mod controls;
pub mod css;
pub mod diff;
pub mod document;
pub mod event;
pub mod history;
pub mod panels;
pub mod preset;
pub mod property_map;
pub mod state;

pub use action::EditorAction;
pub use app::StyleStudioApp;
pub use config::EditorConfig;
pub use document::EditorDocument;
pub use history::HistoryLog;
pub use preset::{Preset, PresetCatalog};
pub use property_map::PropertyMap;
pub use state::{PresetTag, StateSnapshot, Store};
