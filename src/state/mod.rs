mod snapshot;
mod store;

pub use snapshot::{PresetTag, StateSnapshot};
pub use store::Store;
