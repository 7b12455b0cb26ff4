//! egui panels. Each panel reads a view derived from the latest state
//! snapshot and returns the actions the user triggered during the frame.

pub mod controls_panel;
pub mod export_panel;
pub mod inspector_panel;
pub mod preview_panel;
pub mod toolbar;

use std::cell::RefCell;
use std::rc::Rc;

use crate::state::{StateSnapshot, Store};

/// A view value kept current by a store subscription
pub type Mirror<T> = Rc<RefCell<T>>;

/// Subscribes to `store` and keeps `derive(snapshot)` up to date
pub fn mirror<T, F>(store: &mut Store, derive: F) -> Mirror<T>
where
    T: 'static,
    F: Fn(&StateSnapshot) -> T + 'static,
{
    let cell = Rc::new(RefCell::new(derive(&store.get_state())));
    let sink = Rc::clone(&cell);
    store.subscribe(move |snapshot: StateSnapshot| {
        *sink.borrow_mut() = derive(&snapshot);
    });
    cell
}
