use style_studio::{PresetCatalog, StateSnapshot, Store};

const EDITS: [(&str, &str); 6] = [
    ("gap", "2rem"),
    ("padding", "3rem"),
    ("display", "grid"),
    ("gap", "0.5rem"),
    ("color", "#000000"),
    ("opacity", "0.8"),
];

fn create_store() -> Store {
    Store::new(PresetCatalog::builtin().unwrap(), ".preview-card", None)
}

// Tag names the baseline preset exactly when nothing is modified
fn assert_tag_consistent(store: &Store) {
    let state = store.get_state();
    let pristine = store.get_modified_properties().is_empty();
    assert_eq!(
        state.active_preset.as_str() == state.baseline_preset_id,
        pristine,
        "tag {} inconsistent with diff {:?}",
        state.active_preset,
        store.get_modified_properties()
    );
}

#[test]
fn test_last_write_wins_per_key() {
    let mut store = create_store();
    let baseline = store.get_state().baseline;

    for (name, value) in EDITS {
        store.update_property(name, value);
        assert_tag_consistent(&store);
    }

    let state = store.get_state();
    assert_eq!(state.properties.get("gap"), Some("0.5rem"));
    assert_eq!(state.properties.get("padding"), Some("3rem"));
    for (name, value) in baseline.iter() {
        if !EDITS.iter().any(|(edited, _)| *edited == name) {
            assert_eq!(state.properties.get(name), Some(value));
        }
    }
}

#[test]
fn test_undo_all_then_redo_all() {
    let mut store = create_store();
    let start = store.get_state();
    let mut states: Vec<StateSnapshot> = Vec::new();

    for (name, value) in EDITS {
        store.update_property(name, value);
        states.push(store.get_state());
    }

    for expected in states.iter().rev().skip(1) {
        store.undo();
        assert_eq!(store.get_state().properties, expected.properties);
        assert_tag_consistent(&store);
    }
    store.undo();
    assert_eq!(store.get_state().properties, start.properties);
    assert!(!store.can_undo());

    for expected in &states {
        store.redo();
        assert_eq!(store.get_state().properties, expected.properties);
        assert_tag_consistent(&store);
    }
    assert!(!store.can_redo());
}

#[test]
fn test_new_edit_after_undo_drops_future() {
    for undo_steps in 1..=EDITS.len() {
        let mut store = create_store();
        for (name, value) in EDITS {
            store.update_property(name, value);
        }
        for _ in 0..undo_steps {
            store.undo();
        }
        assert!(store.can_redo());

        store.update_property("border-width", "7px");
        assert!(!store.can_redo());

        // redo cannot bring back any of the undone edits
        store.redo();
        assert_eq!(store.get_state().properties.get("border-width"), Some("7px"));
        assert_tag_consistent(&store);
    }
}

#[test]
fn test_preset_resets_history_from_any_position() {
    let catalog = PresetCatalog::builtin().unwrap();
    let ids: Vec<String> = catalog.list().iter().map(|preset| preset.id.clone()).collect();

    for id in &ids {
        let mut store = create_store();
        for (name, value) in EDITS {
            store.update_property(name, value);
        }
        store.undo();

        store.apply_preset(id);
        let state = store.get_state();
        assert!(!state.can_undo);
        assert!(!state.can_redo);
        assert_eq!(state.properties, catalog.lookup(id).unwrap().properties);
        assert!(store.get_modified_properties().is_empty());
        assert_tag_consistent(&store);
    }
}

#[test]
fn test_undo_redo_at_boundaries_are_no_ops() {
    let mut store = create_store();
    let before = store.get_state();

    store.undo();
    store.redo();
    assert_eq!(store.get_state(), before);

    store.update_property("gap", "3rem");
    store.redo();
    assert_eq!(store.get_state().properties.get("gap"), Some("3rem"));
}
