use crate::property_map::PropertyMap;

/// Linear undo/redo log of property map snapshots.
///
/// The log is never empty and `pointer` always indexes the entry that matches
/// the live document. Recording after an undo drops everything past the
/// pointer, so there are no redo branches.
#[derive(Debug, Clone)]
pub struct HistoryLog {
    entries: Vec<PropertyMap>,
    pointer: usize,
}

impl HistoryLog {
    /// Creates a log seeded with a single entry
    pub fn new(initial: PropertyMap) -> Self {
        Self {
            entries: vec![initial],
            pointer: 0,
        }
    }

    /// The snapshot at the pointer
    pub fn current(&self) -> &PropertyMap {
        &self.entries[self.pointer]
    }

    pub fn pointer(&self) -> usize {
        self.pointer
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Appends `properties` after the pointer, discarding any redo entries.
    ///
    /// Returns `false` without touching the log when `properties` equals the
    /// current entry.
    pub fn record(&mut self, properties: &PropertyMap) -> bool {
        if self.current() == properties {
            return false;
        }

        self.entries.truncate(self.pointer + 1);
        self.entries.push(properties.clone());
        self.pointer = self.entries.len() - 1;
        self.check_bounds();
        true
    }

    /// Replaces the whole log with a single entry
    pub fn reset(&mut self, properties: &PropertyMap) {
        self.entries.clear();
        self.entries.push(properties.clone());
        self.pointer = 0;
    }

    /// Steps back one entry, returning the snapshot now at the pointer
    pub fn move_back(&mut self) -> Option<&PropertyMap> {
        if !self.can_move_back() {
            return None;
        }
        self.pointer -= 1;
        Some(self.current())
    }

    /// Steps forward one entry, returning the snapshot now at the pointer
    pub fn move_forward(&mut self) -> Option<&PropertyMap> {
        if !self.can_move_forward() {
            return None;
        }
        self.pointer += 1;
        self.check_bounds();
        Some(self.current())
    }

    pub fn can_move_back(&self) -> bool {
        self.pointer > 0
    }

    pub fn can_move_forward(&self) -> bool {
        self.pointer + 1 < self.entries.len()
    }

    fn check_bounds(&self) {
        debug_assert!(
            self.pointer < self.entries.len(),
            "history pointer {} out of bounds for {} entries",
            self.pointer,
            self.entries.len()
        );
    }
}
