use crate::model::{Field, Record};
use crate::store::RecordStore;

/// Tracks the record open in the editor and routes field edits into the store.
///
/// An edit is written to the store first and then applied to the mirror, so after
/// every edit the mirror equals the stored record it was selected from. When several
/// records share an id the mirror stays on the one the user picked.
#[derive(Debug, Clone, Default)]
pub struct SelectionEditor {
    selected: Option<Record>,
}

impl SelectionEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<&Record> {
        self.selected.as_ref()
    }

    pub fn select(&mut self, record: Record) {
        self.selected = Some(record);
    }

    /// Write `value` into the selected record's `field`.
    ///
    /// Without a selection this does nothing and returns `None`.
    pub fn edit_field<S: RecordStore>(
        &mut self,
        store: &mut S,
        field: Field,
        value: String,
    ) -> Option<Record> {
        let current = self.selected.as_mut()?;
        store.update_field(&current.id, field, value.clone())?;
        current.set(field, value);
        Some(current.clone())
    }

    /// Re-read the mirror from `store` after a wholesale replacement.
    ///
    /// Keeps the selection when a record with the same id still exists, clears it
    /// otherwise.
    pub fn resync<S: RecordStore>(&mut self, store: &S) {
        if let Some(current) = &self.selected {
            self.selected = store.find(&current.id).cloned();
        }
    }
}
