//! # Storage Layer
//!
//! The [`RecordStore`] trait is the authoritative collection of vocabulary records.
//! Everything that mutates the list goes through it, and nothing outside the store
//! keeps its own writable copy.
//!
//! ## Ordering
//!
//! Records are kept in insertion order. The order carries no meaning beyond being
//! stable, so views and exports simply follow it.
//!
//! ## Identity
//!
//! New ids are `max(existing integer ids, 0) + 1`. Imported records keep whatever id
//! they came with, so duplicates and non-integer ids are possible after an import.
//! Allocation only looks at numbers with an integral value (`5` and `5.0` alike).
//! When the maximum is already at the top of the `u64` range the lowest unused
//! positive id is handed out instead, so inserting never fails.
//!
//! ## Revisions
//!
//! Every mutation bumps [`RecordStore::revision`]. Derived views (see
//! [`crate::search::SearchView`]) compare revisions to know when to recompute.
//!
//! ## Implementations
//!
//! - [`memory::MemoryStore`]: the in-process store used by the application.
//!   Nothing is written to disk; persistence is export/import only.

use crate::model::{Field, Record, RecordId};
use std::collections::HashSet;

pub mod memory;

/// Abstract interface for the record collection.
pub trait RecordStore {
    /// Append a new record with a freshly allocated id.
    fn insert(&mut self, word: String, meaning: String, description: String) -> Record;

    /// Replace the whole collection. Callers validate the records beforehand.
    fn replace_all(&mut self, records: Vec<Record>);

    /// Set `field` on every record whose id is `id`.
    ///
    /// Returns the first updated record, or `None` (and changes nothing) when no
    /// record matches.
    fn update_field(&mut self, id: &RecordId, field: Field, value: String) -> Option<Record>;

    /// All records in insertion order.
    fn all(&self) -> &[Record];

    /// Counter bumped on every mutation.
    fn revision(&self) -> u64;

    fn len(&self) -> usize {
        self.all().len()
    }

    fn is_empty(&self) -> bool {
        self.all().is_empty()
    }

    fn find(&self, id: &RecordId) -> Option<&Record> {
        self.all().iter().find(|r| &r.id == id)
    }

    /// The id the next insert will receive.
    fn next_id(&self) -> RecordId {
        next_id(self.all())
    }
}

/// `max(integer ids, 0) + 1`, or the lowest unused positive integer when that would
/// not fit a `u64`.
pub(crate) fn next_id(records: &[Record]) -> RecordId {
    let max = records
        .iter()
        .filter_map(|r| r.id.as_integer())
        .fold(0, i128::max);

    match max.checked_add(1).and_then(|n| u64::try_from(n).ok()) {
        Some(n) => RecordId::from(n),
        None => {
            let taken: HashSet<i128> = records.iter().filter_map(|r| r.id.as_integer()).collect();
            let free = (1..=u64::MAX)
                .find(|n| !taken.contains(&i128::from(*n)))
                .unwrap_or(u64::MAX);
            tracing::warn!(max = %max, id = free, "id space exhausted, allocating lowest free id");
            RecordId::from(free)
        }
    }
}
