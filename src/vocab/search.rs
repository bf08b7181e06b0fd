//! Case-insensitive search across the text fields of a record set.
//!
//! [`filter`] is the pure matching function. [`SearchView`] wraps it with the
//! recompute rule: the projection is rebuilt whenever the query or the store's
//! revision differs from the ones it was computed for, and reused otherwise.

use crate::model::{Field, Record};
use crate::store::RecordStore;

/// Every record whose word, meaning or description contains `query`, ignoring case.
///
/// Order is preserved and an empty query matches everything.
pub fn filter<'a>(records: &'a [Record], query: &str) -> Vec<&'a Record> {
    let query = query.to_lowercase();
    records.iter().filter(|r| matches(r, &query)).collect()
}

/// `query_lower` must already be lowercased.
fn matches(record: &Record, query_lower: &str) -> bool {
    Field::ALL
        .iter()
        .any(|f| record.get(*f).to_lowercase().contains(query_lower))
}

#[derive(Debug, Clone)]
struct Projection {
    revision: u64,
    positions: Vec<usize>,
}

/// The filtered, read-only projection of a store under the current query.
#[derive(Debug, Clone, Default)]
pub struct SearchView {
    query: String,
    projection: Option<Projection>,
}

impl SearchView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        if query != self.query {
            self.query = query;
            self.projection = None;
        }
    }

    /// True when the cached projection still reflects `store` and the query.
    pub fn is_fresh<S: RecordStore>(&self, store: &S) -> bool {
        matches!(&self.projection, Some(p) if p.revision == store.revision())
    }

    /// Store positions of the visible records, recomputed if stale.
    pub fn positions<S: RecordStore>(&mut self, store: &S) -> &[usize] {
        if !self.is_fresh(store) {
            let query = self.query.to_lowercase();
            let positions = store
                .all()
                .iter()
                .enumerate()
                .filter(|(_, r)| matches(r, &query))
                .map(|(i, _)| i)
                .collect();
            self.projection = Some(Projection {
                revision: store.revision(),
                positions,
            });
        }
        self.projection
            .as_ref()
            .map(|p| p.positions.as_slice())
            .unwrap_or_default()
    }

    /// The visible records, in store order.
    pub fn results<'s, S: RecordStore>(&mut self, store: &'s S) -> Vec<&'s Record> {
        let records = store.all();
        self.positions(store)
            .iter()
            .filter_map(|&i| records.get(i))
            .collect()
    }
}
