use super::{next_id, RecordStore};
use crate::model::{seed_records, Field, Record, RecordId};

/// In-memory record storage. Lives for the length of a session.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Vec<Record>,
    revision: u64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding the example entries a new session starts with.
    pub fn seeded() -> Self {
        Self::with_records(seed_records())
    }

    pub fn with_records(records: Vec<Record>) -> Self {
        Self {
            records,
            revision: 0,
        }
    }
}

impl RecordStore for MemoryStore {
    fn insert(&mut self, word: String, meaning: String, description: String) -> Record {
        let record = Record::new(next_id(&self.records), word, meaning, description);
        self.records.push(record.clone());
        self.revision += 1;
        record
    }

    fn replace_all(&mut self, records: Vec<Record>) {
        self.records = records;
        self.revision += 1;
    }

    fn update_field(&mut self, id: &RecordId, field: Field, value: String) -> Option<Record> {
        let mut first = None;
        for record in self.records.iter_mut().filter(|r| &r.id == id) {
            record.set(field, value.clone());
            if first.is_none() {
                first = Some(record.clone());
            }
        }
        if first.is_some() {
            self.revision += 1;
        }
        first
    }

    fn all(&self) -> &[Record] {
        &self.records
    }

    fn revision(&self) -> u64 {
        self.revision
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: MemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: MemoryStore::new(),
            }
        }

        pub fn seeded() -> Self {
            Self {
                store: MemoryStore::seeded(),
            }
        }

        pub fn with_words(mut self, count: usize) -> Self {
            for i in 0..count {
                self.store.insert(
                    format!("word {}", i + 1),
                    format!("meaning {}", i + 1),
                    format!("description {}", i + 1),
                );
            }
            self
        }

        pub fn with_record(mut self, record: Record) -> Self {
            let mut records = self.store.all().to_vec();
            records.push(record);
            self.store.replace_all(records);
            self
        }
    }
}
