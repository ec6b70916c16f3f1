use std::collections::HashMap;

use thiserror::Error;

use crewdesk_core::record::Identified;
use crewdesk_core::RecordId;

/// Failures of record access.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// No record with the requested id exists in the set.
    #[error("record {id} not found")]
    NotFound {
        /// The requested identifier.
        id: RecordId,
    },
    /// Two fixture records share an id.
    #[error("duplicate record id {id}")]
    DuplicateId {
        /// The colliding identifier.
        id: RecordId,
    },
}

/// Read-only, ordered access to one screen's records.
///
/// Lookups by id report an explicit [`StoreError::NotFound`] instead of
/// handing absent values to the presentation layer.
pub trait RecordStore<R> {
    /// All records in fixture order.
    fn list(&self) -> &[R];

    /// Look up one record by id.
    ///
    /// # Errors
    /// Returns [`StoreError::NotFound`] when the id is absent from the set.
    fn get(&self, id: RecordId) -> Result<&R, StoreError>;
}

/// In-memory store over an immutable fixture sequence.
#[derive(Debug, Clone)]
pub struct FixtureStore<R> {
    records: Vec<R>,
    index: HashMap<RecordId, usize>,
}

impl<R: Identified> FixtureStore<R> {
    /// Build a store from fixture records, rejecting duplicate ids.
    ///
    /// # Errors
    /// Returns [`StoreError::DuplicateId`] when two records share an id.
    pub fn new(records: Vec<R>) -> Result<Self, StoreError> {
        let mut index = HashMap::with_capacity(records.len());
        for (pos, record) in records.iter().enumerate() {
            if index.insert(record.id(), pos).is_some() {
                return Err(StoreError::DuplicateId { id: record.id() });
            }
        }
        Ok(Self { records, index })
    }

    /// Number of records in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<R: Identified> RecordStore<R> for FixtureStore<R> {
    fn list(&self) -> &[R] {
        &self.records
    }

    fn get(&self, id: RecordId) -> Result<&R, StoreError> {
        self.index
            .get(&id)
            .and_then(|&pos| self.records.get(pos))
            .ok_or(StoreError::NotFound { id })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used)]

    use super::*;

    #[derive(Debug, PartialEq)]
    struct Item {
        id: RecordId,
        name: &'static str,
    }

    impl Identified for Item {
        fn id(&self) -> RecordId {
            self.id
        }
    }

    fn item(id: u32, name: &'static str) -> Item {
        Item {
            id: RecordId::new(id),
            name,
        }
    }

    #[test]
    fn list_preserves_fixture_order() {
        let store =
            FixtureStore::new(vec![item(3, "c"), item(1, "a"), item(2, "b")]).expect("unique ids");
        let names: Vec<&str> = store.list().iter().map(|i| i.name).collect();
        assert_eq!(names, vec!["c", "a", "b"]);
    }

    #[test]
    fn get_finds_records_by_id() {
        let store = FixtureStore::new(vec![item(1, "a"), item(2, "b")]).expect("unique ids");
        assert_eq!(store.get(RecordId::new(2)).map(|i| i.name), Ok("b"));
    }

    #[test]
    fn get_reports_not_found_instead_of_panicking() {
        let store = FixtureStore::new(vec![item(1, "a")]).expect("unique ids");
        assert_eq!(
            store.get(RecordId::new(999)),
            Err(StoreError::NotFound {
                id: RecordId::new(999)
            })
        );
    }

    #[test]
    fn duplicate_ids_are_rejected_at_construction() {
        let result = FixtureStore::new(vec![item(1, "a"), item(1, "b")]);
        assert_eq!(
            result.map(|_| ()),
            Err(StoreError::DuplicateId {
                id: RecordId::new(1)
            })
        );
    }

    #[test]
    fn empty_store_is_valid() {
        let store = FixtureStore::<Item>::new(Vec::new()).expect("empty is fine");
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }
}
