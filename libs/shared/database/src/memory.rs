use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

/// An entity owned by a [`RecordStore`], addressed by an immutable id.
pub trait Record: Clone {
    fn id(&self) -> Uuid;
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("No record with id {0}")]
    NotFound(Uuid),
}

/// Generates a fresh record id that is not already used by `existing`.
///
/// Ids are random UUID v4 values; a collision is astronomically unlikely but
/// would simply draw again.
pub fn new_record_id<T: Record>(existing: &[T]) -> Uuid {
    loop {
        let id = Uuid::new_v4();
        if !existing.iter().any(|record| record.id() == id) {
            return id;
        }
        debug!("Generated id {} already in use, drawing again", id);
    }
}

/// Volatile, insertion-ordered collection of records (newest first).
///
/// Every mutation either applies fully or leaves the collection untouched.
#[derive(Debug, Clone)]
pub struct RecordStore<T> {
    records: Vec<T>,
}

impl<T> Default for RecordStore<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<T: Record> RecordStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store whose `list()` yields `records` in the given order.
    pub fn from_records(records: Vec<T>) -> Self {
        Self { records }
    }

    pub fn next_id(&self) -> Uuid {
        new_record_id(&self.records)
    }

    /// Inserts `record` at the front of the collection.
    pub fn insert(&mut self, record: T) -> &T {
        self.records.insert(0, record);
        &self.records[0]
    }

    pub fn get(&self, id: Uuid) -> Option<&T> {
        self.records.iter().find(|record| record.id() == id)
    }

    /// Applies `f` to the record with `id` in place and returns the result.
    pub fn update_with<F>(&mut self, id: Uuid, f: F) -> Result<T, StoreError>
    where
        F: FnOnce(&mut T),
    {
        let record = self
            .records
            .iter_mut()
            .find(|record| record.id() == id)
            .ok_or(StoreError::NotFound(id))?;

        f(record);
        Ok(record.clone())
    }

    /// Removes the record with `id`. Removing an unknown id is an error and a no-op.
    pub fn remove(&mut self, id: Uuid) -> Result<T, StoreError> {
        let index = self
            .records
            .iter()
            .position(|record| record.id() == id)
            .ok_or(StoreError::NotFound(id))?;

        Ok(self.records.remove(index))
    }

    pub fn list(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
