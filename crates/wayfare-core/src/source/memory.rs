//! In-memory record source for tests and previews.

use std::sync::{
    atomic::{AtomicU64, Ordering},
    Mutex,
};

use super::{RecordSource, SourceKind};
use crate::{
    error::{Result, StoreError},
    models::Entity,
};

/// The Mock variant: a `Mutex`-guarded vector with counter-based ids.
///
/// Newest records come first in [`RecordSource::get_all`], matching the
/// ordering the SQLite source produces. Useful for store tests and for
/// wiring up a UI without a database.
pub struct MemorySource<T> {
    records: Mutex<Vec<T>>,
    next_id: AtomicU64,
}

impl<T: Entity<Id = String>> MemorySource<T> {
    /// Creates an empty source.
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Creates a source pre-populated with records. Records keep the ids
    /// they arrive with; blank ids are assigned.
    pub fn with_records(records: Vec<T>) -> Self {
        let source = Self::new();
        {
            let mut guard = source.records.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
            for record in records {
                let record = if record.id().is_empty() {
                    let id = source.next_id.fetch_add(1, Ordering::Relaxed);
                    record.with_id(id.to_string())
                } else {
                    record
                };
                guard.insert(0, record);
            }
        }
        source
    }
}

impl<T: Entity<Id = String>> Default for MemorySource<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity<Id = String>> RecordSource<T> for MemorySource<T> {
    fn kind(&self) -> SourceKind {
        SourceKind::Mock
    }

    fn get_all(&self) -> Result<Vec<T>> {
        let guard = self.records.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        Ok(guard.clone())
    }

    fn get_by_id(&self, id: &String) -> Result<Option<T>> {
        let guard = self.records.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        Ok(guard.iter().find(|r| r.id() == id).cloned())
    }

    fn insert(&self, record: T) -> Result<T> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let record = record.with_id(id.to_string());
        let mut guard = self.records.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        guard.insert(0, record.clone());
        Ok(record)
    }

    fn update(&self, record: T) -> Result<T> {
        let mut guard = self.records.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        let slot = guard
            .iter_mut()
            .find(|r| r.id() == record.id())
            .ok_or_else(|| StoreError::not_found(record.id()))?;
        *slot = record.clone();
        Ok(record)
    }

    fn delete_by_id(&self, id: &String) -> Result<()> {
        let mut guard = self.records.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        let before = guard.len();
        guard.retain(|r| r.id() != id);
        if guard.len() == before {
            return Err(StoreError::not_found(id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        interval::{self, TimeInterval},
        models::{Entity, Trip},
    };

    fn span() -> TimeInterval {
        TimeInterval::new(
            interval::date(2025, 7, 1).unwrap(),
            interval::time(9, 0, 0).unwrap(),
            interval::date(2025, 7, 10).unwrap(),
            interval::time(17, 0, 0).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_insert_assigns_ids_newest_first() {
        let source = MemorySource::new();
        let first = source.insert(Trip::new("First", span())).unwrap();
        let second = source.insert(Trip::new("Second", span())).unwrap();

        assert!(!first.id.is_empty());
        assert_ne!(first.id, second.id);

        let all = source.get_all().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].title, "Second");
        assert_eq!(all[1].title, "First");
    }

    #[test]
    fn test_update_missing_record_not_found() {
        let source: MemorySource<Trip> = MemorySource::new();
        let ghost = Trip::new("Ghost", span()).with_id("999".to_string());
        let err = source.update(ghost).unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[test]
    fn test_delete_missing_record_not_found() {
        let source: MemorySource<Trip> = MemorySource::new();
        let err = source.delete_by_id(&"999".to_string()).unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[test]
    fn test_get_by_id() {
        let source = MemorySource::new();
        let created = source.insert(Trip::new("Found", span())).unwrap();
        assert!(source.get_by_id(&created.id).unwrap().is_some());
        assert!(source.get_by_id(&"999".to_string()).unwrap().is_none());
    }
}
