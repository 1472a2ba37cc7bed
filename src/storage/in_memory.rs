//! In-memory implementation of StudentStore for testing and development

use crate::core::error::{RemoteError, Result};
use crate::core::service::StudentStore;
use crate::core::student::{StudentFields, StudentId, StudentRecord};
use async_trait::async_trait;
use indexmap::IndexMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

/// In-memory student store
///
/// Keeps records in insertion order and assigns UUID ids. Uses RwLock for
/// thread-safe access so it can back the REST server.
#[derive(Clone, Default)]
pub struct InMemoryStudentStore {
    records: Arc<RwLock<IndexMap<StudentId, StudentRecord>>>,
}

impl InMemoryStudentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with records, ids kept as given
    pub fn with_records(records: impl IntoIterator<Item = StudentRecord>) -> Self {
        let map = records
            .into_iter()
            .map(|record| (record.id.clone(), record))
            .collect();
        Self {
            records: Arc::new(RwLock::new(map)),
        }
    }

    /// Snapshot of every record, for assertions
    pub fn snapshot(&self) -> Vec<StudentRecord> {
        match self.records.read() {
            Ok(records) => records.values().cloned().collect(),
            Err(poisoned) => poisoned.into_inner().values().cloned().collect(),
        }
    }
}

fn lock_error(e: impl std::fmt::Display) -> RemoteError {
    RemoteError::Storage {
        message: format!("Failed to acquire lock: {}", e),
    }
}

#[async_trait]
impl StudentStore for InMemoryStudentStore {
    async fn list(&self) -> Result<Vec<StudentRecord>> {
        let records = self.records.read().map_err(lock_error)?;

        Ok(records.values().cloned().collect())
    }

    async fn get(&self, id: &StudentId) -> Result<StudentRecord> {
        let records = self.records.read().map_err(lock_error)?;

        records
            .get(id)
            .cloned()
            .ok_or_else(|| RemoteError::NotFound { id: id.clone() }.into())
    }

    async fn create(&self, fields: &StudentFields) -> Result<StudentRecord> {
        let mut records = self.records.write().map_err(lock_error)?;

        let record = StudentRecord::new(Uuid::new_v4().to_string(), fields.clone());
        records.insert(record.id.clone(), record.clone());

        Ok(record)
    }

    async fn update(&self, id: &StudentId, fields: &StudentFields) -> Result<StudentRecord> {
        let mut records = self.records.write().map_err(lock_error)?;

        let existing = records
            .get_mut(id)
            .ok_or_else(|| RemoteError::NotFound { id: id.clone() })?;
        *existing = StudentRecord::new(id.clone(), fields.clone());

        Ok(existing.clone())
    }

    async fn delete(&self, id: &StudentId) -> Result<()> {
        let mut records = self.records.write().map_err(lock_error)?;

        records
            .shift_remove(id)
            .map(|_| ())
            .ok_or_else(|| RemoteError::NotFound { id: id.clone() }.into())
    }
}
