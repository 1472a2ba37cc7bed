//! Service trait for the remote record store

use crate::core::error::Result;
use crate::core::student::{StudentFields, StudentId, StudentRecord};
use async_trait::async_trait;

/// Remote store of student records
///
/// Implementations map each operation to a single request against the store.
/// The record manager is agnostic to the transport behind it.
#[async_trait]
pub trait StudentStore: Send + Sync {
    /// List every record, in store order
    async fn list(&self) -> Result<Vec<StudentRecord>>;

    /// Get a record by id
    async fn get(&self, id: &StudentId) -> Result<StudentRecord>;

    /// Create a record; the store assigns the id
    async fn create(&self, fields: &StudentFields) -> Result<StudentRecord>;

    /// Replace the fields of an existing record
    async fn update(&self, id: &StudentId, fields: &StudentFields) -> Result<StudentRecord>;

    /// Delete a record
    async fn delete(&self, id: &StudentId) -> Result<()>;
}

#[async_trait]
impl<S: StudentStore + ?Sized> StudentStore for std::sync::Arc<S> {
    async fn list(&self) -> Result<Vec<StudentRecord>> {
        (**self).list().await
    }

    async fn get(&self, id: &StudentId) -> Result<StudentRecord> {
        (**self).get(id).await
    }

    async fn create(&self, fields: &StudentFields) -> Result<StudentRecord> {
        (**self).create(fields).await
    }

    async fn update(&self, id: &StudentId, fields: &StudentFields) -> Result<StudentRecord> {
        (**self).update(id, fields).await
    }

    async fn delete(&self, id: &StudentId) -> Result<()> {
        (**self).delete(id).await
    }
}
