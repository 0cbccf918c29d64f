use async_trait::async_trait;

use crate::errors::StorageError;
use crate::model::salary::{NewSalaryRecord, SalaryRecord};

pub mod memory;
pub mod sqlite;

pub use memory::MemorySalaryStore;
pub use sqlite::SqliteSalaryStore;

/// Storage contract for the salary ledger, polymorphic over the backing
/// store (SQLite in production, in-memory in tests).
///
/// Business rules are enforced before any call lands here; a store only
/// fails with `StorageError` on I/O problems.
#[async_trait]
pub trait SalaryStore: Send + Sync {
    /// Persists a record, assigning `record_key` and `created_at`, and
    /// returns the stored copy.
    async fn insert(&self, record: NewSalaryRecord) -> Result<SalaryRecord, StorageError>;

    /// Snapshot of the full ledger, newest creation first.
    async fn find_all(&self) -> Result<Vec<SalaryRecord>, StorageError>;

    /// Removes the record addressed by `record_key`. Deleting a key that
    /// does not exist is success, not an error (idempotent delete).
    async fn delete_by_key(&self, record_key: &str) -> Result<(), StorageError>;
}
