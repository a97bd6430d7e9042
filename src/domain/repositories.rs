//! Repository trait definitions
//!
//! These traits define the contract for data access.
//! Implementations live in the infrastructure layer.

use async_trait::async_trait;

use super::DomainError;
use crate::models::Record;

/// Store gateway for one record kind.
///
/// Updates are full replacements of the record body, never merges, and never
/// create a missing record. Concurrent writes to the same identifier are
/// ordered by the store alone.
#[async_trait]
pub trait RecordRepository<R: Record>: Send + Sync {
    /// Every record in the collection. An empty collection is `Ok(vec![])`.
    async fn find_all(&self) -> Result<Vec<R>, DomainError>;

    /// Insert a new record and return it with its assigned identifier.
    async fn create(&self, fields: R::Fields) -> Result<R, DomainError>;

    /// Replace the record's fields, returning the record as written,
    /// or `None` when no record has this identifier.
    async fn update_by_id(&self, id: &str, fields: R::Fields) -> Result<Option<R>, DomainError>;

    /// Remove the record, returning it as it was just before removal,
    /// or `None` when no record has this identifier.
    async fn delete_by_id(&self, id: &str) -> Result<Option<R>, DomainError>;
}
