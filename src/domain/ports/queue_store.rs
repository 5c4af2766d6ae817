use async_trait::async_trait;

use super::errors::QueueStoreError;
use crate::domain::models::QueueEntry;

/// Port trait for the shared command queue
///
/// The queue is append-only from this crate's point of view: entries are
/// pushed once and never read back. A separate consumer drains them.
#[async_trait]
pub trait QueueStore: Send + Sync {
    /// Append `entry` under a fresh key generated by the store
    ///
    /// Every call must produce a new key. Two pushes never overwrite each
    /// other, even for identical entries from the same sender in the same second.
    ///
    /// # Returns
    /// * `Ok(key)` - the store-generated key of the new record
    /// * `Err(QueueStoreError)` - the append was not acknowledged
    async fn push(&self, entry: &QueueEntry) -> Result<String, QueueStoreError>;
}
