//! Local list-id cache abstract Trait

use async_trait::async_trait;

use crate::error::CoreResult;

/// Persisted set of list ids known to this shopper
///
/// Only the ids are cached; list content is always fetched fresh.
/// The set is append-only.
#[async_trait]
pub trait ListIdCache: Send + Sync {
    /// Load cached ids in insertion order
    async fn load_ids(&self) -> CoreResult<Vec<String>>;

    /// Append an id; recording an id already present is a no-op
    ///
    /// # Arguments
    /// * `id` - List ID
    async fn record_id(&self, id: &str) -> CoreResult<()>;
}
