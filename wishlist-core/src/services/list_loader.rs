//! List load reconciliation
//!
//! Resolves the cached list-id set against the remote store.

use std::collections::HashSet;
use std::sync::Arc;

use futures::future::join_all;

use crate::error::{CoreError, CoreResult};
use crate::types::List;

use super::ServiceContext;

/// Answers "what are this shopper's current lists"
pub struct ListLoader {
    ctx: Arc<ServiceContext>,
}

impl ListLoader {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// Resolve every cached id to fresh list data, in cached order.
    ///
    /// Ids that no longer resolve are dropped. A failing cache read or a
    /// transport failure on any id fails the whole call with `FetchError`.
    pub async fn fetch_all_lists(&self) -> CoreResult<Vec<List>> {
        let ids = self
            .ctx
            .list_id_cache
            .load_ids()
            .await
            .map_err(|e| CoreError::FetchError(format!("Failed to read cached list ids: {e}")))?;

        let mut seen = HashSet::new();
        let ids: Vec<String> = ids.into_iter().filter(|id| seen.insert(id.clone())).collect();

        let results = join_all(ids.iter().map(|id| self.ctx.list_store.fetch_list(id))).await;

        let mut lists: Vec<List> = Vec::with_capacity(ids.len());
        for (id, result) in ids.iter().zip(results) {
            match result {
                Ok(Some(list)) => {
                    if lists.iter().any(|l| l.id == list.id) {
                        log::debug!("Skipping duplicate list {} resolved from id {id}", list.id);
                        continue;
                    }
                    lists.push(list);
                }
                Ok(None) | Err(CoreError::ListNotFound(_)) => {
                    log::debug!("Dropping cached list id {id}: no longer resolves");
                }
                Err(CoreError::FetchError(msg)) => return Err(CoreError::FetchError(msg)),
                Err(e) => {
                    return Err(CoreError::FetchError(format!(
                        "Failed to fetch list {id}: {e}"
                    )))
                }
            }
        }

        log::debug!("Resolved {} of {} cached list ids", lists.len(), ids.len());
        Ok(lists)
    }

    /// Append a list id to the persisted set (idempotent)
    pub async fn record_list_id(&self, id: &str) -> CoreResult<()> {
        self.ctx.list_id_cache.record_id(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{create_test_context, test_list};
    use crate::traits::ListIdCache;

    #[tokio::test]
    async fn empty_cache_yields_no_lists() {
        let (ctx, mocks) = create_test_context();
        let loader = ListLoader::new(ctx);

        let lists = loader.fetch_all_lists().await.unwrap();
        assert!(lists.is_empty());
        assert_eq!(mocks.store.fetch_count().await, 0);
    }

    #[tokio::test]
    async fn resolves_lists_in_cached_order() {
        let (ctx, mocks) = create_test_context();
        mocks.seed(&[test_list("L2"), test_list("L1")]).await;
        let loader = ListLoader::new(ctx);

        let lists = loader.fetch_all_lists().await.unwrap();
        let ids: Vec<&str> = lists.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["L2", "L1"]);
    }

    #[tokio::test]
    async fn drops_ids_that_no_longer_resolve() {
        let (ctx, mocks) = create_test_context();
        mocks.seed(&[test_list("L1"), test_list("L3")]).await;
        mocks.cache.record_id("gone").await.unwrap();
        mocks.store.remove("L3").await;
        let loader = ListLoader::new(ctx);

        let lists = loader.fetch_all_lists().await.unwrap();
        assert_eq!(lists.len(), 1);
        assert_eq!(lists[0].id, "L1");
    }

    #[tokio::test]
    async fn duplicate_cached_ids_are_fetched_once() {
        let (ctx, mocks) = create_test_context();
        mocks.seed(&[test_list("L1")]).await;
        mocks.cache.push_raw("L1").await;
        let loader = ListLoader::new(ctx);

        let lists = loader.fetch_all_lists().await.unwrap();
        assert_eq!(lists.len(), 1);
        assert_eq!(mocks.store.fetch_count().await, 1);
    }

    #[tokio::test]
    async fn transport_failure_fails_the_batch() {
        let (ctx, mocks) = create_test_context();
        mocks.seed(&[test_list("L1"), test_list("L2")]).await;
        mocks
            .store
            .set_fetch_error(Some(CoreError::StorageError("timeout".to_string())))
            .await;
        let loader = ListLoader::new(ctx);

        let result = loader.fetch_all_lists().await;
        assert!(matches!(result, Err(CoreError::FetchError(_))));
    }

    #[tokio::test]
    async fn cache_read_failure_is_fetch_error() {
        let (ctx, mocks) = create_test_context();
        mocks
            .cache
            .set_load_error(Some("quota exceeded".to_string()))
            .await;
        let loader = ListLoader::new(ctx);

        let result = loader.fetch_all_lists().await;
        assert!(matches!(result, Err(CoreError::FetchError(_))));
    }

    #[tokio::test]
    async fn record_list_id_is_idempotent() {
        let (ctx, mocks) = create_test_context();
        let loader = ListLoader::new(ctx);

        loader.record_list_id("L1").await.unwrap();
        loader.record_list_id("L1").await.unwrap();
        assert_eq!(mocks.cache.load_ids().await.unwrap(), vec!["L1".to_string()]);
    }
}
