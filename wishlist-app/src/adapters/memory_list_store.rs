//! In-memory remote list store
//!
//! Stands in for the storefront list API in demos and tests.

use async_trait::async_trait;
use tokio::sync::RwLock;

use wishlist_core::error::{CoreError, CoreResult};
use wishlist_core::traits::ListStore;
use wishlist_core::types::{CreateListInput, List, UpdateListInput};

/// In-memory `ListStore`; ids are random UUIDs
pub struct InMemoryListStore {
    lists: RwLock<Vec<List>>,
}

impl InMemoryListStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            lists: RwLock::new(Vec::new()),
        }
    }

    /// Store pre-populated with `lists`
    #[must_use]
    pub fn with_lists(lists: Vec<List>) -> Self {
        Self {
            lists: RwLock::new(lists),
        }
    }

    /// Number of stored lists
    pub async fn len(&self) -> usize {
        self.lists.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.lists.read().await.is_empty()
    }
}

impl Default for InMemoryListStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ListStore for InMemoryListStore {
    async fn fetch_list(&self, id: &str) -> CoreResult<Option<List>> {
        Ok(self.lists.read().await.iter().find(|l| l.id == id).cloned())
    }

    async fn create_list(&self, input: &CreateListInput) -> CoreResult<List> {
        let list = List {
            id: uuid::Uuid::new_v4().to_string(),
            name: input.name.clone(),
            is_editable: input.is_editable,
            items: input.items.clone(),
        };
        self.lists.write().await.push(list.clone());
        log::debug!("Created list {} in memory", list.id);
        Ok(list)
    }

    async fn update_list(&self, id: &str, patch: &UpdateListInput) -> CoreResult<List> {
        let mut lists = self.lists.write().await;
        let list = lists
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or_else(|| CoreError::ListNotFound(id.to_string()))?;
        patch.apply_to(list);
        Ok(list.clone())
    }

    async fn delete_list(&self, id: &str) -> CoreResult<()> {
        let mut lists = self.lists.write().await;
        let before = lists.len();
        lists.retain(|l| l.id != id);
        if lists.len() == before {
            return Err(CoreError::ListNotFound(id.to_string()));
        }
        Ok(())
    }
}
