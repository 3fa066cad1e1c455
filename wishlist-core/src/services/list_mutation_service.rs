//! User-initiated list mutations
//!
//! The presentation shell runs these against the remote store and then feeds
//! the result to the matching `ListsPage` handler.

use std::sync::Arc;

use crate::error::{CoreError, CoreResult};
use crate::types::{CreateListInput, List, UpdateListInput, MAX_LIST_NAME_LEN};

use super::{ListLoader, ServiceContext};

/// List mutation service
pub struct ListMutationService {
    ctx: Arc<ServiceContext>,
    loader: ListLoader,
}

impl ListMutationService {
    /// 创建列表变更服务实例
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        let loader = ListLoader::new(Arc::clone(&ctx));
        Self { ctx, loader }
    }

    /// Create a list and remember its id for the next session
    pub async fn create_list(&self, mut input: CreateListInput) -> CoreResult<List> {
        input.name = validate_name(&input.name)?;

        let list = self
            .ctx
            .list_store
            .create_list(&input)
            .await
            .map_err(|e| match e {
                CoreError::CreateError(_) | CoreError::ValidationError(_) => e,
                other => CoreError::CreateError(other.to_string()),
            })?;

        // The list already exists remotely; a cache miss only hides it next session
        if let Err(e) = self.loader.record_list_id(&list.id).await {
            log::warn!("Failed to record list id {}: {e}", list.id);
        }

        log::info!("Created list {}", list.id);
        Ok(list)
    }

    /// Apply a partial update
    pub async fn update_list(&self, id: &str, mut patch: UpdateListInput) -> CoreResult<List> {
        if patch.is_empty() {
            return Err(CoreError::ValidationError(
                "Update must change at least one field".to_string(),
            ));
        }
        if let Some(ref name) = patch.name {
            patch.name = Some(validate_name(name)?);
        }

        self.ctx
            .list_store
            .update_list(id, &patch)
            .await
            .map_err(|e| match e {
                CoreError::ListNotFound(_) | CoreError::UpdateError(_) => e,
                other => CoreError::UpdateError(other.to_string()),
            })
    }

    /// Delete a list
    ///
    /// The cached id stays behind and is dropped at the next load.
    pub async fn delete_list(&self, id: &str) -> CoreResult<()> {
        self.ctx
            .list_store
            .delete_list(id)
            .await
            .map_err(|e| match e {
                CoreError::ListNotFound(_) | CoreError::DeleteError(_) => e,
                other => CoreError::DeleteError(other.to_string()),
            })?;
        log::info!("Deleted list {id}");
        Ok(())
    }
}

/// Trim a user-chosen name and check its length
fn validate_name(name: &str) -> CoreResult<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(CoreError::ValidationError(
            "List name cannot be empty".to_string(),
        ));
    }
    if name.chars().count() > MAX_LIST_NAME_LEN {
        return Err(CoreError::ValidationError(format!(
            "List name cannot exceed {MAX_LIST_NAME_LEN} characters"
        )));
    }
    Ok(name.to_string())
}
