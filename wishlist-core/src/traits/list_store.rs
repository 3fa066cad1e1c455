//! Remote list store abstract Trait

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::{CreateListInput, List, UpdateListInput};

/// Remote list store Trait
///
/// Wraps the storefront's list query/mutation API. Transport details stay
/// on the implementation side.
#[async_trait]
pub trait ListStore: Send + Sync {
    /// Get current list data
    ///
    /// # Returns
    /// * `Ok(Some(list))` - list exists
    /// * `Ok(None)` - id no longer resolves
    async fn fetch_list(&self, id: &str) -> CoreResult<Option<List>>;

    /// Create a list
    ///
    /// # Arguments
    /// * `input` - name, editability and initial items
    async fn create_list(&self, input: &CreateListInput) -> CoreResult<List>;

    /// Update a list in place
    ///
    /// # Arguments
    /// * `id` - List ID
    /// * `patch` - fields to overwrite
    async fn update_list(&self, id: &str, patch: &UpdateListInput) -> CoreResult<List>;

    /// Delete a list
    ///
    /// # Arguments
    /// * `id` - List ID
    async fn delete_list(&self, id: &str) -> CoreResult<()>;
}
