//! Navigation bridge abstract Trait

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::NavigationRequest;

/// Reads and changes the storefront location
#[async_trait]
pub trait Navigator: Send + Sync {
    /// List id carried by the current query string, if any
    async fn current_query_list_id(&self) -> Option<String>;

    /// Ask the host to move to another page
    async fn navigate(&self, request: NavigationRequest) -> CoreResult<()>;
}
