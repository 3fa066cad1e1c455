//! In-memory navigation bridge

use async_trait::async_trait;
use tokio::sync::RwLock;

use wishlist_core::error::CoreResult;
use wishlist_core::traits::Navigator;
use wishlist_core::types::{ListQuery, NavigationRequest};

/// Keeps the current location in memory and records every request
pub struct InMemoryNavigator {
    query_key: String,
    location: RwLock<NavigationRequest>,
    history: RwLock<Vec<NavigationRequest>>,
}

impl InMemoryNavigator {
    /// Start at `page` with `query` (no leading `?`)
    #[must_use]
    pub fn new(query_key: &str, page: &str, query: &str) -> Self {
        Self {
            query_key: query_key.to_string(),
            location: RwLock::new(NavigationRequest {
                page: page.to_string(),
                query: query.to_string(),
            }),
            history: RwLock::new(Vec::new()),
        }
    }

    /// Current location
    pub async fn location(&self) -> NavigationRequest {
        self.location.read().await.clone()
    }

    /// Requests received so far, oldest first
    pub async fn history(&self) -> Vec<NavigationRequest> {
        self.history.read().await.clone()
    }
}

#[async_trait]
impl Navigator for InMemoryNavigator {
    async fn current_query_list_id(&self) -> Option<String> {
        ListQuery::parse(&self.location.read().await.query).list_id(&self.query_key)
    }

    async fn navigate(&self, request: NavigationRequest) -> CoreResult<()> {
        log::debug!("Navigating to {}?{}", request.page, request.query);
        self.history.write().await.push(request.clone());
        *self.location.write().await = request;
        Ok(())
    }
}
