//! Platform-agnostic shell for the wish list controller.
//!
//! Provides `ListsPageShell` (mount/unmount lifecycle and user actions),
//! `ListsPageShellBuilder` (adapter injection) and `ViewHooks`
//! (host-specific enter/exit side effects).

pub mod adapters;

use std::sync::Arc;

use wishlist_core::error::{CoreError, CoreResult};
use wishlist_core::services::{ListMutationService, ListsPage, ServiceContext};
use wishlist_core::traits::{ListIdCache, ListStore, Localizer, Navigator};
use wishlist_core::types::{
    CreateListInput, List, ListsPageConfig, ListsPageView, NavigationRequest, UpdateListInput,
};

use crate::adapters::MessageCatalog;

/// Host side effects around the lists view.
///
/// Frontends implement this to flag the page as "on the lists view" (e.g. a
/// body class). Use `NoopViewHooks` when nothing is needed.
#[async_trait::async_trait]
pub trait ViewHooks: Send + Sync {
    /// Called before the controller starts loading.
    async fn enter_view(&self) {}

    /// Called after the controller has been torn down.
    async fn exit_view(&self) {}
}

/// No-op view hooks.
pub struct NoopViewHooks;

#[async_trait::async_trait]
impl ViewHooks for NoopViewHooks {}

/// The owning shell of a lists page.
///
/// Runs user actions against the remote store and feeds the results to the
/// `ListsPage` handlers.
pub struct ListsPageShell {
    /// Service context (holds all adapters)
    pub ctx: Arc<ServiceContext>,
    /// Lists page controller
    pub page: Arc<ListsPage>,
    /// Remote mutations
    pub mutation_service: ListMutationService,
    hooks: Arc<dyn ViewHooks>,
}

impl ListsPageShell {
    /// Enter the view and load lists.
    pub async fn mount(&self) {
        self.hooks.enter_view().await;
        self.page.initialize().await;
    }

    /// Tear the controller down and leave the view.
    pub async fn unmount(&self) {
        self.page.teardown();
        self.hooks.exit_view().await;
    }

    /// Current render state.
    pub async fn view(&self) -> ListsPageView {
        self.page.snapshot().await
    }

    /// Create an editable, empty list named by the shopper.
    pub async fn create_list(&self, name: &str) -> CoreResult<List> {
        let input = CreateListInput {
            is_editable: true,
            items: Vec::new(),
            name: name.to_string(),
        };
        let list = self.mutation_service.create_list(input).await?;
        self.page.on_list_created(list.clone()).await;
        Ok(list)
    }

    /// Rename a list.
    pub async fn rename_list(&self, id: &str, name: &str) -> CoreResult<List> {
        self.update_list(id, UpdateListInput::rename(name)).await
    }

    /// Apply a partial update to a list.
    pub async fn update_list(&self, id: &str, patch: UpdateListInput) -> CoreResult<List> {
        let list = self.mutation_service.update_list(id, patch).await?;
        self.page.on_list_updated(list.clone()).await;
        Ok(list)
    }

    /// Delete a list; the page then moves to the list that was first.
    pub async fn delete_list(&self, id: &str) -> CoreResult<()> {
        let previous = self.ctx.navigator.current_query_list_id().await;
        self.mutation_service.delete_list(id).await?;
        self.page.on_list_deleted(id).await;
        self.forward_query_change(previous).await;
        Ok(())
    }

    /// Select a list by navigating to it.
    ///
    /// Returns whether the controller reacted to the query change.
    pub async fn navigate_to(&self, list_id: &str) -> CoreResult<bool> {
        let previous = self.ctx.navigator.current_query_list_id().await;
        let config = self.page.config();
        let request = NavigationRequest::to_list(&config.lists_page, &config.query_key, list_id);
        self.ctx.navigator.navigate(request).await?;
        Ok(self.forward_query_change(previous).await)
    }

    async fn forward_query_change(&self, previous: Option<String>) -> bool {
        let current = self.ctx.navigator.current_query_list_id().await;
        self.page
            .on_query_changed(previous.as_deref(), current.as_deref())
            .await
    }
}

/// Builder for constructing `ListsPageShell` with platform-specific adapters.
///
/// # Required adapters
/// - `list_store` — the remote list API
/// - `list_id_cache` — where known list ids persist
/// - `navigator` — how the storefront location is read and changed
///
/// # Optional
/// - `localizer` — defaults to an empty `MessageCatalog`
/// - `hooks` — defaults to `NoopViewHooks`
/// - `config` — defaults to `ListsPageConfig::default()`
pub struct ListsPageShellBuilder {
    list_store: Option<Arc<dyn ListStore>>,
    list_id_cache: Option<Arc<dyn ListIdCache>>,
    navigator: Option<Arc<dyn Navigator>>,
    localizer: Option<Arc<dyn Localizer>>,
    hooks: Option<Arc<dyn ViewHooks>>,
    config: Option<ListsPageConfig>,
}

impl ListsPageShellBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            list_store: None,
            list_id_cache: None,
            navigator: None,
            localizer: None,
            hooks: None,
            config: None,
        }
    }

    #[must_use]
    pub fn list_store(mut self, store: Arc<dyn ListStore>) -> Self {
        self.list_store = Some(store);
        self
    }

    #[must_use]
    pub fn list_id_cache(mut self, cache: Arc<dyn ListIdCache>) -> Self {
        self.list_id_cache = Some(cache);
        self
    }

    #[must_use]
    pub fn navigator(mut self, navigator: Arc<dyn Navigator>) -> Self {
        self.navigator = Some(navigator);
        self
    }

    #[must_use]
    pub fn localizer(mut self, localizer: Arc<dyn Localizer>) -> Self {
        self.localizer = Some(localizer);
        self
    }

    #[must_use]
    pub fn hooks(mut self, hooks: Arc<dyn ViewHooks>) -> Self {
        self.hooks = Some(hooks);
        self
    }

    #[must_use]
    pub fn config(mut self, config: ListsPageConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the `ListsPageShell`.
    ///
    /// # Errors
    /// Returns `CoreError::ValidationError` if required adapters are missing
    /// or the configuration is invalid.
    pub fn build(self) -> CoreResult<ListsPageShell> {
        let list_store = self
            .list_store
            .ok_or_else(|| CoreError::ValidationError("list_store is required".to_string()))?;
        let list_id_cache = self.list_id_cache.ok_or_else(|| {
            CoreError::ValidationError("list_id_cache is required".to_string())
        })?;
        let navigator = self
            .navigator
            .ok_or_else(|| CoreError::ValidationError("navigator is required".to_string()))?;
        let localizer = self
            .localizer
            .unwrap_or_else(|| Arc::new(MessageCatalog::default()));
        let hooks = self.hooks.unwrap_or_else(|| Arc::new(NoopViewHooks));
        let config = self.config.unwrap_or_default();
        config.validate()?;

        let ctx = Arc::new(ServiceContext::new(
            list_store,
            list_id_cache,
            navigator,
            localizer,
        ));

        let page = Arc::new(ListsPage::new(Arc::clone(&ctx), config));
        let mutation_service = ListMutationService::new(Arc::clone(&ctx));

        Ok(ListsPageShell {
            ctx,
            page,
            mutation_service,
            hooks,
        })
    }
}

impl Default for ListsPageShellBuilder {
    fn default() -> Self {
        Self::new()
    }
}
