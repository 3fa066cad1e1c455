//! Lists page state machine
//!
//! Owns the session's lists and selection. Loads through [`ListLoader`],
//! bootstraps a default list when the shopper has none, follows the
//! selected-list query parameter and applies the shell's mutation results.
//!
//! Every asynchronous resumption re-checks the liveness flag and, under
//! [`StaleGuard::RequestToken`], that no newer load has been issued since.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::error::{CoreError, CoreResult};
use crate::types::{
    CreateListInput, List, ListsPageConfig, ListsPageView, NavigationRequest, Phase,
    SessionState, StaleGuard,
};

use super::{ListLoader, ServiceContext};

/// Lists page controller
pub struct ListsPage {
    ctx: Arc<ServiceContext>,
    loader: ListLoader,
    config: ListsPageConfig,
    state: RwLock<SessionState>,
    mounted: AtomicBool,
    latest_request: AtomicU64,
}

impl ListsPage {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>, config: ListsPageConfig) -> Self {
        let loader = ListLoader::new(Arc::clone(&ctx));
        Self {
            ctx,
            loader,
            config,
            state: RwLock::new(SessionState::default()),
            mounted: AtomicBool::new(false),
            latest_request: AtomicU64::new(0),
        }
    }

    /// Active configuration
    pub fn config(&self) -> &ListsPageConfig {
        &self.config
    }

    /// Whether the page is between `initialize` and `teardown`
    pub fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::SeqCst)
    }

    /// Render snapshot
    pub async fn snapshot(&self) -> ListsPageView {
        self.state.read().await.view()
    }

    /// The list the content panel shows
    pub async fn selected_list(&self) -> Option<List> {
        self.state.read().await.selected_list().cloned()
    }

    /// Raw selection, possibly not (yet) among the loaded lists
    pub async fn selected_list_id(&self) -> Option<String> {
        self.state.read().await.selected_list_id.clone()
    }

    // ===== Lifecycle =====

    /// Mount: load lists, bootstrap a default one if there are none, pick a selection.
    ///
    /// Failures end the loading phase without touching the lists.
    pub async fn initialize(&self) {
        self.mounted.store(true, Ordering::SeqCst);
        let token = self.issue_request();
        self.state.write().await.phase = Phase::Loading;
        log::info!("Lists page mounted, loading lists (request #{token})");

        if let Err(e) = self.load_or_bootstrap(token).await {
            e.log("Failed to initialize lists page");
            self.apply(token, |state| state.phase = Phase::Ready).await;
        }
    }

    /// Unmount. Pending resumptions and later handler calls become no-ops.
    pub fn teardown(&self) {
        self.mounted.store(false, Ordering::SeqCst);
        log::info!("Lists page unmounted");
    }

    // ===== Navigation =====

    /// React to a change of the selected-list query parameter.
    ///
    /// Returns whether the change was acted upon.
    pub async fn on_query_changed(&self, previous: Option<&str>, current: Option<&str>) -> bool {
        if !self.is_mounted() {
            return false;
        }
        if !self.config.navigation_trigger.fires(previous, current) {
            log::debug!("Ignoring query change {previous:?} -> {current:?}");
            return false;
        }

        let token = self.issue_request();
        // Optimistic: the selector follows the query before the reload lands
        self.state.write().await.selected_list_id = current.map(str::to_string);
        log::debug!("Selected list query changed to {current:?}, reloading (request #{token})");

        match self.loader.fetch_all_lists().await {
            // A newer reload may have superseded the initial chain before it bootstrapped
            Ok(lists)
                if lists.is_empty() && self.config.stale_guard == StaleGuard::RequestToken =>
            {
                if let Err(e) = self.bootstrap_and_apply(token).await {
                    e.log("Failed to bootstrap default list after navigation");
                    self.apply(token, |state| state.phase = Phase::Ready).await;
                }
            }
            Ok(lists) => {
                self.apply(token, |state| {
                    state.lists = lists;
                    state.phase = Phase::Ready;
                })
                .await;
            }
            Err(e) => {
                e.log("Failed to reload lists after navigation");
                self.apply(token, |state| state.phase = Phase::Ready).await;
            }
        }
        true
    }

    // ===== Mutation results =====

    /// A list was created remotely: append it.
    pub async fn on_list_created(&self, list: List) {
        if !self.is_mounted() {
            return;
        }
        let mut state = self.state.write().await;
        if let Some(pos) = state.position(&list.id) {
            log::debug!("List {} already loaded, replacing in place", list.id);
            state.lists[pos] = list;
        } else {
            state.lists.push(list);
        }
    }

    /// A list was updated remotely: replace the matching entry in place.
    pub async fn on_list_updated(&self, list: List) {
        if !self.is_mounted() {
            return;
        }
        let mut state = self.state.write().await;
        match state.position(&list.id) {
            Some(pos) => state.lists[pos] = list,
            None => log::debug!("Updated list {} is not loaded, ignoring", list.id),
        }
    }

    /// A list was deleted remotely: drop it and point the page at the list
    /// that was first before the removal.
    pub async fn on_list_deleted(&self, deleted_id: &str) {
        if !self.is_mounted() {
            return;
        }

        let first_before = {
            let mut state = self.state.write().await;
            let first = state.lists.first().map(|l| l.id.clone());
            state.lists.retain(|l| l.id != deleted_id);
            if state.selected_list_id.as_deref() == Some(deleted_id) {
                state.selected_list_id = None;
            }
            first
        };

        let Some(first_id) = first_before else {
            log::warn!("List {deleted_id} deleted while no lists were loaded, not navigating");
            return;
        };

        let request =
            NavigationRequest::to_list(&self.config.lists_page, &self.config.query_key, &first_id);
        if let Err(e) = self.ctx.navigator.navigate(request).await {
            e.log("Failed to navigate after list deletion");
        }
    }

    // ===== Internals =====

    async fn load_or_bootstrap(&self, token: u64) -> CoreResult<()> {
        let fetched = self.loader.fetch_all_lists().await?;
        if !self.is_current(token) {
            log::debug!("Discarding lists of stale request #{token}");
            return Ok(());
        }

        if fetched.is_empty() {
            return self.bootstrap_and_apply(token).await;
        }

        let query_id = self.ctx.navigator.current_query_list_id().await;
        let selected = query_id
            .filter(|id| fetched.iter().any(|l| &l.id == id))
            .or_else(|| fetched.first().map(|l| l.id.clone()));
        let count = fetched.len();

        if self
            .apply(token, |state| {
                state.lists = fetched;
                state.selected_list_id = selected;
                state.phase = Phase::Ready;
            })
            .await
        {
            log::info!("Lists page ready with {count} lists");
        }
        Ok(())
    }

    /// Bootstrap the default list and make it the only, selected list
    async fn bootstrap_and_apply(&self, token: u64) -> CoreResult<()> {
        if !self.is_current(token) {
            log::debug!("Skipping bootstrap of stale request #{token}");
            return Ok(());
        }

        let list = self.bootstrap_default_list().await?;
        let id = list.id.clone();
        if self
            .apply(token, |state| {
                state.lists = vec![list];
                state.selected_list_id = Some(id.clone());
                state.phase = Phase::Ready;
            })
            .await
        {
            log::info!("Bootstrapped default list {id}");
        }
        Ok(())
    }

    /// Create the default list and record its id before it is shown
    async fn bootstrap_default_list(&self) -> CoreResult<List> {
        let input = CreateListInput::default_list(
            self.ctx.localizer.default_list_name(),
            self.config.default_list_editable,
        );
        let list = self
            .ctx
            .list_store
            .create_list(&input)
            .await
            .map_err(|e| match e {
                CoreError::CreateError(_) => e,
                other => CoreError::CreateError(other.to_string()),
            })?;

        if let Err(e) = self.loader.record_list_id(&list.id).await {
            log::warn!("Failed to record default list id {}: {e}", list.id);
        }
        Ok(list)
    }

    fn issue_request(&self) -> u64 {
        self.latest_request.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn is_current(&self, token: u64) -> bool {
        if !self.is_mounted() {
            return false;
        }
        match self.config.stale_guard {
            StaleGuard::RequestToken => self.latest_request.load(Ordering::SeqCst) == token,
            StaleGuard::LivenessOnly => true,
        }
    }

    /// Apply `update` if request `token` may still write. Returns whether it did.
    async fn apply<F>(&self, token: u64, update: F) -> bool
    where
        F: FnOnce(&mut SessionState),
    {
        let mut state = self.state.write().await;
        if !self.is_current(token) {
            log::debug!("Discarding result of request #{token}");
            return false;
        }
        update(&mut state);
        true
    }
}
