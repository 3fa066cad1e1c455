//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{CoreError, CoreResult};
use crate::services::{ListsPage, ServiceContext};
use crate::traits::{ListIdCache, ListStore, Localizer, Navigator};
use crate::types::{CreateListInput, List, ListsPageConfig, NavigationRequest, UpdateListInput};

// ===== MockListStore =====

pub struct MockListStore {
    lists: RwLock<HashMap<String, List>>,
    next_id: RwLock<u32>,
    fetch_count: RwLock<usize>,
    create_count: RwLock<usize>,
    /// 如果 Some，fetch_list 时返回此错误
    fetch_error: RwLock<Option<CoreError>>,
    /// 如果 Some，create_list 时返回此错误
    create_error: RwLock<Option<CoreError>>,
}

impl MockListStore {
    pub fn new() -> Self {
        Self {
            lists: RwLock::new(HashMap::new()),
            next_id: RwLock::new(1),
            fetch_count: RwLock::new(0),
            create_count: RwLock::new(0),
            fetch_error: RwLock::new(None),
            create_error: RwLock::new(None),
        }
    }

    pub async fn insert(&self, list: List) {
        self.lists.write().await.insert(list.id.clone(), list);
    }

    pub async fn remove(&self, id: &str) {
        self.lists.write().await.remove(id);
    }

    pub async fn get(&self, id: &str) -> Option<List> {
        self.lists.read().await.get(id).cloned()
    }

    pub async fn fetch_count(&self) -> usize {
        *self.fetch_count.read().await
    }

    pub async fn create_count(&self) -> usize {
        *self.create_count.read().await
    }

    pub async fn set_fetch_error(&self, err: Option<CoreError>) {
        *self.fetch_error.write().await = err;
    }

    pub async fn set_create_error(&self, err: Option<CoreError>) {
        *self.create_error.write().await = err;
    }
}

#[async_trait]
impl ListStore for MockListStore {
    async fn fetch_list(&self, id: &str) -> CoreResult<Option<List>> {
        *self.fetch_count.write().await += 1;
        if let Some(ref err) = *self.fetch_error.read().await {
            return Err(err.clone());
        }
        Ok(self.lists.read().await.get(id).cloned())
    }

    async fn create_list(&self, input: &CreateListInput) -> CoreResult<List> {
        *self.create_count.write().await += 1;
        if let Some(ref err) = *self.create_error.read().await {
            return Err(err.clone());
        }
        let mut next_id = self.next_id.write().await;
        let list = List {
            id: format!("L{next_id}"),
            name: input.name.clone(),
            is_editable: input.is_editable,
            items: input.items.clone(),
        };
        *next_id += 1;
        self.lists
            .write()
            .await
            .insert(list.id.clone(), list.clone());
        Ok(list)
    }

    async fn update_list(&self, id: &str, patch: &UpdateListInput) -> CoreResult<List> {
        let mut store = self.lists.write().await;
        let list = store
            .get_mut(id)
            .ok_or_else(|| CoreError::ListNotFound(id.to_string()))?;
        patch.apply_to(list);
        Ok(list.clone())
    }

    async fn delete_list(&self, id: &str) -> CoreResult<()> {
        self.lists
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| CoreError::ListNotFound(id.to_string()))
    }
}

// ===== MockListIdCache =====

pub struct MockListIdCache {
    ids: RwLock<Vec<String>>,
    load_error: RwLock<Option<String>>,
    record_error: RwLock<Option<String>>,
    /// 每次 load_ids 依次取出一个延迟（用于测试并发加载）
    load_delays: RwLock<VecDeque<Duration>>,
}

impl MockListIdCache {
    pub fn new() -> Self {
        Self {
            ids: RwLock::new(Vec::new()),
            load_error: RwLock::new(None),
            record_error: RwLock::new(None),
            load_delays: RwLock::new(VecDeque::new()),
        }
    }

    /// Append without the idempotence check
    pub async fn push_raw(&self, id: &str) {
        self.ids.write().await.push(id.to_string());
    }

    pub async fn set_load_error(&self, err: Option<String>) {
        *self.load_error.write().await = err;
    }

    pub async fn set_record_error(&self, err: Option<String>) {
        *self.record_error.write().await = err;
    }

    pub async fn push_load_delay(&self, delay: Duration) {
        self.load_delays.write().await.push_back(delay);
    }
}

#[async_trait]
impl ListIdCache for MockListIdCache {
    async fn load_ids(&self) -> CoreResult<Vec<String>> {
        let delay = self.load_delays.write().await.pop_front();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if let Some(ref msg) = *self.load_error.read().await {
            return Err(CoreError::StorageError(msg.clone()));
        }
        Ok(self.ids.read().await.clone())
    }

    async fn record_id(&self, id: &str) -> CoreResult<()> {
        if let Some(ref msg) = *self.record_error.read().await {
            return Err(CoreError::StorageError(msg.clone()));
        }
        let mut ids = self.ids.write().await;
        if !ids.iter().any(|existing| existing == id) {
            ids.push(id.to_string());
        }
        Ok(())
    }
}

// ===== MockNavigator =====

pub struct MockNavigator {
    query_list_id: RwLock<Option<String>>,
    requests: RwLock<Vec<NavigationRequest>>,
    navigate_error: RwLock<Option<String>>,
}

impl MockNavigator {
    pub fn new() -> Self {
        Self {
            query_list_id: RwLock::new(None),
            requests: RwLock::new(Vec::new()),
            navigate_error: RwLock::new(None),
        }
    }

    pub async fn set_query_list_id(&self, id: Option<&str>) {
        *self.query_list_id.write().await = id.map(str::to_string);
    }

    pub async fn requests(&self) -> Vec<NavigationRequest> {
        self.requests.read().await.clone()
    }

    pub async fn set_navigate_error(&self, err: Option<String>) {
        *self.navigate_error.write().await = err;
    }
}

#[async_trait]
impl Navigator for MockNavigator {
    async fn current_query_list_id(&self) -> Option<String> {
        self.query_list_id.read().await.clone()
    }

    async fn navigate(&self, request: NavigationRequest) -> CoreResult<()> {
        if let Some(ref msg) = *self.navigate_error.read().await {
            return Err(CoreError::NavigationError(msg.clone()));
        }
        self.requests.write().await.push(request);
        Ok(())
    }
}

// ===== MockLocalizer =====

pub struct MockLocalizer {
    default_list_name: String,
}

impl MockLocalizer {
    pub fn new(default_list_name: &str) -> Self {
        Self {
            default_list_name: default_list_name.to_string(),
        }
    }
}

impl Localizer for MockLocalizer {
    fn default_list_name(&self) -> String {
        self.default_list_name.clone()
    }
}

// ===== 工厂方法 =====

/// Handles on the mocks behind a test `ServiceContext`
pub struct TestMocks {
    pub store: Arc<MockListStore>,
    pub cache: Arc<MockListIdCache>,
    pub navigator: Arc<MockNavigator>,
}

impl TestMocks {
    /// Put lists in the remote store and their ids in the cache
    pub async fn seed(&self, lists: &[List]) {
        for list in lists {
            self.store.insert(list.clone()).await;
            self.cache.push_raw(&list.id).await;
        }
    }
}

/// 创建测试用 `ServiceContext`
pub fn create_test_context() -> (Arc<ServiceContext>, TestMocks) {
    let store = Arc::new(MockListStore::new());
    let cache = Arc::new(MockListIdCache::new());
    let navigator = Arc::new(MockNavigator::new());
    let localizer = Arc::new(MockLocalizer::new(""));

    let ctx = Arc::new(ServiceContext::new(
        store.clone(),
        cache.clone(),
        navigator.clone(),
        localizer,
    ));

    (
        ctx,
        TestMocks {
            store,
            cache,
            navigator,
        },
    )
}

/// 创建测试用 `ListsPage`
pub fn create_test_page(config: ListsPageConfig) -> (ListsPage, TestMocks) {
    let (ctx, mocks) = create_test_context();
    (ListsPage::new(ctx, config), mocks)
}

/// 创建一个用于测试的 `List`
pub fn test_list(id: &str) -> List {
    List {
        id: id.to_string(),
        name: format!("List {id}"),
        is_editable: true,
        items: Vec::new(),
    }
}
