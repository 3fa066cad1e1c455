//! 业务逻辑服务层

mod list_loader;
mod list_mutation_service;
mod lists_page;

pub use list_loader::ListLoader;
pub use list_mutation_service::ListMutationService;
pub use lists_page::ListsPage;

use std::sync::Arc;

use crate::traits::{ListIdCache, ListStore, Localizer, Navigator};

/// 服务上下文 - 持有所有依赖
///
/// The host creates this context and injects its own collaborator implementations.
pub struct ServiceContext {
    /// Remote list store
    pub list_store: Arc<dyn ListStore>,
    /// Persisted list-id set
    pub list_id_cache: Arc<dyn ListIdCache>,
    /// Navigation bridge
    pub navigator: Arc<dyn Navigator>,
    /// Message resolution
    pub localizer: Arc<dyn Localizer>,
}

impl ServiceContext {
    /// 创建服务上下文
    #[must_use]
    pub fn new(
        list_store: Arc<dyn ListStore>,
        list_id_cache: Arc<dyn ListIdCache>,
        navigator: Arc<dyn Navigator>,
        localizer: Arc<dyn Localizer>,
    ) -> Self {
        Self {
            list_store,
            list_id_cache,
            navigator,
            localizer,
        }
    }
}
