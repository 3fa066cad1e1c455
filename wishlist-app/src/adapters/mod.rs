//! Storage, navigation and localization adapters for hosts without their own.

mod memory_list_store;
mod memory_navigator;
mod message_catalog;

#[cfg(feature = "json-file-cache")]
mod json_file_list_id_cache;

pub use memory_list_store::InMemoryListStore;
pub use memory_navigator::InMemoryNavigator;
pub use message_catalog::{MessageCatalog, DEFAULT_LIST_NAME_KEY};

#[cfg(feature = "json-file-cache")]
pub use json_file_list_id_cache::JsonFileListIdCache;
