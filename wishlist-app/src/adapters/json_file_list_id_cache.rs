//! JSON file list-id cache
//!
//! Persists the shopper's known list ids across sessions as
//! `{"listIds": [...]}`. A missing file is an empty set.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use wishlist_core::error::{CoreError, CoreResult};
use wishlist_core::traits::ListIdCache;

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListIdFile {
    #[serde(default)]
    list_ids: Vec<String>,
}

/// File-backed `ListIdCache`
pub struct JsonFileListIdCache {
    path: PathBuf,
    /// 内存缓存
    cache: RwLock<Option<Vec<String>>>,
}

impl JsonFileListIdCache {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: RwLock::new(None),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load_from_file(&self) -> CoreResult<Vec<String>> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(CoreError::StorageError(format!(
                    "Failed to read {}: {e}",
                    self.path.display()
                )))
            }
        };

        let file: ListIdFile = serde_json::from_str(&raw)
            .map_err(|e| CoreError::SerializationError(e.to_string()))?;
        Ok(file.list_ids)
    }

    async fn save_to_file(&self, ids: &[String]) -> CoreResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await.map_err(|e| {
                    CoreError::StorageError(format!(
                        "Failed to create {}: {e}",
                        parent.display()
                    ))
                })?;
            }
        }

        let json = serde_json::to_string_pretty(&ListIdFile {
            list_ids: ids.to_vec(),
        })
        .map_err(|e| CoreError::SerializationError(e.to_string()))?;

        tokio::fs::write(&self.path, json).await.map_err(|e| {
            CoreError::StorageError(format!("Failed to write {}: {e}", self.path.display()))
        })?;

        log::debug!("Saved {} list ids to {}", ids.len(), self.path.display());
        Ok(())
    }
}

#[async_trait]
impl ListIdCache for JsonFileListIdCache {
    async fn load_ids(&self) -> CoreResult<Vec<String>> {
        // 先检查缓存（读锁）
        {
            let cache = self.cache.read().await;
            if let Some(ref ids) = *cache {
                return Ok(ids.clone());
            }
        }

        // 缓存为空，拿写锁加载（double-check）
        let mut cache = self.cache.write().await;
        if let Some(ref ids) = *cache {
            return Ok(ids.clone());
        }

        let ids = self.load_from_file().await?;
        *cache = Some(ids.clone());
        Ok(ids)
    }

    async fn record_id(&self, id: &str) -> CoreResult<()> {
        let mut cache = self.cache.write().await;
        let mut ids = match cache.take() {
            Some(ids) => ids,
            None => self.load_from_file().await?,
        };

        if ids.iter().any(|existing| existing == id) {
            *cache = Some(ids);
            return Ok(());
        }

        ids.push(id.to_string());
        let saved = self.save_to_file(&ids).await;
        if saved.is_err() {
            ids.pop();
        }
        *cache = Some(ids);
        saved
    }
}
