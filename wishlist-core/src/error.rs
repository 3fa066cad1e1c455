//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Core layer error type
#[derive(Error, Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Retrieving lists (remote store or cached id set) failed
    #[error("Fetch error: {0}")]
    FetchError(String),

    /// Creating a list failed (bootstrap or user initiated)
    #[error("Create error: {0}")]
    CreateError(String),

    /// Updating a list failed
    #[error("Update error: {0}")]
    UpdateError(String),

    /// Deleting a list failed
    #[error("Delete error: {0}")]
    DeleteError(String),

    /// List not found
    #[error("List not found: {0}")]
    ListNotFound(String),

    /// Storage layer error
    #[error("Storage error: {0}")]
    StorageError(String),

    /// serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Navigation request rejected by the host
    #[error("Navigation error: {0}")]
    NavigationError(String),

    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl CoreError {
    /// Whether it is expected behavior (user input, resource does not exist, etc.) is used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::ListNotFound(_) | Self::ValidationError(_) | Self::FetchError(_) => true,
            Self::CreateError(_)
            | Self::UpdateError(_)
            | Self::DeleteError(_)
            | Self::StorageError(_)
            | Self::SerializationError(_)
            | Self::NavigationError(_) => false,
        }
    }

    /// Log the error at the level chosen by [`Self::is_expected`].
    pub(crate) fn log(&self, context: &str) {
        if self.is_expected() {
            log::warn!("{context}: {self}");
        } else {
            log::error!("{context}: {self}");
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
