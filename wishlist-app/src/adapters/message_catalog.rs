//! Localized message catalog

use std::collections::HashMap;

use wishlist_core::error::{CoreError, CoreResult};
use wishlist_core::traits::Localizer;

/// Message id of the default list name
pub const DEFAULT_LIST_NAME_KEY: &str = "store/wishlist-default-list-name";

/// Flat `message id -> text` catalog for one locale.
///
/// Missing messages resolve to their default text, which for the default
/// list name is the empty string.
#[derive(Debug, Clone, Default)]
pub struct MessageCatalog {
    messages: HashMap<String, String>,
}

impl MessageCatalog {
    #[must_use]
    pub fn new(messages: HashMap<String, String>) -> Self {
        Self { messages }
    }

    /// Parse a `{"id": "text"}` JSON object
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let messages: HashMap<String, String> =
            serde_json::from_str(json).map_err(|e| CoreError::SerializationError(e.to_string()))?;
        Ok(Self { messages })
    }

    pub fn message(&self, id: &str) -> Option<&str> {
        self.messages.get(id).map(String::as_str)
    }
}

impl Localizer for MessageCatalog {
    fn default_list_name(&self) -> String {
        self.message(DEFAULT_LIST_NAME_KEY)
            .unwrap_or_default()
            .to_string()
    }
}
