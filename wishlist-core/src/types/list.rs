//! Wish list type definitions

use serde::{Deserialize, Serialize};

/// Longest accepted list name, in characters
pub const MAX_LIST_NAME_LEN: usize = 100;

/// An entry of a wish list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ListItem {
    /// Entry ID
    pub id: String,
    /// Product ID
    pub product_id: String,
    /// SKU ID
    pub sku_id: String,
    /// Quantity saved
    pub quantity: u32,
}

/// One wish list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct List {
    /// List ID, unique across a shopper's lists
    pub id: String,
    /// Display name (may be an empty localized default)
    pub name: String,
    /// Whether the list content may be changed
    pub is_editable: bool,
    /// Saved entries, in order
    #[serde(default)]
    pub items: Vec<ListItem>,
}

/// Create list request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateListInput {
    pub is_editable: bool,
    pub items: Vec<ListItem>,
    pub name: String,
}

impl CreateListInput {
    /// Input used to bootstrap the default list
    #[must_use]
    pub fn default_list(name: String, is_editable: bool) -> Self {
        Self {
            is_editable,
            items: Vec::new(),
            name,
        }
    }
}

/// Partial list update (only `Some` fields are written)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateListInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_editable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<ListItem>>,
}

impl UpdateListInput {
    /// Rename-only patch
    #[must_use]
    pub fn rename(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Whether the patch changes nothing
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.is_editable.is_none() && self.items.is_none()
    }

    /// Apply the patch to a list, identity preserved
    pub fn apply_to(&self, list: &mut List) {
        if let Some(ref name) = self.name {
            list.name.clone_from(name);
        }
        if let Some(is_editable) = self.is_editable {
            list.is_editable = is_editable;
        }
        if let Some(ref items) = self.items {
            list.items.clone_from(items);
        }
    }
}
