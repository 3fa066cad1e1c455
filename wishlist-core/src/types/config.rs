//! Controller configuration

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// When an external query-parameter change triggers a reload
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum NavigationTrigger {
    /// Any change of the list id, including "absent" -> "present"
    #[default]
    AnyChange,
    /// Only when the previous list id was defined and differs (legacy storefront behavior)
    RequirePrevious,
}

impl NavigationTrigger {
    /// Whether a `previous -> current` transition should be reconciled
    #[must_use]
    pub fn fires(self, previous: Option<&str>, current: Option<&str>) -> bool {
        match self {
            Self::AnyChange => previous != current,
            Self::RequirePrevious => previous.is_some() && previous != current,
        }
    }
}

/// How overlapping asynchronous loads are arbitrated
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum StaleGuard {
    /// Only the newest issued load may apply its result
    #[default]
    RequestToken,
    /// Only the liveness flag is checked; the last load to resume wins
    LivenessOnly,
}

/// Lists page configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct ListsPageConfig {
    /// Page navigated to after a deletion
    pub lists_page: String,
    /// Query parameter carrying the selected list id
    pub query_key: String,
    pub navigation_trigger: NavigationTrigger,
    pub stale_guard: StaleGuard,
    /// `is_editable` of the bootstrapped default list
    pub default_list_editable: bool,
}

impl Default for ListsPageConfig {
    fn default() -> Self {
        Self {
            lists_page: "store.lists".to_string(),
            query_key: "listId".to_string(),
            navigation_trigger: NavigationTrigger::default(),
            stale_guard: StaleGuard::default(),
            default_list_editable: false,
        }
    }
}

impl ListsPageConfig {
    /// Parse from JSON; absent fields keep their defaults
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| CoreError::SerializationError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that cannot produce a navigation request
    pub fn validate(&self) -> CoreResult<()> {
        if self.lists_page.trim().is_empty() {
            return Err(CoreError::ValidationError(
                "listsPage cannot be empty".to_string(),
            ));
        }
        if self.query_key.trim().is_empty() {
            return Err(CoreError::ValidationError(
                "queryKey cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}
