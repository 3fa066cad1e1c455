//! Navigation request and query-string helpers

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

/// A request to move the storefront to another page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NavigationRequest {
    /// Page name, e.g. `store.lists`
    pub page: String,
    /// URL query string without the leading `?`
    pub query: String,
}

impl NavigationRequest {
    /// Request pointing the lists page at one list
    #[must_use]
    pub fn to_list(page: &str, query_key: &str, list_id: &str) -> Self {
        Self {
            page: page.to_string(),
            query: form_urlencoded::Serializer::new(String::new())
                .append_pair(query_key, list_id)
                .finish(),
        }
    }
}

/// Parsed query string
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    pairs: Vec<(String, String)>,
}

impl ListQuery {
    /// Parse an `application/x-www-form-urlencoded` query; a leading `?` is tolerated
    #[must_use]
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let pairs = form_urlencoded::parse(query.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        Self { pairs }
    }

    /// First value for `key`
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// List id carried by `query_key`; an empty value counts as absent
    #[must_use]
    pub fn list_id(&self, query_key: &str) -> Option<String> {
        self.get(query_key)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    }
}
