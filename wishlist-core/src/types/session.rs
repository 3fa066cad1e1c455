//! Session state of the lists page

use serde::Serialize;

use super::list::List;

/// Controller phase
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Initial load or default-list bootstrap in progress
    #[default]
    Loading,
    /// Steady state
    Ready,
}

/// Working state owned by `ListsPage`
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    /// Lists in discovery order, ids unique
    pub lists: Vec<List>,
    /// Selection; may briefly point at an unknown id during a navigation reload
    pub selected_list_id: Option<String>,
    pub phase: Phase,
}

impl SessionState {
    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    /// The list to render: the selection if it resolves, else the first list
    pub fn selected_list(&self) -> Option<&List> {
        self.selected_list_id
            .as_deref()
            .and_then(|id| self.find(id))
            .or_else(|| self.lists.first())
    }

    pub fn find(&self, id: &str) -> Option<&List> {
        self.lists.iter().find(|l| l.id == id)
    }

    /// Index of the entry with `id`
    pub fn position(&self, id: &str) -> Option<usize> {
        self.lists.iter().position(|l| l.id == id)
    }

    /// Render snapshot
    pub fn view(&self) -> ListsPageView {
        ListsPageView {
            is_loading: self.is_loading(),
            lists: self.lists.clone(),
            selected_list_id: self.selected_list().map(|l| l.id.clone()),
        }
    }
}

/// What the presentation shell renders
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ListsPageView {
    pub is_loading: bool,
    pub lists: Vec<List>,
    /// Resolved selection
    pub selected_list_id: Option<String>,
}
