//! 类型定义模块

mod config;
mod list;
mod navigation;
mod session;

pub use config::{ListsPageConfig, NavigationTrigger, StaleGuard};
pub use list::{CreateListInput, List, ListItem, UpdateListInput, MAX_LIST_NAME_LEN};
pub use navigation::{ListQuery, NavigationRequest};
pub use session::{ListsPageView, Phase, SessionState};
