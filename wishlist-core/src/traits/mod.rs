//! Collaborator abstraction trait definitions

mod list_id_cache;
mod list_store;
mod localizer;
mod navigator;

pub use list_id_cache::ListIdCache;
pub use list_store::ListStore;
pub use localizer::Localizer;
pub use navigator::Navigator;
