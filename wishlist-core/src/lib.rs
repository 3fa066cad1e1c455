//! Wishlist Core Library
//!
//! Client-side controller for a storefront "wish list" page:
//! - List load reconciliation (cached id set resolved against the remote store)
//! - Default list bootstrap, so a shopper always has at least one list
//! - Selected-list tracking driven by a navigation query parameter
//! - Optimistic application of create/update/delete results
//!
//! This library is UI-framework independent: the remote store, the id cache,
//! navigation and localization are all injected through traits.

pub mod error;
pub mod services;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use services::{ListLoader, ListMutationService, ListsPage, ServiceContext};
pub use traits::{ListIdCache, ListStore, Localizer, Navigator};
