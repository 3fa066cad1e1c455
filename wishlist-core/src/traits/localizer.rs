//! Localization abstract Trait

/// Resolves the localized messages the controller needs
pub trait Localizer: Send + Sync {
    /// Name given to the bootstrapped default list (may be empty)
    fn default_list_name(&self) -> String;
}
