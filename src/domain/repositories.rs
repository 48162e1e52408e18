use crate::domain::errors::{DocumentResult, StoreResult};
use crate::domain::theme::ThemePreference;

/// Durable per-device string store (browser `localStorage` in production)
pub trait PreferenceStore {
    /// `Ok(None)` means the key was never written.
    fn read(&self, key: &str) -> StoreResult<Option<String>>;

    fn write(&mut self, key: &str, value: &str) -> StoreResult<()>;
}

/// Top-level visual root that carries the presentation-mode marker
pub trait PresentationRoot {
    fn apply_theme(&mut self, theme: ThemePreference) -> DocumentResult<()>;
}
