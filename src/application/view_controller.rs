use crate::application::config::DashboardConfig;
use crate::domain::{
    logging::{LogComponent, get_logger},
    navigation::ViewId,
    repositories::{PreferenceStore, PresentationRoot},
    theme::ThemePreference,
};

/// One-shot splash gate: starts loading and opens exactly once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct LoadingGate {
    fired: bool,
}

impl LoadingGate {
    fn is_loading(&self) -> bool {
        !self.fired
    }

    fn fire(&mut self) -> bool {
        !std::mem::replace(&mut self.fired, true)
    }
}

/// Owns the current view and the theme preference.
///
/// The controller is the only writer of either value and of the stored theme
/// key. Failures of the injected store or presentation root are logged and
/// never propagated: the in-memory state always wins.
pub struct ViewController<S: PreferenceStore, R: PresentationRoot> {
    store: S,
    root: R,
    storage_key: String,
    current_view: ViewId,
    theme: ThemePreference,
    initialized: bool,
    loading: LoadingGate,
}

impl<S: PreferenceStore, R: PresentationRoot> ViewController<S, R> {
    pub fn new(store: S, root: R, config: &DashboardConfig) -> Self {
        Self {
            store,
            root,
            storage_key: config.theme_storage_key.clone(),
            current_view: ViewId::default(),
            theme: ThemePreference::default(),
            initialized: false,
            loading: LoadingGate::default(),
        }
    }

    /// Read the stored preference once and apply it to the presentation
    /// root. Repeated calls do nothing.
    pub fn initialize(&mut self) {
        if self.initialized {
            crate::log_debug!(LogComponent::Controller("Init"), "Already initialized, skipping");
            return;
        }
        self.initialized = true;

        let stored = match self.store.read(&self.storage_key) {
            Ok(value) => value,
            Err(e) => {
                get_logger().warn(
                    LogComponent::Controller("Init"),
                    &format!("⚠️ Could not read theme preference: {}", e),
                );
                None
            }
        };
        self.theme = ThemePreference::from_stored(stored.as_deref());
        self.apply_theme();

        get_logger().info(
            LogComponent::Controller("Init"),
            &format!("🚀 Controller initialized with {} theme", self.theme),
        );
    }

    pub fn select_view(&mut self, view: ViewId) {
        if self.current_view != view {
            crate::log_debug!(
                LogComponent::Controller("View"),
                "{} -> {}",
                self.current_view,
                view
            );
        }
        self.current_view = view;
    }

    /// Select a view from its wire id; unknown ids land on the overview.
    pub fn select_view_by_id(&mut self, raw: &str) -> ViewId {
        let view = ViewId::parse_or_default(raw);
        self.select_view(view);
        view
    }

    /// Flip the theme, mark the presentation root and persist the new value.
    pub fn toggle_theme(&mut self) -> ThemePreference {
        self.theme = self.theme.toggled();
        self.apply_theme();

        if let Err(e) = self.store.write(&self.storage_key, self.theme.as_stored()) {
            get_logger().warn(
                LogComponent::Controller("Theme"),
                &format!("⚠️ Theme not persisted: {}", e),
            );
        }

        crate::log_info!(LogComponent::Controller("Theme"), "🌓 Theme switched to {}", self.theme);
        self.theme
    }

    pub fn current_view(&self) -> ViewId {
        self.current_view
    }

    pub fn theme(&self) -> ThemePreference {
        self.theme
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_loading()
    }

    /// Close the splash. Returns `true` only for the call that actually
    /// changed the state.
    pub fn finish_loading(&mut self) -> bool {
        let fired = self.loading.fire();
        if fired {
            crate::log_debug!(LogComponent::Controller("Loading"), "Splash finished");
        }
        fired
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn root(&self) -> &R {
        &self.root
    }

    fn apply_theme(&mut self) {
        if let Err(e) = self.root.apply_theme(self.theme) {
            get_logger().error(
                LogComponent::Controller("Theme"),
                &format!("❌ Could not apply {} theme: {}", self.theme, e),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::{DashboardError, DocumentResult, StoreResult};
    use std::collections::HashMap;

    #[derive(Default)]
    struct FakeStore {
        values: HashMap<String, String>,
        broken: bool,
        writes: usize,
    }

    impl FakeStore {
        fn with(key: &str, value: &str) -> Self {
            let mut store = Self::default();
            store.values.insert(key.to_string(), value.to_string());
            store
        }

        fn broken() -> Self {
            Self { broken: true, ..Self::default() }
        }
    }

    impl PreferenceStore for FakeStore {
        fn read(&self, key: &str) -> StoreResult<Option<String>> {
            if self.broken {
                return Err(DashboardError::StorageRead("denied".into()));
            }
            Ok(self.values.get(key).cloned())
        }

        fn write(&mut self, key: &str, value: &str) -> StoreResult<()> {
            if self.broken {
                return Err(DashboardError::StorageWrite("denied".into()));
            }
            self.writes += 1;
            self.values.insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    #[derive(Default)]
    struct FakeRoot {
        dark: bool,
        applied: usize,
    }

    impl PresentationRoot for FakeRoot {
        fn apply_theme(&mut self, theme: ThemePreference) -> DocumentResult<()> {
            self.dark = theme.is_dark();
            self.applied += 1;
            Ok(())
        }
    }

    fn controller(store: FakeStore) -> ViewController<FakeStore, FakeRoot> {
        ViewController::new(store, FakeRoot::default(), &DashboardConfig::default())
    }

    #[test]
    fn starts_on_overview_in_light_mode() {
        let c = controller(FakeStore::default());
        assert_eq!(c.current_view(), ViewId::Overview);
        assert_eq!(c.theme(), ThemePreference::Light);
        assert!(c.is_loading());
        assert!(!c.is_initialized());
    }

    #[test]
    fn stored_dark_is_applied_on_initialize() {
        let mut c = controller(FakeStore::with("theme", "dark"));
        c.initialize();
        assert_eq!(c.theme(), ThemePreference::Dark);
        assert!(c.root().dark);
    }

    #[test]
    fn missing_or_garbage_preference_stays_light() {
        for store in [FakeStore::default(), FakeStore::with("theme", "purple")] {
            let mut c = controller(store);
            c.initialize();
            assert_eq!(c.theme(), ThemePreference::Light);
            assert!(!c.root().dark);
        }
    }

    #[test]
    fn initialize_runs_once() {
        let mut c = controller(FakeStore::with("theme", "dark"));
        c.initialize();
        c.toggle_theme();
        c.initialize();
        assert_eq!(c.theme(), ThemePreference::Light);
        assert_eq!(c.root().applied, 2);
    }

    #[test]
    fn toggle_writes_through() {
        let mut c = controller(FakeStore::default());
        c.initialize();
        assert_eq!(c.toggle_theme(), ThemePreference::Dark);
        assert_eq!(c.store().values.get("theme").map(String::as_str), Some("dark"));
        assert_eq!(c.toggle_theme(), ThemePreference::Light);
        assert_eq!(c.store().values.get("theme").map(String::as_str), Some("light"));
        assert_eq!(c.store().writes, 2);
    }

    #[test]
    fn broken_store_is_not_fatal() {
        let mut c = controller(FakeStore::broken());
        c.initialize();
        assert_eq!(c.theme(), ThemePreference::Light);
        assert_eq!(c.toggle_theme(), ThemePreference::Dark);
        assert!(c.root().dark);
    }

    #[test]
    fn custom_storage_key_is_used() {
        let config = DashboardConfig { theme_storage_key: "dash.theme".into(), ..Default::default() };
        let mut c = ViewController::new(FakeStore::default(), FakeRoot::default(), &config);
        c.toggle_theme();
        assert!(c.store().values.contains_key("dash.theme"));
        assert!(!c.store().values.contains_key("theme"));
    }

    #[test]
    fn select_by_unknown_id_falls_back() {
        let mut c = controller(FakeStore::default());
        assert_eq!(c.select_view_by_id("employment"), ViewId::Employment);
        assert_eq!(c.select_view_by_id("reports"), ViewId::Overview);
        assert_eq!(c.current_view(), ViewId::Overview);
    }

    #[test]
    fn loading_gate_fires_once() {
        let mut c = controller(FakeStore::default());
        c.initialize();
        assert!(c.is_loading());
        assert!(c.finish_loading());
        assert!(!c.is_loading());
        assert!(!c.finish_loading());
        assert!(!c.is_loading());
    }
}
