//! Dashboard-wide reactive state, shared through Leptos context.

use leptos::*;

use crate::application::{DashboardConfig, ViewController};
use crate::domain::{
    logging::{LogComponent, get_logger},
    navigation::ViewId,
    theme::ThemePreference,
};
use crate::infrastructure::{DocumentRoot, LocalStorageStore, timers::schedule_once};

pub type BrowserController = ViewController<LocalStorageStore, DocumentRoot>;

/// Handle to the controller signal. `Copy`, so closures can capture it freely.
#[derive(Clone, Copy)]
pub struct DashboardState {
    controller: RwSignal<BrowserController>,
    config: StoredValue<DashboardConfig>,
}

impl DashboardState {
    pub fn current_view(&self) -> ViewId {
        self.controller.with(|c| c.current_view())
    }

    pub fn theme(&self) -> ThemePreference {
        self.controller.with(|c| c.theme())
    }

    pub fn is_loading(&self) -> bool {
        self.controller.with(|c| c.is_loading())
    }

    pub fn select_view(&self, view: ViewId) {
        self.controller.update(|c| c.select_view(view));
    }

    pub fn toggle_theme(&self) {
        self.controller.update(|c| {
            c.toggle_theme();
        });
    }

    pub fn config(&self) -> DashboardConfig {
        self.config.get_value()
    }
}

/// Build the controller, apply the stored theme and arm the splash timer.
pub fn provide_dashboard_state(config: DashboardConfig) -> DashboardState {
    let mut controller = ViewController::new(
        LocalStorageStore::new(),
        DocumentRoot::new(config.dark_class.clone()),
        &config,
    );
    controller.initialize();

    let delay = config.loading_delay_ms;
    let state = DashboardState {
        controller: create_rw_signal(controller),
        config: store_value(config),
    };

    schedule_once(delay, move || {
        state.controller.update(|c| {
            if c.finish_loading() {
                get_logger().info(LogComponent::View("App"), "✅ Dashboard ready");
            }
        });
    });

    provide_context(state);
    state
}

pub fn use_dashboard_state() -> DashboardState {
    use_context::<DashboardState>().expect("DashboardState not provided")
}
