use wasm_bindgen::prelude::*;

use crate::domain::logging::{LogComponent, get_logger};

pub mod application;
pub mod domain;
pub mod infrastructure;
#[cfg(not(feature = "logic-only"))]
pub mod presentation;

/// Wire the logger and clock, read the config override and mount the UI
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    domain::logging::init_logger(Box::new(infrastructure::services::ConsoleLogger::for_build()));
    domain::logging::init_time_provider(Box::new(
        infrastructure::services::BrowserTimeProvider::new(),
    ));

    let config = infrastructure::config::load_config();
    get_logger().info(
        LogComponent::Boot("Initialize"),
        &format!("🚀 Mounting dashboard (theme key '{}')", config.theme_storage_key),
    );

    #[cfg(not(feature = "logic-only"))]
    {
        use presentation::App;
        leptos::mount_to_body(move || leptos::view! { <App config=config/> });
    }

    #[cfg(feature = "logic-only")]
    let _ = config;
}
