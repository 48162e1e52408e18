#![cfg(feature = "logic-only")]

use economic_dashboard_wasm::application::{DashboardConfig, ViewController};
use economic_dashboard_wasm::domain::theme::ThemePreference;
use economic_dashboard_wasm::infrastructure::InMemoryStore;
use economic_dashboard_wasm::domain::errors::DocumentResult;
use economic_dashboard_wasm::domain::repositories::PresentationRoot;
use wasm_bindgen_test::*;

struct NullRoot;

impl PresentationRoot for NullRoot {
    fn apply_theme(&mut self, _theme: ThemePreference) -> DocumentResult<()> {
        Ok(())
    }
}

#[wasm_bindgen_test]
fn controller_runs_without_presentation() {
    let mut c = ViewController::new(InMemoryStore::new(), NullRoot, &DashboardConfig::default());
    c.initialize();
    assert_eq!(c.toggle_theme(), ThemePreference::Dark);
    assert_eq!(c.store().get("theme"), Some("dark"));
}
