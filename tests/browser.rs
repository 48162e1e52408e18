#![cfg(target_arch = "wasm32")]

use economic_dashboard_wasm::application::{DashboardConfig, ViewController};
use economic_dashboard_wasm::domain::repositories::{PreferenceStore, PresentationRoot};
use economic_dashboard_wasm::domain::theme::ThemePreference;
use economic_dashboard_wasm::infrastructure::timers::schedule_once;
use economic_dashboard_wasm::infrastructure::{DocumentRoot, LocalStorageStore};
use gloo_timers::future::sleep;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

const KEY: &str = "dashboard-test-theme";

fn clear_key() {
    let storage = web_sys::window().unwrap().local_storage().unwrap().unwrap();
    storage.remove_item(KEY).unwrap();
}

#[wasm_bindgen_test]
fn local_storage_round_trip() {
    clear_key();
    let mut store = LocalStorageStore::new();
    assert_eq!(store.read(KEY).unwrap(), None);
    store.write(KEY, "dark").unwrap();
    assert_eq!(store.read(KEY).unwrap().as_deref(), Some("dark"));
    clear_key();
}

#[wasm_bindgen_test]
fn document_root_toggles_class() {
    let mut root = DocumentRoot::new("dark-test");
    root.apply_theme(ThemePreference::Dark).unwrap();
    assert!(root.is_dark().unwrap());
    root.apply_theme(ThemePreference::Light).unwrap();
    assert!(!root.is_dark().unwrap());
}

#[wasm_bindgen_test]
fn controller_persists_through_local_storage() {
    clear_key();
    let config = DashboardConfig { theme_storage_key: KEY.into(), ..Default::default() };

    let mut first = ViewController::new(LocalStorageStore::new(), DocumentRoot::new("dark-test"), &config);
    first.initialize();
    assert_eq!(first.toggle_theme(), ThemePreference::Dark);

    let mut second = ViewController::new(LocalStorageStore::new(), DocumentRoot::new("dark-test"), &config);
    second.initialize();
    assert_eq!(second.theme(), ThemePreference::Dark);
    assert!(second.root().is_dark().unwrap());
    clear_key();
}

#[wasm_bindgen_test(async)]
async fn scheduled_callback_fires_once() {
    let hits = Rc::new(Cell::new(0));
    let counter = hits.clone();
    schedule_once(10, move || counter.set(counter.get() + 1));
    assert_eq!(hits.get(), 0);
    sleep(Duration::from_millis(50)).await;
    assert_eq!(hits.get(), 1);
}
