use economic_dashboard_wasm::application::{DashboardConfig, ViewController};
use economic_dashboard_wasm::domain::errors::DocumentResult;
use economic_dashboard_wasm::domain::navigation::ViewId;
use economic_dashboard_wasm::domain::repositories::PresentationRoot;
use economic_dashboard_wasm::domain::theme::ThemePreference;
use economic_dashboard_wasm::infrastructure::InMemoryStore;
use quickcheck_macros::quickcheck;
use strum::IntoEnumIterator;

#[derive(Default)]
struct MarkerRoot {
    dark: bool,
}

impl PresentationRoot for MarkerRoot {
    fn apply_theme(&mut self, theme: ThemePreference) -> DocumentResult<()> {
        self.dark = theme.is_dark();
        Ok(())
    }
}

type TestController = ViewController<InMemoryStore, MarkerRoot>;

fn controller(store: InMemoryStore) -> TestController {
    let mut c = ViewController::new(store, MarkerRoot::default(), &DashboardConfig::default());
    c.initialize();
    c
}

fn view_at(index: u8) -> ViewId {
    let views: Vec<ViewId> = ViewId::iter().collect();
    views[index as usize % views.len()]
}

#[quickcheck]
fn selected_view_is_current(indices: Vec<u8>) -> bool {
    let mut c = controller(InMemoryStore::new());
    indices.into_iter().map(view_at).all(|v| {
        c.select_view(v);
        c.current_view() == v
    })
}

#[quickcheck]
fn unknown_ids_land_on_overview(raw: String) -> bool {
    let mut c = controller(InMemoryStore::new());
    c.select_view(ViewId::Trade);
    let picked = c.select_view_by_id(&raw);
    match raw.parse::<ViewId>() {
        Ok(v) => picked == v && c.current_view() == v,
        Err(_) => picked == ViewId::Overview && c.current_view() == ViewId::Overview,
    }
}

#[quickcheck]
fn double_toggle_is_identity(start_dark: bool) -> bool {
    let stored = if start_dark { "dark" } else { "light" };
    let mut c = controller(InMemoryStore::with_value("theme", stored));
    let before = c.theme();
    c.toggle_theme();
    c.toggle_theme();
    c.theme() == before
        && c.root().dark == before.is_dark()
        && c.store().get("theme") == Some(before.as_stored())
}

#[quickcheck]
fn root_and_store_track_toggle_count(toggles: u8) -> bool {
    let mut c = controller(InMemoryStore::new());
    for _ in 0..toggles {
        c.toggle_theme();
    }
    let dark = toggles % 2 == 1;
    c.theme().is_dark() == dark && c.root().dark == dark
}

#[test]
fn stored_dark_marks_root_before_interaction() {
    let c = controller(InMemoryStore::with_value("theme", "dark"));
    assert!(c.root().dark);
    assert_eq!(c.theme(), ThemePreference::Dark);
    assert_eq!(c.current_view(), ViewId::Overview);
}

#[test]
fn no_stored_value_leaves_light_marker() {
    let c = controller(InMemoryStore::new());
    assert!(!c.root().dark);
    assert_eq!(c.store().get("theme"), None);
}

#[test]
fn view_and_theme_changes_commute() {
    let mut c = controller(InMemoryStore::new());
    c.select_view(ViewId::Gdp);
    c.toggle_theme();
    c.select_view(ViewId::Trade);
    assert_eq!(c.current_view(), ViewId::Trade);
    assert_eq!(c.theme(), ThemePreference::Dark);
    assert_eq!(c.store().get("theme"), Some("dark"));
}

#[test]
fn loading_gate_never_reverts() {
    let mut c = controller(InMemoryStore::new());
    let mut transitions = 0;
    for _ in 0..5 {
        if c.finish_loading() {
            transitions += 1;
        }
        assert!(!c.is_loading());
        c.toggle_theme();
        c.select_view(ViewId::Sectors);
    }
    assert_eq!(transitions, 1);
}
