use economic_dashboard_wasm::domain::navigation::{ViewId, menu_entries};
use insta::assert_snapshot;
use strum::IntoEnumIterator;

#[test]
fn every_view_has_one_menu_entry() {
    for view in ViewId::iter() {
        let hits = menu_entries().iter().filter(|e| e.id == view).count();
        assert_eq!(hits, 1, "{} listed {} times", view, hits);
    }
}

#[test]
fn wire_ids_parse_back() {
    for view in ViewId::iter() {
        assert_eq!(ViewId::parse_or_default(view.id()), view);
    }
}

#[test]
fn menu_rendering() {
    let rendered = menu_entries()
        .iter()
        .map(|e| format!("{:<10} {} {}", e.id.id(), e.icon.glyph(), e.label))
        .collect::<Vec<_>>()
        .join("\n");

    assert_snapshot!(rendered, @r###"
    overview   📊 Dashboard Overview
    indicators 📈 Economic Indicators
    gdp        🥧 GDP Analysis
    inflation  💓 Inflation Tracker
    employment 👥 Employment Data
    trade      🌐 Trade Statistics
    sectors    🏢 Sector Performance
    explorer   💲 Data Explorer
    "###);
}
