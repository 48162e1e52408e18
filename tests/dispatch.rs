#![cfg(all(target_arch = "wasm32", not(feature = "logic-only")))]

use economic_dashboard_wasm::domain::navigation::ViewId;
use economic_dashboard_wasm::presentation::dispatch::render_view;
use strum::IntoEnumIterator;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn every_view_mounts_with_a_heading() {
    let document = web_sys::window().unwrap().document().unwrap();
    for id in ViewId::iter() {
        let host = document
            .create_element("div")
            .unwrap()
            .dyn_into::<web_sys::HtmlElement>()
            .unwrap();
        document.body().unwrap().append_child(&host).unwrap();

        leptos::mount_to(host.clone(), move || render_view(id));

        assert!(host.child_element_count() > 0, "{} mounted nothing", id);
        assert!(
            host.query_selector(".page-header h1").unwrap().is_some(),
            "{} has no page heading",
            id
        );
        host.remove();
    }
}

#[wasm_bindgen_test]
fn category_card_updates_the_category_select() {
    use economic_dashboard_wasm::presentation::views::DataExplorer;
    use leptos::*;

    let document = web_sys::window().unwrap().document().unwrap();
    let host = document
        .create_element("div")
        .unwrap()
        .dyn_into::<web_sys::HtmlElement>()
        .unwrap();
    document.body().unwrap().append_child(&host).unwrap();
    leptos::mount_to(host.clone(), || view! { <DataExplorer/> });

    let select = host
        .query_selector(".filters select")
        .unwrap()
        .unwrap()
        .dyn_into::<web_sys::HtmlSelectElement>()
        .unwrap();
    assert_eq!(select.value(), "all");

    // Fourth category card is "Trade & Commerce"
    let cards = host.query_selector_all(".metric-grid button.menu-button").unwrap();
    cards
        .item(3)
        .unwrap()
        .dyn_into::<web_sys::HtmlElement>()
        .unwrap()
        .click();

    assert_eq!(select.value(), "trade");
    host.remove();
}
