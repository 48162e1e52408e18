use std::fmt::Display;

use leptos::*;
use strum::IntoEnumIterator;

/// Row of tab buttons for any enum that can list its variants.
/// The label of each tab is the variant's `Display` text.
#[component]
pub fn TabBar<T>(active: RwSignal<T>) -> impl IntoView
where
    T: IntoEnumIterator + Display + Copy + PartialEq + 'static,
{
    view! {
        <div class="tab-bar" role="tablist">
            {T::iter()
                .map(|tab| {
                    let selected = move || active.get() == tab;
                    view! {
                        <button
                            class="tab"
                            class:active=selected
                            role="tab"
                            aria-selected=move || selected().to_string()
                            on:click=move |_| active.set(tab)
                        >
                            {tab.to_string()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
