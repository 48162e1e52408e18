use leptos::*;

use crate::application::DashboardConfig;
use crate::domain::navigation::menu_entries;
use crate::infrastructure::services::local_time_label;
use crate::presentation::{
    components::Badge,
    dispatch::render_view,
    state::{provide_dashboard_state, use_dashboard_state},
    style::DASHBOARD_CSS,
};

/// Root component: splash while loading, then the dashboard shell
#[component]
pub fn App(config: DashboardConfig) -> impl IntoView {
    let state = provide_dashboard_state(config);

    view! {
        <style>{DASHBOARD_CSS}</style>
        <Show when=move || !state.is_loading() fallback=|| view! { <Splash/> }>
            <Shell/>
        </Show>
    }
}

#[component]
fn Splash() -> impl IntoView {
    view! {
        <div class="splash">
            <div class="splash-orb"></div>
            <h2 class="text-gradient">"Malaysian Economic Dashboard"</h2>
            <p class="muted">"Loading economic data..."</p>
        </div>
    }
}

#[component]
fn Shell() -> impl IntoView {
    let state = use_dashboard_state();
    // Only a view change re-renders the main area; theme toggles keep local tab state
    let current = create_memo(move |_| state.current_view());

    view! {
        <div class="dashboard">
            <Sidebar/>
            <div class="dashboard-main">
                <Header/>
                <main class="main-content">{move || render_view(current.get())}</main>
            </div>
        </div>
    }
}

#[component]
fn Sidebar() -> impl IntoView {
    let state = use_dashboard_state();
    let config = state.config();

    view! {
        <aside class="sidebar">
            <div class="brand">
                <div class="brand-mark">"🏢"</div>
                <div>
                    <h1 class="text-gradient">{config.title}</h1>
                    <p class="muted">{config.subtitle}</p>
                </div>
            </div>
            <nav>
                <ul class="menu">
                    {menu_entries()
                        .iter()
                        .map(|entry| {
                            let id = entry.id;
                            view! {
                                <li>
                                    <button
                                        class="menu-button"
                                        class:active=move || state.current_view() == id
                                        on:click=move |_| state.select_view(id)
                                    >
                                        <span class="menu-icon">{entry.icon.glyph()}</span>
                                        <span class="menu-label">{entry.label}</span>
                                    </button>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </nav>
        </aside>
    }
}

#[component]
fn Header() -> impl IntoView {
    let state = use_dashboard_state();
    let updated = local_time_label();

    view! {
        <header class="topbar">
            <div class="topbar-status">
                <Badge text="Live Data" variant="live"/>
                <span class="muted">{format!("Last updated: {}", updated)}</span>
            </div>
            <button
                class="theme-toggle"
                title="Toggle theme"
                on:click=move |_| state.toggle_theme()
            >
                {move || state.theme().toggle_glyph()}
            </button>
        </header>
    }
}
