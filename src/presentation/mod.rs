//! Leptos UI. Everything here is a thin rendering of domain data; all state
//! changes go through the view controller held in [`state::DashboardState`].

pub mod app;
pub mod components;
pub mod dispatch;
pub mod state;
pub mod style;
pub mod views;

pub use app::App;
