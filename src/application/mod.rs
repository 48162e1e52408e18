pub mod config;
pub mod view_controller;

pub use config::DashboardConfig;
pub use view_controller::ViewController;
