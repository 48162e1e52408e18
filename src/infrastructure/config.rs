use crate::application::config::DashboardConfig;
use crate::domain::logging::{LogComponent, get_logger};

/// Id of the optional inline `<script type="application/json">` override
pub const CONFIG_ELEMENT_ID: &str = "dashboard-config";

/// Read the inline config block. A missing block means defaults; a broken
/// one is reported and ignored.
pub fn load_config() -> DashboardConfig {
    let raw = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());

    match raw {
        None => DashboardConfig::default(),
        Some(raw) => DashboardConfig::from_json(&raw).unwrap_or_else(|e| {
            get_logger().warn(
                LogComponent::Boot("Config"),
                &format!("⚠️ Ignoring #{}: {}", CONFIG_ELEMENT_ID, e),
            );
            DashboardConfig::default()
        }),
    }
}
