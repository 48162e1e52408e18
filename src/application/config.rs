use serde::{Deserialize, Serialize};

use crate::domain::errors::DashboardError;

/// Runtime settings of the dashboard shell. Every field has a default, so an
/// empty JSON object is a valid override.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DashboardConfig {
    /// `localStorage` key holding `"dark"` / `"light"`
    pub theme_storage_key: String,
    /// Class toggled on `document.documentElement`
    pub dark_class: String,
    /// Splash duration after startup
    pub loading_delay_ms: u32,
    /// Sidebar brand line
    pub title: String,
    pub subtitle: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            theme_storage_key: "theme".to_string(),
            dark_class: "dark".to_string(),
            loading_delay_ms: 1500,
            title: "Malaysia Economic".to_string(),
            subtitle: "Data Dashboard".to_string(),
        }
    }
}

impl DashboardConfig {
    pub fn from_json(raw: &str) -> Result<Self, DashboardError> {
        let config: Self =
            serde_json::from_str(raw).map_err(|e| DashboardError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), DashboardError> {
        if self.theme_storage_key.trim().is_empty() {
            return Err(DashboardError::InvalidConfig("theme_storage_key is empty".into()));
        }
        if self.dark_class.trim().is_empty() || self.dark_class.contains(char::is_whitespace) {
            return Err(DashboardError::InvalidConfig(format!(
                "dark_class '{}' is not a single class name",
                self.dark_class
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        let config = DashboardConfig::from_json("{}").unwrap();
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.theme_storage_key, "theme");
        assert_eq!(config.loading_delay_ms, 1500);
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config = DashboardConfig::from_json(r#"{"loading_delay_ms": 0}"#).unwrap();
        assert_eq!(config.loading_delay_ms, 0);
        assert_eq!(config.dark_class, "dark");
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = DashboardConfig::from_json(r#"{"colour": "blue"}"#).unwrap_err();
        assert!(matches!(err, DashboardError::InvalidConfig(_)));
    }

    #[test]
    fn blank_class_is_rejected() {
        assert!(DashboardConfig::from_json(r#"{"dark_class": "night mode"}"#).is_err());
        assert!(DashboardConfig::from_json(r#"{"theme_storage_key": " "}"#).is_err());
    }
}
