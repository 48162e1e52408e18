use crate::domain::{
    errors::{DashboardError, DocumentResult},
    logging::LogComponent,
    repositories::PresentationRoot,
    theme::ThemePreference,
};

/// `document.documentElement` carrying the dark-mode class
#[derive(Debug, Clone)]
pub struct DocumentRoot {
    dark_class: String,
}

impl DocumentRoot {
    pub fn new(dark_class: impl Into<String>) -> Self {
        Self { dark_class: dark_class.into() }
    }

    pub fn dark_class(&self) -> &str {
        &self.dark_class
    }

    fn element(&self) -> DocumentResult<web_sys::Element> {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
            .ok_or_else(|| DashboardError::DocumentUnavailable("no document element".into()))
    }

    /// Whether the root currently carries the dark class.
    pub fn is_dark(&self) -> DocumentResult<bool> {
        Ok(self.element()?.class_list().contains(&self.dark_class))
    }
}

impl PresentationRoot for DocumentRoot {
    fn apply_theme(&mut self, theme: ThemePreference) -> DocumentResult<()> {
        self.element()?
            .class_list()
            .toggle_with_force(&self.dark_class, theme.is_dark())
            .map_err(|e| DashboardError::DocumentUnavailable(format!("{:?}", e)))?;
        crate::log_debug!(LogComponent::Document("Root"), "class '{}' set for {}", self.dark_class, theme);
        Ok(())
    }
}
