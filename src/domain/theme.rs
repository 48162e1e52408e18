use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString, IntoStaticStr};

/// Light/dark display mode. Stored verbatim as `"light"` / `"dark"`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    StrumDisplay,
    EnumIter,
    EnumString,
    AsRefStr,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Only an exact `"dark"` turns dark mode on; anything else, including a
    /// missing entry, is light.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    pub fn as_stored(self) -> &'static str {
        self.into()
    }

    /// Glyph for the toggle button: it shows the mode you would switch to.
    pub fn toggle_glyph(self) -> &'static str {
        match self {
            Self::Light => "🌙",
            Self::Dark => "☀️",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ThemePreference;

    #[test]
    fn stored_values_round_trip() {
        assert_eq!(ThemePreference::Dark.as_stored(), "dark");
        assert_eq!(ThemePreference::Light.as_stored(), "light");
        assert_eq!(ThemePreference::from_stored(Some("dark")), ThemePreference::Dark);
        assert_eq!(ThemePreference::from_stored(Some("light")), ThemePreference::Light);
    }

    #[test]
    fn anything_but_exact_dark_is_light() {
        assert_eq!(ThemePreference::from_stored(None), ThemePreference::Light);
        assert_eq!(ThemePreference::from_stored(Some("DARK")), ThemePreference::Light);
        assert_eq!(ThemePreference::from_stored(Some("")), ThemePreference::Light);
    }

    #[test]
    fn toggle_is_an_involution() {
        for theme in [ThemePreference::Light, ThemePreference::Dark] {
            assert_ne!(theme.toggled(), theme);
            assert_eq!(theme.toggled().toggled(), theme);
        }
    }
}
