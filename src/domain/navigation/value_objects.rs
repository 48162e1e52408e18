use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString, IntoStaticStr};

use crate::domain::logging::LogComponent;

/// Value Object - identifier of the panel shown in the main content area
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
pub enum ViewId {
    #[default]
    Overview,
    Indicators,
    Gdp,
    Inflation,
    Employment,
    Trade,
    Sectors,
    Explorer,
}

impl ViewId {
    /// Parse a raw id, falling back to [`ViewId::Overview`] for anything
    /// outside the fixed set.
    pub fn parse_or_default(raw: &str) -> Self {
        match raw.parse::<ViewId>() {
            Ok(view) => view,
            Err(_) => {
                crate::log_warn!(
                    LogComponent::Controller("Navigation"),
                    "Unknown view id '{}', falling back to {}",
                    raw,
                    ViewId::default()
                );
                ViewId::default()
            }
        }
    }

    pub fn id(self) -> &'static str {
        self.into()
    }

    pub fn menu_entry(self) -> &'static MenuEntry {
        // MENU is ordered like the enum
        &MENU[self as usize]
    }

    pub fn label(self) -> &'static str {
        self.menu_entry().label
    }
}

/// Value Object - symbolic icon reference, rendered as a glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    BarChart,
    TrendingUp,
    PieChart,
    Activity,
    Users,
    Globe,
    Building,
    Dollar,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::BarChart => "📊",
            Icon::TrendingUp => "📈",
            Icon::PieChart => "🥧",
            Icon::Activity => "💓",
            Icon::Users => "👥",
            Icon::Globe => "🌐",
            Icon::Building => "🏢",
            Icon::Dollar => "💲",
        }
    }
}

/// Value Object - one sidebar row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry {
    pub id: ViewId,
    pub label: &'static str,
    pub icon: Icon,
}

const MENU: [MenuEntry; 8] = [
    MenuEntry { id: ViewId::Overview, label: "Dashboard Overview", icon: Icon::BarChart },
    MenuEntry { id: ViewId::Indicators, label: "Economic Indicators", icon: Icon::TrendingUp },
    MenuEntry { id: ViewId::Gdp, label: "GDP Analysis", icon: Icon::PieChart },
    MenuEntry { id: ViewId::Inflation, label: "Inflation Tracker", icon: Icon::Activity },
    MenuEntry { id: ViewId::Employment, label: "Employment Data", icon: Icon::Users },
    MenuEntry { id: ViewId::Trade, label: "Trade Statistics", icon: Icon::Globe },
    MenuEntry { id: ViewId::Sectors, label: "Sector Performance", icon: Icon::Building },
    MenuEntry { id: ViewId::Explorer, label: "Data Explorer", icon: Icon::Dollar },
];

/// Sidebar entries in display order.
pub fn menu_entries() -> &'static [MenuEntry] {
    &MENU
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn menu_covers_every_view_in_enum_order() {
        let ids: Vec<ViewId> = menu_entries().iter().map(|e| e.id).collect();
        let all: Vec<ViewId> = ViewId::iter().collect();
        assert_eq!(ids, all);
    }

    #[test]
    fn wire_ids_are_lowercase() {
        assert_eq!(ViewId::Gdp.id(), "gdp");
        assert_eq!(ViewId::Explorer.to_string(), "explorer");
        assert_eq!("sectors".parse::<ViewId>(), Ok(ViewId::Sectors));
    }

    #[test]
    fn unknown_ids_fall_back_to_overview() {
        assert_eq!(ViewId::parse_or_default("trade"), ViewId::Trade);
        assert_eq!(ViewId::parse_or_default("Trade"), ViewId::Overview);
        assert_eq!(ViewId::parse_or_default(""), ViewId::Overview);
        assert_eq!(ViewId::parse_or_default("settings"), ViewId::Overview);
    }

    #[test]
    fn labels_come_from_menu() {
        assert_eq!(ViewId::Inflation.label(), "Inflation Tracker");
        assert_eq!(ViewId::Overview.menu_entry().icon, Icon::BarChart);
    }
}
