use leptos::*;

use crate::domain::navigation::ViewId;
use crate::presentation::views::{
    DashboardOverview, DataExplorer, EconomicIndicators, EmploymentData, GdpAnalysis,
    InflationTracker, SectorPerformance, TradeStatistics,
};

/// Render the collaborator for `id`. The match is exhaustive, so a new
/// `ViewId` variant does not compile until it has a view.
pub fn render_view(id: ViewId) -> View {
    match id {
        ViewId::Overview => view! { <DashboardOverview/> }.into_view(),
        ViewId::Indicators => view! { <EconomicIndicators/> }.into_view(),
        ViewId::Gdp => view! { <GdpAnalysis/> }.into_view(),
        ViewId::Inflation => view! { <InflationTracker/> }.into_view(),
        ViewId::Employment => view! { <EmploymentData/> }.into_view(),
        ViewId::Trade => view! { <TradeStatistics/> }.into_view(),
        ViewId::Sectors => view! { <SectorPerformance/> }.into_view(),
        ViewId::Explorer => view! { <DataExplorer/> }.into_view(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn every_view_renders_something() {
        let runtime = create_runtime();
        for id in ViewId::iter() {
            let view = render_view(id);
            assert!(!matches!(view, View::CoreComponent(leptos::leptos_dom::CoreComponent::Unit(_))), "{} rendered nothing", id);
        }
        runtime.dispose();
    }
}
