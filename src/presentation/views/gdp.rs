use leptos::*;
use strum::{Display as StrumDisplay, EnumIter};

use crate::domain::chart::{Series, series_color};
use crate::domain::statistics::column_max;
use crate::domain::statistics::gdp::{
    HEADING, KEY_METRICS, MANUFACTURING_SUBSECTORS, QUARTERLY, SECTORS, SERVICES_SUBSECTORS, STATES,
    Subsector,
};
use crate::presentation::components::{
    AreaChart, BarChart, Card, DonutChart, GrowthBadge, LineChart, MetricGrid, PageHeader, ShareRow,
    TabBar,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, StrumDisplay, EnumIter)]
pub enum GdpTab {
    #[default]
    #[strum(to_string = "By Sector")]
    Sectors,
    #[strum(to_string = "By Region")]
    Regions,
    Trends,
    Breakdown,
}

#[component]
pub fn GdpAnalysis() -> impl IntoView {
    let tab = create_rw_signal(GdpTab::default());

    view! {
        <PageHeader heading=HEADING/>
        <MetricGrid metrics=KEY_METRICS/>
        <TabBar active=tab/>
        {move || match tab.get() {
            GdpTab::Sectors => sectors_panel().into_view(),
            GdpTab::Regions => regions_panel().into_view(),
            GdpTab::Trends => trends_panel().into_view(),
            GdpTab::Breakdown => breakdown_panel().into_view(),
        }}
    }
}

fn sectors_panel() -> impl IntoView {
    view! {
        <div class="card-grid">
            <Card title="GDP by Sector" description="Economic contribution by major sectors (% of GDP)">
                <DonutChart
                    labels=SECTORS.iter().map(|s| s.name).collect()
                    values=SECTORS.iter().map(|s| s.value).collect()
                />
            </Card>
            <Card title="Sector Growth Rates" description="Year-over-year growth by sector">
                <BarChart
                    categories=SECTORS.iter().map(|s| s.name).collect()
                    series=vec![Series::new("Growth %", series_color(1), SECTORS.iter().map(|s| s.growth).collect())]
                />
            </Card>
        </div>
    }
}

fn regions_panel() -> impl IntoView {
    let max_gdp = column_max(STATES, |s| s.gdp);
    view! {
        <div class="card-grid">
            <Card title="GDP by State" description="Economic contribution by Malaysian states">
                {STATES
                    .iter()
                    .map(|s| {
                        view! {
                            <ShareRow
                                label=s.state
                                value_label=format!("RM {:.1}B ({:.1}%)", s.gdp, s.percentage)
                                value=s.gdp
                                max=max_gdp
                            />
                        }
                    })
                    .collect_view()}
            </Card>
            <Card title="State Growth Rates" description="Year-over-year GDP growth by state">
                <BarChart
                    categories=STATES.iter().map(|s| s.state).collect()
                    series=vec![Series::new("Growth %", series_color(2), STATES.iter().map(|s| s.growth).collect())]
                />
            </Card>
        </div>
    }
}

fn trends_panel() -> impl IntoView {
    let quarters: Vec<&'static str> = QUARTERLY.iter().map(|q| q.quarter).collect();
    let area_quarters = quarters.clone();
    view! {
        <Card title="Quarterly GDP Trends" description="GDP growth and composition over time">
            <LineChart
                categories=quarters
                series=vec![
                    Series::new("GDP (RM B)", series_color(0), QUARTERLY.iter().map(|q| q.gdp).collect()),
                ]
            />
        </Card>
        <Card title="Sector Contribution Trends" description="Evolution of sector contributions to GDP">
            <AreaChart
                categories=area_quarters
                series=vec![
                    Series::new("Services", series_color(0), QUARTERLY.iter().map(|q| q.services).collect()),
                    Series::new("Manufacturing", series_color(1), QUARTERLY.iter().map(|q| q.manufacturing).collect()),
                    Series::new("Agriculture", series_color(2), QUARTERLY.iter().map(|q| q.agriculture).collect()),
                    Series::new("Mining", series_color(3), QUARTERLY.iter().map(|q| q.mining).collect()),
                    Series::new("Construction", series_color(4), QUARTERLY.iter().map(|q| q.construction).collect()),
                ]
            />
        </Card>
    }
}

fn subsector_rows(rows: &'static [Subsector], color: &'static str) -> impl IntoView {
    let max = column_max(rows, |s| s.value);
    rows.iter()
        .map(|s| {
            view! {
                <div class="insight">
                    <div style="flex: 1">
                        <ShareRow label=s.name value_label=format!("{:.1}%", s.value) value=s.value max=max color=color/>
                    </div>
                    <GrowthBadge value=s.growth/>
                </div>
            }
        })
        .collect_view()
}

fn breakdown_panel() -> impl IntoView {
    view! {
        <div class="card-grid">
            <Card title="Services Sub-sectors" description="Breakdown of services sector (% of GDP)">
                {subsector_rows(SERVICES_SUBSECTORS, series_color(0))}
            </Card>
            <Card title="Manufacturing Sub-sectors" description="Breakdown of manufacturing sector (% of GDP)">
                {subsector_rows(MANUFACTURING_SUBSECTORS, series_color(1))}
            </Card>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn tab_labels_follow_display_order() {
        let labels: Vec<String> = GdpTab::iter().map(|t| t.to_string()).collect();
        assert_eq!(labels, ["By Sector", "By Region", "Trends", "Breakdown"]);
    }
}
