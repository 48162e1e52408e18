use leptos::*;
use strum::{Display as StrumDisplay, EnumIter};

use crate::domain::chart::{Series, series_color};
use crate::domain::format::{signed_pct, thousands};
use crate::domain::statistics::sectors::{
    COMPETITIVENESS, HEADING, INSIGHTS, MANUFACTURING_SUBSECTORS, OVERVIEW, QUARTERLY,
    SERVICES_SUBSECTORS, SubsectorDetail, fastest_growing, productivity_width,
};
use crate::presentation::components::{
    Badge, BarChart, Card, DataTable, DonutChart, GrowthBadge, LineChart, PageHeader, TabBar,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, StrumDisplay, EnumIter)]
pub enum SectorTab {
    #[default]
    Overview,
    Competitiveness,
    #[strum(to_string = "Sub-sectors")]
    Subsectors,
    Insights,
}

const SERVICES_HEADERS: &[&str] = &["Sub-sector", "Growth", "GDP Share", "Employment", "Productivity"];
const MANUFACTURING_HEADERS: &[&str] = &["Sub-sector", "Growth", "GDP Share", "Employment", "Exports"];

#[component]
pub fn SectorPerformance() -> impl IntoView {
    let tab = create_rw_signal(SectorTab::default());

    view! {
        <PageHeader heading=HEADING/>
        <div class="metric-grid">
            {OVERVIEW
                .iter()
                .map(|s| {
                    view! {
                        <div class="card metric-card">
                            <div class="metric-title">{s.sector}</div>
                            <div class="metric-value">{format!("{:.1}%", s.gdp_contribution)}</div>
                            <div class="metric-footer">
                                <GrowthBadge value=s.growth/>
                                <span class="muted">"of GDP"</span>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
        <TabBar active=tab/>
        {move || match tab.get() {
            SectorTab::Overview => overview_panel().into_view(),
            SectorTab::Competitiveness => competitiveness_panel().into_view(),
            SectorTab::Subsectors => subsectors_panel().into_view(),
            SectorTab::Insights => insights_panel().into_view(),
        }}
    }
}

fn overview_panel() -> impl IntoView {
    view! {
        <Card title="Sector Growth Trends" description="Quarterly growth rates across major economic sectors">
            <LineChart
                categories=QUARTERLY.iter().map(|q| q.quarter).collect()
                series=vec![
                    Series::new("Services", series_color(0), QUARTERLY.iter().map(|q| q.services).collect()),
                    Series::new("Manufacturing", series_color(1), QUARTERLY.iter().map(|q| q.manufacturing).collect()),
                    Series::new("Agriculture", series_color(2), QUARTERLY.iter().map(|q| q.agriculture).collect()),
                    Series::new("Mining", series_color(3), QUARTERLY.iter().map(|q| q.mining).collect()),
                    Series::new("Construction", series_color(4), QUARTERLY.iter().map(|q| q.construction).collect()),
                ]
            />
        </Card>
        <div class="card-grid">
            <Card title="GDP Contribution" description="Sector contribution to national GDP">
                <DonutChart
                    labels=OVERVIEW.iter().map(|s| s.sector).collect()
                    values=OVERVIEW.iter().map(|s| s.gdp_contribution).collect()
                />
            </Card>
            <Card title="Employment Share" description="Sector share of total employment">
                <DonutChart
                    labels=OVERVIEW.iter().map(|s| s.sector).collect()
                    values=OVERVIEW.iter().map(|s| s.employment).collect()
                />
            </Card>
        </div>
        <Card title="Productivity Index" description="Output per worker relative to the most productive sector">
            {OVERVIEW
                .iter()
                .map(|s| {
                    view! {
                        <div class="share-row">
                            <div class="share-row-head">
                                <span>{s.sector}</span>
                                <span class="muted">{format!("{:.1}", s.productivity)}</span>
                            </div>
                            <div class="share-track">
                                <div
                                    class="share-fill"
                                    style=format!("width: {:.1}%; background: {}", productivity_width(s), series_color(1))
                                ></div>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </Card>
    }
}

fn competitiveness_panel() -> impl IntoView {
    let dimensions: Vec<&'static str> = COMPETITIVENESS.iter().map(|c| c.dimension).collect();
    view! {
        <Card title="Sector Competitiveness Analysis" description="Multi-dimensional competitiveness assessment across sectors">
            <BarChart
                categories=dimensions
                series=vec![
                    Series::new("Services", series_color(0), COMPETITIVENESS.iter().map(|c| c.services).collect()),
                    Series::new("Manufacturing", series_color(1), COMPETITIVENESS.iter().map(|c| c.manufacturing).collect()),
                    Series::new("Agriculture", series_color(2), COMPETITIVENESS.iter().map(|c| c.agriculture).collect()),
                    Series::new("Mining", series_color(3), COMPETITIVENESS.iter().map(|c| c.mining).collect()),
                    Series::new("Construction", series_color(4), COMPETITIVENESS.iter().map(|c| c.construction).collect()),
                ]
            />
        </Card>
    }
}

fn subsector_rows(rows: &'static [SubsectorDetail], secondary: fn(f64) -> String) -> Vec<Vec<String>> {
    rows.iter()
        .map(|s| {
            vec![
                s.name.to_string(),
                signed_pct(s.growth),
                format!("{:.1}%", s.contribution),
                thousands(s.employment),
                secondary(s.secondary),
            ]
        })
        .collect()
}

fn subsectors_panel() -> impl IntoView {
    view! {
        <Card title="Services Sub-sectors Performance" description="Detailed breakdown of services sector components">
            <DataTable
                headers=SERVICES_HEADERS
                rows=subsector_rows(SERVICES_SUBSECTORS, |v| format!("{:.1}", v))
            />
        </Card>
        <Card title="Manufacturing Sub-sectors Performance" description="Manufacturing sector breakdown with export performance">
            <DataTable
                headers=MANUFACTURING_HEADERS
                rows=subsector_rows(MANUFACTURING_SUBSECTORS, |v| format!("RM {:.1}B", v))
            />
        </Card>
    }
}

fn bullet_list(items: &'static [&'static str]) -> impl IntoView {
    view! {
        <ul class="insight-list">{items.iter().map(|i| view! { <li>{*i}</li> }).collect_view()}</ul>
    }
}

fn insights_panel() -> impl IntoView {
    view! {
        {fastest_growing().map(|s| {
            view! {
                <div class="insight">
                    <Badge text="Fastest growing" variant="up"/>
                    <p>{format!("{} leads sector growth at {}.", s.sector, signed_pct(s.growth))}</p>
                </div>
            }
        })}
        <div class="card-grid">
            {INSIGHTS
                .iter()
                .map(|insight| {
                    view! {
                        <Card title=insight.sector>
                            <strong>"Strengths"</strong>
                            {bullet_list(insight.strengths)}
                            <strong>"Challenges"</strong>
                            {bullet_list(insight.challenges)}
                            <strong>"Opportunities"</strong>
                            {bullet_list(insight.opportunities)}
                        </Card>
                    }
                })
                .collect_view()}
        </div>
    }
}
