use leptos::*;
use strum::{Display as StrumDisplay, EnumIter};

use crate::domain::chart::{ChartFrame, Series, series_color};
use crate::domain::format::{ringgit_billions, signed_pct};
use crate::domain::statistics::column_max;
use crate::domain::statistics::trade::{
    EXPORT_PRODUCTS, HEADING, IMPORT_PRODUCTS, KEY_METRICS, MODES, MONTHLY, PARTNERS, PORTS, REGIONS,
    surplus_partners,
};
use crate::presentation::components::{
    Badge, BarChart, Card, DataTable, DonutChart, GrowthBadge, LineChart, MetricGrid, PageHeader,
    ShareRow, TabBar,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, StrumDisplay, EnumIter)]
pub enum TradeTab {
    #[default]
    Overview,
    Products,
    Partners,
    Logistics,
    Analysis,
}

const PRODUCT_HEADERS: &[&str] = &["Product", "Value", "Share", "Growth"];
const PORT_HEADERS: &[&str] = &["Port", "Throughput (M TEU)", "Growth", "Share"];

#[component]
pub fn TradeStatistics() -> impl IntoView {
    let tab = create_rw_signal(TradeTab::default());

    view! {
        <PageHeader heading=HEADING/>
        <MetricGrid metrics=KEY_METRICS/>
        <TabBar active=tab/>
        {move || match tab.get() {
            TradeTab::Overview => overview_panel().into_view(),
            TradeTab::Products => products_panel().into_view(),
            TradeTab::Partners => partners_panel().into_view(),
            TradeTab::Logistics => logistics_panel().into_view(),
            TradeTab::Analysis => analysis_panel().into_view(),
        }}
    }
}

fn overview_panel() -> impl IntoView {
    let months: Vec<&'static str> = MONTHLY.iter().map(|m| m.month).collect();
    view! {
        <Card title="Trade Balance Trends" description="Monthly exports, imports, and trade balance">
            <BarChart
                categories=months.clone()
                series=vec![
                    Series::new("Exports", series_color(2), MONTHLY.iter().map(|m| m.exports).collect()),
                    Series::new("Imports", series_color(3), MONTHLY.iter().map(|m| m.imports).collect()),
                ]
            />
            <LineChart
                categories=months
                frame=ChartFrame::new(600.0, 200.0)
                series=vec![Series::new("Balance (RM B)", series_color(0), MONTHLY.iter().map(|m| m.balance).collect())]
            />
        </Card>
    }
}

fn products_panel() -> impl IntoView {
    let max_import = column_max(IMPORT_PRODUCTS, |p| p.value);
    let rows: Vec<Vec<String>> = EXPORT_PRODUCTS
        .iter()
        .map(|p| {
            vec![
                p.product.to_string(),
                ringgit_billions(p.value),
                format!("{:.1}%", p.percentage),
                signed_pct(p.growth),
            ]
        })
        .collect();
    view! {
        <div class="card-grid">
            <Card title="Top Export Products" description="Major export categories and their performance">
                <DonutChart
                    labels=EXPORT_PRODUCTS.iter().map(|p| p.product).collect()
                    values=EXPORT_PRODUCTS.iter().map(|p| p.percentage).collect()
                />
            </Card>
            <Card title="Export Growth by Product" description="Year-over-year growth rates">
                <BarChart
                    categories=EXPORT_PRODUCTS.iter().map(|p| p.product).collect()
                    series=vec![Series::new("Growth %", series_color(2), EXPORT_PRODUCTS.iter().map(|p| p.growth).collect())]
                />
            </Card>
        </div>
        <Card title="Import Categories" description="Major import categories and their growth">
            {IMPORT_PRODUCTS
                .iter()
                .map(|p| {
                    view! {
                        <div class="insight">
                            <div style="flex: 1">
                                <ShareRow
                                    label=p.product
                                    value_label=format!("{} ({:.1}%)", ringgit_billions(p.value), p.percentage)
                                    value=p.value
                                    max=max_import
                                    color=series_color(3)
                                />
                            </div>
                            <GrowthBadge value=p.growth/>
                        </div>
                    }
                })
                .collect_view()}
        </Card>
        <Card title="Export Product Details" description="Comprehensive breakdown of export performance">
            <DataTable headers=PRODUCT_HEADERS rows=rows/>
        </Card>
    }
}

fn partners_panel() -> impl IntoView {
    let countries: Vec<&'static str> = PARTNERS.iter().map(|p| p.country).collect();
    let balance_countries = countries.clone();
    view! {
        <Card title="Top Trading Partners" description="Bilateral trade relationships and balances">
            <BarChart
                categories=countries
                series=vec![
                    Series::new("Exports", series_color(2), PARTNERS.iter().map(|p| p.exports).collect()),
                    Series::new("Imports", series_color(3), PARTNERS.iter().map(|p| p.imports).collect()),
                ]
            />
        </Card>
        <div class="card-grid">
            <Card title="Trade by Region" description="Regional distribution of trade">
                <DonutChart
                    labels=REGIONS.iter().map(|r| r.region).collect()
                    values=REGIONS.iter().map(|r| r.share).collect()
                />
            </Card>
            <Card title="Partner Performance" description="Trade balance with key partners">
                <BarChart
                    categories=balance_countries
                    series=vec![Series::new("Balance (RM B)", series_color(0), PARTNERS.iter().map(|p| p.balance).collect())]
                />
            </Card>
        </div>
    }
}

fn logistics_panel() -> impl IntoView {
    let rows: Vec<Vec<String>> = PORTS
        .iter()
        .map(|p| {
            vec![
                p.port.to_string(),
                format!("{:.1}", p.throughput),
                signed_pct(p.growth),
                format!("{:.1}%", p.share),
            ]
        })
        .collect();
    view! {
        <div class="card-grid">
            <Card title="Transport Modes" description="Trade value by transportation method">
                <DonutChart
                    labels=MODES.iter().map(|m| m.mode).collect()
                    values=MODES.iter().map(|m| m.percentage).collect()
                />
            </Card>
            <Card title="Port Performance" description="Container throughput by major ports">
                <BarChart
                    categories=PORTS.iter().map(|p| p.port).collect()
                    series=vec![Series::new("Million TEU", series_color(1), PORTS.iter().map(|p| p.throughput).collect())]
                />
            </Card>
        </div>
        <Card title="Port Statistics" description="Detailed performance metrics for major ports">
            <DataTable headers=PORT_HEADERS rows=rows/>
        </Card>
    }
}

fn analysis_panel() -> impl IntoView {
    let surplus = surplus_partners();
    let deficits: Vec<_> = PARTNERS.iter().filter(|p| p.balance < 0.0).collect();
    let fastest_export = EXPORT_PRODUCTS
        .iter()
        .filter(|p| p.product != "Others")
        .max_by(|a, b| a.growth.total_cmp(&b.growth));
    let fastest_mode = MODES.iter().max_by(|a, b| a.growth.total_cmp(&b.growth));

    view! {
        <Card title="Trade Insights & Recommendations" description="Strategic analysis and actionable insights">
            <div class="insight">
                <Badge text="Surplus" variant="up"/>
                <p>
                    {format!(
                        "Malaysia runs a surplus with {}.",
                        surplus
                            .iter()
                            .map(|p| format!("{} ({})", p.country, ringgit_billions(p.balance)))
                            .collect::<Vec<_>>()
                            .join(", ")
                    )}
                </p>
            </div>
            <div class="insight">
                <Badge text="Deficit" variant="down"/>
                <p>
                    {format!(
                        "Deficits with {} of {} major partners, largest with {}.",
                        deficits.len(),
                        PARTNERS.len(),
                        deficits
                            .iter()
                            .min_by(|a, b| a.balance.total_cmp(&b.balance))
                            .map(|p| p.country)
                            .unwrap_or("none")
                    )}
                </p>
            </div>
            {fastest_export.map(|p| {
                view! {
                    <div class="insight">
                        <Badge text="Opportunity" variant="accent"/>
                        <p>{format!("{} is the fastest growing export at {}.", p.product, signed_pct(p.growth))}</p>
                    </div>
                }
            })}
            {fastest_mode.map(|m| {
                view! {
                    <div class="insight">
                        <Badge text="Logistics"/>
                        <p>{format!("{} grows fastest among transport modes at {}.", m.mode, signed_pct(m.growth))}</p>
                    </div>
                }
            })}
        </Card>
    }
}
