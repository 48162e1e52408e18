use leptos::*;
use strum::{Display as StrumDisplay, EnumIter};

use crate::domain::chart::{Series, series_color};
use crate::domain::format::signed_pct;
use crate::domain::statistics::column_max;
use crate::domain::statistics::inflation::{CATEGORIES, FOOD_PRICES, HEADING, KEY_METRICS, MONTHLY, REGIONS};
use crate::presentation::components::{
    BarChart, Card, DataTable, GrowthBadge, LineChart, MetricGrid, PageHeader, ShareRow, TabBar,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, StrumDisplay, EnumIter)]
pub enum InflationTab {
    #[default]
    Overview,
    #[strum(to_string = "By Category")]
    Categories,
    Regional,
    #[strum(to_string = "Food Prices")]
    Food,
}

const REGION_HEADERS: &[&str] = &["Region", "Overall", "Urban", "Rural", "Urban-rural gap"];
const FOOD_HEADERS: &[&str] = &["Item", "Category", "Price", "Change"];

fn months() -> Vec<&'static str> {
    MONTHLY.iter().map(|m| m.month).collect()
}

#[component]
pub fn InflationTracker() -> impl IntoView {
    let tab = create_rw_signal(InflationTab::default());

    view! {
        <PageHeader heading=HEADING/>
        <MetricGrid metrics=KEY_METRICS/>
        <TabBar active=tab/>
        {move || match tab.get() {
            InflationTab::Overview => overview_panel().into_view(),
            InflationTab::Categories => categories_panel().into_view(),
            InflationTab::Regional => regional_panel().into_view(),
            InflationTab::Food => food_panel().into_view(),
        }}
    }
}

fn overview_panel() -> impl IntoView {
    view! {
        <Card title="Inflation Trends" description="Headline vs Core inflation over time">
            <LineChart
                categories=months()
                series=vec![
                    Series::new("Headline", series_color(0), MONTHLY.iter().map(|m| m.headline).collect()),
                    Series::new("Core", series_color(1), MONTHLY.iter().map(|m| m.core).collect()),
                ]
            />
        </Card>
    }
}

fn categories_panel() -> impl IntoView {
    let max_weight = column_max(CATEGORIES, |c| c.weight);
    view! {
        <Card title="Inflation by Category" description="Price changes across major spending categories">
            <BarChart
                categories=CATEGORIES.iter().map(|c| c.category).collect()
                series=vec![Series::new("Inflation %", series_color(0), CATEGORIES.iter().map(|c| c.inflation).collect())]
            />
        </Card>
        <div class="card-grid">
            {CATEGORIES
                .iter()
                .map(|c| {
                    view! {
                        <div class="card">
                            <div class="insight">
                                <strong style="flex: 1">{c.category}</strong>
                                <GrowthBadge value=c.inflation/>
                            </div>
                            <ShareRow
                                label=format!("{:.1}% of CPI basket", c.weight)
                                value_label=format!("{:.2} pp contribution", c.contribution)
                                value=c.weight
                                max=max_weight
                            />
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

fn regional_panel() -> impl IntoView {
    let rows: Vec<Vec<String>> = REGIONS
        .iter()
        .map(|r| {
            vec![
                r.region.to_string(),
                format!("{:.1}%", r.inflation),
                format!("{:.1}%", r.urban),
                format!("{:.1}%", r.rural),
                format!("{:.1} pp", r.urban - r.rural),
            ]
        })
        .collect();
    view! {
        <Card title="Regional Inflation Rates" description="Inflation variations across Malaysian regions">
            <BarChart
                categories=REGIONS.iter().map(|r| r.region).collect()
                series=vec![
                    Series::new("Urban", series_color(0), REGIONS.iter().map(|r| r.urban).collect()),
                    Series::new("Rural", series_color(2), REGIONS.iter().map(|r| r.rural).collect()),
                ]
            />
        </Card>
        <Card title="Regional Inflation Summary" description="Detailed breakdown by region and area type">
            <DataTable headers=REGION_HEADERS rows=rows/>
        </Card>
    }
}

fn food_panel() -> impl IntoView {
    let rows: Vec<Vec<String>> = FOOD_PRICES
        .iter()
        .map(|f| {
            vec![
                f.item.to_string(),
                f.category.to_string(),
                format!("RM {:.2}", f.price),
                signed_pct(f.change),
            ]
        })
        .collect();
    view! {
        <Card title="Food Price Trends" description="Monthly food inflation by category">
            <LineChart
                categories=months()
                series=vec![
                    Series::new("Food", series_color(0), MONTHLY.iter().map(|m| m.food).collect()),
                    Series::new("Transport", series_color(1), MONTHLY.iter().map(|m| m.transport).collect()),
                    Series::new("Housing", series_color(2), MONTHLY.iter().map(|m| m.housing).collect()),
                    Series::new("Healthcare", series_color(3), MONTHLY.iter().map(|m| m.healthcare).collect()),
                ]
            />
        </Card>
        <Card title="Essential Food Prices" description="Current prices and changes for essential food items">
            <DataTable headers=FOOD_HEADERS rows=rows/>
        </Card>
    }
}
