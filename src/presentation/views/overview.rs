use leptos::*;

use crate::domain::chart::{Series, series_color};
use crate::domain::statistics::overview::{GDP, HEADING, INFLATION, INSIGHTS, KEY_METRICS, SECTORS, TRADE};
use crate::presentation::components::{AreaChart, Badge, BarChart, Card, DonutChart, LineChart, MetricGrid, PageHeader};

#[component]
pub fn DashboardOverview() -> impl IntoView {
    let quarters: Vec<&'static str> = GDP.iter().map(|q| q.quarter).collect();
    let months: Vec<&'static str> = INFLATION.iter().map(|m| m.month).collect();
    let trade_months: Vec<&'static str> = TRADE.iter().map(|m| m.month).collect();

    view! {
        <PageHeader heading=HEADING/>
        <MetricGrid metrics=KEY_METRICS/>

        <div class="card-grid">
            <Card title="📈 GDP Growth Trend" description="Quarterly GDP growth rate and year-over-year comparison">
                <AreaChart
                    categories=quarters
                    series=vec![
                        Series::new("GDP (RM T)", series_color(0), GDP.iter().map(|q| q.value).collect()),
                        Series::new("Growth %", series_color(1), GDP.iter().map(|q| q.growth).collect()),
                    ]
                />
            </Card>
            <Card title="💓 Inflation Rate" description="Monthly consumer price index changes">
                <LineChart
                    categories=months
                    series=vec![Series::new("Inflation %", series_color(4), INFLATION.iter().map(|m| m.rate).collect())]
                />
            </Card>
            <Card title="🥧 GDP by Sector" description="Economic contribution by major sectors">
                <DonutChart
                    labels=SECTORS.iter().map(|s| s.name).collect()
                    values=SECTORS.iter().map(|s| s.value).collect()
                />
            </Card>
            <Card title="🌐 Trade Balance" description="Monthly exports vs imports (RM Billion)">
                <BarChart
                    categories=trade_months
                    series=vec![
                        Series::new("Exports", series_color(2), TRADE.iter().map(|m| m.exports).collect()),
                        Series::new("Imports", series_color(3), TRADE.iter().map(|m| m.imports).collect()),
                    ]
                />
            </Card>
        </div>

        <Card title="Economic Insights" description="AI-powered analysis of current economic trends">
            {INSIGHTS
                .iter()
                .map(|insight| {
                    view! {
                        <div class="insight">
                            <Badge text=insight.badge variant="accent"/>
                            <p>{insight.text}</p>
                        </div>
                    }
                })
                .collect_view()}
        </Card>
    }
}
