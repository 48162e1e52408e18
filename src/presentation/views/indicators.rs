use leptos::*;

use crate::domain::chart::{ChartFrame, Series, series_color};
use crate::domain::statistics::indicators::{CALENDAR, HEADING, KEY_INDICATORS, MONTHLY};
use crate::presentation::components::{Badge, Card, LineChart, MetricGrid, PageHeader};

fn months() -> Vec<&'static str> {
    MONTHLY.iter().map(|m| m.month).collect()
}

#[component]
pub fn EconomicIndicators() -> impl IntoView {
    let half = ChartFrame::new(480.0, 280.0);

    view! {
        <PageHeader heading=HEADING/>
        <MetricGrid metrics=KEY_INDICATORS/>

        <Card title="📊 Price Indices Comparison" description="Consumer Price Index vs Producer Price Index trends">
            <LineChart
                categories=months()
                series=vec![
                    Series::new("CPI", series_color(0), MONTHLY.iter().map(|m| m.cpi).collect()),
                    Series::new("PPI", series_color(1), MONTHLY.iter().map(|m| m.ppi).collect()),
                ]
            />
        </Card>

        <div class="card-grid">
            <Card title="💲 Financial Indicators" description="Exchange rate and interest rate movements">
                <LineChart
                    categories=months()
                    frame=half
                    series=vec![
                        Series::new("USD/MYR", series_color(2), MONTHLY.iter().map(|m| m.exchange_rate).collect()),
                        Series::new("Interest Rate %", series_color(3), MONTHLY.iter().map(|m| m.interest_rate).collect()),
                    ]
                />
            </Card>
            <Card title="📈 Market Performance" description="Stock market index and commodity prices">
                <LineChart
                    categories=months()
                    frame=half
                    series=vec![
                        Series::new("KLCI", series_color(0), MONTHLY.iter().map(|m| m.stock_index).collect()),
                    ]
                />
                <LineChart
                    categories=months()
                    frame=half
                    series=vec![
                        Series::new("Commodity Index", series_color(4), MONTHLY.iter().map(|m| m.commodity_index).collect()),
                    ]
                />
            </Card>
        </div>

        <Card title="📅 Upcoming Economic Events" description="Key economic data releases and policy announcements">
            {CALENDAR
                .iter()
                .map(|event| {
                    let (impact, variant) = if event.high_impact {
                        ("High Impact", "live")
                    } else {
                        ("Medium Impact", "outline")
                    };
                    view! {
                        <div class="insight">
                            <span class="muted">{event.date}</span>
                            <strong>{event.event}</strong>
                            <span class="muted">{event.time}</span>
                            <Badge text=impact variant=variant/>
                        </div>
                    }
                })
                .collect_view()}
        </Card>
    }
}
