use leptos::*;
use strum::{Display as StrumDisplay, EnumIter, IntoEnumIterator};

use crate::domain::chart::{Series, series_color};
use crate::domain::format::thousands;
use crate::domain::statistics::explorer::{
    API_BASE_URL, API_ENDPOINTS, CATEGORIES, CodeSample, DatasetQuery, DatasetSort, Dataset,
    FRESHNESS, Frequency, HEADING, SAMPLE_VISUALIZATION, USAGE_METRICS, featured_datasets,
    filter_datasets, most_downloaded,
};
use crate::presentation::components::{
    AreaChart, Badge, BarChart, Card, LineChart, MetricGrid, PageHeader, ShareRow, TabBar,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, StrumDisplay, EnumIter)]
pub enum ExplorerTab {
    #[default]
    Datasets,
    Visualize,
    #[strum(to_string = "API Access")]
    Api,
    Analytics,
}

/// Chart type picked in the chart builder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, StrumDisplay, EnumIter)]
pub enum ChartKind {
    #[default]
    Line,
    Bar,
    Area,
}

#[component]
pub fn DataExplorer() -> impl IntoView {
    let tab = create_rw_signal(ExplorerTab::default());

    view! {
        <PageHeader heading=HEADING/>
        <TabBar active=tab/>
        {move || match tab.get() {
            ExplorerTab::Datasets => view! { <DatasetsPanel/> }.into_view(),
            ExplorerTab::Visualize => view! { <VisualizePanel/> }.into_view(),
            ExplorerTab::Api => view! { <ApiPanel/> }.into_view(),
            ExplorerTab::Analytics => analytics_panel().into_view(),
        }}
    }
}

fn dataset_row(dataset: &'static Dataset) -> impl IntoView {
    view! {
        <div class="dataset">
            <div class="insight">
                <strong style="flex: 1">{dataset.name}</strong>
                <Badge text=dataset.category_name()/>
                {dataset.featured.then(|| view! { <Badge text="Featured" variant="live"/> })}
            </div>
            <p class="muted">{dataset.description}</p>
            <div class="dataset-meta">
                <span>{format!("🕒 {}", dataset.frequency)}</span>
                <span>{format!("📅 Updated {}", dataset.last_updated)}</span>
                <span>{format!("🏛 {}", dataset.source)}</span>
                <span>{format!("📁 {} · {}", dataset.format, dataset.size_label())}</span>
                <span>{format!("⬇ {} downloads", thousands(dataset.downloads))}</span>
            </div>
            <div class="tags">
                {dataset.tags.iter().map(|t| view! { <Badge text=*t/> }).collect_view()}
            </div>
        </div>
    }
}

#[component]
fn DatasetsPanel() -> impl IntoView {
    let text = create_rw_signal(String::new());
    let category = create_rw_signal("all".to_string());
    let frequency = create_rw_signal("all".to_string());
    let sort = create_rw_signal(DatasetSort::default());

    let results = create_memo(move |_| {
        let query = DatasetQuery::from_inputs(&text.get(), &category.get(), &frequency.get());
        filter_datasets(&query, sort.get())
    });

    view! {
        <Card title="🔍 Search & Filter Datasets">
            <div class="filters">
                <input
                    type="search"
                    placeholder="Search datasets, tags, descriptions..."
                    prop:value=move || text.get()
                    on:input=move |ev| text.set(event_target_value(&ev))
                />
                <select
                    prop:value=move || category.get()
                    on:change=move |ev| category.set(event_target_value(&ev))
                >
                    <option value="all" selected=move || category.get() == "all">"All Categories"</option>
                    {CATEGORIES
                        .iter()
                        .map(|c| {
                            let id = c.id;
                            view! {
                                <option value=id selected=move || category.get() == id>{c.name}</option>
                            }
                        })
                        .collect_view()}
                </select>
                <select on:change=move |ev| frequency.set(event_target_value(&ev))>
                    <option value="all">"All Frequencies"</option>
                    {Frequency::iter()
                        .map(|f| view! { <option value=f.as_ref().to_string()>{f.to_string()}</option> })
                        .collect_view()}
                </select>
                <select on:change=move |ev| {
                    if let Ok(parsed) = event_target_value(&ev).parse::<DatasetSort>() {
                        sort.set(parsed);
                    }
                }>
                    {DatasetSort::iter()
                        .map(|s| view! { <option value=s.as_ref().to_string()>{s.to_string()}</option> })
                        .collect_view()}
                </select>
            </div>
        </Card>

        <div class="metric-grid">
            {CATEGORIES
                .iter()
                .map(|c| {
                    let id = c.id;
                    view! {
                        <button
                            class="card menu-button"
                            class:active=move || category.get() == id
                            on:click=move |_| category.set(id.to_string())
                        >
                            <div>
                                <strong>{c.name}</strong>
                                <p class="muted">{format!("{} datasets available", c.count)}</p>
                            </div>
                        </button>
                    }
                })
                .collect_view()}
        </div>

        <Card title="⭐ Featured Datasets" description="Most popular and recently updated datasets">
            {featured_datasets().map(dataset_row).collect_view()}
        </Card>

        <Card title="🗂 All Datasets">
            <p class="muted">{move || format!("{} datasets match", results.with(Vec::len))}</p>
            {move || {
                let found = results.get();
                if found.is_empty() {
                    view! { <p class="muted">"No datasets match the current filters."</p> }.into_view()
                } else {
                    found.into_iter().map(dataset_row).collect_view()
                }
            }}
        </Card>
    }
}

#[component]
fn VisualizePanel() -> impl IntoView {
    let kind = create_rw_signal(ChartKind::default());
    let months: Vec<&'static str> = SAMPLE_VISUALIZATION.iter().map(|p| p.month).collect();
    let series = move || {
        vec![
            Series::new("GDP Growth %", series_color(0), SAMPLE_VISUALIZATION.iter().map(|p| p.gdp).collect()),
            Series::new("Inflation %", series_color(1), SAMPLE_VISUALIZATION.iter().map(|p| p.inflation).collect()),
            Series::new("Unemployment %", series_color(2), SAMPLE_VISUALIZATION.iter().map(|p| p.unemployment).collect()),
        ]
    };

    view! {
        <Card title="🛠 Chart Builder" description="Pre-built charts for common economic indicators">
            <TabBar active=kind/>
        </Card>
        <Card title="📈 Economic Indicators Visualization">
            {move || {
                let categories = months.clone();
                match kind.get() {
                    ChartKind::Line => view! { <LineChart categories=categories series=series()/> }.into_view(),
                    ChartKind::Bar => view! { <BarChart categories=categories series=series()/> }.into_view(),
                    ChartKind::Area => view! { <AreaChart categories=categories series=series()/> }.into_view(),
                }
            }}
        </Card>
    }
}

#[component]
fn ApiPanel() -> impl IntoView {
    let sample = create_rw_signal(CodeSample::default());

    view! {
        <Card title="🔌 API Documentation" description="Programmatic access to Malaysian economic data">
            <h4>"Base URL"</h4>
            <code class="endpoint">{API_BASE_URL}</code>
            <h4>"Authentication"</h4>
            <p class="muted">
                "No authentication required for public endpoints. Include API key in header for higher rate limits."
            </p>
        </Card>
        <Card title="Available Endpoints">
            {API_ENDPOINTS
                .iter()
                .map(|endpoint| {
                    view! {
                        <div class="dataset">
                            <div class="insight">
                                <Badge text=endpoint.method variant="up"/>
                                <code class="endpoint" style="flex: 1">{endpoint.endpoint}</code>
                                <Badge text=endpoint.rate_limit/>
                            </div>
                            <p class="muted">{endpoint.name} " · " {endpoint.description}</p>
                            <div class="tags">
                                <span class="muted">"Parameters:"</span>
                                {endpoint.parameters.iter().map(|p| view! { <Badge text=*p/> }).collect_view()}
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </Card>
        <Card title="Code Examples">
            <TabBar active=sample/>
            <pre><code>{move || sample.get().snippet()}</code></pre>
        </Card>
    }
}

fn analytics_panel() -> impl IntoView {
    let popular = most_downloaded(5);
    let max_downloads = popular.first().map(|d| d.downloads).unwrap_or(0) as f64;

    view! {
        <MetricGrid metrics=USAGE_METRICS/>
        <div class="card-grid">
            <Card title="🔥 Most Popular Datasets" description="Top downloaded datasets this month">
                {popular
                    .into_iter()
                    .enumerate()
                    .map(|(rank, d)| {
                        view! {
                            <ShareRow
                                label=format!("#{} {}", rank + 1, d.name)
                                value_label=format!("{} downloads", thousands(d.downloads))
                                value=d.downloads as f64
                                max=max_downloads
                            />
                        }
                    })
                    .collect_view()}
            </Card>
            <Card title="✅ Data Quality & Freshness">
                {FRESHNESS
                    .iter()
                    .map(|f| {
                        view! {
                            <ShareRow
                                label=format!("{} updates", f.frequency)
                                value_label=format!("{:.0}% on time · {} datasets", f.compliance, f.datasets)
                                value=f.compliance
                                max=100.0
                                color=series_color(2)
                            />
                        }
                    })
                    .collect_view()}
            </Card>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explorer_tabs_in_order() {
        let labels: Vec<String> = ExplorerTab::iter().map(|t| t.to_string()).collect();
        assert_eq!(labels, ["Datasets", "Visualize", "API Access", "Analytics"]);
    }

    #[test]
    fn sort_options_parse_back() {
        for sort in DatasetSort::iter() {
            assert_eq!(sort.as_ref().parse::<DatasetSort>(), Ok(sort));
        }
    }
}
