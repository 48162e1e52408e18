use leptos::*;

use crate::domain::format::{Trend, signed_pct, trend_of};
use crate::domain::statistics::{HeadlineMetric, PageHeading};

/// Title block at the top of every view
#[component]
pub fn PageHeader(heading: PageHeading) -> impl IntoView {
    view! {
        <div class="page-header">
            <h1 class="text-gradient">{heading.title}</h1>
            <p class="muted">{heading.subtitle}</p>
        </div>
    }
}

/// Headline figure with its change and trend arrow
#[component]
pub fn MetricCard(metric: HeadlineMetric) -> impl IntoView {
    let trend = metric.trend;
    view! {
        <div class="card metric-card">
            <div class="metric-title">{metric.title}</div>
            <div class="metric-value">{metric.value}</div>
            <div class="metric-footer">
                <span class=format!("metric-change {}", trend.css_class())>
                    {trend.arrow()} " " {metric.change}
                </span>
                <span class="muted">{metric.description}</span>
            </div>
        </div>
    }
}

/// Grid of headline cards
#[component]
pub fn MetricGrid(metrics: &'static [HeadlineMetric]) -> impl IntoView {
    view! {
        <div class="metric-grid">
            {metrics.iter().map(|m| view! { <MetricCard metric=*m/> }).collect_view()}
        </div>
    }
}

/// Titled panel around a chart or table
#[component]
pub fn Card(
    title: &'static str,
    #[prop(optional)]
    description: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <section class="card">
            <header class="card-header">
                <h3>{title}</h3>
                {description.map(|d| view! { <p class="muted">{d}</p> })}
            </header>
            <div class="card-body">{children()}</div>
        </section>
    }
}

/// Small pill label; `variant` picks the colour (`outline`, `up`, `down`, ...)
#[component]
pub fn Badge(
    #[prop(into)]
    text: String,
    #[prop(default = "outline")]
    variant: &'static str,
) -> impl IntoView {
    view! { <span class=format!("badge badge-{}", variant)>{text}</span> }
}

/// Badge coloured by the sign of a growth figure, e.g. `+5.8%`
#[component]
pub fn GrowthBadge(value: f64) -> impl IntoView {
    let variant = match trend_of(value) {
        Trend::Up => "up",
        Trend::Down => "down",
        Trend::Stable => "outline",
    };
    view! { <Badge text=signed_pct(value) variant=variant/> }
}
