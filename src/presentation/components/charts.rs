//! SVG chart components. All geometry comes from `domain::chart`; these
//! components only turn it into markup.

use leptos::*;

use crate::domain::chart::{
    ChartFrame, DonutSegment, Series, ValueScale, arc_path, area_path, bar_layout,
    category_center_x, donut_segments, polyline_points, series_color, svg_points,
};
use crate::domain::format::share_width;

const TICKS: usize = 4;

fn px(value: f64) -> String {
    format!("{:.1}", value)
}

fn tick_label(value: f64, scale: &ValueScale) -> String {
    if scale.range() >= 100.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

fn grid(frame: &ChartFrame, scale: &ValueScale) -> impl IntoView {
    let frame = *frame;
    let scale = *scale;
    view! {
        <g class="chart-grid">
            {scale
                .ticks(TICKS)
                .into_iter()
                .map(|tick| {
                    let y = px(scale.y_for(tick, &frame));
                    view! {
                        <line x1=px(frame.left()) x2=px(frame.right()) y1=y.clone() y2=y.clone()/>
                        <text class="tick" x=px(frame.left() - 6.0) y=y text-anchor="end" dominant-baseline="middle">
                            {tick_label(tick, &scale)}
                        </text>
                    }
                })
                .collect_view()}
        </g>
    }
}

fn category_labels(frame: &ChartFrame, categories: &[&'static str]) -> impl IntoView {
    let frame = *frame;
    let count = categories.len();
    view! {
        <g class="chart-axis">
            {categories
                .iter()
                .enumerate()
                .map(|(i, label)| {
                    view! {
                        <text
                            class="tick"
                            x=px(category_center_x(&frame, count, i))
                            y=px(frame.bottom() + 18.0)
                            text-anchor="middle"
                        >
                            {*label}
                        </text>
                    }
                })
                .collect_view()}
        </g>
    }
}

/// Colour swatches with series names
#[component]
pub fn Legend(entries: Vec<(String, &'static str)>) -> impl IntoView {
    view! {
        <ul class="chart-legend">
            {entries
                .into_iter()
                .map(|(name, color)| {
                    view! {
                        <li>
                            <span class="swatch" style=format!("background: {}", color)></span>
                            {name}
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}

fn legend_entries(series: &[Series]) -> Vec<(String, &'static str)> {
    series.iter().map(|s| (s.name.to_string(), s.color)).collect()
}

/// Grouped vertical bars from a zero baseline
#[component]
pub fn BarChart(
    categories: Vec<&'static str>,
    series: Vec<Series>,
    #[prop(default = ChartFrame::default())]
    frame: ChartFrame,
) -> impl IntoView {
    let scale = ValueScale::fit(series.iter().flat_map(|s| s.values.iter().copied()), true);
    let columns: Vec<&[f64]> = series.iter().map(|s| s.values.as_slice()).collect();
    let colors: Vec<&'static str> = series.iter().map(|s| s.color).collect();
    let bars = bar_layout(&frame, &scale, &columns);

    view! {
        <div class="chart">
            <svg class="chart-svg" viewBox=frame.view_box() role="img">
                {grid(&frame, &scale)}
                <g class="chart-bars">
                    {bars
                        .into_iter()
                        .map(|bar| {
                            view! {
                                <rect
                                    x=px(bar.x)
                                    y=px(bar.y)
                                    width=px(bar.width)
                                    height=px(bar.height)
                                    rx="3"
                                    fill=colors[bar.series]
                                />
                            }
                        })
                        .collect_view()}
                </g>
                {category_labels(&frame, &categories)}
            </svg>
            <Legend entries=legend_entries(&series)/>
        </div>
    }
}

/// One polyline per series with point markers
#[component]
pub fn LineChart(
    categories: Vec<&'static str>,
    series: Vec<Series>,
    #[prop(default = ChartFrame::default())]
    frame: ChartFrame,
) -> impl IntoView {
    let scale = ValueScale::fit(series.iter().flat_map(|s| s.values.iter().copied()), false);

    view! {
        <div class="chart">
            <svg class="chart-svg" viewBox=frame.view_box() role="img">
                {grid(&frame, &scale)}
                {series
                    .iter()
                    .map(|s| {
                        let points = polyline_points(&frame, &scale, &s.values);
                        let color = s.color;
                        view! {
                            <g class="chart-line">
                                <polyline points=svg_points(&points) fill="none" stroke=color stroke-width="2.5"/>
                                {points
                                    .iter()
                                    .map(|(x, y)| view! { <circle cx=px(*x) cy=px(*y) r="3.5" fill=color/> })
                                    .collect_view()}
                            </g>
                        }
                    })
                    .collect_view()}
                {category_labels(&frame, &categories)}
            </svg>
            <Legend entries=legend_entries(&series)/>
        </div>
    }
}

/// Filled areas under each series, drawn back to front
#[component]
pub fn AreaChart(
    categories: Vec<&'static str>,
    series: Vec<Series>,
    #[prop(default = ChartFrame::default())]
    frame: ChartFrame,
) -> impl IntoView {
    let scale = ValueScale::fit(series.iter().flat_map(|s| s.values.iter().copied()), false);

    view! {
        <div class="chart">
            <svg class="chart-svg" viewBox=frame.view_box() role="img">
                {grid(&frame, &scale)}
                {series
                    .iter()
                    .map(|s| {
                        let points = polyline_points(&frame, &scale, &s.values);
                        view! {
                            <g class="chart-area">
                                <path d=area_path(&frame, &scale, &s.values) fill=s.color fill-opacity="0.25"/>
                                <polyline points=svg_points(&points) fill="none" stroke=s.color stroke-width="2"/>
                            </g>
                        }
                    })
                    .collect_view()}
                {category_labels(&frame, &categories)}
            </svg>
            <Legend entries=legend_entries(&series)/>
        </div>
    }
}

/// Ring chart of shares; the legend shows each share in percent
#[component]
pub fn DonutChart(
    labels: Vec<&'static str>,
    values: Vec<f64>,
    #[prop(default = 260.0)]
    size: f64,
) -> impl IntoView {
    let center = size / 2.0;
    let outer = center - 4.0;
    let inner = outer * 0.6;
    let segments: Vec<DonutSegment> = donut_segments(&values);
    let legend: Vec<(String, &'static str)> = segments
        .iter()
        .map(|seg| {
            let label = labels.get(seg.index).copied().unwrap_or("Other");
            (format!("{} {:.1}%", label, seg.share * 100.0), series_color(seg.index))
        })
        .collect();

    view! {
        <div class="chart chart-donut">
            <svg class="chart-svg" viewBox=format!("0 0 {} {}", size, size) role="img">
                {segments
                    .iter()
                    .map(|seg| {
                        view! {
                            <path
                                d=arc_path(center, center, outer, inner, seg)
                                fill=series_color(seg.index)
                                stroke="hsl(var(--background))"
                                stroke-width="2"
                            />
                        }
                    })
                    .collect_view()}
            </svg>
            <Legend entries=legend/>
        </div>
    }
}

/// Horizontal progress-style bar scaled against `max`
#[component]
pub fn ShareBar(
    value: f64,
    max: f64,
    #[prop(default = "hsl(var(--primary))")]
    color: &'static str,
) -> impl IntoView {
    let width = share_width(value, max);
    view! {
        <div class="share-track">
            <div class="share-fill" style=format!("width: {:.1}%; background: {}", width, color)></div>
        </div>
    }
}

/// Labelled share bar row: name on the left, formatted value on the right
#[component]
pub fn ShareRow(
    #[prop(into)]
    label: String,
    #[prop(into)]
    value_label: String,
    value: f64,
    max: f64,
    #[prop(default = "hsl(var(--primary))")]
    color: &'static str,
) -> impl IntoView {
    view! {
        <div class="share-row">
            <div class="share-row-head">
                <span>{label}</span>
                <span class="muted">{value_label}</span>
            </div>
            <ShareBar value=value max=max color=color/>
        </div>
    }
}
