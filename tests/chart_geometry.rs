use economic_dashboard_wasm::domain::chart::{
    ChartFrame, ValueScale, bar_layout, donut_segments, polyline_points,
};
use economic_dashboard_wasm::domain::format::{share_width, signed_pct, thousands};
use quickcheck_macros::quickcheck;
use std::f64::consts::TAU;

#[quickcheck]
fn share_width_stays_in_track(value: f64, max: f64) -> bool {
    let width = share_width(value, max);
    (0.0..=100.0).contains(&width)
}

#[quickcheck]
fn donut_shares_cover_the_circle(values: Vec<u16>) -> bool {
    let values: Vec<f64> = values.into_iter().map(f64::from).collect();
    let segments = donut_segments(&values);
    if values.iter().all(|v| *v == 0.0) {
        return segments.is_empty();
    }
    let total: f64 = segments.iter().map(|s| s.share).sum();
    let last_end = segments.last().map(|s| s.end_angle).unwrap_or(0.0);
    (total - 1.0).abs() < 1e-9
        && (last_end - TAU).abs() < 1e-9
        && segments.windows(2).all(|w| (w[0].end_angle - w[1].start_angle).abs() < 1e-12)
}

#[quickcheck]
fn bars_stay_inside_the_frame(values: Vec<i16>) -> bool {
    let values: Vec<f64> = values.into_iter().map(f64::from).collect();
    let frame = ChartFrame::default();
    let scale = ValueScale::fit(values.iter().copied(), true);
    bar_layout(&frame, &scale, &[&values]).iter().all(|bar| {
        bar.x >= frame.left() - 1e-9
            && bar.x + bar.width <= frame.right() + 1e-9
            && bar.y >= frame.top() - 1e-9
            && bar.y + bar.height <= frame.bottom() + 1e-9
    })
}

#[test]
fn line_points_follow_category_slots() {
    let frame = ChartFrame::default();
    let scale = ValueScale::fit([1.0, 2.0, 3.0], false);
    let points = polyline_points(&frame, &scale, &[1.0, 2.0, 3.0]);
    assert_eq!(points.len(), 3);
    assert!(points.windows(2).all(|w| w[0].0 < w[1].0 && w[0].1 > w[1].1));
}

#[test]
fn flat_series_gets_a_usable_scale() {
    let scale = ValueScale::fit([4.0, 4.0], false);
    assert!(scale.range() > 0.0);
    let empty = ValueScale::fit(std::iter::empty(), false);
    assert_eq!((empty.min, empty.max), (0.0, 1.0));
}

#[test]
fn display_formatting() {
    insta::assert_snapshot!(
        [signed_pct(5.8), signed_pct(-0.5), signed_pct(0.0), thousands(1_247), thousands(16_700_000)].join(" | "),
        @"+5.8% | -0.5% | 0.0% | 1,247 | 16,700,000"
    );
}
