use std::f64::consts::{FRAC_PI_2, TAU};

use crate::domain::chart::{ChartFrame, ValueScale};

/// Share of each category slot left empty between bar groups
pub const SPACING_RATIO: f64 = 0.2;

/// One rectangle of a grouped bar chart
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarRect {
    pub category: usize,
    pub series: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Horizontal centre of the `index`-th category slot.
pub fn category_center_x(frame: &ChartFrame, categories: usize, index: usize) -> f64 {
    if categories == 0 {
        return frame.left();
    }
    let slot = frame.inner_width() / categories as f64;
    frame.left() + slot * (index as f64 + 0.5)
}

/// Lay out grouped bars: one group per category, one bar per series.
/// Negative values hang below the baseline.
pub fn bar_layout(frame: &ChartFrame, scale: &ValueScale, series: &[&[f64]]) -> Vec<BarRect> {
    let categories = series.iter().map(|s| s.len()).max().unwrap_or(0);
    if categories == 0 || series.is_empty() {
        return Vec::new();
    }

    let slot = frame.inner_width() / categories as f64;
    let group_width = slot * (1.0 - SPACING_RATIO);
    let bar_width = group_width / series.len() as f64;
    let baseline_y = scale.y_for(scale.baseline(), frame);

    let mut bars = Vec::with_capacity(categories * series.len());
    for category in 0..categories {
        let group_left = frame.left() + slot * category as f64 + (slot - group_width) / 2.0;
        for (s, values) in series.iter().enumerate() {
            let Some(&value) = values.get(category) else { continue };
            let value_y = scale.y_for(value, frame);
            bars.push(BarRect {
                category,
                series: s,
                x: group_left + bar_width * s as f64,
                y: value_y.min(baseline_y),
                width: bar_width,
                height: (baseline_y - value_y).abs(),
            });
        }
    }
    bars
}

/// Points of a line series, one per category centre.
pub fn polyline_points(frame: &ChartFrame, scale: &ValueScale, values: &[f64]) -> Vec<(f64, f64)> {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| (category_center_x(frame, values.len(), i), scale.y_for(v, frame)))
        .collect()
}

/// `points` attribute of an SVG `<polyline>`.
pub fn svg_points(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{:.1},{:.1}", x, y))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Closed SVG path filling the area between a line series and the baseline.
pub fn area_path(frame: &ChartFrame, scale: &ValueScale, values: &[f64]) -> String {
    let points = polyline_points(frame, scale, values);
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return String::new();
    };
    let baseline_y = scale.y_for(scale.baseline(), frame);

    let mut path = format!("M{:.1},{:.1}", first.0, baseline_y);
    for (x, y) in &points {
        path.push_str(&format!(" L{:.1},{:.1}", x, y));
    }
    path.push_str(&format!(" L{:.1},{:.1} Z", last.0, baseline_y));
    path
}

/// One slice of a donut chart. Angles are radians clockwise from 12 o'clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DonutSegment {
    pub index: usize,
    pub share: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

/// Split the full circle proportionally to `values`. Negative or non-finite
/// values count as zero; an all-zero input yields no segments.
pub fn donut_segments(values: &[f64]) -> Vec<DonutSegment> {
    let clean: Vec<f64> = values
        .iter()
        .map(|v| if v.is_finite() && *v > 0.0 { *v } else { 0.0 })
        .collect();
    let total: f64 = clean.iter().sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut angle = 0.0;
    clean
        .iter()
        .enumerate()
        .filter(|(_, v)| **v > 0.0)
        .map(|(index, v)| {
            let share = v / total;
            let start_angle = angle;
            angle += share * TAU;
            DonutSegment { index, share, start_angle, end_angle: angle }
        })
        .collect()
}

fn polar(cx: f64, cy: f64, radius: f64, angle: f64) -> (f64, f64) {
    let a = angle - FRAC_PI_2;
    (cx + radius * a.cos(), cy + radius * a.sin())
}

/// SVG path of a ring slice between `inner` and `outer` radius.
pub fn arc_path(cx: f64, cy: f64, outer: f64, inner: f64, segment: &DonutSegment) -> String {
    // A full-circle arc has identical endpoints and renders as nothing
    let end = segment.end_angle.min(segment.start_angle + TAU - 1e-4);
    let large_arc = if end - segment.start_angle > std::f64::consts::PI { 1 } else { 0 };

    let (ox0, oy0) = polar(cx, cy, outer, segment.start_angle);
    let (ox1, oy1) = polar(cx, cy, outer, end);
    let (ix1, iy1) = polar(cx, cy, inner, end);
    let (ix0, iy0) = polar(cx, cy, inner, segment.start_angle);

    format!(
        "M{:.2},{:.2} A{:.2},{:.2} 0 {} 1 {:.2},{:.2} L{:.2},{:.2} A{:.2},{:.2} 0 {} 0 {:.2},{:.2} Z",
        ox0, oy0, outer, outer, large_arc, ox1, oy1, ix1, iy1, inner, inner, large_arc, ix0, iy0
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bars_share_a_zero_baseline() {
        let frame = ChartFrame::default();
        let exports = [125.4, 128.7, 132.1];
        let imports = [118.2, 121.5, 124.8];
        let scale = ValueScale::fit(exports.iter().chain(imports.iter()).copied(), true);
        let bars = bar_layout(&frame, &scale, &[&exports, &imports]);

        assert_eq!(bars.len(), 6);
        for bar in &bars {
            assert!((bar.y + bar.height - frame.bottom()).abs() < 1e-9);
            assert!(bar.x >= frame.left() && bar.x + bar.width <= frame.right() + 1e-9);
        }
        // second series sits to the right of the first within a group
        assert!(bars[1].x > bars[0].x);
    }

    #[test]
    fn negative_bars_hang_below_baseline() {
        let frame = ChartFrame::default();
        let balance = [-3.4, 5.7];
        let scale = ValueScale::fit(balance, true);
        let bars = bar_layout(&frame, &scale, &[&balance]);
        let baseline = scale.y_for(0.0, &frame);
        assert!((bars[0].y - baseline).abs() < 1e-9);
        assert!((bars[1].y + bars[1].height - baseline).abs() < 1e-9);
    }

    #[test]
    fn empty_inputs_produce_nothing() {
        let frame = ChartFrame::default();
        let scale = ValueScale::fit([1.0], false);
        assert!(bar_layout(&frame, &scale, &[]).is_empty());
        assert!(area_path(&frame, &scale, &[]).is_empty());
        assert!(donut_segments(&[0.0, -1.0]).is_empty());
    }

    #[test]
    fn donut_covers_the_circle() {
        let segments = donut_segments(&[58.2, 23.1, 8.4, 6.8, 3.5]);
        assert_eq!(segments.len(), 5);
        assert_eq!(segments[0].start_angle, 0.0);
        assert!((segments[4].end_angle - TAU).abs() < 1e-9);
        let shares: f64 = segments.iter().map(|s| s.share).sum();
        assert!((shares - 1.0).abs() < 1e-9);
    }

    #[test]
    fn area_path_is_closed() {
        let frame = ChartFrame::default();
        let values = [4.2, 4.8, 5.1];
        let scale = ValueScale::fit(values, false);
        let path = area_path(&frame, &scale, &values);
        assert!(path.starts_with('M'));
        assert!(path.ends_with('Z'));
        assert_eq!(path.matches('L').count(), 4);
    }
}
