/// Colour tokens resolved by the stylesheet (`--chart-1` .. `--chart-5`)
pub const CHART_COLORS: [&str; 5] = [
    "hsl(var(--chart-1))",
    "hsl(var(--chart-2))",
    "hsl(var(--chart-3))",
    "hsl(var(--chart-4))",
    "hsl(var(--chart-5))",
];

pub const PRIMARY_COLOR: &str = "hsl(var(--primary))";
pub const ACCENT_COLOR: &str = "hsl(var(--accent))";
pub const MUTED_COLOR: &str = "hsl(var(--muted))";

/// Colour for the n-th series, cycling through the palette.
pub fn series_color(index: usize) -> &'static str {
    CHART_COLORS[index % CHART_COLORS.len()]
}

/// Value Object - SVG viewport with plot padding
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartFrame {
    pub width: f64,
    pub height: f64,
    pub padding_left: f64,
    pub padding_right: f64,
    pub padding_top: f64,
    pub padding_bottom: f64,
}

impl Default for ChartFrame {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 300.0,
            padding_left: 48.0,
            padding_right: 16.0,
            padding_top: 16.0,
            padding_bottom: 32.0,
        }
    }
}

impl ChartFrame {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height, ..Default::default() }
    }

    pub fn left(&self) -> f64 {
        self.padding_left
    }

    pub fn right(&self) -> f64 {
        self.width - self.padding_right
    }

    pub fn top(&self) -> f64 {
        self.padding_top
    }

    pub fn bottom(&self) -> f64 {
        self.height - self.padding_bottom
    }

    pub fn inner_width(&self) -> f64 {
        (self.right() - self.left()).max(0.0)
    }

    pub fn inner_height(&self) -> f64 {
        (self.bottom() - self.top()).max(0.0)
    }

    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }
}

/// Value Object - vertical value range of a plot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueScale {
    pub min: f64,
    pub max: f64,
}

impl ValueScale {
    /// Fit the scale to `values` with 10% headroom. Bar charts pass
    /// `include_zero` so bars always grow from a zero baseline.
    pub fn fit(values: impl IntoIterator<Item = f64>, include_zero: bool) -> Self {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for v in values.into_iter().filter(|v| v.is_finite()) {
            min = min.min(v);
            max = max.max(v);
        }
        if !min.is_finite() || !max.is_finite() {
            return Self { min: 0.0, max: 1.0 };
        }
        if include_zero {
            min = min.min(0.0);
            max = max.max(0.0);
        }

        let range = max - min;
        if range == 0.0 {
            return Self { min: min - 1.0, max: max + 1.0 };
        }
        let padding = range * 0.1;
        Self {
            min: if include_zero && min == 0.0 { 0.0 } else { min - padding },
            max: if include_zero && max == 0.0 { 0.0 } else { max + padding },
        }
    }

    pub fn range(&self) -> f64 {
        self.max - self.min
    }

    /// SVG y coordinate for `value` (y grows downward).
    pub fn y_for(&self, value: f64, frame: &ChartFrame) -> f64 {
        let ratio = (value - self.min) / self.range();
        frame.bottom() - ratio * frame.inner_height()
    }

    /// Zero when it lies inside the range, otherwise the nearest edge.
    pub fn baseline(&self) -> f64 {
        0.0_f64.clamp(self.min, self.max)
    }

    /// `count + 1` evenly spaced tick values from max down to min.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        if count == 0 {
            return vec![self.max];
        }
        (0..=count)
            .map(|i| self.max - self.range() * i as f64 / count as f64)
            .collect()
    }
}

/// Value Object - one named data series of a chart
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: &'static str,
    pub color: &'static str,
    pub values: Vec<f64>,
}

impl Series {
    pub fn new(name: &'static str, color: &'static str, values: Vec<f64>) -> Self {
        Self { name, color, values }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_adds_headroom() {
        let scale = ValueScale::fit([2.0, 4.0], false);
        assert!((scale.min - 1.8).abs() < 1e-9);
        assert!((scale.max - 4.2).abs() < 1e-9);
    }

    #[test]
    fn fit_with_zero_keeps_zero_baseline() {
        let scale = ValueScale::fit([125.4, 142.3], true);
        assert_eq!(scale.min, 0.0);
        assert_eq!(scale.baseline(), 0.0);
    }

    #[test]
    fn flat_and_empty_series_get_a_usable_range() {
        assert_eq!(ValueScale::fit([3.0, 3.0], false), ValueScale { min: 2.0, max: 4.0 });
        assert_eq!(ValueScale::fit(std::iter::empty(), false), ValueScale { min: 0.0, max: 1.0 });
    }

    #[test]
    fn y_maps_range_onto_plot_area() {
        let frame = ChartFrame::default();
        let scale = ValueScale { min: 0.0, max: 10.0 };
        assert_eq!(scale.y_for(0.0, &frame), frame.bottom());
        assert_eq!(scale.y_for(10.0, &frame), frame.top());
    }

    #[test]
    fn ticks_run_top_down() {
        let scale = ValueScale { min: 0.0, max: 4.0 };
        assert_eq!(scale.ticks(4), vec![4.0, 3.0, 2.0, 1.0, 0.0]);
    }
}
