//! Built-in economic statistics. Every table is a compile-time literal; no
//! view ever fetches or mutates data.

pub mod employment;
pub mod explorer;
pub mod gdp;
pub mod indicators;
pub mod inflation;
pub mod overview;
pub mod sectors;
pub mod trade;

use crate::domain::format::Trend;

/// Headline card shown at the top of a view
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadlineMetric {
    pub title: &'static str,
    pub value: &'static str,
    pub change: &'static str,
    pub trend: Trend,
    pub description: &'static str,
}

impl HeadlineMetric {
    pub const fn new(
        title: &'static str,
        value: &'static str,
        change: &'static str,
        trend: Trend,
        description: &'static str,
    ) -> Self {
        Self { title, value, change, trend, description }
    }
}

/// Page heading of a view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageHeading {
    pub title: &'static str,
    pub subtitle: &'static str,
}

/// Largest value of a column, or `0.0` for an empty table.
pub fn column_max<T>(rows: &[T], column: impl Fn(&T) -> f64) -> f64 {
    rows.iter().map(column).fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_max_handles_empty_tables() {
        let empty: [f64; 0] = [];
        assert_eq!(column_max(&empty, |v| *v), 0.0);
        assert_eq!(column_max(&[1.5, 9.0, 3.0], |v| *v), 9.0);
    }

    #[test]
    fn every_view_has_headline_metrics() {
        assert_eq!(overview::KEY_METRICS.len(), 4);
        assert_eq!(indicators::KEY_INDICATORS.len(), 6);
        assert_eq!(gdp::KEY_METRICS.len(), 4);
        assert_eq!(inflation::KEY_METRICS.len(), 4);
        assert_eq!(employment::KEY_METRICS.len(), 4);
        assert_eq!(trade::KEY_METRICS.len(), 4);
    }
}
