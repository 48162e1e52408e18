use super::{HeadlineMetric, PageHeading};
use crate::domain::format::Trend;

pub const HEADING: PageHeading = PageHeading {
    title: "Economic Indicators",
    subtitle: "Comprehensive view of Malaysia's key economic metrics and trends",
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorMonth {
    pub month: &'static str,
    pub cpi: f64,
    pub ppi: f64,
    pub interest_rate: f64,
    pub exchange_rate: f64,
    pub stock_index: f64,
    pub commodity_index: f64,
}

pub const MONTHLY: &[IndicatorMonth] = &[
    IndicatorMonth { month: "Jan 2024", cpi: 121.4, ppi: 118.7, interest_rate: 3.0, exchange_rate: 4.68, stock_index: 1547.2, commodity_index: 142.8 },
    IndicatorMonth { month: "Feb 2024", cpi: 122.1, ppi: 119.2, interest_rate: 3.0, exchange_rate: 4.71, stock_index: 1562.8, commodity_index: 145.3 },
    IndicatorMonth { month: "Mar 2024", cpi: 122.8, ppi: 119.8, interest_rate: 3.0, exchange_rate: 4.69, stock_index: 1578.4, commodity_index: 148.1 },
    IndicatorMonth { month: "Apr 2024", cpi: 123.2, ppi: 120.1, interest_rate: 3.0, exchange_rate: 4.66, stock_index: 1591.7, commodity_index: 151.2 },
    IndicatorMonth { month: "May 2024", cpi: 123.6, ppi: 120.5, interest_rate: 3.0, exchange_rate: 4.64, stock_index: 1605.3, commodity_index: 153.8 },
    IndicatorMonth { month: "Jun 2024", cpi: 124.0, ppi: 121.0, interest_rate: 3.0, exchange_rate: 4.62, stock_index: 1618.9, commodity_index: 156.4 },
];

pub const KEY_INDICATORS: &[HeadlineMetric] = &[
    HeadlineMetric::new("Consumer Price Index", "124.0", "+2.1%", Trend::Up, "YoY inflation rate"),
    HeadlineMetric::new("Producer Price Index", "121.0", "+1.9%", Trend::Up, "Manufacturing costs"),
    HeadlineMetric::new("Base Interest Rate", "3.00%", "0.0%", Trend::Stable, "Central bank rate"),
    HeadlineMetric::new("USD/MYR Exchange", "4.62", "-1.3%", Trend::Down, "Currency strength"),
    HeadlineMetric::new("KLCI Index", "1,618.9", "+4.6%", Trend::Up, "Stock market"),
    HeadlineMetric::new("Commodity Index", "156.4", "+9.5%", Trend::Up, "Raw materials"),
];

/// Scheduled data release or policy meeting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarEvent {
    pub date: &'static str,
    pub event: &'static str,
    pub high_impact: bool,
    pub time: &'static str,
}

pub const CALENDAR: &[CalendarEvent] = &[
    CalendarEvent { date: "Jul 25, 2024", event: "GDP Q2 2024 Release", high_impact: true, time: "12:00 PM" },
    CalendarEvent { date: "Jul 30, 2024", event: "Inflation Rate (June)", high_impact: false, time: "10:00 AM" },
    CalendarEvent { date: "Aug 5, 2024", event: "Employment Statistics", high_impact: false, time: "9:00 AM" },
    CalendarEvent { date: "Aug 12, 2024", event: "Trade Balance Report", high_impact: true, time: "11:00 AM" },
    CalendarEvent { date: "Aug 20, 2024", event: "Central Bank Meeting", high_impact: true, time: "2:00 PM" },
];

/// Percent change between the first and last month of a column.
pub fn period_change(column: impl Fn(&IndicatorMonth) -> f64) -> f64 {
    match (MONTHLY.first(), MONTHLY.last()) {
        (Some(first), Some(last)) if column(first) != 0.0 => {
            (column(last) - column(first)) / column(first) * 100.0
        }
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn klci_gained_over_the_half_year() {
        let change = period_change(|m| m.stock_index);
        assert!((change - 4.63).abs() < 0.01);
    }

    #[test]
    fn flat_policy_rate_has_no_change() {
        assert_eq!(period_change(|m| m.interest_rate), 0.0);
    }
}
