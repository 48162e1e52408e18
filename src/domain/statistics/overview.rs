use super::{HeadlineMetric, PageHeading};
use crate::domain::format::Trend;

pub const HEADING: PageHeading = PageHeading {
    title: "Economic Dashboard",
    subtitle: "Real-time insights into Malaysia's economic performance and key indicators",
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GdpQuarter {
    pub quarter: &'static str,
    pub value: f64,
    pub growth: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlyRate {
    pub month: &'static str,
    pub rate: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectorShare {
    pub name: &'static str,
    pub value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlyTrade {
    pub month: &'static str,
    pub exports: f64,
    pub imports: f64,
}

/// Short badge + sentence shown under the charts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Insight {
    pub badge: &'static str,
    pub text: &'static str,
}

pub const GDP: &[GdpQuarter] = &[
    GdpQuarter { quarter: "Q1 2023", value: 5.6, growth: 4.2 },
    GdpQuarter { quarter: "Q2 2023", value: 5.8, growth: 4.8 },
    GdpQuarter { quarter: "Q3 2023", value: 5.9, growth: 5.1 },
    GdpQuarter { quarter: "Q4 2023", value: 6.1, growth: 5.3 },
    GdpQuarter { quarter: "Q1 2024", value: 6.3, growth: 5.7 },
    GdpQuarter { quarter: "Q2 2024", value: 6.5, growth: 6.1 },
];

pub const INFLATION: &[MonthlyRate] = &[
    MonthlyRate { month: "Jan", rate: 3.2 },
    MonthlyRate { month: "Feb", rate: 3.4 },
    MonthlyRate { month: "Mar", rate: 3.1 },
    MonthlyRate { month: "Apr", rate: 2.9 },
    MonthlyRate { month: "May", rate: 2.8 },
    MonthlyRate { month: "Jun", rate: 2.6 },
];

pub const SECTORS: &[SectorShare] = &[
    SectorShare { name: "Services", value: 58.2 },
    SectorShare { name: "Manufacturing", value: 23.1 },
    SectorShare { name: "Agriculture", value: 8.4 },
    SectorShare { name: "Mining", value: 6.8 },
    SectorShare { name: "Construction", value: 3.5 },
];

pub const TRADE: &[MonthlyTrade] = &[
    MonthlyTrade { month: "Jan", exports: 125.4, imports: 118.2 },
    MonthlyTrade { month: "Feb", exports: 128.7, imports: 121.5 },
    MonthlyTrade { month: "Mar", exports: 132.1, imports: 124.8 },
    MonthlyTrade { month: "Apr", exports: 135.6, imports: 127.3 },
    MonthlyTrade { month: "May", exports: 138.9, imports: 130.7 },
    MonthlyTrade { month: "Jun", exports: 142.3, imports: 134.1 },
];

pub const KEY_METRICS: &[HeadlineMetric] = &[
    HeadlineMetric::new("GDP Growth", "6.1%", "+0.4%", Trend::Up, "Year-over-year growth"),
    HeadlineMetric::new("Inflation Rate", "2.6%", "-0.2%", Trend::Down, "Consumer Price Index"),
    HeadlineMetric::new("Unemployment", "3.4%", "-0.1%", Trend::Down, "Labor force participation"),
    HeadlineMetric::new("Trade Balance", "RM 8.2B", "+12.3%", Trend::Up, "Monthly surplus"),
];

pub const INSIGHTS: &[Insight] = &[
    Insight {
        badge: "Positive Trend",
        text: "GDP growth continues to accelerate, driven by strong domestic demand and export performance.",
    },
    Insight {
        badge: "Stable",
        text: "Inflation remains within target range, indicating effective monetary policy measures.",
    },
    Insight {
        badge: "Opportunity",
        text: "Trade surplus expansion suggests competitive positioning in global markets.",
    },
];
