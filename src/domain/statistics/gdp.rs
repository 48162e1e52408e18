use super::{HeadlineMetric, PageHeading};
use crate::domain::format::Trend;

pub const HEADING: PageHeading = PageHeading {
    title: "GDP Analysis",
    subtitle: "Detailed breakdown of Malaysia's Gross Domestic Product by sectors and regions",
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectorGdp {
    pub name: &'static str,
    pub value: f64,
    pub growth: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateGdp {
    pub state: &'static str,
    pub gdp: f64,
    pub percentage: f64,
    pub growth: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuarterlyGdp {
    pub quarter: &'static str,
    pub gdp: f64,
    pub growth: f64,
    pub services: f64,
    pub manufacturing: f64,
    pub agriculture: f64,
    pub mining: f64,
    pub construction: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Subsector {
    pub name: &'static str,
    pub value: f64,
    pub growth: f64,
}

pub const KEY_METRICS: &[HeadlineMetric] = &[
    HeadlineMetric::new("Total GDP", "RM 1.73T", "+6.1%", Trend::Up, "YoY"),
    HeadlineMetric::new("GDP per Capita", "RM 52,847", "+5.8%", Trend::Up, "YoY"),
    HeadlineMetric::new("Real GDP Growth", "6.1%", "+0.4pp", Trend::Up, "YoY"),
    HeadlineMetric::new("Nominal GDP", "RM 1,728.5B", "+9.5%", Trend::Up, "YoY"),
];

pub const SECTORS: &[SectorGdp] = &[
    SectorGdp { name: "Services", value: 58.2, growth: 5.8 },
    SectorGdp { name: "Manufacturing", value: 23.1, growth: 6.2 },
    SectorGdp { name: "Agriculture", value: 8.4, growth: 3.1 },
    SectorGdp { name: "Mining & Quarrying", value: 6.8, growth: 4.5 },
    SectorGdp { name: "Construction", value: 3.5, growth: 7.2 },
];

pub const STATES: &[StateGdp] = &[
    StateGdp { state: "Selangor", gdp: 298.5, percentage: 23.4, growth: 5.9 },
    StateGdp { state: "Kuala Lumpur", gdp: 243.7, percentage: 19.1, growth: 6.2 },
    StateGdp { state: "Johor", gdp: 156.8, percentage: 12.3, growth: 5.5 },
    StateGdp { state: "Penang", gdp: 112.4, percentage: 8.8, growth: 6.8 },
    StateGdp { state: "Sarawak", gdp: 98.2, percentage: 7.7, growth: 4.3 },
    StateGdp { state: "Sabah", gdp: 76.9, percentage: 6.0, growth: 4.8 },
    StateGdp { state: "Perak", gdp: 65.3, percentage: 5.1, growth: 4.2 },
    StateGdp { state: "Kedah", gdp: 52.7, percentage: 4.1, growth: 3.9 },
];

pub const QUARTERLY: &[QuarterlyGdp] = &[
    QuarterlyGdp { quarter: "Q1 2023", gdp: 1547.2, growth: 4.2, services: 899.8, manufacturing: 357.4, agriculture: 129.9, mining: 105.2, construction: 54.1 },
    QuarterlyGdp { quarter: "Q2 2023", gdp: 1578.4, growth: 4.8, services: 918.7, manufacturing: 364.6, agriculture: 132.6, mining: 107.3, construction: 55.2 },
    QuarterlyGdp { quarter: "Q3 2023", gdp: 1612.8, growth: 5.1, services: 938.2, manufacturing: 372.4, agriculture: 135.5, mining: 109.7, construction: 57.0 },
    QuarterlyGdp { quarter: "Q4 2023", gdp: 1648.9, growth: 5.3, services: 959.4, manufacturing: 380.8, agriculture: 138.5, mining: 112.1, construction: 58.1 },
    QuarterlyGdp { quarter: "Q1 2024", gdp: 1687.3, growth: 5.7, services: 982.1, manufacturing: 389.4, agriculture: 141.7, mining: 114.8, construction: 59.3 },
    QuarterlyGdp { quarter: "Q2 2024", gdp: 1728.5, growth: 6.1, services: 1005.9, manufacturing: 399.2, agriculture: 145.2, mining: 117.6, construction: 60.6 },
];

pub const SERVICES_SUBSECTORS: &[Subsector] = &[
    Subsector { name: "Wholesale & Retail Trade", value: 16.8, growth: 5.2 },
    Subsector { name: "Finance & Insurance", value: 12.4, growth: 6.8 },
    Subsector { name: "Real Estate", value: 8.9, growth: 4.1 },
    Subsector { name: "Transport & Storage", value: 7.3, growth: 7.2 },
    Subsector { name: "Information & Communication", value: 6.2, growth: 8.9 },
    Subsector { name: "Professional Services", value: 4.1, growth: 6.5 },
    Subsector { name: "Other Services", value: 2.5, growth: 3.8 },
];

pub const MANUFACTURING_SUBSECTORS: &[Subsector] = &[
    Subsector { name: "Electrical & Electronics", value: 8.7, growth: 7.8 },
    Subsector { name: "Petroleum Products", value: 4.2, growth: 3.9 },
    Subsector { name: "Chemicals", value: 3.8, growth: 5.4 },
    Subsector { name: "Food & Beverages", value: 2.9, growth: 4.2 },
    Subsector { name: "Textiles & Apparel", value: 1.8, growth: 2.1 },
    Subsector { name: "Machinery & Equipment", value: 1.7, growth: 6.8 },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sector_shares_sum_to_whole_economy() {
        let total: f64 = SECTORS.iter().map(|s| s.value).sum();
        assert!((total - 100.0).abs() < 1e-9);
    }

    #[test]
    fn quarterly_gdp_is_increasing() {
        assert!(QUARTERLY.windows(2).all(|w| w[1].gdp > w[0].gdp));
    }
}
