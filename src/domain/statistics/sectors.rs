use super::{PageHeading, column_max};
use crate::domain::format::share_width;

pub const HEADING: PageHeading = PageHeading {
    title: "Sector Performance",
    subtitle: "Comprehensive analysis of economic sector performance and competitiveness",
};

/// Shares in percent, productivity on a 0-5 index
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectorOverview {
    pub sector: &'static str,
    pub gdp_contribution: f64,
    pub employment: f64,
    pub productivity: f64,
    pub growth: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuarterlySectorGrowth {
    pub quarter: &'static str,
    pub services: f64,
    pub manufacturing: f64,
    pub agriculture: f64,
    pub mining: f64,
    pub construction: f64,
}

/// One competitiveness dimension scored 0-100 for each sector
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Competitiveness {
    pub dimension: &'static str,
    pub services: f64,
    pub manufacturing: f64,
    pub agriculture: f64,
    pub mining: f64,
    pub construction: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubsectorDetail {
    pub name: &'static str,
    pub growth: f64,
    pub contribution: f64,
    pub employment: u64,
    /// Productivity index for services, exports in RM billion for manufacturing
    pub secondary: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectorInsight {
    pub sector: &'static str,
    pub strengths: &'static [&'static str],
    pub challenges: &'static [&'static str],
    pub opportunities: &'static [&'static str],
}

pub const OVERVIEW: &[SectorOverview] = &[
    SectorOverview { sector: "Services", gdp_contribution: 58.2, employment: 60.5, productivity: 3.8, growth: 5.8 },
    SectorOverview { sector: "Manufacturing", gdp_contribution: 23.1, employment: 17.9, productivity: 4.2, growth: 6.2 },
    SectorOverview { sector: "Agriculture", gdp_contribution: 8.4, employment: 11.1, productivity: 2.9, growth: 3.1 },
    SectorOverview { sector: "Mining & Quarrying", gdp_contribution: 6.8, employment: 2.5, productivity: 5.1, growth: 4.5 },
    SectorOverview { sector: "Construction", gdp_contribution: 3.5, employment: 8.0, productivity: 2.1, growth: 7.2 },
];

pub const QUARTERLY: &[QuarterlySectorGrowth] = &[
    QuarterlySectorGrowth { quarter: "Q1 2023", services: 4.2, manufacturing: 5.8, agriculture: 2.1, mining: 3.9, construction: 6.8 },
    QuarterlySectorGrowth { quarter: "Q2 2023", services: 4.8, manufacturing: 6.1, agriculture: 2.4, mining: 4.2, construction: 7.1 },
    QuarterlySectorGrowth { quarter: "Q3 2023", services: 5.1, manufacturing: 6.4, agriculture: 2.8, mining: 4.5, construction: 7.4 },
    QuarterlySectorGrowth { quarter: "Q4 2023", services: 5.3, manufacturing: 6.7, agriculture: 3.0, mining: 4.7, construction: 7.6 },
    QuarterlySectorGrowth { quarter: "Q1 2024", services: 5.7, manufacturing: 7.0, agriculture: 3.1, mining: 4.9, construction: 7.8 },
    QuarterlySectorGrowth { quarter: "Q2 2024", services: 5.8, manufacturing: 6.2, agriculture: 3.1, mining: 4.5, construction: 7.2 },
];

pub const COMPETITIVENESS: &[Competitiveness] = &[
    Competitiveness { dimension: "Innovation", services: 85.0, manufacturing: 78.0, agriculture: 45.0, mining: 62.0, construction: 38.0 },
    Competitiveness { dimension: "Productivity", services: 76.0, manufacturing: 84.0, agriculture: 58.0, mining: 81.0, construction: 42.0 },
    Competitiveness { dimension: "Export Potential", services: 68.0, manufacturing: 92.0, agriculture: 71.0, mining: 55.0, construction: 25.0 },
    Competitiveness { dimension: "Employment Quality", services: 82.0, manufacturing: 75.0, agriculture: 48.0, mining: 69.0, construction: 52.0 },
    Competitiveness { dimension: "Sustainability", services: 71.0, manufacturing: 65.0, agriculture: 89.0, mining: 34.0, construction: 41.0 },
    Competitiveness { dimension: "Digital Adoption", services: 88.0, manufacturing: 73.0, agriculture: 35.0, mining: 58.0, construction: 29.0 },
];

pub const SERVICES_SUBSECTORS: &[SubsectorDetail] = &[
    SubsectorDetail { name: "Financial Services", growth: 6.8, contribution: 12.4, employment: 890_000, secondary: 4.2 },
    SubsectorDetail { name: "Wholesale & Retail", growth: 5.2, contribution: 16.8, employment: 2_100_000, secondary: 3.1 },
    SubsectorDetail { name: "Transport & Storage", growth: 7.2, contribution: 7.3, employment: 680_000, secondary: 3.8 },
    SubsectorDetail { name: "ICT Services", growth: 8.9, contribution: 6.2, employment: 420_000, secondary: 5.1 },
    SubsectorDetail { name: "Real Estate", growth: 4.1, contribution: 8.9, employment: 320_000, secondary: 2.9 },
    SubsectorDetail { name: "Professional Services", growth: 6.5, contribution: 4.1, employment: 280_000, secondary: 4.7 },
];

pub const MANUFACTURING_SUBSECTORS: &[SubsectorDetail] = &[
    SubsectorDetail { name: "Electrical & Electronics", growth: 7.8, contribution: 8.7, employment: 520_000, secondary: 45.2 },
    SubsectorDetail { name: "Petroleum Products", growth: 3.9, contribution: 4.2, employment: 180_000, secondary: 16.3 },
    SubsectorDetail { name: "Chemicals", growth: 5.4, contribution: 3.8, employment: 210_000, secondary: 12.8 },
    SubsectorDetail { name: "Food & Beverages", growth: 4.2, contribution: 2.9, employment: 380_000, secondary: 8.1 },
    SubsectorDetail { name: "Textiles & Apparel", growth: 2.1, contribution: 1.8, employment: 290_000, secondary: 7.2 },
    SubsectorDetail { name: "Machinery & Equipment", growth: 6.8, contribution: 1.7, employment: 150_000, secondary: 11.4 },
];

pub const INSIGHTS: &[SectorInsight] = &[
    SectorInsight {
        sector: "Services",
        strengths: &["Digital transformation leadership", "Strong financial sector", "Growing ICT services"],
        challenges: &["Skills gap in emerging tech", "Competition from regional hubs"],
        opportunities: &["Fintech expansion", "Digital economy growth", "Regional service hub"],
    },
    SectorInsight {
        sector: "Manufacturing",
        strengths: &["E&E export leadership", "Established supply chains", "Strategic location"],
        challenges: &["Rising labor costs", "Automation needs", "Supply chain disruptions"],
        opportunities: &["Industry 4.0 adoption", "Green manufacturing", "High-tech expansion"],
    },
    SectorInsight {
        sector: "Agriculture",
        strengths: &["Palm oil leadership", "Tropical crop diversity", "Export potential"],
        challenges: &["Climate change impact", "Labor shortage", "Sustainability concerns"],
        opportunities: &["Precision agriculture", "Sustainable practices", "Value-added products"],
    },
];

/// Productivity bar width relative to the most productive sector.
pub fn productivity_width(sector: &SectorOverview) -> f64 {
    share_width(sector.productivity, column_max(OVERVIEW, |s| s.productivity))
}

/// Sector with the fastest growth.
pub fn fastest_growing() -> Option<&'static SectorOverview> {
    OVERVIEW.iter().max_by(|a, b| a.growth.total_cmp(&b.growth))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mining_sets_the_productivity_scale() {
        let mining = &OVERVIEW[3];
        assert_eq!(productivity_width(mining), 100.0);
        let services = &OVERVIEW[0];
        assert!((productivity_width(services) - 3.8 / 5.1 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn construction_grows_fastest() {
        assert_eq!(fastest_growing().map(|s| s.sector), Some("Construction"));
    }
}
