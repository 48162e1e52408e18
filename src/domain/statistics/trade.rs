use super::{HeadlineMetric, PageHeading};
use crate::domain::format::Trend;

pub const HEADING: PageHeading = PageHeading {
    title: "Trade Statistics",
    subtitle: "Import/export data, trade balance, and international commerce analytics",
};

/// Values in RM billion
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlyTrade {
    pub month: &'static str,
    pub exports: f64,
    pub imports: f64,
    pub balance: f64,
    pub total_trade: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProductTrade {
    pub product: &'static str,
    pub value: f64,
    pub percentage: f64,
    pub growth: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TradingPartner {
    pub country: &'static str,
    pub exports: f64,
    pub imports: f64,
    pub total_trade: f64,
    pub balance: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionTrade {
    pub region: &'static str,
    pub exports: f64,
    pub imports: f64,
    pub share: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TradeMode {
    pub mode: &'static str,
    pub percentage: f64,
    pub value: f64,
    pub growth: f64,
}

/// Throughput in million TEU
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Port {
    pub port: &'static str,
    pub throughput: f64,
    pub growth: f64,
    pub share: f64,
}

pub const KEY_METRICS: &[HeadlineMetric] = &[
    HeadlineMetric::new("Total Trade", "RM 276.4B", "+8.7%", Trend::Up, "YoY"),
    HeadlineMetric::new("Exports", "RM 142.3B", "+9.2%", Trend::Up, "YoY"),
    HeadlineMetric::new("Imports", "RM 134.1B", "+8.1%", Trend::Up, "YoY"),
    HeadlineMetric::new("Trade Balance", "RM 8.2B", "+13.9%", Trend::Up, "YoY"),
];

pub const MONTHLY: &[MonthlyTrade] = &[
    MonthlyTrade { month: "Jan 2024", exports: 125.4, imports: 118.2, balance: 7.2, total_trade: 243.6 },
    MonthlyTrade { month: "Feb 2024", exports: 128.7, imports: 121.5, balance: 7.2, total_trade: 250.2 },
    MonthlyTrade { month: "Mar 2024", exports: 132.1, imports: 124.8, balance: 7.3, total_trade: 256.9 },
    MonthlyTrade { month: "Apr 2024", exports: 135.6, imports: 127.3, balance: 8.3, total_trade: 262.9 },
    MonthlyTrade { month: "May 2024", exports: 138.9, imports: 130.7, balance: 8.2, total_trade: 269.6 },
    MonthlyTrade { month: "Jun 2024", exports: 142.3, imports: 134.1, balance: 8.2, total_trade: 276.4 },
];

pub const EXPORT_PRODUCTS: &[ProductTrade] = &[
    ProductTrade { product: "Electrical & Electronics", value: 45.2, percentage: 31.8, growth: 8.9 },
    ProductTrade { product: "Palm Oil & Products", value: 18.7, percentage: 13.1, growth: 12.4 },
    ProductTrade { product: "Petroleum Products", value: 16.3, percentage: 11.5, growth: 6.2 },
    ProductTrade { product: "Chemicals", value: 12.8, percentage: 9.0, growth: 7.8 },
    ProductTrade { product: "Machinery & Equipment", value: 11.4, percentage: 8.0, growth: 5.3 },
    ProductTrade { product: "Rubber Products", value: 8.9, percentage: 6.3, growth: 4.1 },
    ProductTrade { product: "Textiles & Clothing", value: 7.2, percentage: 5.1, growth: 2.8 },
    ProductTrade { product: "Others", value: 21.8, percentage: 15.3, growth: 6.7 },
];

pub const IMPORT_PRODUCTS: &[ProductTrade] = &[
    ProductTrade { product: "Intermediate Goods", value: 52.3, percentage: 39.0, growth: 7.2 },
    ProductTrade { product: "Capital Goods", value: 28.7, percentage: 21.4, growth: 5.8 },
    ProductTrade { product: "Consumption Goods", value: 24.1, percentage: 18.0, growth: 6.4 },
    ProductTrade { product: "Fuel & Lubricants", value: 18.9, percentage: 14.1, growth: 11.3 },
    ProductTrade { product: "Food & Beverages", value: 10.1, percentage: 7.5, growth: 8.7 },
];

pub const PARTNERS: &[TradingPartner] = &[
    TradingPartner { country: "China", exports: 21.8, imports: 25.2, total_trade: 47.0, balance: -3.4 },
    TradingPartner { country: "Singapore", exports: 18.4, imports: 12.7, total_trade: 31.1, balance: 5.7 },
    TradingPartner { country: "United States", exports: 15.2, imports: 8.9, total_trade: 24.1, balance: 6.3 },
    TradingPartner { country: "Japan", exports: 8.7, imports: 11.4, total_trade: 20.1, balance: -2.7 },
    TradingPartner { country: "Thailand", exports: 7.9, imports: 9.2, total_trade: 17.1, balance: -1.3 },
    TradingPartner { country: "South Korea", exports: 6.8, imports: 8.7, total_trade: 15.5, balance: -1.9 },
    TradingPartner { country: "India", exports: 5.4, imports: 6.1, total_trade: 11.5, balance: -0.7 },
    TradingPartner { country: "Indonesia", exports: 4.9, imports: 5.8, total_trade: 10.7, balance: -0.9 },
];

pub const REGIONS: &[RegionTrade] = &[
    RegionTrade { region: "ASEAN", exports: 38.2, imports: 35.7, share: 26.8 },
    RegionTrade { region: "East Asia", exports: 42.1, imports: 48.3, share: 32.7 },
    RegionTrade { region: "North America", exports: 18.9, imports: 12.4, share: 11.3 },
    RegionTrade { region: "European Union", exports: 12.7, imports: 15.2, share: 10.1 },
    RegionTrade { region: "Middle East", exports: 8.4, imports: 6.8, share: 5.5 },
    RegionTrade { region: "Others", exports: 21.7, imports: 15.7, share: 13.6 },
];

pub const MODES: &[TradeMode] = &[
    TradeMode { mode: "Sea Transport", percentage: 78.4, value: 216.8, growth: 6.8 },
    TradeMode { mode: "Air Transport", percentage: 15.2, value: 42.0, growth: 8.9 },
    TradeMode { mode: "Land Transport", percentage: 4.8, value: 13.3, growth: 5.2 },
    TradeMode { mode: "Pipeline", percentage: 1.6, value: 4.4, growth: 12.1 },
];

pub const PORTS: &[Port] = &[
    Port { port: "Port Klang", throughput: 13.2, growth: 5.8, share: 38.4 },
    Port { port: "Tanjung Pelepas", throughput: 9.1, growth: 7.2, share: 26.5 },
    Port { port: "Penang Port", throughput: 4.8, growth: 4.1, share: 14.0 },
    Port { port: "Johor Port", throughput: 2.9, growth: 6.3, share: 8.4 },
    Port { port: "Kuantan Port", throughput: 2.1, growth: 8.7, share: 6.1 },
    Port { port: "Others", throughput: 2.3, growth: 5.5, share: 6.7 },
];

/// Partners Malaysia runs a surplus with, largest surplus first.
pub fn surplus_partners() -> Vec<&'static TradingPartner> {
    let mut partners: Vec<_> = PARTNERS.iter().filter(|p| p.balance > 0.0).collect();
    partners.sort_by(|a, b| b.balance.total_cmp(&a.balance));
    partners
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monthly_totals_are_consistent() {
        for month in MONTHLY {
            assert!((month.exports + month.imports - month.total_trade).abs() < 0.05, "{}", month.month);
        }
    }

    #[test]
    fn surplus_partners_sorted_by_balance() {
        let names: Vec<_> = surplus_partners().iter().map(|p| p.country).collect();
        assert_eq!(names, vec!["United States", "Singapore"]);
    }
}
