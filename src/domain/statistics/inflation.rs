use super::{HeadlineMetric, PageHeading};
use crate::domain::format::Trend;

pub const HEADING: PageHeading = PageHeading {
    title: "Inflation Tracker",
    subtitle: "Monitor inflation trends and price changes across different sectors",
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlyInflation {
    pub month: &'static str,
    pub headline: f64,
    pub core: f64,
    pub food: f64,
    pub transport: f64,
    pub housing: f64,
    pub healthcare: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryInflation {
    pub category: &'static str,
    pub weight: f64,
    pub inflation: f64,
    pub contribution: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionalInflation {
    pub region: &'static str,
    pub inflation: f64,
    pub urban: f64,
    pub rural: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FoodPrice {
    pub item: &'static str,
    pub price: f64,
    pub change: f64,
    pub category: &'static str,
}

pub const KEY_METRICS: &[HeadlineMetric] = &[
    HeadlineMetric::new("Headline Inflation", "2.6%", "-0.2%", Trend::Down, "MoM"),
    HeadlineMetric::new("Core Inflation", "2.4%", "-0.1%", Trend::Down, "MoM"),
    HeadlineMetric::new("Food Inflation", "3.2%", "-0.3%", Trend::Down, "MoM"),
    HeadlineMetric::new("Transport Inflation", "2.1%", "-0.2%", Trend::Down, "MoM"),
];

pub const MONTHLY: &[MonthlyInflation] = &[
    MonthlyInflation { month: "Jan 2024", headline: 3.2, core: 2.8, food: 4.1, transport: 2.9, housing: 3.5, healthcare: 2.1 },
    MonthlyInflation { month: "Feb 2024", headline: 3.4, core: 2.9, food: 4.3, transport: 3.2, housing: 3.6, healthcare: 2.2 },
    MonthlyInflation { month: "Mar 2024", headline: 3.1, core: 2.7, food: 3.9, transport: 2.8, housing: 3.4, healthcare: 2.0 },
    MonthlyInflation { month: "Apr 2024", headline: 2.9, core: 2.6, food: 3.7, transport: 2.5, housing: 3.2, healthcare: 1.9 },
    MonthlyInflation { month: "May 2024", headline: 2.8, core: 2.5, food: 3.5, transport: 2.3, housing: 3.1, healthcare: 1.8 },
    MonthlyInflation { month: "Jun 2024", headline: 2.6, core: 2.4, food: 3.2, transport: 2.1, housing: 2.9, healthcare: 1.7 },
];

pub const CATEGORIES: &[CategoryInflation] = &[
    CategoryInflation { category: "Food & Beverages", weight: 29.5, inflation: 3.2, contribution: 0.94 },
    CategoryInflation { category: "Housing & Utilities", weight: 23.8, inflation: 2.9, contribution: 0.69 },
    CategoryInflation { category: "Transport", weight: 14.6, inflation: 2.1, contribution: 0.31 },
    CategoryInflation { category: "Clothing & Footwear", weight: 3.9, inflation: 1.8, contribution: 0.07 },
    CategoryInflation { category: "Healthcare", weight: 2.3, inflation: 1.7, contribution: 0.04 },
    CategoryInflation { category: "Education", weight: 1.9, inflation: 2.5, contribution: 0.05 },
];

pub const REGIONS: &[RegionalInflation] = &[
    RegionalInflation { region: "Klang Valley", inflation: 2.8, urban: 2.9, rural: 2.5 },
    RegionalInflation { region: "Northern Region", inflation: 2.5, urban: 2.6, rural: 2.3 },
    RegionalInflation { region: "Central Region", inflation: 2.7, urban: 2.8, rural: 2.4 },
    RegionalInflation { region: "Southern Region", inflation: 2.6, urban: 2.7, rural: 2.4 },
    RegionalInflation { region: "East Coast", inflation: 2.4, urban: 2.5, rural: 2.2 },
    RegionalInflation { region: "East Malaysia", inflation: 2.9, urban: 3.1, rural: 2.6 },
];

pub const FOOD_PRICES: &[FoodPrice] = &[
    FoodPrice { item: "Rice", price: 3.20, change: 2.1, category: "Staples" },
    FoodPrice { item: "Chicken", price: 8.50, change: 4.2, category: "Protein" },
    FoodPrice { item: "Fish", price: 12.80, change: 3.8, category: "Protein" },
    FoodPrice { item: "Vegetables", price: 4.20, change: 5.1, category: "Fresh Produce" },
    FoodPrice { item: "Fruits", price: 6.80, change: 3.2, category: "Fresh Produce" },
    FoodPrice { item: "Cooking Oil", price: 4.50, change: 6.8, category: "Cooking Essentials" },
    FoodPrice { item: "Sugar", price: 2.85, change: 1.9, category: "Cooking Essentials" },
    FoodPrice { item: "Bread", price: 2.50, change: 2.8, category: "Bakery" },
];
