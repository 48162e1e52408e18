use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString};

use super::{HeadlineMetric, PageHeading};
use crate::domain::format::Trend;

pub const HEADING: PageHeading = PageHeading {
    title: "Data Explorer",
    subtitle: "Discover, analyze, and download Malaysian economic datasets",
};

/// Publication cadence of a dataset
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    StrumDisplay,
    EnumIter,
    EnumString,
    AsRefStr,
    Serialize,
    Deserialize,
)]
pub enum Frequency {
    #[strum(serialize = "daily", to_string = "Daily")]
    Daily,
    #[strum(serialize = "monthly", to_string = "Monthly")]
    Monthly,
    #[strum(serialize = "quarterly", to_string = "Quarterly")]
    Quarterly,
    #[strum(serialize = "annual", to_string = "Annual")]
    Annual,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataCategory {
    pub id: &'static str,
    pub name: &'static str,
    pub count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dataset {
    pub id: u32,
    pub name: &'static str,
    pub category_id: &'static str,
    pub description: &'static str,
    /// ISO date, sorts lexicographically
    pub last_updated: &'static str,
    pub frequency: Frequency,
    pub source: &'static str,
    pub format: &'static str,
    pub size_mb: f64,
    pub downloads: u64,
    pub tags: &'static [&'static str],
    pub featured: bool,
}

impl Dataset {
    pub fn category(&self) -> Option<&'static DataCategory> {
        CATEGORIES.iter().find(|c| c.id == self.category_id)
    }

    pub fn category_name(&self) -> &'static str {
        self.category().map(|c| c.name).unwrap_or("Uncategorised")
    }

    pub fn size_label(&self) -> String {
        format!("{:.1} MB", self.size_mb)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualizationPoint {
    pub month: &'static str,
    pub gdp: f64,
    pub inflation: f64,
    pub unemployment: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiEndpoint {
    pub name: &'static str,
    pub endpoint: &'static str,
    pub method: &'static str,
    pub description: &'static str,
    pub parameters: &'static [&'static str],
    pub rate_limit: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FreshnessCompliance {
    pub frequency: Frequency,
    pub compliance: f64,
    pub datasets: u32,
}

pub const CATEGORIES: &[DataCategory] = &[
    DataCategory { id: "gdp", name: "GDP & Growth", count: 156 },
    DataCategory { id: "inflation", name: "Inflation & Prices", count: 89 },
    DataCategory { id: "employment", name: "Employment & Labor", count: 124 },
    DataCategory { id: "trade", name: "Trade & Commerce", count: 203 },
    DataCategory { id: "finance", name: "Financial Markets", count: 167 },
    DataCategory { id: "demographics", name: "Demographics", count: 78 },
];

pub const DATASETS: &[Dataset] = &[
    Dataset {
        id: 1,
        name: "Quarterly GDP Growth Rate",
        category_id: "gdp",
        description: "Real GDP growth rate by quarter, seasonally adjusted",
        last_updated: "2024-07-15",
        frequency: Frequency::Quarterly,
        source: "Department of Statistics Malaysia",
        format: "CSV, JSON, XML",
        size_mb: 2.3,
        downloads: 1247,
        tags: &["GDP", "Growth", "Quarterly", "Real"],
        featured: true,
    },
    Dataset {
        id: 2,
        name: "Consumer Price Index (CPI)",
        category_id: "inflation",
        description: "Monthly consumer price index and inflation rates by category",
        last_updated: "2024-07-10",
        frequency: Frequency::Monthly,
        source: "Department of Statistics Malaysia",
        format: "CSV, JSON",
        size_mb: 5.7,
        downloads: 892,
        tags: &["CPI", "Inflation", "Monthly", "Prices"],
        featured: true,
    },
    Dataset {
        id: 3,
        name: "Labor Force Survey",
        category_id: "employment",
        description: "Comprehensive employment statistics including unemployment rates",
        last_updated: "2024-07-08",
        frequency: Frequency::Monthly,
        source: "Department of Statistics Malaysia",
        format: "CSV, Excel",
        size_mb: 8.1,
        downloads: 654,
        tags: &["Employment", "Labor Force", "Unemployment", "Monthly"],
        featured: false,
    },
    Dataset {
        id: 4,
        name: "International Trade Statistics",
        category_id: "trade",
        description: "Monthly import/export data by country and commodity",
        last_updated: "2024-07-12",
        frequency: Frequency::Monthly,
        source: "Royal Malaysian Customs",
        format: "CSV, JSON, XML",
        size_mb: 15.2,
        downloads: 1089,
        tags: &["Trade", "Exports", "Imports", "Monthly"],
        featured: true,
    },
    Dataset {
        id: 5,
        name: "KLCI Stock Index",
        category_id: "finance",
        description: "Daily Kuala Lumpur Composite Index values and trading volumes",
        last_updated: "2024-07-18",
        frequency: Frequency::Daily,
        source: "Bursa Malaysia",
        format: "CSV, JSON",
        size_mb: 12.8,
        downloads: 2156,
        tags: &["KLCI", "Stock Market", "Daily", "Trading"],
        featured: false,
    },
    Dataset {
        id: 6,
        name: "Population Census Data",
        category_id: "demographics",
        description: "Detailed population statistics by state, age, and ethnicity",
        last_updated: "2024-06-30",
        frequency: Frequency::Annual,
        source: "Department of Statistics Malaysia",
        format: "CSV, Excel, JSON",
        size_mb: 23.4,
        downloads: 445,
        tags: &["Population", "Census", "Demographics", "Annual"],
        featured: false,
    },
];

pub const SAMPLE_VISUALIZATION: &[VisualizationPoint] = &[
    VisualizationPoint { month: "Jan", gdp: 5.6, inflation: 3.2, unemployment: 3.5 },
    VisualizationPoint { month: "Feb", gdp: 5.8, inflation: 3.4, unemployment: 3.4 },
    VisualizationPoint { month: "Mar", gdp: 5.9, inflation: 3.1, unemployment: 3.3 },
    VisualizationPoint { month: "Apr", gdp: 6.1, inflation: 2.9, unemployment: 3.2 },
    VisualizationPoint { month: "May", gdp: 6.3, inflation: 2.8, unemployment: 3.1 },
    VisualizationPoint { month: "Jun", gdp: 6.5, inflation: 2.6, unemployment: 3.0 },
];

pub const API_ENDPOINTS: &[ApiEndpoint] = &[
    ApiEndpoint {
        name: "GDP Data API",
        endpoint: "/api/v1/gdp",
        method: "GET",
        description: "Retrieve GDP data with optional filters",
        parameters: &["period", "sector", "format"],
        rate_limit: "1000 requests/hour",
    },
    ApiEndpoint {
        name: "Inflation Data API",
        endpoint: "/api/v1/inflation",
        method: "GET",
        description: "Access CPI and inflation rate data",
        parameters: &["start_date", "end_date", "category"],
        rate_limit: "1000 requests/hour",
    },
    ApiEndpoint {
        name: "Employment Data API",
        endpoint: "/api/v1/employment",
        method: "GET",
        description: "Employment and labor force statistics",
        parameters: &["region", "age_group", "education"],
        rate_limit: "500 requests/hour",
    },
];

pub const FRESHNESS: &[FreshnessCompliance] = &[
    FreshnessCompliance { frequency: Frequency::Daily, compliance: 98.0, datasets: 12 },
    FreshnessCompliance { frequency: Frequency::Monthly, compliance: 95.0, datasets: 45 },
    FreshnessCompliance { frequency: Frequency::Quarterly, compliance: 100.0, datasets: 23 },
    FreshnessCompliance { frequency: Frequency::Annual, compliance: 89.0, datasets: 8 },
];

pub const API_BASE_URL: &str = "https://api.malaysianeconomy.gov.my/v1";

pub const USAGE_METRICS: &[HeadlineMetric] = &[
    HeadlineMetric::new("Total Downloads", "12,847", "+23%", Trend::Up, "this month"),
    HeadlineMetric::new("API Requests", "89,234", "+15%", Trend::Up, "this month"),
    HeadlineMetric::new("Active Users", "2,156", "+8%", Trend::Up, "this month"),
    HeadlineMetric::new("Data Points", "1.2M", "+12%", Trend::Up, "this month"),
];

/// Client language of an API usage sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, StrumDisplay, EnumIter)]
pub enum CodeSample {
    #[default]
    #[strum(to_string = "cURL")]
    Curl,
    JavaScript,
    Python,
}

impl CodeSample {
    pub fn snippet(self) -> &'static str {
        match self {
            CodeSample::Curl => concat!(
                "curl -X GET \"https://api.malaysianeconomy.gov.my/v1/gdp?period=2024Q2&format=json\" \\\n",
                "  -H \"Accept: application/json\"",
            ),
            CodeSample::JavaScript => concat!(
                "fetch('https://api.malaysianeconomy.gov.my/v1/gdp?period=2024Q2&format=json')\n",
                "  .then(response => response.json())\n",
                "  .then(data => console.log(data))\n",
                "  .catch(error => console.error('Error:', error));",
            ),
            CodeSample::Python => concat!(
                "import requests\n",
                "\n",
                "response = requests.get(\n",
                "    'https://api.malaysianeconomy.gov.my/v1/gdp',\n",
                "    params={'period': '2024Q2', 'format': 'json'}\n",
                ")\n",
                "data = response.json()\n",
                "print(data)",
            ),
        }
    }
}

/// Ordering of the full dataset list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, StrumDisplay, EnumIter, EnumString, AsRefStr)]
pub enum DatasetSort {
    #[default]
    #[strum(serialize = "updated", to_string = "Recently Updated")]
    RecentlyUpdated,
    #[strum(serialize = "popular", to_string = "Most Popular")]
    MostPopular,
    #[strum(serialize = "name", to_string = "Name A-Z")]
    Name,
    #[strum(serialize = "size", to_string = "File Size")]
    Size,
}

/// Search box + category/frequency selects. `None` selects everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DatasetQuery {
    pub text: String,
    pub category: Option<String>,
    pub frequency: Option<Frequency>,
}

impl DatasetQuery {
    /// Build from raw select values where `"all"` (or anything unknown for
    /// frequency) means no filter.
    pub fn from_inputs(text: &str, category: &str, frequency: &str) -> Self {
        Self {
            text: text.trim().to_string(),
            category: match category {
                "" | "all" => None,
                id => Some(id.to_string()),
            },
            frequency: frequency.parse().ok(),
        }
    }

    pub fn matches(&self, dataset: &Dataset) -> bool {
        if let Some(category) = &self.category {
            if dataset.category_id != category {
                return false;
            }
        }
        if let Some(frequency) = self.frequency {
            if dataset.frequency != frequency {
                return false;
            }
        }
        if self.text.is_empty() {
            return true;
        }
        let needle = self.text.to_lowercase();
        dataset.name.to_lowercase().contains(&needle)
            || dataset.description.to_lowercase().contains(&needle)
            || dataset.tags.iter().any(|t| t.to_lowercase().contains(&needle))
    }
}

/// Datasets matching `query`, ordered by `sort`. The sort is stable so ties
/// keep catalogue order.
pub fn filter_datasets(query: &DatasetQuery, sort: DatasetSort) -> Vec<&'static Dataset> {
    let mut found: Vec<&'static Dataset> = DATASETS.iter().filter(|d| query.matches(d)).collect();
    match sort {
        DatasetSort::RecentlyUpdated => found.sort_by(|a, b| b.last_updated.cmp(a.last_updated)),
        DatasetSort::MostPopular => found.sort_by(|a, b| b.downloads.cmp(&a.downloads)),
        DatasetSort::Name => found.sort_by(|a, b| a.name.cmp(b.name)),
        DatasetSort::Size => found.sort_by(|a, b| b.size_mb.total_cmp(&a.size_mb)),
    }
    found
}

pub fn featured_datasets() -> impl Iterator<Item = &'static Dataset> {
    DATASETS.iter().filter(|d| d.featured)
}

/// Top `n` datasets by downloads, highest first.
pub fn most_downloaded(n: usize) -> Vec<&'static Dataset> {
    let mut all: Vec<&'static Dataset> = DATASETS.iter().collect();
    all.sort_by(|a, b| b.downloads.cmp(&a.downloads));
    all.truncate(n);
    all
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_dataset_has_a_known_category() {
        for dataset in DATASETS {
            assert!(dataset.category().is_some(), "{}", dataset.name);
        }
    }

    #[test]
    fn frequency_parses_select_values() {
        assert_eq!("monthly".parse::<Frequency>(), Ok(Frequency::Monthly));
        assert_eq!(Frequency::Quarterly.to_string(), "Quarterly");
        assert!("all".parse::<Frequency>().is_err());
    }

    #[test]
    fn code_samples_target_the_base_url() {
        use strum::IntoEnumIterator;
        for sample in CodeSample::iter() {
            assert!(sample.snippet().contains(API_BASE_URL), "{}", sample);
        }
    }

    #[test]
    fn featured_are_flagged_ones() {
        let ids: Vec<u32> = featured_datasets().map(|d| d.id).collect();
        assert_eq!(ids, vec![1, 2, 4]);
    }
}
