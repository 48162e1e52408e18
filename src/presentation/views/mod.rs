//! One component per dashboard view. Each takes no parameters and reads
//! only the literal tables in `domain::statistics`.

pub mod employment;
pub mod explorer;
pub mod gdp;
pub mod indicators;
pub mod inflation;
pub mod overview;
pub mod sectors;
pub mod trade;

pub use employment::EmploymentData;
pub use explorer::DataExplorer;
pub use gdp::GdpAnalysis;
pub use indicators::EconomicIndicators;
pub use inflation::InflationTracker;
pub use overview::DashboardOverview;
pub use sectors::SectorPerformance;
pub use trade::TradeStatistics;
