//! Pure domain layer: no browser access, everything here runs natively.

pub mod chart;
pub mod errors;
pub mod format;
pub mod logging;
pub mod navigation;
pub mod repositories;
pub mod statistics;
pub mod theme;
