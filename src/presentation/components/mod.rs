pub mod cards;
pub mod charts;
pub mod table;
pub mod tabs;

pub use cards::*;
pub use charts::*;
pub use table::*;
pub use tabs::*;
