//! Navigation aggregate: the closed set of views and the sidebar menu.

pub mod value_objects;

pub use value_objects::*;
