//! Chart aggregate: SVG plot geometry shared by every view.

pub mod services;
pub mod value_objects;

pub use services::*;
pub use value_objects::*;
