//! Convergence chart: assembly (`chart`), palette (`style`) and SVG
//! rendering through Plotters (`render`).

pub mod chart;
pub mod render;
pub mod style;

pub use chart::*;
pub use render::*;
pub use style::*;
