//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the input sample vectors (`SampleSet`)
//! - fit outputs (`LogLogFit`, `ReferenceCurve`)
//! - the render-only chart description (`ConvergenceChart`, `SeriesStyle`)
//! - run settings (`RunConfig`)

pub mod types;

pub use types::*;
