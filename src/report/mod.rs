//! Reporting utilities: console echo of the samples and the fit summary.

pub mod format;

pub use format::*;
