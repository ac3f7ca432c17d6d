//! Convergence analysis.
//!
//! Responsibilities:
//!
//! - validate samples and fit the empirical order in log-log space (`order`)
//! - generate the fixed set of reference slopes (`reference`)

pub mod order;
pub mod reference;

pub use order::*;
pub use reference::*;
