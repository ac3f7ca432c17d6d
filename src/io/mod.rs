//! Input helpers.
//!
//! - line-oriented sample collection from stdin or any `BufRead` (`stdin`)

pub mod stdin;

pub use stdin::*;
