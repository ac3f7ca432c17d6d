//! `convergence-plot` library crate.
//!
//! The binary (`convplot`) is a thin wrapper around this library so that:
//!
//! - the fit and chart assembly are testable without spawning processes
//! - rendering can target a file or an in-memory SVG string

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod fit;
pub mod io;
pub mod math;
pub mod plot;
pub mod report;
