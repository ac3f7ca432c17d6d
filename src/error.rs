//! Application error type.
//!
//! Every failure is fatal to the run. Each variant maps to a process exit code
//! so scripts can tell bad input apart from bad data or a failed render.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AppError {
    #[error("line {line}: '{token}' is not a number")]
    InvalidNumber { line: usize, token: String },

    #[error("expected two numeric lines on standard input (got {lines_read})")]
    IncompleteInput { lines_read: usize },

    #[error("I/O error: {0}")]
    Io(String),

    #[error("non-positive sample value {value} at {series}[{index}]")]
    NonPositiveSample {
        series: &'static str,
        index: usize,
        value: f64,
    },

    #[error("non-finite sample value {value} at {series}[{index}]")]
    NonFiniteSample {
        series: &'static str,
        index: usize,
        value: f64,
    },

    #[error("x and y must have the same length (x has {x_len}, y has {y_len})")]
    LengthMismatch { x_len: usize, y_len: usize },

    #[error("need at least 2 samples for a log-log fit, got {0}")]
    TooFewSamples(usize),

    #[error("log-log fit failed: {0}")]
    DegenerateFit(String),

    #[error("failed to render chart: {0}")]
    Render(String),
}

impl AppError {
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::InvalidNumber { .. } | AppError::IncompleteInput { .. } | AppError::Io(_) => 2,
            AppError::NonPositiveSample { .. }
            | AppError::NonFiniteSample { .. }
            | AppError::LengthMismatch { .. }
            | AppError::TooFewSamples(_) => 3,
            AppError::DegenerateFit(_) => 4,
            AppError::Render(_) => 5,
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err.to_string())
    }
}
