//! Line-oriented sample collector.
//!
//! Reads whitespace-separated numbers one line at a time. The first non-empty
//! line becomes `x`, the second `y`; anything after that is left unread.

use std::io::BufRead;
use std::thread;
use std::time::Duration;

use tracing::{debug, info};

use crate::domain::SampleSet;
use crate::error::AppError;

/// Collect the two sample vectors from `reader`.
///
/// `pace` is slept before every read attempt (zero disables it). Blank lines
/// are skipped. End of input before two numeric lines is an error rather than
/// a silent wait.
pub fn collect_samples<R: BufRead>(mut reader: R, pace: Duration) -> Result<SampleSet, AppError> {
    let mut vectors: Vec<Vec<f64>> = Vec::with_capacity(2);
    let mut line_no = 0usize;
    let mut buf = String::new();

    while vectors.len() < 2 {
        if !pace.is_zero() {
            thread::sleep(pace);
        }

        buf.clear();
        let n = reader.read_line(&mut buf)?;
        if n == 0 {
            return Err(AppError::IncompleteInput {
                lines_read: vectors.len(),
            });
        }
        line_no += 1;

        let values = parse_line(&buf, line_no)?;
        if values.is_empty() {
            debug!(line = line_no, "skipping blank line");
            continue;
        }
        debug!(line = line_no, count = values.len(), "parsed sample line");
        vectors.push(values);
    }

    let y = vectors.pop().unwrap_or_default();
    let x = vectors.pop().unwrap_or_default();
    info!(x_len = x.len(), y_len = y.len(), "collected sample vectors");

    Ok(SampleSet { x, y })
}

/// Parse one line of whitespace-separated floats.
///
/// `line_no` is 1-based and only used for error messages.
pub fn parse_line(line: &str, line_no: usize) -> Result<Vec<f64>, AppError> {
    line.split_whitespace()
        .map(|token| {
            token.parse::<f64>().map_err(|_| AppError::InvalidNumber {
                line: line_no,
                token: token.to_string(),
            })
        })
        .collect()
}
