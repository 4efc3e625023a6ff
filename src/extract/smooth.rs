//! # Centered Moving Average
//!
//! Optional smoothing over the extracted channel series. The output index is
//! the midpoint of the window it averages, so the series shrinks by one
//! window length instead of being edge padded.

use crate::error::{CwaError, Result};

/// Smooth a series with a centered moving average
///
/// Output covers center indices `[w/2, n - w/2)` of the input (integer
/// division). Each output is the sum over the left span `[i - w/2, i)` and
/// right span `[i, i + w/2)`, divided by `window`. For an even window the
/// output length is exactly `n - window`.
///
/// # Arguments
///
/// * `values` - Input series of length `n`
/// * `window` - Window size `w`; need not be odd
///
/// # Errors
///
/// Returns [`CwaError::WindowTooLarge`] unless `n > window`. This is fatal
/// to the run; there is no degraded-output path.
pub fn central_moving_average(values: &[f64], window: usize) -> Result<Vec<f64>> {
    let n = values.len();
    if n <= window {
        return Err(CwaError::WindowTooLarge { window, len: n });
    }

    let half = window / 2;
    let start = half;
    let end = n - half;

    let mut smoothed = Vec::with_capacity(end - start);
    for i in start..end {
        let left: f64 = values[i - half..i].iter().sum();
        let right: f64 = values[i..i + half].iter().sum();
        smoothed.push((left + right) / window as f64);
    }

    Ok(smoothed)
}
