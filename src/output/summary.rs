//! # Per-Subject Summary Statistics
//!
//! Appends one CSV row per run to a shared statistics file: overall mean and
//! standard deviation of the extracted channel, then mean and standard
//! deviation for each hour of the day (0-23), bucketed on the decoded
//! timestamp's hour field.

use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::cwa::timestamp::CwaTimestamp;
use crate::error::Result;

/// Arithmetic mean; NaN for an empty slice
pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (n - 1 divisor); NaN for fewer than two values
pub fn std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return f64::NAN;
    }

    let m = mean(values);
    let accum: f64 = values.iter().map(|v| (v - m).powi(2)).sum();
    (accum / (values.len() as f64 - 1.0)).sqrt()
}

/// Summary row for one subject's run
#[derive(Debug)]
pub struct SubjectSummary {
    /// Subject identifier (derived from the input filename)
    pub subject_id: String,

    /// Overall channel mean
    pub mean: f64,

    /// Overall channel standard deviation
    pub std_dev: f64,

    /// Per-hour (0-23) mean and standard deviation; NaN where the hour has
    /// no samples
    pub hourly: [(f64, f64); 24],
}

impl SubjectSummary {
    /// Compute the summary over index-aligned timestamps and values
    pub fn compute(subject_id: &str, timestamps: &[CwaTimestamp], values: &[f64]) -> Self {
        let mut buckets: [Vec<f64>; 24] = Default::default();
        for (ts, value) in timestamps.iter().zip(values) {
            // Hours outside 0-23 can occur for unset clocks; fold them in
            // modulo the day rather than dropping samples
            buckets[(ts.hour % 24) as usize].push(*value);
        }

        let mut hourly = [(f64::NAN, f64::NAN); 24];
        for (hour, bucket) in buckets.iter().enumerate() {
            hourly[hour] = (mean(bucket), std_dev(bucket));
        }

        Self {
            subject_id: subject_id.to_string(),
            mean: mean(values),
            std_dev: std_dev(values),
            hourly,
        }
    }

    /// Serialize as one CSV row: id, overall mean/sd, then 24 hourly pairs
    pub fn to_csv_row(&self) -> String {
        let mut row = format!("{},{},{}", self.subject_id, self.mean, self.std_dev);
        for (m, sd) in &self.hourly {
            row.push_str(&format!(",{m},{sd}"));
        }
        row.push('\n');
        row
    }
}

/// Append a subject's summary row to the shared statistics file
///
/// The file is created if absent and appended to otherwise, so multiple
/// subjects accumulate into one table.
pub fn append_summary<P: AsRef<Path>>(
    path: P,
    subject_id: &str,
    timestamps: &[CwaTimestamp],
    values: &[f64],
) -> Result<()> {
    let summary = SubjectSummary::compute(subject_id, timestamps, values);

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut out = BufWriter::new(file);
    out.write_all(summary.to_csv_row().as_bytes())?;
    out.flush()?;
    Ok(())
}
