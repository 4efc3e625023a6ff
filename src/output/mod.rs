//! # Series Output
//!
//! Serializes the extracted (or smoothed) series as two-column delimited
//! text, plus the per-subject summary-statistics sink.

pub mod summary;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::cwa::timestamp::CwaTimestamp;
use crate::error::Result;
use crate::extract::ChannelMode;

/// Write a `timestamp, value` series
///
/// When smoothing has shortened the value series, alignment drops the
/// leading `timestamps.len() - values.len()` timestamp entries so that the
/// values pair with the tail of the timestamp sequence; one line is emitted
/// per value.
///
/// # Arguments
///
/// * `out` - Destination
/// * `mode` - Selects the `temp` or `light` column header
/// * `timestamps` - Full timestamp sequence from extraction
/// * `values` - Value series, possibly shorter after smoothing
pub fn write_series<W: Write>(
    out: &mut W,
    mode: ChannelMode,
    timestamps: &[CwaTimestamp],
    values: &[f64],
) -> Result<()> {
    let offset = timestamps.len().saturating_sub(values.len());

    writeln!(out, "timestamp, {}", mode.column_name())?;
    for (ts, value) in timestamps[offset..].iter().zip(values) {
        writeln!(out, "{ts}, {value}")?;
    }

    Ok(())
}

/// Create `path` and write the series to it via [`write_series`]
pub fn write_series_file<P: AsRef<Path>>(
    path: P,
    mode: ChannelMode,
    timestamps: &[CwaTimestamp],
    values: &[f64],
) -> Result<()> {
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);
    write_series(&mut out, mode, timestamps, values)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cwa::testutil::pack_timestamp;
    use crate::cwa::timestamp::CwaTimestamp;

    fn minute_timestamps(count: usize) -> Vec<CwaTimestamp> {
        (0..count)
            .map(|i| CwaTimestamp::decode(pack_timestamp(2018, 6, 14, 9, i as u8, 0)))
            .collect()
    }

    #[test]
    fn test_unsmoothed_series_pairs_every_entry() {
        let timestamps = minute_timestamps(3);
        let values = vec![21.0, 22.0, 23.0];

        let mut out = Vec::new();
        write_series(&mut out, ChannelMode::Temperature, &timestamps, &values).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "timestamp, temp\n\
             2018-06-14 09:00:00, 21\n\
             2018-06-14 09:01:00, 22\n\
             2018-06-14 09:02:00, 23\n"
        );
    }

    #[test]
    fn test_smoothed_series_aligns_to_timestamp_tail() {
        // 10 timestamps, 6 values: values pair with timestamps[4..10)
        let timestamps = minute_timestamps(10);
        let values: Vec<f64> = (0..6).map(f64::from).collect();

        let mut out = Vec::new();
        write_series(&mut out, ChannelMode::Light, &timestamps, &values).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 7); // header + 6 rows
        assert_eq!(lines[0], "timestamp, light");
        assert_eq!(lines[1], "2018-06-14 09:04:00, 0");
        assert_eq!(lines[6], "2018-06-14 09:09:00, 5");
    }

    #[test]
    fn test_light_header_line() {
        let mut out = Vec::new();
        write_series(&mut out, ChannelMode::Light, &[], &[]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "timestamp, light\n");
    }

    #[test]
    fn test_fractional_values_use_plain_decimal_point() {
        let timestamps = minute_timestamps(1);
        let mut out = Vec::new();
        write_series(&mut out, ChannelMode::Temperature, &timestamps, &[2.5]).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with(", 2.5\n"), "output: {text}");
    }

    #[test]
    fn test_write_series_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");

        let timestamps = minute_timestamps(2);
        write_series_file(&path, ChannelMode::Temperature, &timestamps, &[20.0, 21.0]).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("timestamp, temp\n"));
        assert_eq!(text.lines().count(), 3);
    }
}
