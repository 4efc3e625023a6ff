//! # Extraction Stream
//!
//! Streams 512-byte data blocks from a `.cwa` byte source and accumulates the
//! chosen secondary channel as a time-aligned series.
//!
//! The stream has no record-count field: extraction reads fixed-size chunks
//! until the source is exhausted, and a final partial chunk terminates the
//! loop without producing a record (noted at debug level only, never an
//! error).

pub mod smooth;

use std::io::Read;

use tracing::{debug, warn};

use crate::cwa::decoder::{self, data_block_diagnostics, header_diagnostics};
use crate::cwa::protocol::{HeaderBlock, CWA_DATA_SIZE, CWA_HEADER_SIZE};
use crate::cwa::timestamp::CwaTimestamp;
use crate::error::{CwaError, Result};

/// Secondary channel to extract, selected once per run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelMode {
    /// Raw signed 16-bit thermistor value, converted to degrees Celsius
    Temperature,

    /// Raw 16-bit light sensor value, no unit conversion
    Light,
}

impl ChannelMode {
    /// Column name used in the output series header line
    pub fn column_name(&self) -> &'static str {
        match self {
            ChannelMode::Temperature => "temp",
            ChannelMode::Light => "light",
        }
    }
}

/// Convert a raw thermistor reading to degrees Celsius
///
/// Fixed linear calibration for the AX3 thermistor. The result keeps its
/// fractional part; the series stores it truncated (see [`Extractor`]).
pub fn raw_to_celsius(raw: i16) -> f64 {
    (raw as f64 * 150.0 - 20500.0) / 1000.0
}

/// Channel values and decoded timestamps, one entry per data block read
///
/// The two vectors are index aligned and preserve record arrival order
/// (monotonic in sequence id by construction of the source stream; never
/// re-sorted here).
#[derive(Debug, Default)]
pub struct ExtractedSeries {
    /// Channel values; Celsius at integer precision in temperature mode,
    /// raw units in light mode
    pub values: Vec<f64>,

    /// Decoded per-block timestamps, formatted at serialization time
    pub timestamps: Vec<CwaTimestamp>,
}

impl ExtractedSeries {
    /// Number of extracted samples
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when no samples were extracted
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Streaming extractor for one run
///
/// Owns the growing series for the duration of a run; there is exactly one
/// reader and no shared state.
#[derive(Debug)]
pub struct Extractor {
    mode: ChannelMode,
    strict: bool,
    series: ExtractedSeries,
}

impl Extractor {
    /// Create an extractor for the given channel mode
    ///
    /// # Arguments
    ///
    /// * `mode` - Channel to extract (temperature or light)
    /// * `strict` - Report per-record integrity anomalies as warnings
    pub fn new(mode: ChannelMode, strict: bool) -> Self {
        Self {
            mode,
            strict,
            series: ExtractedSeries::default(),
        }
    }

    /// Read and decode the one-time header block
    ///
    /// Must be called before [`Extractor::extract`]; leaves the reader
    /// positioned at the first data block.
    ///
    /// # Errors
    ///
    /// Returns [`CwaError::ShortRecord`] if fewer than 1024 bytes are
    /// available. No partial-header decode is attempted.
    pub fn read_header<R: Read>(&self, reader: &mut R) -> Result<HeaderBlock> {
        let mut buf = [0u8; CWA_HEADER_SIZE];
        let filled = fill_buffer(reader, &mut buf)?;
        if filled < CWA_HEADER_SIZE {
            return Err(CwaError::ShortRecord {
                expected: CWA_HEADER_SIZE,
                actual: filled,
            });
        }

        let header = decoder::decode_header(&buf)?;
        if self.strict {
            for finding in header_diagnostics(&header) {
                warn!("header: {finding}");
            }
        }
        Ok(header)
    }

    /// Consume the remaining stream, one 512-byte block at a time
    ///
    /// Appends one sample and one timestamp per complete block. A final
    /// partial chunk ends the stream silently; it is the sole end-of-stream
    /// condition and is never an error.
    ///
    /// # Errors
    ///
    /// Returns an error only for underlying I/O failures.
    pub fn extract<R: Read>(&mut self, reader: &mut R) -> Result<()> {
        let mut buf = [0u8; CWA_DATA_SIZE];

        loop {
            let filled = fill_buffer(reader, &mut buf)?;
            if filled == 0 {
                break;
            }
            if filled < CWA_DATA_SIZE {
                debug!(
                    "dropping truncated final chunk ({filled} of {CWA_DATA_SIZE} bytes)"
                );
                break;
            }

            let block = decoder::decode_data_block(&buf)?;
            if self.strict {
                for finding in data_block_diagnostics(&buf, &block) {
                    warn!("data block {}: {finding}", block.sequence_id);
                }
            }

            let value = match self.mode {
                // Stored at integer precision, truncated toward zero
                ChannelMode::Temperature => raw_to_celsius(block.temperature as i16).trunc(),
                ChannelMode::Light => block.light as f64,
            };

            self.series.values.push(value);
            self.series.timestamps.push(CwaTimestamp::decode(block.timestamp));
        }

        Ok(())
    }

    /// The accumulated series, consuming the extractor
    pub fn into_series(self) -> ExtractedSeries {
        self.series
    }
}

/// Fill `buf` from `reader`, returning how many bytes were read
///
/// Reads until the buffer is full or the source is exhausted, so a short
/// count distinguishes a truncated final chunk from end of stream.
fn fill_buffer<R: Read>(reader: &mut R, buf: &mut [u8]) -> Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        let n = reader.read(&mut buf[filled..])?;
        if n == 0 {
            break;
        }
        filled += n;
    }
    Ok(filled)
}
