//! # CWA Extract Library
//!
//! Decodes the Axivity AX3 `.cwa` binary container (one 1024-byte header
//! block followed by a stream of 512-byte data blocks), recovers per-record
//! timestamps from their packed 32-bit encoding, extracts the temperature or
//! light channel as a time-aligned series, optionally smooths it with a
//! centered moving average, and writes a two-column time series.

pub mod cli;
pub mod cwa;
pub mod error;
pub mod extract;
pub mod output;
