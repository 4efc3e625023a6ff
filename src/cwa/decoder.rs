//! # CWA Record Decoder
//!
//! Decodes raw fixed-length byte buffers into [`HeaderBlock`] and
//! [`DataBlock`] values.
//!
//! Every field is extracted at its explicit byte offset with explicit
//! little-endian width, never via in-memory struct layout, so decoding is
//! identical across alignment and padding rules.
//!
//! Decoding never fails on a buffer of the right length. Bad magic bytes,
//! declared-length mismatches and nonzero checksums are ignored by default
//! (devices produce all three in the field); [`header_diagnostics`] and
//! [`data_block_diagnostics`] expose those anomalies as opt-in, non-fatal
//! findings.

use std::fmt;

use super::checksum::word_sum;
use super::protocol::*;
use crate::error::{CwaError, Result};

/// Little-endian u16 at `offset`
#[inline]
fn read_u16(buf: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([buf[offset], buf[offset + 1]])
}

/// Little-endian u32 at `offset`
#[inline]
fn read_u32(buf: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([buf[offset], buf[offset + 1], buf[offset + 2], buf[offset + 3]])
}

/// Little-endian i16 at `offset`
#[inline]
fn read_i16(buf: &[u8], offset: usize) -> i16 {
    i16::from_le_bytes([buf[offset], buf[offset + 1]])
}

/// Decode a complete 1024-byte header block
///
/// # Arguments
///
/// * `buf` - Header record bytes; must be at least [`CWA_HEADER_SIZE`] long
///
/// # Errors
///
/// Returns [`CwaError::ShortRecord`] if the buffer is shorter than 1024
/// bytes. No semantic validation is performed.
pub fn decode_header(buf: &[u8]) -> Result<HeaderBlock> {
    if buf.len() < CWA_HEADER_SIZE {
        return Err(CwaError::ShortRecord {
            expected: CWA_HEADER_SIZE,
            actual: buf.len(),
        });
    }

    Ok(HeaderBlock {
        magic: read_u16(buf, 0),
        packet_length: read_u16(buf, 2),
        // 1 reserved byte at offset 4
        device_id: read_u16(buf, 5),
        session_id: read_u32(buf, 7),
        // 2 reserved bytes at offset 11
        logging_start: read_u32(buf, 13),
        logging_end: read_u32(buf, 17),
        logging_capacity: read_u32(buf, 21),
        // 11 reserved bytes at offset 25
        sampling_rate: buf[36],
        last_change: read_u32(buf, 37),
        firmware_revision: buf[41],
        utc_offset: read_i16(buf, 42),
        // 20 reserved bytes at offset 44
        annotation: buf[64..64 + CWA_ANNOTATION_SIZE].to_vec(),
        scratch: buf[512..512 + CWA_SCRATCH_SIZE].to_vec(),
    })
}

/// Decode a complete 512-byte data block
///
/// # Arguments
///
/// * `buf` - Data record bytes; must be at least [`CWA_DATA_SIZE`] long
///
/// # Errors
///
/// Returns [`CwaError::ShortRecord`] if the buffer is shorter than 512
/// bytes. No semantic validation is performed.
pub fn decode_data_block(buf: &[u8]) -> Result<DataBlock> {
    if buf.len() < CWA_DATA_SIZE {
        return Err(CwaError::ShortRecord {
            expected: CWA_DATA_SIZE,
            actual: buf.len(),
        });
    }

    Ok(DataBlock {
        magic: read_u16(buf, 0),
        packet_length: read_u16(buf, 2),
        device_fractional: read_u16(buf, 4),
        session_id: read_u32(buf, 6),
        sequence_id: read_u32(buf, 10),
        timestamp: read_u32(buf, 14),
        light: read_u16(buf, 18),
        temperature: read_u16(buf, 20),
        events: buf[22],
        battery: buf[23],
        sample_rate: buf[24],
        num_axes_bps: buf[25],
        timestamp_offset: read_i16(buf, 26),
        sample_count: read_u16(buf, 28),
        raw_sample_data: buf[30..30 + CWA_SAMPLE_DATA_SIZE].to_vec(),
        checksum: read_u16(buf, 510),
    })
}

/// A latent data-integrity anomaly found by strict validation
///
/// These are the checks the device format supports but that extraction never
/// performs by default. They are reported as warnings and never abort a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diagnostic {
    /// Record magic differs from the expected value
    BadMagic { expected: u16, found: u16 },

    /// Declared packet length differs from the fixed record size
    LengthMismatch { expected: u16, declared: u16 },

    /// Word-wise sum over the record is nonzero
    ChecksumNonzero { sum: u16 },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::BadMagic { expected, found } => {
                write!(f, "bad magic: expected 0x{expected:04X}, found 0x{found:04X}")
            }
            Diagnostic::LengthMismatch { expected, declared } => {
                write!(f, "declared length {declared}, expected {expected}")
            }
            Diagnostic::ChecksumNonzero { sum } => {
                write!(f, "nonzero record checksum (word sum 0x{sum:04X})")
            }
        }
    }
}

/// Strict-mode findings for a decoded header block
pub fn header_diagnostics(header: &HeaderBlock) -> Vec<Diagnostic> {
    let mut findings = Vec::new();

    if header.magic != CWA_HEADER_MAGIC {
        findings.push(Diagnostic::BadMagic {
            expected: CWA_HEADER_MAGIC,
            found: header.magic,
        });
    }

    if header.packet_length != CWA_HEADER_DECLARED_LENGTH {
        findings.push(Diagnostic::LengthMismatch {
            expected: CWA_HEADER_DECLARED_LENGTH,
            declared: header.packet_length,
        });
    }

    findings
}

/// Strict-mode findings for a decoded data block
///
/// # Arguments
///
/// * `buf` - The raw record bytes the block was decoded from (for the
///   checksum, which covers the whole record)
/// * `block` - The decoded block
pub fn data_block_diagnostics(buf: &[u8], block: &DataBlock) -> Vec<Diagnostic> {
    let mut findings = Vec::new();

    if block.magic != CWA_DATA_MAGIC {
        findings.push(Diagnostic::BadMagic {
            expected: CWA_DATA_MAGIC,
            found: block.magic,
        });
    }

    if block.packet_length != CWA_DATA_DECLARED_LENGTH {
        findings.push(Diagnostic::LengthMismatch {
            expected: CWA_DATA_DECLARED_LENGTH,
            declared: block.packet_length,
        });
    }

    let sum = word_sum(&buf[..CWA_DATA_SIZE.min(buf.len())]);
    if sum != 0 {
        findings.push(Diagnostic::ChecksumNonzero { sum });
    }

    findings
}
