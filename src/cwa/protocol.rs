//! # CWA Container Constants and Types
//!
//! Record layouts for the Axivity AX3 `.cwa` binary container: one fixed
//! 1024-byte header block followed by a stream of fixed 512-byte data blocks.
//!
//! Both block types are decoded by explicit byte offset (see
//! [`crate::cwa::decoder`]), never by in-memory struct layout, so the field
//! declaration order below carries no layout meaning.

/// Header block magic, ASCII "MD" read as a little-endian u16
pub const CWA_HEADER_MAGIC: u16 = 0x444D;

/// Data block magic, ASCII "AX" read as a little-endian u16
pub const CWA_DATA_MAGIC: u16 = 0x5841;

/// Total header block size in bytes
pub const CWA_HEADER_SIZE: usize = 1024;

/// Total data block size in bytes
pub const CWA_DATA_SIZE: usize = 512;

/// Declared payload length carried in the header block (size minus the
/// 4-byte magic + length prefix)
pub const CWA_HEADER_DECLARED_LENGTH: u16 = 1020;

/// Declared payload length carried in a data block
pub const CWA_DATA_DECLARED_LENGTH: u16 = 508;

/// Size of the opaque annotation region in the header block
pub const CWA_ANNOTATION_SIZE: usize = 448;

/// Size of the opaque post-collection scratch region in the header block
pub const CWA_SCRATCH_SIZE: usize = 512;

/// Size of the opaque packed axis-sample region in a data block
pub const CWA_SAMPLE_DATA_SIZE: usize = 480;

/// UTC offset sentinel meaning the device clock's zone is unknown
pub const CWA_UTC_OFFSET_UNKNOWN: i16 = -1;

/// Decoded header block (one per file)
///
/// Field offsets are fixed by the container format; reserved byte ranges are
/// skipped during decoding and not represented here.
#[derive(Debug, Clone)]
pub struct HeaderBlock {
    /// Block magic, expected ASCII "MD" (not validated by default)
    pub magic: u16,

    /// Declared packet length (1020 for a well-formed header)
    pub packet_length: u16,

    /// Device identifier
    pub device_id: u16,

    /// Unique session identifier
    pub session_id: u32,

    /// Start time for delayed logging (packed timestamp)
    pub logging_start: u32,

    /// Stop time for delayed logging (packed timestamp)
    pub logging_end: u32,

    /// Preset maximum number of samples to collect, 0 = unlimited
    pub logging_capacity: u32,

    /// Sampling rate code
    pub sampling_rate: u8,

    /// Last metadata change time (packed timestamp)
    pub last_change: u32,

    /// Firmware revision number
    pub firmware_revision: u8,

    /// Offset from UTC in minutes, -1 (0xFFFF) = unknown
    pub utc_offset: i16,

    /// Scratch metadata, space padded, generally URL-encoded key/value pairs
    /// (carried opaque, never parsed)
    pub annotation: Vec<u8>,

    /// Post-collection scratch metadata (carried opaque)
    pub scratch: Vec<u8>,
}

/// Decoded data block (one per 512-byte record)
#[derive(Debug, Clone)]
pub struct DataBlock {
    /// Block magic, expected ASCII "AX" (not validated by default)
    pub magic: u16,

    /// Declared packet length (508 for a well-formed block)
    pub packet_length: u16,

    /// Ambiguous field: top bit set = 15-bit sub-second fraction for the
    /// timestamp, top bit clear = 15-bit device identifier. The extraction
    /// path never inspects the top bit, so the raw value is kept unrefined.
    pub device_fractional: u16,

    /// Unique session identifier, 0 = unknown
    pub session_id: u32,

    /// Sequence counter, incremented per block (reset if logging restarted)
    pub sequence_id: u32,

    /// Last reported RTC value (packed timestamp), 0 = unknown
    pub timestamp: u32,

    /// Last recorded light sensor value in raw units, 0 = none
    pub light: u16,

    /// Last recorded temperature sensor value in raw units, 0 = none
    pub temperature: u16,

    /// Event flags since the previous block (b0 = resume logging,
    /// b1 = single tap, b2 = double tap, b3-b7 diagnostic)
    pub events: u8,

    /// Last recorded battery level in raw units, 0 = unknown
    pub battery: u8,

    /// Sample rate code, frequency = 3200 / (1 << (15 - (code & 0x0F))) Hz
    pub sample_rate: u8,

    /// Top nibble: number of axes; bottom nibble: packing format
    /// (2 = 3x 16-bit signed, 0 = packed 10-bit + exponent)
    pub num_axes_bps: u8,

    /// Relative sample index from the start of the buffer where the
    /// whole-second timestamp is valid
    pub timestamp_offset: i16,

    /// Number of accelerometer samples in this block (typically 80 or 120)
    pub sample_count: u16,

    /// Packed axis samples (carried opaque, axis decoding is out of scope)
    pub raw_sample_data: Vec<u8>,

    /// 16-bit word-wise sum of the whole block, should total zero
    pub checksum: u16,
}
