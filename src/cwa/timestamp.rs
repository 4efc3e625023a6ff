//! # Packed Timestamp Codec
//!
//! The device stores calendar time as a single 32-bit value with fixed-width
//! bit fields (MSB to LSB): year offset from 2000 (6 bits), month (4), day
//! (5), hour (5), minute (6), second (6). This is not an epoch encoding.
//!
//! Decoding is deliberately permissive: the device writes sentinel or garbage
//! values when its clock is unset, so out-of-range calendar fields (month 0
//! or 13, day 0, ...) pass through undisturbed.

use std::fmt;

/// Calendar fields decoded from a packed 32-bit timestamp
///
/// A pure value type; fields are not range checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CwaTimestamp {
    /// Full year (6-bit stored offset plus 2000)
    pub year: u16,

    /// Month, nominally 1-12
    pub month: u8,

    /// Day of month, nominally 1-31
    pub day: u8,

    /// Hour, nominally 0-23
    pub hour: u8,

    /// Minute, 0-63 representable
    pub minute: u8,

    /// Second, 0-63 representable
    pub second: u8,
}

impl CwaTimestamp {
    /// Decode a packed 32-bit timestamp into calendar fields
    ///
    /// # Arguments
    ///
    /// * `raw` - Packed value as stored in a header or data block
    ///
    /// # Examples
    ///
    /// ```
    /// use cwa_extract::cwa::timestamp::CwaTimestamp;
    ///
    /// // 2018-06-14 09:30:15
    /// let raw = (18u32 << 26) | (6 << 22) | (14 << 17) | (9 << 12) | (30 << 6) | 15;
    /// let ts = CwaTimestamp::decode(raw);
    /// assert_eq!(ts.year, 2018);
    /// assert_eq!(ts.to_string(), "2018-06-14 09:30:15");
    /// ```
    pub fn decode(raw: u32) -> Self {
        Self {
            year: ((raw >> 26) & 0x3F) as u16 + 2000,
            month: ((raw >> 22) & 0x0F) as u8,
            day: ((raw >> 17) & 0x1F) as u8,
            hour: ((raw >> 12) & 0x1F) as u8,
            minute: ((raw >> 6) & 0x3F) as u8,
            second: (raw & 0x3F) as u8,
        }
    }
}

impl fmt::Display for CwaTimestamp {
    /// Format as zero-padded `YYYY-MM-DD HH:MM:SS`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}
