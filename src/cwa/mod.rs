//! # CWA Container Format
//!
//! Decoding for the Axivity AX3 `.cwa` binary container: record layouts,
//! the offset-based record decoder, the packed timestamp codec and the
//! word-wise record checksum.

pub mod checksum;
pub mod decoder;
pub mod protocol;
#[cfg(test)]
pub(crate) mod testutil;
pub mod timestamp;
