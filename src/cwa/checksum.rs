//! # Record Checksum
//!
//! 16-bit word-wise checksum over a whole 512-byte data block.
//!
//! The device writes the trailing checksum word so that the wrapping sum of
//! all 256 little-endian words in the block is zero. Extraction never
//! verifies it; it only backs the opt-in strict diagnostics in
//! [`crate::cwa::decoder`] and is never a hard failure.

/// Wrapping sum of all little-endian 16-bit words in `data`
///
/// A well-formed block sums to zero (the stored checksum word cancels the
/// rest). An odd trailing byte is treated as the low byte of a final word.
///
/// # Arguments
///
/// * `data` - Complete record bytes, including the stored checksum word
///
/// # Returns
///
/// * `u16` - Wrapping word sum; zero means the record is intact
pub fn word_sum(data: &[u8]) -> u16 {
    let mut sum: u16 = 0;

    let mut chunks = data.chunks_exact(2);
    for word in &mut chunks {
        sum = sum.wrapping_add(u16::from_le_bytes([word[0], word[1]]));
    }

    if let [last] = chunks.remainder() {
        sum = sum.wrapping_add(*last as u16);
    }

    sum
}

/// Checksum word that makes `word_sum` over `data ++ checksum` zero
///
/// Used to build well-formed records; `data` is the record without its
/// trailing checksum word.
pub fn balancing_word(data: &[u8]) -> u16 {
    word_sum(data).wrapping_neg()
}
