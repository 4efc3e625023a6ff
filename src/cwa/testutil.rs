//! Shared builders for synthetic CWA records (test builds only).

use super::checksum::balancing_word;
use super::protocol::*;

/// Pack calendar fields per the device bit layout
pub fn pack_timestamp(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> u32 {
    ((year as u32 - 2000) << 26)
        | ((month as u32) << 22)
        | ((day as u32) << 17)
        | ((hour as u32) << 12)
        | ((minute as u32) << 6)
        | second as u32
}

/// Build a minimal well-formed header buffer
pub fn build_header() -> Vec<u8> {
    let mut buf = vec![0u8; CWA_HEADER_SIZE];
    buf[0..2].copy_from_slice(b"MD");
    buf[2..4].copy_from_slice(&CWA_HEADER_DECLARED_LENGTH.to_le_bytes());
    buf[5..7].copy_from_slice(&43021u16.to_le_bytes()); // device id
    buf[7..11].copy_from_slice(&7u32.to_le_bytes()); // session id
    buf[13..17].copy_from_slice(&pack_timestamp(2018, 6, 14, 9, 0, 0).to_le_bytes());
    buf[17..21].copy_from_slice(&pack_timestamp(2018, 6, 21, 9, 0, 0).to_le_bytes());
    buf[21..25].copy_from_slice(&0u32.to_le_bytes()); // capacity, unlimited
    buf[36] = 0x74; // sampling rate code
    buf[37..41].copy_from_slice(&pack_timestamp(2018, 6, 13, 16, 30, 0).to_le_bytes());
    buf[41] = 44; // firmware revision
    buf[42..44].copy_from_slice(&60i16.to_le_bytes()); // UTC+1
    buf[64..70].copy_from_slice(b"_sn=7&");
    buf
}

/// Build a well-formed data block with the given sensor fields and a
/// balanced trailing checksum
pub fn build_data_block(sequence_id: u32, timestamp: u32, light: u16, temperature: u16) -> Vec<u8> {
    let mut buf = vec![0u8; CWA_DATA_SIZE];
    buf[0..2].copy_from_slice(b"AX");
    buf[2..4].copy_from_slice(&CWA_DATA_DECLARED_LENGTH.to_le_bytes());
    buf[4..6].copy_from_slice(&0x8000u16.to_le_bytes()); // fractional, 0
    buf[6..10].copy_from_slice(&7u32.to_le_bytes()); // session id
    buf[10..14].copy_from_slice(&sequence_id.to_le_bytes());
    buf[14..18].copy_from_slice(&timestamp.to_le_bytes());
    buf[18..20].copy_from_slice(&light.to_le_bytes());
    buf[20..22].copy_from_slice(&temperature.to_le_bytes());
    buf[23] = 180; // battery
    buf[24] = 0x74;
    buf[25] = 0x32; // 3 axes, 16-bit packing
    buf[26..28].copy_from_slice(&(-3i16).to_le_bytes());
    buf[28..30].copy_from_slice(&80u16.to_le_bytes());
    let checksum = balancing_word(&buf[..510]);
    buf[510..512].copy_from_slice(&checksum.to_le_bytes());
    buf
}
