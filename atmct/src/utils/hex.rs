//! Hexadecimal and binary helpers used for identity decoding and diagnostics.

use std::fmt::Write;

/// Convert a byte slice to a lowercase hex string with a single space between
/// each byte.
///
/// Example: `&[0xde, 0xad]` -> `"de ad"`
pub fn bytes_to_hex_spaced(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 3);
    for (i, b) in bytes.iter().enumerate() {
        if i != 0 {
            s.push(' ');
        }
        // write! never fails writing to a String
        let _ = write!(&mut s, "{:02x}", b);
    }
    s
}

/// Convert a byte slice to a string of zero-padded 8-bit binary groups with
/// no separator, MSB first.
///
/// Example: `&[0x81, 0x02]` -> `"1000000100000010"`
pub fn bytes_to_bin(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 8);
    for b in bytes {
        let _ = write!(&mut s, "{:08b}", b);
    }
    s
}

/// Render each byte as unpadded lowercase hex, reverse that digit string per
/// byte, concatenate, then trim leading zeros.
///
/// Example: `&[0x12, 0x0a, 0xb0]` -> `"21a0b"`
pub fn nibble_reversed_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let digits = format!("{:x}", b);
        s.extend(digits.chars().rev());
    }
    s.trim_start_matches('0').to_string()
}
