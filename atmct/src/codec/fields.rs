// atmct/src/codec/fields.rs

//! Bit-field extraction over blocks in logical order.
//!
//! Bits are numbered MSB-first across the logical byte array, so the top
//! bits of logical byte 0 are the first bits of the block. Every function
//! reads fixed byte indices; widths are noted per field.

use crate::constants::BASE_YEAR_EPOCH;
use crate::records::Slot;
use crate::types::{Block, Logical};

const BIT0: u8 = 0x01;
const LOW2: u8 = 0x03;
const LOW4: u8 = 0x0F;
const LOW5: u8 = 0x1F;
const LOW6: u8 = 0x3F;
const LOW7: u8 = 0x7F;

#[inline]
fn wide(b: u8) -> u16 {
    u16::from(b)
}

// ---- identity ----------------------------------------------------------

/// Card number, 32 bits: logical bytes 12..=15.
pub fn card_number(b: Logical<'_>) -> u32 {
    u32::from_be_bytes([b[12], b[13], b[14], b[15]])
}

/// Secondary id from storage bytes 1..=4, see [`crate::utils::nibble_reversed_hex`].
pub fn secondary_id(block: &Block) -> String {
    crate::utils::nibble_reversed_hex(&block.storage()[1..=4])
}

// ---- validity ----------------------------------------------------------

/// 5 bits: byte10 bit0, byte11 bits7-4.
pub fn validity_day(b: Logical<'_>) -> u8 {
    ((b[10] & BIT0) << 4) | (b[11] >> 4)
}

/// 4 bits: byte11 bits3-0.
pub fn validity_month(b: Logical<'_>) -> u8 {
    b[11] & LOW4
}

/// 4 bits: byte12 bits7-4.
pub fn validity_sum_years(b: Logical<'_>) -> u8 {
    b[12] >> 4
}

/// 8 bits: byte12 bits3-0, byte13 bits7-4, plus 1900.
pub fn validity_base_year(b: Logical<'_>) -> u16 {
    let raw = ((b[12] & LOW4) << 4) | (b[13] >> 4);
    BASE_YEAR_EPOCH + wide(raw)
}

// ---- permissions -------------------------------------------------------

/// 6 bits: byte3 bits7-2.
pub fn permission_p(b: Logical<'_>) -> u8 {
    b[3] >> 2
}

/// 8 bits: byte3 bits1-0, byte4 bits7-2.
pub fn permission_ea(b: Logical<'_>) -> u8 {
    ((b[3] & LOW2) << 6) | (b[4] >> 2)
}

/// 10 bits: byte4 bits1-0, byte5.
pub fn permission_m(b: Logical<'_>) -> u16 {
    (wide(b[4] & LOW2) << 8) | wide(b[5])
}

// ---- validation stamp (shared by last validation and trips) -------------

/// 6 bits: byte1 bits7-2.
pub fn stamp_minutes(b: Logical<'_>) -> u8 {
    b[1] >> 2
}

/// 5 bits: byte1 bits1-0, byte2 bits7-5.
pub fn stamp_hours(b: Logical<'_>) -> u8 {
    ((b[1] & LOW2) << 3) | (b[2] >> 5)
}

/// 5 bits: byte2 bits4-0.
pub fn stamp_day(b: Logical<'_>) -> u8 {
    b[2] & LOW5
}

/// 4 bits: byte3 bits7-4.
pub fn stamp_month(b: Logical<'_>) -> u8 {
    b[3] >> 4
}

/// 4 bits: byte3 bits3-0, relative to the base year.
pub fn stamp_year_offset(b: Logical<'_>) -> u8 {
    b[3] & LOW4
}

// ---- last validation ---------------------------------------------------

/// 8 bits: byte4.
pub fn validation_zone(b: Logical<'_>) -> u8 {
    b[4]
}

/// 15 bits: byte5, byte6 bits7-1.
pub fn validation_stop(b: Logical<'_>) -> u16 {
    (wide(b[5]) << 7) | wide(b[6] >> 1)
}

/// 8 bits: byte6 bit0, byte7 bits7-1.
pub fn validation_operator(b: Logical<'_>) -> u8 {
    ((b[6] & BIT0) << 7) | (b[7] >> 1)
}

/// 11 bits: byte7 bit0, byte8, byte9 bits7-6.
pub fn validation_line(b: Logical<'_>) -> u16 {
    (wide(b[7] & BIT0) << 10) | (wide(b[8]) << 2) | wide(b[9] >> 6)
}

// ---- status ------------------------------------------------------------

/// 7 bits: byte7 bits7-1.
pub fn status_trips_left(b: Logical<'_>) -> u8 {
    b[7] >> 1
}

/// 5 bits: byte12 bit0, byte13 bits7-4.
pub fn status_expiry_day(b: Logical<'_>) -> u8 {
    ((b[12] & BIT0) << 4) | (b[13] >> 4)
}

/// 4 bits: byte13 bits3-0.
pub fn status_expiry_month(b: Logical<'_>) -> u8 {
    b[13] & LOW4
}

// ---- recharge ----------------------------------------------------------

/// 5 bits: byte1 bit0, byte2 bits7-4.
pub fn recharge_day(b: Logical<'_>) -> u8 {
    ((b[1] & BIT0) << 4) | (b[2] >> 4)
}

/// 4 bits: byte2 bits3-0.
pub fn recharge_month(b: Logical<'_>) -> u8 {
    b[2] & LOW4
}

/// 4 bits: byte3 bits7-4, relative to the base year.
pub fn recharge_year_offset(b: Logical<'_>) -> u8 {
    b[3] >> 4
}

/// 8 bits: byte7.
pub fn recharge_title(b: Logical<'_>) -> u8 {
    b[7]
}

// ---- trip --------------------------------------------------------------

/// 10 bits: byte4, byte5 bits7-6.
pub fn trip_vehicle(b: Logical<'_>) -> u16 {
    (wide(b[4]) << 2) | wide(b[5] >> 6)
}

/// 8 bits: byte5 bits5-0, byte6 bits7-6.
pub fn trip_zone(b: Logical<'_>) -> u8 {
    ((b[5] & LOW6) << 2) | (b[6] >> 6)
}

/// 15 bits: byte6 bits5-0, byte7, byte8 bit7.
pub fn trip_stop(b: Logical<'_>) -> u16 {
    (wide(b[6] & LOW6) << 9) | (wide(b[7]) << 1) | wide(b[8] >> 7)
}

/// 8 bits: byte8 bits6-0, byte9 bit7.
pub fn trip_operator(b: Logical<'_>) -> u8 {
    ((b[8] & LOW7) << 1) | (b[9] >> 7)
}

/// 11 bits: byte9 bits6-0, byte10 bits7-4.
pub fn trip_line(b: Logical<'_>) -> u16 {
    (wide(b[9] & LOW7) << 4) | wide(b[10] >> 4)
}

/// 1 bit: byte15 bit0.
pub fn trip_is_transfer(b: Logical<'_>) -> bool {
    b[15] & BIT0 == BIT0
}

// ---- payload-level helpers ----------------------------------------------

/// True when every checksummed payload byte is zero.
pub fn payload_is_empty(block: &Block) -> bool {
    block.payload().iter().all(|&b| b == 0)
}

/// Owner name line: 15 Latin-1 storage bytes, trimmed of blanks and NULs.
pub fn owner_text(block: &Block) -> Slot<String> {
    if payload_is_empty(block) {
        return Slot::Absent;
    }
    // Latin-1 maps every byte to the code point of the same value.
    let text: String = block.payload().iter().map(|&b| char::from(b)).collect();
    let trimmed = text.trim_matches(|c: char| c.is_whitespace() || c == '\0');
    if trimmed.is_empty() {
        Slot::Absent
    } else {
        Slot::Present(trimmed.to_string())
    }
}
