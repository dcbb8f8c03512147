// tests/common/fixtures.rs

//! Card images shared by the integration tests.

use atmct::Card;
use atmct::test_support::{CardImage, seal};

pub const CARD_NUMBER: u32 = 12_345_678;
pub const BASE_YEAR: u16 = 1996;

/// Last validation and first trip share this stamp: 22/11/2003 13:45
pub const STAMP: [(usize, u8); 3] = [(1, 0xB5), (2, 0xB6), (3, 0xB7)];

pub const VALIDATION_FIELDS: [(usize, u8); 6] = [
    (4, 0x01),
    (5, 0x24),
    (6, 0x69),
    (7, 0x0B),
    (8, 0x69),
    (9, 0x40),
];

pub const TRIP_FIELDS: [(usize, u8); 8] = [
    (4, 0xB1),
    (5, 0x60),
    (6, 0x61),
    (7, 0x90),
    (8, 0x85),
    (9, 0x92),
    (10, 0x30),
    (15, 0x01),
];

/// Logical fields of the card number block.
pub fn identity_fields() -> Vec<(usize, u8)> {
    let be = CARD_NUMBER.to_be_bytes();
    vec![(12, be[0]), (13, be[1]), (14, be[2]), (15, be[3])]
}

/// Secondary id block in storage order; decodes to "12345678".
pub fn secondary_storage() -> [u8; 16] {
    let mut storage = [0u8; 16];
    storage[1..=4].copy_from_slice(&[0x21, 0x43, 0x65, 0x87]);
    seal(storage)
}

fn with_stamp(rest: &[(usize, u8)]) -> Vec<(usize, u8)> {
    let mut fields = STAMP.to_vec();
    fields.extend_from_slice(rest);
    fields
}

/// A personalised card with two recharges and three trips. The third trip
/// lives past a sector trailer and has a corrupted line nibble.
pub fn sample_image() -> CardImage {
    CardImage::new()
        .fields(0x00, &identity_fields())
        .storage_block(0x10, secondary_storage())
        .text(0x80, b"JOAN")
        .text(0x90, b"PUIG I FERRER")
        // expires 05/03/2000, base year 1996
        .fields(0xC0, &[(11, 0x53), (12, 0x46)])
        // p=5 ea=3 m=42
        .fields(0xD0, &[(3, 0x14), (4, 0x0C), (5, 0x2A)])
        .fields(0x100, &with_stamp(&VALIDATION_FIELDS))
        // 10 trips left, title expires 31/12
        .fields(0x150, &[(7, 20), (12, 0x01), (13, 0xFC)])
        // 07/06/1999 title 0x11
        .fields(0x240, &[(2, 0x76), (3, 0x30), (7, 0x11)])
        // 20/06/1999 title 0x2A
        .fields(0x250, &[(1, 0x01), (2, 0x46), (3, 0x30), (7, 0x2A)])
        .fields(0x2C0, &with_stamp(&TRIP_FIELDS))
        // 01/02/2000 08:05 vehicle 1 zone 1 line 3
        .fields(
            0x2D0,
            &[(1, 0x15), (2, 0x01), (3, 0x24), (5, 0x40), (6, 0x40), (10, 0x30)],
        )
        .storage_block(0x2F0, [0xFF; 16])
        // 03/03/2000 09:30, line nibble flipped after sealing
        .fields(0x300, &[(1, 0x79), (2, 0x23), (3, 0x34)])
        .corrupt(0x300, 5, 0x10)
}

pub fn sample_card() -> Card {
    sample_image().build()
}

pub fn blank_card() -> Card {
    CardImage::new().build()
}
