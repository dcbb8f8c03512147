#[path = "../common/mod.rs"]
mod common;

use atmct::Block;
use atmct::codec::checksum::{self, block_checksum, crc16_mcrf4xx, fold, verify};

fn block_from_hex(s: &str) -> Block {
    let bytes = hex::decode(s).unwrap();
    Block::try_from(bytes.as_slice()).unwrap()
}

#[test]
fn crc_standard_check_value() {
    assert_eq!(crc16_mcrf4xx(b"123456789"), 0x6F91);
    assert_eq!(fold(0x6F91), 0xFE);
}

#[test]
fn owner_line_checksum() {
    // "JOAN" padded with NULs, checksum 0xa9 in the last storage byte
    let block = block_from_hex("4a4f414e0000000000000000000000a9");
    assert_eq!(block_checksum(&block), 0xA9);
    assert!(verify(&block));
}

#[test]
fn secondary_id_fixture_is_sealed() {
    let storage = common::fixtures::secondary_storage();
    assert_eq!(hex::encode(storage), "00214365870000000000000000000034");
    assert!(verify(&Block::from_bytes(storage)));
}

#[test]
fn blank_block_never_verifies() {
    let block = block_from_hex(&"00".repeat(16));
    assert_eq!(block_checksum(&block), 0xB1);
    assert!(!verify(&block));
    assert!(checksum::check(0x240, &block).is_err());
}

#[test]
fn checksum_ignores_nothing_but_the_last_byte() {
    let block = block_from_hex("4a4f414e0000000000000000000000a9");
    let mut storage = *block.storage();
    storage[15] = 0x00;
    assert_eq!(block_checksum(&Block::from_bytes(storage)), 0xA9);
    storage[14] = 0x01;
    assert_ne!(block_checksum(&Block::from_bytes(storage)), 0xA9);
}

#[test]
fn wrong_length_block_is_rejected() {
    let bytes = hex::decode("4a4f414e").unwrap();
    assert!(matches!(
        Block::try_from(bytes.as_slice()),
        Err(atmct::Error::MalformedInput {
            expected: 16,
            actual: 4
        })
    ));
}
