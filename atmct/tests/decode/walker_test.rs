#[path = "../common/mod.rs"]
mod common;

use atmct::constants::{CARD_LEN, DATA_BLOCK_COUNT, SECTOR_LEN};
use atmct::prelude::*;
use common::fixtures;

#[test]
fn full_walk_visits_every_data_block() {
    let card = fixtures::blank_card();
    let addresses: Vec<usize> = card.walk(0).map(|(a, _)| a).collect();

    assert_eq!(addresses.len(), DATA_BLOCK_COUNT);
    assert!(addresses.iter().all(|a| (a + 16) % SECTOR_LEN != 0));
    assert!(addresses.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(addresses.last(), Some(&(CARD_LEN - 32)));
}

#[test]
fn trip_walk_never_reads_the_trailer() {
    let card = fixtures::sample_card();
    let blocks = card.walk(0x2C0).take_blocks(10).unwrap();
    let addresses: Vec<usize> = blocks.iter().map(|(a, _)| *a).collect();

    assert_eq!(
        addresses,
        vec![0x2C0, 0x2D0, 0x2E0, 0x300, 0x310, 0x320, 0x340, 0x350, 0x360, 0x380]
    );
    assert!(blocks.iter().all(|(_, b)| b.storage() != &[0xFF; 16]));
}

#[test]
fn walk_starting_on_trailer_skips_it() {
    let card = fixtures::blank_card();
    let first = card.walk(0x30).next().map(|(a, _)| a);
    assert_eq!(first, Some(0x40));
}

#[test]
fn take_blocks_past_end_consumes_nothing() {
    let card = fixtures::blank_card();
    let mut walker = card.walk(0x3C0);

    match walker.take_blocks(4) {
        Err(Error::OutOfRange {
            offset: 0x3C0,
            requested: 4,
            available: 3,
        }) => {}
        other => panic!("expected OutOfRange, got {:?}", other),
    }
    assert_eq!(walker.cursor(), 0x3C0);
    assert_eq!(walker.take_blocks(3).unwrap().len(), 3);
    assert_eq!(walker.next(), None);
}

#[test]
fn block_at_is_bounds_checked() {
    let card = fixtures::blank_card();
    assert!(card.block_at(CARD_LEN - 16).is_ok());
    assert!(matches!(
        card.block_at(CARD_LEN - 8),
        Err(Error::OutOfRange { .. })
    ));
    assert!(matches!(
        card.block_at(usize::MAX),
        Err(Error::OutOfRange { .. })
    ));
}
