#[path = "../common/mod.rs"]
mod common;

use atmct::constants::{CARD_LEN, TRIP_SLOTS};
use atmct::prelude::*;
use proptest::prelude::*;

fn card_bytes() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), CARD_LEN)
}

proptest! {
    #[test]
    fn any_dump_decodes(bytes in card_bytes()) {
        let decoded = decode(&bytes).unwrap();
        prop_assert_eq!(decoded.trips.len(), TRIP_SLOTS);
        prop_assert_eq!(decoded.recharges.len(), 3);
        prop_assert_eq!(decoded.owner.len(), 3);
    }

    #[test]
    fn decoding_is_deterministic(bytes in card_bytes()) {
        prop_assert_eq!(decode(&bytes).unwrap(), decode(&bytes).unwrap());
    }

    #[test]
    fn dated_records_follow_base_year(bytes in card_bytes()) {
        let decoded = decode(&bytes).unwrap();
        let base = decoded.base_year().get();
        prop_assert!((1900..=2155).contains(&base));
        for r in decoded.present_recharges() {
            prop_assert!((base..base + 16).contains(&r.date.year));
        }
        for t in decoded.present_trips() {
            prop_assert!((base..base + 16).contains(&t.record.date.year));
        }
    }

    #[test]
    fn other_lengths_are_malformed(len in 0usize..2048) {
        prop_assume!(len != CARD_LEN);
        let bytes = vec![0u8; len];
        let is_malformed = matches!(
            decode(&bytes),
            Err(Error::MalformedInput { expected: CARD_LEN, actual }) if actual == len
        );
        prop_assert!(is_malformed);
    }

    #[test]
    fn flipping_a_trip_bit_flags_that_trip(index in 0usize..15, bit in 0u8..8) {
        let card = common::fixtures::sample_image()
            .corrupt(0x2C0, index, 1 << bit)
            .build();
        let decoded = card.decode().unwrap();
        prop_assert!(decoded.unverified_addresses().contains(&0x2C0));
    }
}
