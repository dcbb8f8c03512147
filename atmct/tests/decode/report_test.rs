#[path = "../common/mod.rs"]
mod common;

use atmct::constants::DATA_BLOCK_COUNT;
use atmct::prelude::*;
use atmct::report;
use common::fixtures;

fn named_resolvers() -> Resolvers {
    Resolvers {
        operators: NameTable::with_entries(
            Fallback::NotFound,
            [(11, "Autocars Plana"), (133, "EMT Tarragona")],
        ),
        lines: NameTable::with_entries(Fallback::Code, [(1445, "L54")]),
        stops: NameTable::with_entries(Fallback::NotFound, [(4660, "Imperial Tarraco")]),
        titles: NameTable::with_entries(
            Fallback::NotFound,
            [(0x11, "T-10"), (0x2A, "T-50/30")],
        ),
    }
}

#[test]
fn summary_header() {
    let decoded = fixtures::sample_card().decode().unwrap();
    let text = report::render(&decoded, &named_resolvers());

    assert!(text.starts_with("Card: 0012-3456-78XX\n      12345678\n"));
    assert!(text.contains("Owner: JOAN PUIG I FERRER\n"));
    assert!(text.contains("Expiry: 05/03/2000\n"));
    assert!(text.contains("P: 5 EA: 3 M: 0042\n"));
}

#[test]
fn summary_resolves_names() {
    let decoded = fixtures::sample_card().decode().unwrap();
    let text = report::render(&decoded, &named_resolvers());

    assert!(text.contains(
        "Last validation: 22/11/2003 13:45 with EMT Tarragona from Imperial Tarraco (L54) zone 1 - checksum verified\n"
    ));
    assert!(text.contains("Status: 10 trip(s) left, title expiry 31/12 - checksum verified\n"));
    assert!(text.contains("  1. 07/06/1999 T-10 - checksum verified\n"));
    assert!(text.contains("  2. 20/06/1999 T-50/30 - checksum verified\n"));
    assert!(text.contains("  3. empty\n"));
}

#[test]
fn summary_trips_use_fallbacks() {
    let decoded = fixtures::sample_card().decode().unwrap();
    let text = report::render(&decoded, &named_resolvers());

    assert!(text.contains(
        "  1. Autocars Plana 22/11/2003 13:45 from Not found (17185) (291) vehicle 709 zone 129 transfer yes - checksum verified\n"
    ));
    // corrupted trip: decoded, listed, no verification note
    assert!(text.contains(
        "  4. Not found (0) 03/03/2000 09:30 from Not found (0) (1) vehicle 0 zone 0 transfer no\n"
    ));
    assert!(!text.contains("  3. Not found"));
}

#[test]
fn raw_dump_covers_all_data_blocks() {
    let card = fixtures::sample_card();
    let dump = report::raw_dump(&card, DATA_BLOCK_COUNT).unwrap();

    assert_eq!(dump.lines().count(), DATA_BLOCK_COUNT * 2);
    assert!(dump.contains("0x2c0 [ok]"));
    assert!(dump.contains("0x300 [--]"));
    assert!(!dump.contains("0x2f0"));
}
