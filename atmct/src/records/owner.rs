// atmct/src/records/owner.rs

//! Owner name lines (0x80..0xB0).

use super::{Checked, Slot};
use crate::codec::fields;
use crate::types::Block;

/// One owner name line; absent when the block holds no text.
pub type OwnerLine = Checked<Slot<String>>;

/// Decode one owner line block.
pub fn decode_line(address: usize, block: &Block) -> OwnerLine {
    Checked::from_block(address, block, fields::owner_text(block))
}

/// Join the present lines with single spaces. `None` for an anonymous card.
pub fn full_name(lines: &[OwnerLine]) -> Option<String> {
    let parts: Vec<&str> = lines
        .iter()
        .filter_map(|line| line.record.present())
        .map(String::as_str)
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" "))
    }
}
