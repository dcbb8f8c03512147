// atmct/src/codec/mod.rs

//! Block-level codecs: checksum verification and bit-field extraction.

pub mod checksum;
pub mod fields;

pub use checksum::{block_checksum, crc16_mcrf4xx, verify};
