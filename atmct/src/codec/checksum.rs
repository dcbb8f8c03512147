// atmct/src/codec/checksum.rs

//! Per-block checksum: CRC-16/MCRF4XX over the 15 payload bytes, folded
//! to one byte by XOR-ing its two halves.

use crate::constants::PAYLOAD_LEN;
use crate::types::Block;
use crate::{Error, Result};

/// Reflected form of the CRC-16 polynomial 0x1021
const POLY_REFLECTED: u16 = 0x8408;

/// CRC-16/MCRF4XX initial register value
const CRC_INIT: u16 = 0xFFFF;

/// Compute CRC-16/MCRF4XX (poly 0x1021, init 0xFFFF, reflected in/out,
/// no final XOR)
pub fn crc16_mcrf4xx(data: &[u8]) -> u16 {
    data.iter().fold(CRC_INIT, |mut crc, &b| {
        crc ^= u16::from(b);
        for _ in 0..8 {
            crc = if crc & 1 != 0 {
                (crc >> 1) ^ POLY_REFLECTED
            } else {
                crc >> 1
            };
        }
        crc
    })
}

/// Fold a 16-bit CRC into one byte: high byte XOR low byte
pub fn fold(crc: u16) -> u8 {
    let [hi, lo] = crc.to_be_bytes();
    hi ^ lo
}

/// Checksum byte expected for a block, computed over its storage payload
pub fn block_checksum(block: &Block) -> u8 {
    fold(crc16_mcrf4xx(&block.storage()[..PAYLOAD_LEN]))
}

/// True when the stored checksum byte matches the computed one
pub fn verify(block: &Block) -> bool {
    block_checksum(block) == block.stored_checksum()
}

/// Strict form of [`verify`] for callers that refuse unverified blocks
pub fn check(address: usize, block: &Block) -> Result<()> {
    let expected = block_checksum(block);
    let actual = block.stored_checksum();
    if expected != actual {
        return Err(Error::ChecksumMismatch {
            address,
            expected,
            actual,
        });
    }
    Ok(())
}
