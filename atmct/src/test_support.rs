//! Test support helpers intended for use by unit tests, integration tests
//! and benches.
//!
//! `CardImage` assembles a card memory image from blocks written in logical
//! order and seals each one with a valid checksum byte.
#![allow(dead_code)]

use crate::card::Card;
use crate::codec::checksum::{crc16_mcrf4xx, fold};
use crate::constants::{BLOCK_LEN, CARD_LEN, CHECKSUM_INDEX, PAYLOAD_LEN};

/// Return `storage` with its checksum byte replaced by the correct one.
#[doc(hidden)]
pub fn seal(mut storage: [u8; BLOCK_LEN]) -> [u8; BLOCK_LEN] {
    storage[CHECKSUM_INDEX] = fold(crc16_mcrf4xx(&storage[..PAYLOAD_LEN]));
    storage
}

/// Builder for card images used as fixtures.
#[doc(hidden)]
#[derive(Debug, Clone)]
pub struct CardImage {
    bytes: [u8; CARD_LEN],
}

impl Default for CardImage {
    fn default() -> Self {
        Self::new()
    }
}

impl CardImage {
    /// Blank (all-zero) image.
    pub fn new() -> Self {
        Self {
            bytes: [0u8; CARD_LEN],
        }
    }

    /// Write raw storage-order bytes at `address`, untouched.
    pub fn storage_block(mut self, address: usize, storage: [u8; BLOCK_LEN]) -> Self {
        self.bytes[address..address + BLOCK_LEN].copy_from_slice(&storage);
        self
    }

    /// Write a block given in logical order; logical byte 0 is replaced by
    /// the sealed checksum.
    pub fn logical_block(self, address: usize, logical: [u8; BLOCK_LEN]) -> Self {
        let mut storage = logical;
        storage.reverse();
        self.storage_block(address, seal(storage))
    }

    /// Write a sealed block whose logical bytes are zero except `fields`.
    pub fn fields(self, address: usize, fields: &[(usize, u8)]) -> Self {
        let mut logical = [0u8; BLOCK_LEN];
        for &(index, value) in fields {
            logical[index] = value;
        }
        self.logical_block(address, logical)
    }

    /// Write up to 15 bytes of Latin-1 text as a sealed owner line.
    pub fn text(self, address: usize, text: &[u8]) -> Self {
        let mut storage = [0u8; BLOCK_LEN];
        let len = text.len().min(PAYLOAD_LEN);
        storage[..len].copy_from_slice(&text[..len]);
        self.storage_block(address, seal(storage))
    }

    /// Flip bits in one byte of an already written block (storage index).
    pub fn corrupt(mut self, address: usize, index: usize, mask: u8) -> Self {
        self.bytes[address + index] ^= mask;
        self
    }

    /// Image bytes so far.
    pub fn bytes(&self) -> &[u8; CARD_LEN] {
        &self.bytes
    }

    /// Finish the image.
    pub fn build(self) -> Card {
        Card::from_bytes(self.bytes)
    }
}
