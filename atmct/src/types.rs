// atmct/src/types.rs

//! Block, its logical view, and the small value types decoded from blocks.

use std::convert::TryFrom;
use std::ops::Index;

use derive_more::Display;
use serde::Serialize;

use crate::Error;
use crate::constants::{BLOCK_LEN, CHECKSUM_INDEX, PAYLOAD_LEN};

/// Block (16 bytes), kept in storage order.
///
/// Field extraction reads the block in *logical* order (storage order
/// reversed end to end) through [`Block::logical`]; checksums are computed
/// over [`Block::storage`]. Both are views over the same buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Block([u8; BLOCK_LEN]);

impl Block {
    /// Wrap 16 bytes read in storage order.
    pub fn from_bytes(bytes: [u8; BLOCK_LEN]) -> Self {
        Self(bytes)
    }

    /// Storage-order bytes, as laid out on the card.
    pub fn storage(&self) -> &[u8; BLOCK_LEN] {
        &self.0
    }

    /// Reversed-order view used for bit-field extraction.
    pub fn logical(&self) -> Logical<'_> {
        Logical(&self.0)
    }

    /// The 15 storage bytes covered by the checksum.
    pub fn payload(&self) -> &[u8] {
        &self.0[..PAYLOAD_LEN]
    }

    /// Checksum byte as stored on the card (logical byte 0).
    pub fn stored_checksum(&self) -> u8 {
        self.0[CHECKSUM_INDEX]
    }

    /// Storage bytes as spaced hex.
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex_spaced(self.storage())
    }
}

impl TryFrom<&[u8]> for Block {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != BLOCK_LEN {
            return Err(Error::MalformedInput {
                expected: BLOCK_LEN,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; BLOCK_LEN];
        arr.copy_from_slice(bytes);
        Ok(Self(arr))
    }
}

/// Logical-order view over a [`Block`]: `logical[i] == storage[15 - i]`.
#[derive(Debug, Clone, Copy)]
pub struct Logical<'a>(&'a [u8; BLOCK_LEN]);

impl Logical<'_> {
    /// Copy the logical bytes out, e.g. for diagnostics.
    pub fn to_array(&self) -> [u8; BLOCK_LEN] {
        let mut out = *self.0;
        out.reverse();
        out
    }
}

impl Index<usize> for Logical<'_> {
    type Output = u8;

    fn index(&self, index: usize) -> &u8 {
        &self.0[BLOCK_LEN - 1 - index]
    }
}

/// Issuance year decoded from the validity record.
///
/// Trip, recharge and validation records only store a 4-bit offset from
/// this year, so they cannot be dated without it.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[display(fmt = "{}", _0)]
#[serde(transparent)]
pub struct BaseYear(u16);

impl BaseYear {
    /// Wrap an absolute year.
    pub const fn new(year: u16) -> Self {
        Self(year)
    }

    /// Absolute year.
    pub fn get(&self) -> u16 {
        self.0
    }

    /// Resolve a relative year nibble against the base year. Saturates at
    /// `u16::MAX`.
    pub fn resolve(&self, offset: u8) -> u16 {
        self.0.saturating_add(u16::from(offset))
    }
}

/// Calendar date as found on the card. No calendar validation is applied.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[display(fmt = "{:02}/{:02}/{}", day, month, year)]
pub struct CardDate {
    /// Day of month, 0 when unset
    pub day: u8,
    /// Month, 0 when unset
    pub month: u8,
    /// Absolute year
    pub year: u16,
}

impl CardDate {
    /// Build a date from raw fields.
    pub fn new(day: u8, month: u8, year: u16) -> Self {
        Self { day, month, year }
    }
}

/// Time of day as found on the card.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[display(fmt = "{:02}:{:02}", hours, minutes)]
pub struct TimeOfDay {
    /// Hours, 0-23 on a well-formed card
    pub hours: u8,
    /// Minutes
    pub minutes: u8,
}

impl TimeOfDay {
    /// Build a time from raw fields.
    pub fn new(hours: u8, minutes: u8) -> Self {
        Self { hours, minutes }
    }
}
