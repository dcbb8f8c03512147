// atmct/src/records/mod.rs

//! Record schema: one module per record type, each bound to fixed block
//! addresses and decoded through [`crate::codec::fields`].

use serde::Serialize;

use crate::codec::checksum;
use crate::types::Block;
use crate::{Error, Result};

pub mod identity;
pub mod owner;
pub mod permissions;
pub mod recharge;
pub mod status;
pub mod trip;
pub mod validation;
pub mod validity;

pub use identity::CardIdentity;
pub use permissions::Permissions;
pub use recharge::Recharge;
pub use status::{Status, TitleExpiry};
pub use trip::Trip;
pub use validation::LastValidation;
pub use validity::Validity;

/// A record slot that may hold nothing (all-zero payload on the card).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Slot<T> {
    /// Slot holds a written record
    Present(T),
    /// Slot was never written
    Absent,
}

impl<T> Slot<T> {
    /// The record, if present.
    pub fn present(&self) -> Option<&T> {
        match self {
            Slot::Present(v) => Some(v),
            Slot::Absent => None,
        }
    }

    /// True for an unwritten slot.
    pub fn is_absent(&self) -> bool {
        matches!(self, Slot::Absent)
    }
}

impl<T> From<Option<T>> for Slot<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Slot::Present(v),
            None => Slot::Absent,
        }
    }
}

/// A decoded record annotated with the checksum of the block it came from.
///
/// A mismatch never prevents decoding; the fields hold whatever the bits
/// say. Use [`Checked::require_verified`] to refuse unverified data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Checked<T> {
    /// Address of the source block
    pub address: usize,
    /// Checksum byte found on the card
    pub stored: u8,
    /// Checksum byte computed from the payload
    pub computed: u8,
    /// Decoded fields, whatever the checksum says
    pub record: T,
}

impl<T> Checked<T> {
    /// Attach the checksum of `block` to an already decoded record.
    pub fn from_block(address: usize, block: &Block, record: T) -> Self {
        Self {
            address,
            stored: block.stored_checksum(),
            computed: checksum::block_checksum(block),
            record,
        }
    }

    /// True when the stored checksum matches.
    pub fn verified(&self) -> bool {
        self.stored == self.computed
    }

    /// The record, or [`Error::ChecksumMismatch`] when it did not verify.
    pub fn require_verified(&self) -> Result<&T> {
        if !self.verified() {
            return Err(Error::ChecksumMismatch {
                address: self.address,
                expected: self.computed,
                actual: self.stored,
            });
        }
        Ok(&self.record)
    }
}
