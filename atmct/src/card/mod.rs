// atmct/src/card/mod.rs

//! Card memory image and bounded block access.

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::constants::{BLOCK_LEN, CARD_LEN};
use crate::decoder::DecodedCard;
use crate::types::Block;
use crate::{Error, Result};

pub mod walker;
pub use walker::SectorWalker;

/// Immutable 1024-byte memory image of a card.
#[derive(Clone, PartialEq, Eq)]
pub struct Card([u8; CARD_LEN]);

impl Card {
    /// Wrap an image that is already the right size.
    pub fn from_bytes(bytes: [u8; CARD_LEN]) -> Self {
        Self(bytes)
    }

    /// Load a dump file. Files of any size other than 1024 bytes are rejected
    /// without being read.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let meta = file.metadata()?;
        if meta.is_file() && meta.len() != CARD_LEN as u64 {
            return Err(Error::MalformedInput {
                expected: CARD_LEN,
                actual: usize::try_from(meta.len()).unwrap_or(usize::MAX),
            });
        }
        Self::from_reader(file)
    }

    /// Read a dump from any byte source. At most one byte past the image is
    /// consumed, so an oversized source is rejected with `actual == 1025`.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut bytes = Vec::with_capacity(CARD_LEN + 1);
        reader.take(CARD_LEN as u64 + 1).read_to_end(&mut bytes)?;
        Self::try_from(bytes.as_slice())
    }

    /// Raw image bytes.
    pub fn as_bytes(&self) -> &[u8; CARD_LEN] {
        &self.0
    }

    /// Read the block at an absolute address, with bounds checking.
    pub fn block_at(&self, address: usize) -> Result<Block> {
        let slice = address
            .checked_add(BLOCK_LEN)
            .and_then(|end| self.0.get(address..end))
            .ok_or(Error::OutOfRange {
                offset: address,
                requested: 1,
                available: 0,
            })?;
        Block::try_from(slice)
    }

    /// Walk data blocks from `start`, skipping sector trailers.
    pub fn walk(&self, start: usize) -> SectorWalker<'_> {
        SectorWalker::new(self, start)
    }

    /// Decode every record on the card.
    pub fn decode(&self) -> Result<DecodedCard> {
        DecodedCard::from_card(self)
    }
}

impl TryFrom<&[u8]> for Card {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> std::result::Result<Self, Self::Error> {
        let arr: [u8; CARD_LEN] = bytes.try_into().map_err(|_| Error::MalformedInput {
            expected: CARD_LEN,
            actual: bytes.len(),
        })?;
        Ok(Self(arr))
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Card")
            .field("len", &CARD_LEN)
            .field("head", &crate::utils::bytes_to_hex_spaced(&self.0[..BLOCK_LEN]))
            .finish()
    }
}
