// atmct/src/card/walker.rs

//! Trailer-skipping walk over the data blocks of a card.

use std::iter::FusedIterator;

use super::Card;
use crate::constants::{BLOCK_LEN, SECTOR_LEN};
use crate::types::Block;
use crate::{Error, Result};

/// Lazy walk over the data blocks of a card, in ascending address order.
///
/// Before each read, a block whose end lands on a sector boundary is the
/// sector trailer and is stepped over. Cloning the walker restarts from the
/// clone point; the card is never mutated.
#[derive(Debug, Clone)]
pub struct SectorWalker<'a> {
    card: &'a Card,
    cursor: usize,
}

impl<'a> SectorWalker<'a> {
    /// Start a walk at `start`. The trailer rule is applied before each read,
    /// so a trailer address is never yielded.
    pub fn new(card: &'a Card, start: usize) -> Self {
        Self {
            card,
            cursor: start,
        }
    }

    /// Address the walker will consider next (before trailer skipping).
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Take exactly `n` blocks, or fail without consuming anything.
    pub fn take_blocks(&mut self, n: usize) -> Result<Vec<(usize, Block)>> {
        let available = self.clone().take(n).count();
        if available < n {
            return Err(Error::OutOfRange {
                offset: self.cursor,
                requested: n,
                available,
            });
        }
        Ok(self.by_ref().take(n).collect())
    }

    fn skip_trailer(&mut self) {
        let end = self.cursor.checked_add(BLOCK_LEN);
        if end.is_some_and(|end| end % SECTOR_LEN == 0) {
            log::trace!("skipping sector trailer at {:#05x}", self.cursor);
            self.cursor += BLOCK_LEN;
        }
    }
}

impl Iterator for SectorWalker<'_> {
    type Item = (usize, Block);

    fn next(&mut self) -> Option<Self::Item> {
        self.skip_trailer();
        let address = self.cursor;
        let block = self.card.block_at(address).ok()?;
        self.cursor += BLOCK_LEN;
        Some((address, block))
    }
}

impl FusedIterator for SectorWalker<'_> {}
