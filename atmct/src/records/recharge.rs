// atmct/src/records/recharge.rs

//! Recharge history (walked from 0x240, three slots).

use serde::Serialize;

use super::{Checked, Slot};
use crate::codec::fields;
use crate::types::{BaseYear, Block, CardDate};

/// One fare recharge (walked from 0x240).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Recharge {
    /// Recharge date
    pub date: CardDate,
    /// Fare title loaded, see [`crate::lookup::Resolvers::title`]
    pub title_code: u8,
}

impl Recharge {
    /// Decode the fields of one slot, written or not.
    pub fn decode(block: &Block, base: BaseYear) -> Self {
        let b = block.logical();
        Self {
            date: CardDate::new(
                fields::recharge_day(b),
                fields::recharge_month(b),
                base.resolve(fields::recharge_year_offset(b)),
            ),
            title_code: fields::recharge_title(b),
        }
    }

    /// A slot whose day and month are both zero has never been written.
    /// The checksum is still attached.
    pub fn decode_slot(address: usize, block: &Block, base: BaseYear) -> Checked<Slot<Self>> {
        let recharge = Self::decode(block, base);
        let written = recharge.date.day != 0 || recharge.date.month != 0;
        Checked::from_block(address, block, Slot::from(written.then_some(recharge)))
    }
}
