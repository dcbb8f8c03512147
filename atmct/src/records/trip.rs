// atmct/src/records/trip.rs

//! Trip history (walked from 0x2C0, ten slots).

use serde::Serialize;

use super::validation::{stamp_date, stamp_time};
use super::{Checked, Slot};
use crate::codec::fields;
use crate::types::{BaseYear, Block, CardDate, TimeOfDay};

/// One trip validation (walked from 0x2C0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Trip {
    /// Validation date
    pub date: CardDate,
    /// Validation time
    pub time: TimeOfDay,
    /// Vehicle number
    pub vehicle: u16,
    /// Fare zone
    pub zone: u8,
    /// Stop code
    pub stop: u16,
    /// Line code
    pub line: u16,
    /// Operator code
    pub operator: u8,
    /// Validation was a transfer
    pub is_transfer: bool,
}

impl Trip {
    /// Decode the fields of one slot.
    pub fn decode(block: &Block, base: BaseYear) -> Self {
        let b = block.logical();
        Self {
            date: stamp_date(b, base),
            time: stamp_time(b),
            vehicle: fields::trip_vehicle(b),
            zone: fields::trip_zone(b),
            stop: fields::trip_stop(b),
            line: fields::trip_line(b),
            operator: fields::trip_operator(b),
            is_transfer: fields::trip_is_transfer(b),
        }
    }

    /// Unused slots (all-zero payload, any checksum byte) are absent and
    /// carry no checksum annotation.
    pub fn decode_slot(address: usize, block: &Block, base: BaseYear) -> Slot<Checked<Self>> {
        if fields::payload_is_empty(block) {
            return Slot::Absent;
        }
        Slot::Present(Checked::from_block(address, block, Self::decode(block, base)))
    }
}
